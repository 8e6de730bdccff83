mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default cap on a single task's accumulated weight
pub const DEFAULT_MAX_GROUP_WEIGHT: u64 = 8640;

/// Default multiplier for ordinary materials
pub const DEFAULT_NORMAL_COEFFICIENT: u64 = 1;

/// Default multiplier for materials listed in `special_kinds`
pub const DEFAULT_SPECIAL_COEFFICIENT: u64 = 2;

/// Default weight charged once per entry added to a task
pub const DEFAULT_TYPE_OVERHEAD: u64 = 500;

/// How an oversized item is cut when it does not fit the current task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Apply the item's coefficient when sizing the fragment, so every
    /// fragment stays within the weighted cap
    #[default]
    Weighted,
    /// Size the fragment by raw quantity against the remaining headroom,
    /// ignoring the coefficient (legacy slicing behaviour)
    Unweighted,
}

/// Slicing parameters, loaded once and shared read-only by every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlicerConfig {
    /// Upper bound on a task's accumulated weight
    pub max_group_weight: u64,
    /// Coefficient applied to ordinary materials
    pub normal_coefficient: u64,
    /// Coefficient applied to materials in `special_kinds`
    pub special_coefficient: u64,
    /// Fixed weight charged for each entry placed in a task
    pub type_overhead: u64,
    /// Material kinds receiving `special_coefficient` (exact match)
    #[serde(default)]
    pub special_kinds: BTreeSet<String>,
    /// Fragment sizing rule for split items
    #[serde(default)]
    pub split_policy: SplitPolicy,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            max_group_weight: DEFAULT_MAX_GROUP_WEIGHT,
            normal_coefficient: DEFAULT_NORMAL_COEFFICIENT,
            special_coefficient: DEFAULT_SPECIAL_COEFFICIENT,
            type_overhead: DEFAULT_TYPE_OVERHEAD,
            special_kinds: BTreeSet::new(),
            split_policy: SplitPolicy::default(),
        }
    }
}

impl SlicerConfig {
    /// Load the config at `path`, writing the defaults there first if the
    /// file does not exist yet
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            warn!(
                path = %path.display(),
                "Config file not found, wrote defaults"
            );
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "Loaded slicer configuration");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML and write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Reject values the partitioner cannot work with.
    ///
    /// The cap and both coefficients must be at least 1. A zero
    /// `type_overhead` is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_group_weight", self.max_group_weight),
            ("normal_coefficient", self.normal_coefficient),
            ("special_coefficient", self.special_coefficient),
        ];

        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Malformed(format!(
                    "{} must be greater than zero",
                    field
                )));
            }
        }

        if self.special_kinds.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::Malformed(
                "special_kinds must not contain empty names".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_special(&self, kind: &str) -> bool {
        self.special_kinds.contains(kind)
    }

    /// Coefficient applied to `kind`'s quantity when weighing it
    pub fn coefficient_for(&self, kind: &str) -> u64 {
        if self.is_special(kind) {
            self.special_coefficient
        } else {
            self.normal_coefficient
        }
    }
}
