use crate::partitioner::{Partition, TaskGroup};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Provenance and summary of one slicing run
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub source_path: Option<String>,
    pub source_sha256: Option<String>,
    pub stats: RunStats,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub item_count: usize,
    pub group_count: usize,
    pub entry_count: usize,
    pub split_item_count: usize,
    pub total_quantity: u64,
}

impl RunStats {
    pub fn from_partition(item_count: usize, partition: &Partition) -> Self {
        Self {
            item_count,
            group_count: partition.group_count(),
            entry_count: partition.entry_count(),
            split_item_count: partition.split_item_count(),
            total_quantity: partition.total_quantity(),
        }
    }
}

impl RunManifest {
    pub fn new(
        source_path: Option<String>,
        source_sha256: Option<String>,
        stats: RunStats,
    ) -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("material-slicer v{}", env!("CARGO_PKG_VERSION")),
            source_path,
            source_sha256,
            stats,
        }
    }
}

/// JSON document written by the JSON sink
#[derive(Debug, Serialize)]
pub struct PartitionReport<'a> {
    pub manifest: RunManifest,
    pub groups: &'a [TaskGroup],
}

impl<'a> PartitionReport<'a> {
    pub fn new(manifest: RunManifest, partition: &'a Partition) -> Self {
        Self {
            manifest,
            groups: &partition.groups,
        }
    }
}

/// Compute SHA256 hash of file contents
pub fn hash_file(path: &Path) -> Result<String> {
    let contents =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Ok(hex::encode(hasher.finalize()))
}
