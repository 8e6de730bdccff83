use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = SlicerConfig::default();
    assert_eq!(config.max_group_weight, 8640);
    assert_eq!(config.normal_coefficient, 1);
    assert_eq!(config.special_coefficient, 2);
    assert_eq!(config.type_overhead, 500);
    assert!(config.special_kinds.is_empty());
    assert_eq!(config.split_policy, SplitPolicy::Weighted);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_document() {
    let config = SlicerConfig::from_toml_str(
        r#"
max_group_weight = 1000
normal_coefficient = 1
special_coefficient = 3
type_overhead = 50
special_kinds = ["minecraft:obsidian", "minecraft:glass"]
split_policy = "unweighted"
"#,
    )
    .unwrap();

    assert_eq!(config.max_group_weight, 1000);
    assert_eq!(config.special_coefficient, 3);
    assert_eq!(config.type_overhead, 50);
    assert_eq!(config.special_kinds.len(), 2);
    assert_eq!(config.split_policy, SplitPolicy::Unweighted);
}

#[test]
fn test_optional_fields_default() {
    let config = SlicerConfig::from_toml_str(
        r#"
max_group_weight = 1000
normal_coefficient = 1
special_coefficient = 2
type_overhead = 0
"#,
    )
    .unwrap();

    assert!(config.special_kinds.is_empty());
    assert_eq!(config.split_policy, SplitPolicy::Weighted);
}

#[test]
fn test_missing_field_is_malformed() {
    let result = SlicerConfig::from_toml_str(
        r#"
max_group_weight = 1000
normal_coefficient = 1
type_overhead = 500
"#,
    );
    assert!(matches!(result, Err(ConfigError::Malformed(_))));
}

#[test]
fn test_non_numeric_is_malformed() {
    let result = SlicerConfig::from_toml_str(
        r#"
max_group_weight = "lots"
normal_coefficient = 1
special_coefficient = 2
type_overhead = 500
"#,
    );
    assert!(matches!(result, Err(ConfigError::Malformed(_))));
}

#[test]
fn test_negative_is_malformed() {
    let result = SlicerConfig::from_toml_str(
        r#"
max_group_weight = 1000
normal_coefficient = -1
special_coefficient = 2
type_overhead = 500
"#,
    );
    assert!(matches!(result, Err(ConfigError::Malformed(_))));
}

#[test]
fn test_zero_values_rejected() {
    for field in ["max_group_weight", "normal_coefficient", "special_coefficient"] {
        let mut config = SlicerConfig::default();
        match field {
            "max_group_weight" => config.max_group_weight = 0,
            "normal_coefficient" => config.normal_coefficient = 0,
            _ => config.special_coefficient = 0,
        }

        match config.validate() {
            Err(ConfigError::Malformed(msg)) => assert!(msg.contains(field), "{}", msg),
            other => panic!("expected Malformed for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_zero_overhead_allowed() {
    let config = SlicerConfig {
        type_overhead: 0,
        ..SlicerConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_coefficient_exact_match() {
    let config = SlicerConfig {
        special_kinds: ["obsidian".to_string()].into_iter().collect(),
        ..SlicerConfig::default()
    };

    assert_eq!(config.coefficient_for("obsidian"), 2);
    assert_eq!(config.coefficient_for("Obsidian"), 1);
    assert_eq!(config.coefficient_for("obsidian "), 1);
    assert_eq!(config.coefficient_for("stone"), 1);
}

#[test]
fn test_load_or_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = SlicerConfig::load_or_init(&path).unwrap();
    assert_eq!(config, SlicerConfig::default());
    assert!(path.exists());

    // Second load reads the persisted file back
    let reloaded = SlicerConfig::load_or_init(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_load_or_init_reads_existing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "max_group_weight = 10\nnormal_coefficient = 1\nspecial_coefficient = 2\ntype_overhead = 0\n",
    )
    .unwrap();

    let config = SlicerConfig::load_or_init(&path).unwrap();
    assert_eq!(config.max_group_weight, 10);
    assert_eq!(config.type_overhead, 0);
}

#[test]
fn test_load_or_init_rejects_bad_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "max_group_weight = 0\nnormal_coefficient = 1\nspecial_coefficient = 2\ntype_overhead = 1\n",
    )
    .unwrap();

    assert!(matches!(
        SlicerConfig::load_or_init(&path),
        Err(ConfigError::Malformed(_))
    ));
}
