use edmig_engine::config::{ConfigError, ConfigLoader, ConfigOverrides, EdmigConfig};
use edmig_engine::formatter::DumpFormat;
use edmig_engine::naming::NamingStrategyKind;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_values() {
    let config = EdmigConfig::default();
    assert_eq!(config.naming_strategy, NamingStrategyKind::Nested);
    assert_eq!(config.dump_format, DumpFormat::Yaml);
    assert!(!config.no_interaction);
    assert_eq!(config.separator_width, 78);
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
naming_strategy: legacy
dump_format: json
no_interaction: true
    "#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Failed to load config from file");

    assert_eq!(config.naming_strategy, NamingStrategyKind::Legacy);
    assert_eq!(config.dump_format, DumpFormat::Json);
    assert!(config.no_interaction);
    // unspecified fields keep their defaults
    assert_eq!(config.separator_width, 78);
}

#[tokio::test]
async fn test_load_from_nonexistent_file() {
    let result =
        ConfigLoader::load_from(std::path::Path::new("/nonexistent/path/edmig.yaml")).await;
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[tokio::test]
async fn test_load_invalid_strategy() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "naming_strategy: camel").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[tokio::test]
async fn test_overrides_win_over_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
naming_strategy: legacy
dump_format: json
no_interaction: true
separator_width: 40
    "#
    )
    .unwrap();

    let overrides = ConfigOverrides {
        naming_strategy: Some(NamingStrategyKind::Nested),
        dump_format: None,
        no_interaction: false,
    };
    let config = ConfigLoader::load(Some(file.path()), &overrides)
        .await
        .expect("Failed to load config with overrides");

    assert_eq!(config.naming_strategy, NamingStrategyKind::Nested);
    // no flag given: file values stay
    assert_eq!(config.dump_format, DumpFormat::Json);
    assert!(config.no_interaction);
    assert_eq!(config.separator_width, 40);
}

#[test]
fn test_no_interaction_flag_only_disables_prompts() {
    let mut config = EdmigConfig::default();
    config.apply(&ConfigOverrides {
        no_interaction: true,
        dump_format: Some(DumpFormat::Json),
        ..Default::default()
    });

    assert!(config.no_interaction);
    assert_eq!(config.dump_format, DumpFormat::Json);
    assert_eq!(config.naming_strategy, NamingStrategyKind::Nested);

    config.apply(&ConfigOverrides::default());
    assert!(config.no_interaction);
    assert_eq!(config.dump_format, DumpFormat::Json);
}

#[tokio::test]
async fn test_load_missing_explicit_file_ignores_overrides() {
    let overrides = ConfigOverrides {
        no_interaction: true,
        ..Default::default()
    };
    let result = ConfigLoader::load(
        Some(std::path::Path::new("/nonexistent/path/edmig.yaml")),
        &overrides,
    )
    .await;
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_search_paths_start_with_local_file() {
    let paths = ConfigLoader::search_paths();
    assert!(paths[0].ends_with("edmig.yaml"));
    assert!(paths.iter().skip(1).all(|p| p.ends_with(".edmig/config.yaml")));
}
