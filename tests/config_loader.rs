use shopcart::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.defaults.currency_symbol, "₹");
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.products.is_none());
    assert_eq!(config.catalog().len(), 4);
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("shopcart/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.defaults.tick_rate_ms, 250);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[defaults]
currency_symbol = "$"
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.defaults.currency_symbol, "$");
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_products_replace_builtin_catalog() {
    let (_dir, path) = write_config(
        r#"
[[products]]
id = "a"
title = "Mug"
price = 350

[[products]]
id = "b"
title = "Poster"
price = 1200
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    let catalog = config.catalog();
    let titles: Vec<&str> = catalog
        .list_products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, ["Mug", "Poster"]);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[defaults\ncurrency_symbol = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_duplicate_product_id_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[[products]]
id = "a"
title = "Mug"
price = 350

[[products]]
id = "a"
title = "Poster"
price = 1200
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("duplicate")),
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_empty_title_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[[products]]
id = "a"
title = "  "
price = 350
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_empty_products_list_fails_validation() {
    let (_dir, path) = write_config("products = []\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.defaults.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}
