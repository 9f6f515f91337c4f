//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hypervis::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HV_GEOMETRY__DIMENSION", "7");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.geometry.dimension, 7);
    std::env::remove_var("HV_GEOMETRY__DIMENSION");
}

#[test]
#[serial]
fn test_env_override_nested_section() {
    std::env::set_var("HV_PROJECTION__DISTANCE", "6.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.projection.distance, 6.5);
    std::env::remove_var("HV_PROJECTION__DISTANCE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("HV_GEOMETRY__DIMENSION");

    let cwd = std::env::current_dir().unwrap();
    println!("Current dir: {:?}", cwd);
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.geometry.shape, "hypercube");
    assert!(config.rotation.angles.contains_key("XW"));
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    std::env::remove_var("HV_GEOMETRY__DIMENSION");
    let config = AppConfig::load_from("does_not_exist").unwrap();
    assert_eq!(config.geometry.dimension, 4);
}
