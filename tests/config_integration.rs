//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hopper::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HOPPER_DISPLAY__VIEW_WIDTH", "320");
    let config = AppConfig::load().unwrap();
    println!("View width: {}", config.display.view_width);
    assert_eq!(config.display.view_width, 320);
    std::env::remove_var("HOPPER_DISPLAY__VIEW_WIDTH");
}

#[test]
#[serial]
fn test_user_config_loading() {
    // Remove env var to test file-based config
    std::env::remove_var("HOPPER_DISPLAY__VIEW_WIDTH");

    // Debug: print current dir and check if files exist
    let cwd = std::env::current_dir().unwrap();
    println!("Current dir: {:?}", cwd);
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );
    println!(
        "config/user.toml exists: {}",
        cwd.join("config/user.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    println!("View width from file: {}", config.display.view_width);
    assert_eq!(config.display.view_width, 256);
}

#[test]
#[serial]
fn test_tuning_env_override() {
    std::env::set_var("HOPPER_TUNING__WALK_SPEED", "1.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.tuning.walk_speed, 1.5);
    std::env::remove_var("HOPPER_TUNING__WALK_SPEED");
}
