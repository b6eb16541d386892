use std::fs;
use std::io::Write;
use boatr::config::{AnimationConfig, Config, SceneConfig};

#[test]
fn test_config_integration_load_valid_file() {
    let temp_dir = std::env::temp_dir();
    let test_config_path = temp_dir.join("boatr_integration_test.toml");

    let mut file = fs::File::create(&test_config_path).unwrap();
    writeln!(file, "[scene]").unwrap();
    writeln!(file, "night = true").unwrap();
    writeln!(file, "[animation]").unwrap();
    writeln!(file, "tick_ms = 40").unwrap();
    drop(file);

    let config = Config::load_from_path(&test_config_path).expect("Failed to load config");

    assert!(config.scene.night);
    assert_eq!(config.animation.tick_ms, 40);

    fs::remove_file(test_config_path).ok();
}

#[test]
fn test_config_integration_malformed_toml() {
    let temp_dir = std::env::temp_dir();
    let test_config_path = temp_dir.join("boatr_malformed.toml");

    let mut file = fs::File::create(&test_config_path).unwrap();
    writeln!(file, "[[[[invalid toml").unwrap();
    drop(file);

    let result = Config::load_from_path(&test_config_path);
    assert!(result.is_err());

    use boatr::error::ConfigError;
    match result.unwrap_err() {
        ConfigError::ParseError(_) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }

    fs::remove_file(test_config_path).ok();
}

#[test]
fn test_config_integration_missing_fields() {
    let temp_dir = std::env::temp_dir();
    let test_config_path = temp_dir.join("boatr_missing_fields.toml");

    let mut file = fs::File::create(&test_config_path).unwrap();
    writeln!(file, "[scene]").unwrap();
    writeln!(file, "# Missing night and animation - should use defaults").unwrap();
    drop(file);

    let config =
        Config::load_from_path(&test_config_path).expect("Should use defaults for missing fields");
    assert!(!config.scene.night);
    assert_eq!(config.animation.tick_ms, 20);

    fs::remove_file(test_config_path).ok();
}

#[test]
fn test_config_integration_extra_whitespace() {
    let temp_dir = std::env::temp_dir();
    let test_config_path = temp_dir.join("boatr_whitespace.toml");

    let mut file = fs::File::create(&test_config_path).unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  [animation]  ").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  tick_ms  =  16  ").unwrap();
    writeln!(file).unwrap();
    drop(file);

    let config = Config::load_from_path(&test_config_path).expect("Should handle extra whitespace");

    assert_eq!(config.animation.tick_ms, 16);

    fs::remove_file(test_config_path).ok();
}

#[test]
fn test_config_integration_validation_rejects_bad_tick() {
    let config = Config {
        animation: AnimationConfig { tick_ms: 0 },
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = Config {
        animation: AnimationConfig { tick_ms: 20 },
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_integration_save_and_reload() {
    let config = Config {
        scene: SceneConfig { night: true },
        animation: AnimationConfig { tick_ms: 25 },
        hide_hud: true,
    };

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("boatr_integration_save.toml");

    config.save(&path).expect("Failed to save config");

    let loaded = Config::load_from_path(&path).expect("Failed to reload saved config");
    assert!(loaded.scene.night);
    assert_eq!(loaded.animation.tick_ms, 25);
    assert!(loaded.hide_hud);

    fs::remove_file(path).ok();
}
