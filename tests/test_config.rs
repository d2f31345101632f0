use kittens::{ConfigError, GameConfig, GameError};

#[test]
fn defaults_are_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.lane_count(), 8);
    assert_eq!(config.player_row(), 536.0);
}

#[test]
fn toml_overrides_only_named_fields() {
    let config = GameConfig::from_toml_str("max_enemies = 3\nspeed_exponent = 0.01\n").unwrap();
    assert_eq!(config.max_enemies, 3);
    assert_eq!(config.speed_exponent, 0.01);
    assert_eq!(config.game_width, 600.0);
    assert_eq!(config.enemy_height, 156.0);
}

#[test]
fn empty_toml_gives_defaults() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn too_many_enemies_rejected() {
    let err = GameConfig::from_toml_str("max_enemies = 9").unwrap_err();
    assert!(matches!(
        err,
        GameError::Config(ConfigError::TooManyEnemies { max_enemies: 9, lane_count: 8 })
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = GameConfig::from_toml_str("max_enemies = \"six\"").unwrap_err();
    assert!(matches!(err, GameError::Parse(_)));
}

#[test]
fn zero_dimension_rejected() {
    let config = GameConfig { enemy_height: 0.0, ..GameConfig::default() };
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroDimension { field: "enemy_height" })
    );
}

#[test]
fn mismatched_lane_widths_rejected() {
    let config = GameConfig { player_width: 60.0, ..GameConfig::default() };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::LaneWidthMismatch { .. })
    ));
}

#[test]
fn player_taller_than_field_rejected() {
    let config = GameConfig { game_height: 50.0, ..GameConfig::default() };
    assert_eq!(
        config.validate(),
        Err(ConfigError::FieldTooSmall { field: "player_height" })
    );
}

#[test]
fn empty_speed_range_rejected() {
    let config = GameConfig {
        enemy_speed_min: 0.5,
        enemy_speed_max: 0.5,
        ..GameConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidSpeedRange { .. })
    ));
}

#[test]
fn missing_config_file_is_io_error() {
    let err = GameConfig::load("/nonexistent/kittens.toml").unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}
