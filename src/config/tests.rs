//! Config domain: tests for schema parsing and load-time clamping.

use super::data::{PopupConfigFile, PopupSettings};
use super::loader::ron_options;

// -----------------------------------------------------------------------------
// Defaults
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_match_stock_tuning() {
    let settings = PopupSettings::default();

    assert!(settings.play_se);
    assert!(settings.rotation);
    assert_eq!(settings.offset_x, 0);
    assert_eq!(settings.radius_x, 40.0);
    assert_eq!(settings.radius_y, 40.0);
    assert_eq!(settings.rotate_speed, 60.0);
    assert_eq!(settings.scale, 100.0);
    assert_eq!(settings.scale_delta, -10.0);
    assert!(settings.mp_damage_se.is_none());
}

// -----------------------------------------------------------------------------
// Clamping
// -----------------------------------------------------------------------------

#[test]
fn test_numeric_fields_are_clamped() {
    let file = PopupConfigFile {
        offset_x: -9000,
        offset_y: 9000,
        radius_x: 99999.0,
        radius_y: -5.0,
        rotate_speed: 100000.0,
        scale: 1.0,
        scale_delta: -500.0,
        cell_width: 1.0,
        cell_height: 4096.0,
        ..Default::default()
    };
    let settings = PopupSettings::from_file(file);

    assert_eq!(settings.offset_x, -512);
    assert_eq!(settings.offset_y, 512);
    assert_eq!(settings.radius_x, 512.0);
    assert_eq!(settings.radius_y, 0.0);
    assert_eq!(settings.rotate_speed, 3600.0);
    assert_eq!(settings.scale, 10.0);
    assert_eq!(settings.scale_delta, -100.0);
    assert_eq!(settings.cell_width, 8.0);
    assert_eq!(settings.cell_height, 128.0);
}

#[test]
fn test_in_range_values_pass_through() {
    let file = PopupConfigFile {
        offset_x: -12,
        radius_x: 64.0,
        rotate_speed: 120.0,
        scale_delta: 5.0,
        ..Default::default()
    };
    let settings = PopupSettings::from_file(file);

    assert_eq!(settings.offset_x, -12);
    assert_eq!(settings.radius_x, 64.0);
    assert_eq!(settings.rotate_speed, 120.0);
    assert_eq!(settings.scale_delta, 5.0);
}

#[test]
fn test_empty_effect_name_counts_as_unconfigured() {
    let file = PopupConfigFile {
        mp_damage_se: Some(String::new()),
        ..Default::default()
    };
    let settings = PopupSettings::from_file(file);

    assert!(settings.mp_damage_se.is_none());
}

// -----------------------------------------------------------------------------
// RON parsing
// -----------------------------------------------------------------------------

#[test]
fn test_implicit_some_parses_bare_effect_name() {
    let source = r#"(
        play_se: false,
        offset_x: 4,
        offset_y: -40,
        hp_auto_popup: true,
        mp_auto_popup: false,
        tp_auto_popup: true,
        increase_auto_popup: true,
        decrease_auto_popup: true,
        mp_damage_se: "Ice1",
        rotation: false,
        radius_x: 40.0,
        radius_y: 40.0,
        rotate_speed: 60.0,
        scale: 100.0,
        scale_delta: -10.0,
        cell_width: 32.0,
        cell_height: 32.0,
    )"#;
    let file: PopupConfigFile = ron_options().from_str(source).unwrap();

    assert_eq!(file.mp_damage_se.as_deref(), Some("Ice1"));
    assert!(!file.play_se);
    assert!(!file.rotation);
    assert!(!file.mp_auto_popup);
}

#[test]
fn test_shipped_settings_file_parses() {
    let source = include_str!("../../assets/data/popup.ron");
    let file: PopupConfigFile = ron_options().from_str(source).unwrap();
    let settings = PopupSettings::from_file(file);

    assert_eq!(settings.mp_damage_se.as_deref(), Some("mp_damage"));
}
