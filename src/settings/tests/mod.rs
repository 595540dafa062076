//! Unit tests for the settings record
//!
//! Tests defaults, key naming and tolerant parsing.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::{
    color::Rgba,
    settings::{DEFAULT_PORT, Location, Settings},
};

#[test]
fn settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.font, "Ubuntu Mono Medium 24");
    assert_eq!(settings.color, "#ffffff");
    assert_eq!(settings.location, Location(0, 0));
    assert!(!settings.is_rainbow);
    assert_eq!(settings.port, DEFAULT_PORT);
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = Settings::default().to_json().unwrap();

    assert!(json.contains("\"isRainbow\": false"));
    assert!(json.contains("\"port\": 20323"));
    assert!(!json.contains("is_rainbow"));
}

#[test]
fn serializes_with_four_space_indent() {
    let json = Settings::default().to_json().unwrap();

    assert!(json.starts_with("{\n    \"font\""));
    assert!(json.contains("\"location\": [\n        0,\n        0\n    ]"));
}

#[test]
fn location_is_a_two_element_array() {
    let settings = Settings::from_json(r#"{"location": [120, 45]}"#).unwrap();

    assert_eq!(settings.location.x(), 120);
    assert_eq!(settings.location.y(), 45);
}

#[test]
fn missing_keys_take_defaults() {
    let settings = Settings::from_json(r##"{"color": "#ff0000", "isRainbow": true}"##).unwrap();

    assert_eq!(settings.color, "#ff0000");
    assert!(settings.is_rainbow);
    assert_eq!(settings.font, Settings::default().font);
    assert_eq!(settings.port, DEFAULT_PORT);
}

#[test]
fn empty_object_is_default() {
    let settings = Settings::from_json("{}").unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Settings::from_json("{\"font\": ").is_err());
    assert!(Settings::from_json("null").is_err());
    assert!(Settings::from_json(r#"{"port": "not a number"}"#).is_err());
    assert!(Settings::from_json(r#"{"location": [1]}"#).is_err());
}

#[test]
fn serialize_roundtrip() {
    let original = Settings {
        font: "Fira Code Bold 18".to_string(),
        color: "#12ab34".to_string(),
        location: Location(300, 12),
        is_rainbow: true,
        port: 40000,
    };

    let json = original.to_json().unwrap();
    let parsed = Settings::from_json(&json).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn text_color_parses_hex() {
    let settings = Settings {
        color: "#00ff00".to_string(),
        ..Settings::default()
    };

    assert_eq!(settings.text_color(), Rgba::new(0, 255, 0, 255));
}

#[test]
fn invalid_text_color_falls_back_to_white() {
    let settings = Settings {
        color: "green".to_string(),
        ..Settings::default()
    };

    assert_eq!(settings.text_color(), Rgba::WHITE);
}
