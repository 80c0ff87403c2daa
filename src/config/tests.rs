//! Configuration unit tests.

use std::path::PathBuf;

use super::*;
use crate::stick::StickFontKind;

#[test]
fn default_config_roundtrip() {
    let cfg = Config::default();
    let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
    let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
    assert_eq!(parsed.personality, Personality::Pcl5);
    assert_eq!(parsed.pjl.fontsource, "I");
    assert_eq!(parsed.pjl.sources, ["I", "S", "C", "M"]);
    assert_eq!(parsed.pjl.fontnumber, 0);
    assert!((parsed.pjl.pitch - 10.0).abs() < f64::EPSILON);
    assert!((parsed.pjl.ptsize - 12.0).abs() < f64::EPSILON);
    assert_eq!(parsed.pjl.symset, "ROMAN8");
    assert!((parsed.stick.stick_chord_degrees - 22.5).abs() < f64::EPSILON);
    assert!((parsed.stick.arc_chord_degrees - 11.25).abs() < f64::EPSILON);
    assert!(parsed.catalog.is_empty());
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed: Config = toml::from_str("").expect("deserialize");
    assert_eq!(parsed.personality, Personality::Pcl5);
    assert_eq!(parsed.pjl.symset, "ROMAN8");
}

#[test]
fn partial_toml_uses_defaults() {
    let toml_str = r#"
personality = "rtl"

[pjl]
fontnumber = 1
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.personality, Personality::Rtl);
    assert_eq!(parsed.pjl.fontnumber, 1);
    // Other fields should be defaults
    assert_eq!(parsed.pjl.fontsource, "I");
    assert!((parsed.pjl.pitch - 10.0).abs() < f64::EPSILON);
}

#[test]
fn catalog_entries_from_toml() {
    let toml_str = r#"
[[catalog]]
source = "C1"
name = "Univers"
id = 12
pjl_font_number = 4
proportional = true
typeface = 52

[[catalog]]
name = "Courier"
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.catalog.len(), 2);
    assert_eq!(parsed.catalog[0].source, "C1");
    assert_eq!(parsed.catalog[0].id, Some(12));
    assert!(parsed.catalog[0].proportional);
    // Unset fields take entry defaults.
    assert_eq!(parsed.catalog[1].source, "S");
    assert_eq!(parsed.catalog[1].symbol_set, "8U");
}

#[test]
fn source_paths_from_toml() {
    let toml_str = r#"
[pjl.source_paths]
C = "/var/lib/pcl/cartridge"
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(
        parsed.pjl.source_paths.get("C").map(String::as_str),
        Some("/var/lib/pcl/cartridge")
    );
}

#[test]
fn chord_angles_are_clamped() {
    let cfg = StickConfig {
        stick_chord_degrees: 0.0,
        arc_chord_degrees: 500.0,
    };
    assert!((cfg.effective_stick_chord() - 1.0).abs() < f64::EPSILON);
    assert!((cfg.effective_arc_chord() - 90.0).abs() < f64::EPSILON);

    let nan = StickConfig {
        stick_chord_degrees: f64::NAN,
        ..StickConfig::default()
    };
    assert!((nan.effective_stick_chord() - 22.5).abs() < f64::EPSILON);
    assert_eq!(nan.stick_font().kind(), StickFontKind::Stick);
    assert!((nan.arc_font().chord_degrees() - 11.25).abs() < f64::EPSILON);
}

#[test]
fn invalid_personality_is_a_parse_error() {
    assert!(toml::from_str::<Config>(r#"personality = "postscript""#).is_err());
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pclfont-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn try_load_reads_and_reports() {
    let good = temp_file("good.toml", "[pjl]\nfontnumber = 3\n");
    let cfg = Config::try_load(&good).expect("load");
    assert_eq!(cfg.pjl.fontnumber, 3);

    let bad = temp_file("bad.toml", "[pjl\n");
    let err = Config::try_load(&bad).unwrap_err();
    assert!(err.contains("parse error"));

    let missing = std::env::temp_dir().join("pclfont-does-not-exist.toml");
    let err = Config::try_load(&missing).unwrap_err();
    assert!(err.contains("failed to read"));

    let _ = std::fs::remove_file(good);
    let _ = std::fs::remove_file(bad);
}

#[test]
fn config_path_ends_with_file_name() {
    assert!(config_path().ends_with("pclfont/config.toml"));
}
