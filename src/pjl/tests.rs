use super::{FONTNUMBER, FONTSOURCE, JobEnvironment, PITCH, PTSIZE, PjlEnvironment, SYMSET};
use crate::config::PjlConfig;

#[test]
fn defaults_come_from_config() {
    let env = PjlEnvironment::default();
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("I"));
    assert_eq!(env.var_to_int(FONTNUMBER), Some(0));
    assert_eq!(env.var_to_float(PITCH), Some(10.0));
    assert_eq!(env.var_to_float(PTSIZE), Some(12.0));
    assert_eq!(env.get_var("symset").as_deref(), Some("ROMAN8"));
    assert_eq!(env.map_symset("ROMAN8"), Some(277));
}

#[test]
fn enumeration_wraps_and_reports_exhaustion() {
    let mut env = PjlEnvironment::default();
    assert!(env.advance_to_next_source());
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("S"));
    assert!(env.advance_to_next_source());
    assert!(env.advance_to_next_source());
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("M"));
    // Back at "I": the walk is over.
    assert!(!env.advance_to_next_source());
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("I"));
}

#[test]
fn initial_source_not_listed_is_prepended() {
    let config = PjlConfig {
        fontsource: "c1".to_owned(),
        sources: vec!["I".to_owned(), "S".to_owned()],
        ..PjlConfig::default()
    };
    let mut env = PjlEnvironment::from_config(&config);
    assert_eq!(env.sources(), ["C1", "I", "S"]);
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("C1"));
    env.advance_to_next_source();
    env.rewind_sources();
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("C1"));
}

#[test]
fn set_var_overrides_and_moves_source() {
    let mut env = PjlEnvironment::default();
    env.set_var("pitch", "16.67");
    env.set_var(SYMSET, "PC8");
    env.set_var(FONTSOURCE, "S");
    assert_eq!(env.var_to_float(PITCH), Some(16.67));
    assert_eq!(env.get_var(SYMSET).as_deref(), Some("PC8"));
    assert_eq!(env.get_var(FONTSOURCE).as_deref(), Some("S"));
    // The walk now starts, and ends, at "S".
    assert!(env.advance_to_next_source());
    assert!(env.advance_to_next_source());
    assert!(env.advance_to_next_source());
    assert!(!env.advance_to_next_source());
}

#[test]
fn unparsable_numbers_are_none() {
    let mut env = PjlEnvironment::default();
    env.set_var(FONTNUMBER, "twelve");
    assert_eq!(env.var_to_int(FONTNUMBER), None);
    assert_eq!(env.var_to_float("NOSUCHVAR"), None);
}

#[test]
fn source_paths_match_bank_or_family() {
    let mut config = PjlConfig::default();
    config
        .source_paths
        .insert("c".to_owned(), "/fonts/cartridge".to_owned());
    config
        .source_paths
        .insert("M2".to_owned(), "/fonts/simm2".to_owned());
    let env = PjlEnvironment::from_config(&config);
    assert_eq!(env.source_path("C1").as_deref(), Some("/fonts/cartridge"));
    assert_eq!(env.source_path("m2").as_deref(), Some("/fonts/simm2"));
    assert_eq!(env.source_path("M1"), None);
}
