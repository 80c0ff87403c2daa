//! Tests for selection parameter conversions.

use super::*;

#[test]
fn ten_cpi_is_720() {
    assert_eq!(pitch_cp_from_cpi(10.0), Ok(720));
}

#[test]
fn pitch_rounds_to_nearest() {
    // 7200 / 16.67 = 431.91...
    assert_eq!(pitch_cp_from_cpi(16.67), Ok(432));
    // 7200 / 12 = 600 exactly.
    assert_eq!(pitch_cp_from_cpi(12.0), Ok(600));
}

#[test]
fn pitch_below_minimum_is_clamped_then_out_of_range() {
    // 0.05 is raised to 0.1, giving 72000 which exceeds 65535.
    assert_eq!(pitch_cp_from_cpi(0.05), Err(FontError::Range("pitch")));
    assert_eq!(pitch_cp_from_cpi(0.0), Err(FontError::Range("pitch")));
    assert_eq!(pitch_cp_from_cpi(-3.0), Err(FontError::Range("pitch")));
}

#[test]
fn pitch_just_inside_range() {
    // 7200 / 0.11 = 65454.5...
    assert_eq!(pitch_cp_from_cpi(0.11), Ok(65455));
}

#[test]
fn huge_cpi_clamps_pitch_to_one() {
    assert_eq!(pitch_cp_from_cpi(100_000.0), Ok(1));
}

#[test]
fn height_conversion() {
    assert_eq!(height_4ths_from_points(12.0), Ok(48));
    assert_eq!(height_4ths_from_points(11.5), Ok(46));
    assert_eq!(height_4ths_from_points(0.1), Ok(0));
    assert_eq!(height_4ths_from_points(999.75), Ok(3999));
    assert_eq!(height_4ths_from_points(1000.0), Err(FontError::Range("height")));
    assert_eq!(height_4ths_from_points(999.6), Ok(3998));
    assert_eq!(height_4ths_from_points(-1.0), Err(FontError::Range("height")));
}

#[test]
fn stroke_weight_and_style_clamp() {
    assert_eq!(clamp_stroke_weight(-20), -7);
    assert_eq!(clamp_stroke_weight(3), 3);
    assert_eq!(clamp_stroke_weight(99), 7);
    assert_eq!(clamp_style(40_000), 32767);
    assert_eq!(clamp_style(4), 4);
}

#[test]
fn symbol_set_packing() {
    assert_eq!(symbol_set_value(8, b'U'), Ok(277));
    assert_eq!(symbol_set_value(0, b'N'), Ok(14));
    assert_eq!(symbol_set_value(1023, b'^'), Ok((1023 << 5) + 30));
    assert_eq!(
        symbol_set_value(1024, b'U'),
        Err(FontError::Range("symbol set"))
    );
    assert_eq!(
        symbol_set_value(8, b'X'),
        Err(FontError::Range("symbol set letter"))
    );
    assert_eq!(
        symbol_set_value(8, b'u'),
        Err(FontError::Range("symbol set letter"))
    );
}

#[test]
fn symbol_set_id_round_trips_common_sets() {
    assert_eq!(symbol_set_id(277), "8U");
    assert_eq!(symbol_set_id(14), "0N");
    assert_eq!(parse_symbol_set_id("10U"), Some(341));
    assert_eq!(parse_symbol_set_id("8u"), Some(277));
    assert_eq!(parse_symbol_set_id("U"), None);
    assert_eq!(parse_symbol_set_id(""), None);
}

#[test]
fn pjl_names_map_to_pcl_values() {
    assert_eq!(pjl_symbol_set("ROMAN8"), Some(277));
    assert_eq!(pjl_symbol_set("roman8"), Some(277));
    assert_eq!(pjl_symbol_set("ISOL1"), Some(14));
    assert_eq!(pjl_symbol_set("PC8"), Some(341));
    assert_eq!(pjl_symbol_set("19U"), Some(629));
    assert_eq!(pjl_symbol_set("KLINGON"), None);
}

#[test]
fn default_parameters() {
    let p = FontSelectionParameters::default();
    assert_eq!(p.symbol_set_id(), "8U");
    assert!((p.pitch_per_inch() - 10.0).abs() < 1e-9);
    assert!((p.height_points() - 12.0).abs() < 1e-9);
}

