//! Glyph path builder tests.
//!
//! Most cases drive the builder directly with hand-assembled programs so the
//! recorded points stay on the integer grid.

use super::program::{FIRST_GLYPH, GlyphProgram};
use super::{CHAR_WIDTH, GlyphBuilder, STICK_CHORD_DEGREES, StickFont, StickFontKind};
use crate::error::FontError;
use crate::path::{Matrix, PathError, PathOp, PathRecorder, PathSink, Point};

const EPS: f64 = 1e-9;

fn trace(bytes: &[u8]) -> PathRecorder {
    let mut rec = PathRecorder::new();
    GlyphBuilder::new(&mut rec, STICK_CHORD_DEGREES)
        .run(GlyphProgram::new(bytes))
        .unwrap();
    rec
}

fn last(rec: &PathRecorder) -> Point {
    rec.current_point().unwrap()
}

fn close(a: Point, b: Point) -> bool {
    a.distance(b) < EPS
}

#[test]
fn vertical_run_then_diagonal_rounds_the_corner() {
    // Pen up, move (5,5), line (5,10), then a 45 degree step to (8,13).
    let rec = trace(&[0xf0, 0x55, 0x5a, 0x8d]);
    let ops = rec.ops();
    assert_eq!(ops[0], PathOp::MoveTo(Point::new(5.0, 5.0)));
    assert_eq!(ops[1], PathOp::LineTo(Point::new(5.0, 10.0)));
    // One quarter circle of four chords instead of a straight diagonal.
    assert_eq!(rec.line_count(), 5);
    let center = Point::new(8.0, 10.0);
    for op in &ops[2..] {
        assert!((op.point().distance(center) - 3.0).abs() < EPS);
    }
    assert!(close(last(&rec), Point::new(8.0, 13.0)));
}

#[test]
fn horizontal_run_then_diagonal_rounds_the_corner() {
    let rec = trace(&[0x00, 0x50, 0x83]);
    assert_eq!(rec.line_count(), 5);
    let center = Point::new(5.0, 3.0);
    for op in &rec.ops()[2..] {
        assert!((op.point().distance(center) - 3.0).abs() < EPS);
    }
    assert!(close(last(&rec), Point::new(8.0, 3.0)));
}

#[test]
fn forced_vertical_turns_a_horizontal_run_into_a_vertical_corner() {
    // Horizontal line to (3,0), force vertical, then (6,3). The corner
    // pivots on (6,0) rather than (3,3).
    let rec = trace(&[0x00, 0x30, 0xf4, 0x63]);
    assert_eq!(rec.line_count(), 5);
    let center = Point::new(6.0, 0.0);
    for op in &rec.ops()[2..] {
        assert!((op.point().distance(center) - 3.0).abs() < EPS);
    }
    assert!(close(last(&rec), Point::new(6.0, 3.0)));
}

#[test]
fn diagonal_after_diagonal_is_a_straight_line() {
    let rec = trace(&[0x11, 0x33, 0x66]);
    assert_eq!(
        rec.ops(),
        &[
            PathOp::MoveTo(Point::new(1.0, 1.0)),
            PathOp::LineTo(Point::new(3.0, 3.0)),
            PathOp::LineTo(Point::new(6.0, 6.0)),
        ]
    );
}

#[test]
fn line45_operator_never_rounds() {
    let rec = trace(&[0x00, 0x05, 0xf3, 0x38]);
    assert_eq!(rec.line_count(), 2);
    assert_eq!(last(&rec), Point::new(3.0, 8.0));
}

#[test]
fn half_circle_moves_current_point_to_far_side() {
    let rec = trace(&[0x50, 0xf1, 0x55, 0x5c]);
    // Eight chords of 22.5 degrees, then the line from (5,10) to (5,12).
    assert_eq!(rec.line_count(), 9);
    let ops = rec.ops();
    assert!(close(ops[ops.len() - 2].point(), Point::new(5.0, 10.0)));
    assert_eq!(last(&rec), Point::new(5.0, 12.0));
}

#[test]
fn full_circle_keeps_current_point() {
    let rec = trace(&[0x50, 0xf2, 0x55, 0x60]);
    assert_eq!(rec.line_count(), 17);
    let ops = rec.ops();
    assert!(close(ops[ops.len() - 2].point(), Point::new(5.0, 0.0)));
    assert_eq!(last(&rec), Point::new(6.0, 0.0));
}

#[test]
fn shift_operators_offset_following_coordinates() {
    // Up 5, back 8, then (0,0) and (1,0).
    let rec = trace(&[0xf6, 0xf8, 0x00, 0x10]);
    assert_eq!(
        rec.ops(),
        &[
            PathOp::MoveTo(Point::new(8.0, 5.0)),
            PathOp::LineTo(Point::new(9.0, 5.0)),
        ]
    );

    let rec = trace(&[0xf7, 0xf9, 0x88, 0x89]);
    assert_eq!(rec.ops()[0], PathOp::MoveTo(Point::new(0.0, 3.0)));
}

#[test]
fn backspace_and_unused_operators_do_nothing() {
    let plain = trace(&[0x00, 0x30]);
    let padded = trace(&[0xf5, 0x00, 0xfa, 0xff, 0x30, 0xf5]);
    assert_eq!(plain.ops(), padded.ops());
}

#[test]
fn truncated_operator_stops_decoding() {
    let rec = trace(&[0x00, 0x30, 0xf1]);
    assert_eq!(rec.line_count(), 1);
}

#[test]
fn out_of_range_glyphs_draw_nothing() {
    let font = StickFont::stick();
    for glyph in [0, FIRST_GLYPH - 1, FIRST_GLYPH + 276, u16::MAX] {
        let mut rec = PathRecorder::new();
        let metrics = font.build_glyph(glyph, &Matrix::IDENTITY, &mut rec).unwrap();
        assert!(rec.is_empty());
        assert!(!metrics.in_range);
        assert_eq!(metrics.advance, Point::default());
        assert_eq!(font.char_width(glyph, &Matrix::IDENTITY), Point::default());
    }
}

#[test]
fn non_identity_font_matrix_is_rejected() {
    let mut rec = PathRecorder::new();
    let err = StickFont::arc()
        .build_glyph(u16::from(b'A'), &Matrix::scale(2.0, 2.0), &mut rec)
        .unwrap_err();
    assert_eq!(err, FontError::UnsupportedTransform);
    assert!(rec.is_empty());
}

#[test]
fn char_width_follows_matrix() {
    let font = StickFont::stick();
    let w = font.char_width(u16::from(b'M'), &Matrix::scale(12.0, 12.0));
    assert!((w.x - CHAR_WIDTH * 12.0).abs() < EPS);
    assert!(w.y.abs() < EPS);
}

#[test]
fn every_glyph_builds_inside_a_sane_box() {
    for font in [StickFont::stick(), StickFont::arc()] {
        for glyph in font.programs().glyphs() {
            let mut rec = PathRecorder::new();
            let metrics = font.build_glyph(glyph, &Matrix::IDENTITY, &mut rec).unwrap();
            assert!(metrics.in_range);
            assert!((metrics.advance.x - CHAR_WIDTH).abs() < EPS);
            for op in rec.ops() {
                let p = op.point();
                assert!(p.x.abs() < 2.0 && p.y.abs() < 2.0, "glyph {glyph:#x}: {p:?}");
            }
        }
    }
}

#[test]
fn arc_font_flattens_more_finely() {
    let count = |font: StickFont| -> usize {
        font.programs()
            .glyphs()
            .map(|g| {
                let mut rec = PathRecorder::new();
                font.build_glyph(g, &Matrix::IDENTITY, &mut rec).unwrap();
                rec.line_count()
            })
            .sum()
    };
    assert_eq!(StickFont::arc().kind(), StickFontKind::Arc);
    assert!(count(StickFont::arc()) > count(StickFont::stick()));
}

/// Sink that refuses every line.
struct RefusingSink;

impl PathSink for RefusingSink {
    fn move_to(&mut self, _p: Point) -> Result<(), PathError> {
        Ok(())
    }

    fn line_to(&mut self, _p: Point) -> Result<(), PathError> {
        Err(PathError("device full".to_owned()))
    }
}

#[test]
fn sink_failure_aborts_the_glyph() {
    let err = StickFont::stick()
        .build_glyph(u16::from(b'H'), &Matrix::IDENTITY, &mut RefusingSink)
        .unwrap_err();
    assert_eq!(err, FontError::Path(PathError("device full".to_owned())));
}
