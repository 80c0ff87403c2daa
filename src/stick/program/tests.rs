use super::{FIRST_GLYPH, GlyphProgram, StrokeOp, StrokeProgramStore};
use crate::path::IntPoint;

fn decode(bytes: &[u8]) -> Vec<StrokeOp> {
    GlyphProgram::new(bytes).ops().collect()
}

#[test]
fn coordinates_pack_x_high_y_low() {
    assert_eq!(
        decode(&[0x00, 0x5a, 0xe3]),
        [
            StrokeOp::Point(IntPoint::new(0, 0)),
            StrokeOp::Point(IntPoint::new(5, 10)),
            StrokeOp::Point(IntPoint::new(14, 3)),
        ]
    );
}

#[test]
fn operators_with_operands() {
    assert_eq!(
        decode(&[0xf0, 0xf1, 0x44, 0xf2, 0x33, 0xf3, 0x8c]),
        [
            StrokeOp::PenUp,
            StrokeOp::HalfCircle {
                center: IntPoint::new(4, 4)
            },
            StrokeOp::Circle {
                center: IntPoint::new(3, 3)
            },
            StrokeOp::Line45 {
                to: IntPoint::new(8, 12)
            },
        ]
    );
}

#[test]
fn shifts_and_unused_operators() {
    assert_eq!(
        decode(&[0xf4, 0xf5, 0xf6, 0xf7, 0xf8, 0xf9, 0xfc]),
        [
            StrokeOp::ForceVertical,
            StrokeOp::Backspace,
            StrokeOp::Shift {
                delta: IntPoint::new(0, 5)
            },
            StrokeOp::Shift {
                delta: IntPoint::new(0, -5)
            },
            StrokeOp::Shift {
                delta: IntPoint::new(8, 0)
            },
            StrokeOp::Shift {
                delta: IntPoint::new(-8, 0)
            },
            StrokeOp::Unused(0xc),
        ]
    );
}

#[test]
fn truncated_operand_ends_program() {
    assert_eq!(
        decode(&[0x11, 0xf1]),
        [StrokeOp::Point(IntPoint::new(1, 1))]
    );
}

#[test]
fn builtin_store_covers_table() {
    let store = StrokeProgramStore::builtin();
    assert_eq!(store.len(), 276);
    assert!(!store.contains(FIRST_GLYPH - 1));
    assert!(store.contains(FIRST_GLYPH));
    assert!(!store.contains(FIRST_GLYPH + 276));
    assert_eq!(store.glyphs().count(), 276);
    assert!(store.get(FIRST_GLYPH + 276).is_none());
    // Every program slice lies inside the opcode buffer.
    for glyph in store.glyphs() {
        assert!(store.get(glyph).is_some(), "glyph {glyph:#x}");
    }
    // 'A' draws something.
    let a = store.get(u16::from(b'A')).unwrap();
    assert!(!a.bytes().is_empty());
}
