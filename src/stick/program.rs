//! Stroke program store and opcode decoding.
//!
//! Every glyph program is a run of bytes. A byte normally packs one grid
//! coordinate (high nibble X, low nibble Y). A high nibble of `0xf` turns
//! the low nibble into an operator; operators 1, 2 and 3 take the following
//! byte as their coordinate.

use crate::path::IntPoint;

use super::data::{COUNTS, NUM_SYMBOLS, OFFSETS, STROKES};

/// First glyph index with a stroke program.
pub const FIRST_GLYPH: u16 = 0x20;

/// High nibble marking an operator byte.
const OPERATOR: u8 = 0xf;

/// Grid units moved by the vertical shift operators.
const SHIFT_Y: i32 = 5;

/// Grid units moved by the horizontal shift operators.
const SHIFT_X: i32 = 8;

/// One decoded stroke program instruction.
///
/// Coordinates are raw grid values; the builder adds the running shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOp {
    /// Lift the pen: the next coordinate is a move.
    PenUp,
    /// Half circle (-180 degrees) about `center`.
    HalfCircle { center: IntPoint },
    /// Full circle (-360 degrees) about `center`.
    Circle { center: IntPoint },
    /// Straight line to `to`, never chamfered.
    Line45 { to: IntPoint },
    /// Force a vertical running direction for the next corner decision.
    ForceVertical,
    /// HP-GL backspace. Carries no geometry.
    Backspace,
    /// Add `delta` to the running shift offset.
    Shift { delta: IntPoint },
    /// Operator nibbles 0xa..=0xf have no assigned meaning.
    Unused(u8),
    /// Plain coordinate: a move with the pen up, otherwise a line or corner.
    Point(IntPoint),
}

/// The opcode bytes of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphProgram<'a> {
    bytes: &'a [u8],
}

impl<'a> GlyphProgram<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Decode the program instruction by instruction.
    pub fn ops(&self) -> StrokeOps<'a> {
        StrokeOps {
            bytes: self.bytes,
            pos: 0,
        }
    }
}

/// Iterator over the instructions of a [`GlyphProgram`].
///
/// Stops early if the program ends inside an operator that needs a
/// coordinate byte.
#[derive(Debug, Clone)]
pub struct StrokeOps<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl StrokeOps<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let b = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn operand(&mut self, op: u8) -> Option<IntPoint> {
        match self.next_byte() {
            Some(b) => Some(grid_point(b)),
            None => {
                log::warn!("stroke program ends inside operator {op:#x}");
                None
            }
        }
    }
}

impl Iterator for StrokeOps<'_> {
    type Item = StrokeOp;

    fn next(&mut self) -> Option<StrokeOp> {
        let b = self.next_byte()?;
        if b >> 4 != OPERATOR {
            return Some(StrokeOp::Point(grid_point(b)));
        }
        let op = b & 0x0f;
        let decoded = match op {
            0x0 => StrokeOp::PenUp,
            0x1 => StrokeOp::HalfCircle {
                center: self.operand(op)?,
            },
            0x2 => StrokeOp::Circle {
                center: self.operand(op)?,
            },
            0x3 => StrokeOp::Line45 {
                to: self.operand(op)?,
            },
            0x4 => StrokeOp::ForceVertical,
            0x5 => StrokeOp::Backspace,
            0x6 => StrokeOp::Shift {
                delta: IntPoint::new(0, SHIFT_Y),
            },
            0x7 => StrokeOp::Shift {
                delta: IntPoint::new(0, -SHIFT_Y),
            },
            0x8 => StrokeOp::Shift {
                delta: IntPoint::new(SHIFT_X, 0),
            },
            0x9 => StrokeOp::Shift {
                delta: IntPoint::new(-SHIFT_X, 0),
            },
            other => StrokeOp::Unused(other),
        };
        Some(decoded)
    }
}

fn grid_point(b: u8) -> IntPoint {
    IntPoint::new(i32::from(b >> 4), i32::from(b & 0x0f))
}

/// Immutable table of glyph programs indexed by glyph code.
///
/// Programs are slices of one shared opcode buffer, located through an
/// offset and a byte count per glyph.
#[derive(Debug, Clone, Copy)]
pub struct StrokeProgramStore {
    strokes: &'static [u8],
    offsets: &'static [u16],
    counts: &'static [u8],
}

impl Default for StrokeProgramStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StrokeProgramStore {
    /// The compiled-in stick/arc glyph table.
    pub const fn builtin() -> Self {
        Self {
            strokes: &STROKES,
            offsets: &OFFSETS,
            counts: &COUNTS,
        }
    }

    /// Number of glyphs with a program.
    pub const fn len(&self) -> usize {
        NUM_SYMBOLS
    }

    pub const fn is_empty(&self) -> bool {
        NUM_SYMBOLS == 0
    }

    /// Whether `glyph` lies in `[0x20, 0x20 + len)`.
    pub fn contains(&self, glyph: u16) -> bool {
        glyph >= FIRST_GLYPH && usize::from(glyph - FIRST_GLYPH) < self.len()
    }

    /// Every glyph code with a program, in ascending order.
    pub fn glyphs(&self) -> impl Iterator<Item = u16> {
        FIRST_GLYPH..FIRST_GLYPH + self.len() as u16
    }

    /// Program for `glyph`, or `None` outside the table.
    pub fn get(&self, glyph: u16) -> Option<GlyphProgram<'static>> {
        if !self.contains(glyph) {
            return None;
        }
        let idx = usize::from(glyph - FIRST_GLYPH);
        let start = usize::from(*self.offsets.get(idx)?);
        let len = usize::from(*self.counts.get(idx)?);
        let strokes: &'static [u8] = self.strokes;
        strokes.get(start..start + len).map(GlyphProgram::new)
    }
}

#[cfg(test)]
mod tests;
