//! The HP-GL/2 stick and arc fonts.
//!
//! Both fonts draw every glyph from a compiled-in stroke program on a 15x15
//! grid. Nothing here rasterizes: a glyph build decodes the program into
//! `move_to`/`line_to` calls on the caller's [`PathSink`], with arcs and
//! rounded corners flattened by [`arc`]. The two fonts differ only in the
//! chord angle used for that flattening.

pub mod arc;
pub mod charset;
mod data;
pub mod program;

use serde::{Deserialize, Serialize};

use crate::error::FontError;
use crate::path::{IntPoint, Matrix, PathSink, Point, ScaledSink};

use arc::{ArcSpec, add_arc};
use program::{GlyphProgram, StrokeOp, StrokeProgramStore};

/// Chord angle of the stick font.
pub const STICK_CHORD_DEGREES: f64 = 22.5;

/// Chord angle of the arc font.
pub const ARC_CHORD_DEGREES: f64 = 11.25;

/// Advance of every drawable glyph, in design units.
pub const CHAR_WIDTH: f64 = 0.667;

/// Design units per grid unit.
///
/// The grid is 15 units across and the character cell is 2/3 of the
/// point size.
pub const GRID_SCALE: f64 = 1.0 / 15.0 * 2.0 / 3.0;

/// Font bounding box in design units. The descent is an estimate.
pub const FONT_BBOX: FontBBox = FontBBox {
    min: Point::new(0.0, -0.333),
    max: Point::new(0.667, 0.667),
};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontBBox {
    pub min: Point,
    pub max: Point,
}

/// Which of the two procedural fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickFontKind {
    /// Fixed pitch.
    Stick,
    /// Proportionally spaced.
    Arc,
}

/// Result of building one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Advance vector in design units; zero for glyphs outside the table.
    pub advance: Point,
    /// Whether the glyph code had a stroke program.
    pub in_range: bool,
}

/// A procedurally drawn stick or arc font.
#[derive(Debug, Clone, Copy)]
pub struct StickFont {
    kind: StickFontKind,
    chord_degrees: f64,
    programs: StrokeProgramStore,
}

impl StickFont {
    pub fn stick() -> Self {
        Self::with_chord(StickFontKind::Stick, STICK_CHORD_DEGREES)
    }

    pub fn arc() -> Self {
        Self::with_chord(StickFontKind::Arc, ARC_CHORD_DEGREES)
    }

    /// A font of `kind` flattening arcs in steps of `chord_degrees`.
    pub fn with_chord(kind: StickFontKind, chord_degrees: f64) -> Self {
        Self {
            kind,
            chord_degrees,
            programs: StrokeProgramStore::builtin(),
        }
    }

    pub fn kind(&self) -> StickFontKind {
        self.kind
    }

    pub fn chord_degrees(&self) -> f64 {
        self.chord_degrees
    }

    pub fn programs(&self) -> &StrokeProgramStore {
        &self.programs
    }

    /// Whether `glyph` has a stroke program.
    pub fn has_glyph(&self, glyph: u16) -> bool {
        self.programs.contains(glyph)
    }

    /// Advance of `glyph` mapped through `matrix`; zero outside the table.
    pub fn char_width(&self, glyph: u16, matrix: &Matrix) -> Point {
        if self.has_glyph(glyph) {
            matrix.transform_distance(Point::new(CHAR_WIDTH, 0.0))
        } else {
            Point::default()
        }
    }

    /// Emit the path of `glyph` into `sink`, in design units.
    ///
    /// `font_matrix` must be the identity. A glyph outside the table emits
    /// nothing and reports a zero advance. A sink error abandons the glyph
    /// and is returned as [`FontError::Path`].
    pub fn build_glyph<S: PathSink + ?Sized>(
        &self,
        glyph: u16,
        font_matrix: &Matrix,
        sink: &mut S,
    ) -> Result<GlyphMetrics, FontError> {
        if !font_matrix.is_identity() {
            return Err(FontError::UnsupportedTransform);
        }
        let Some(program) = self.programs.get(glyph) else {
            return Ok(GlyphMetrics {
                advance: Point::default(),
                in_range: false,
            });
        };
        let mut scaled = ScaledSink::new(sink, Matrix::scale(GRID_SCALE, GRID_SCALE));
        GlyphBuilder::new(&mut scaled, self.chord_degrees).run(program)?;
        Ok(GlyphMetrics {
            advance: Point::new(CHAR_WIDTH, 0.0),
            in_range: true,
        })
    }
}

/// Running direction used to decide corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Other,
    Vertical,
    Horizontal,
}

impl Direction {
    /// Direction from `from` to `to`, checking x before y.
    fn of_move(from: IntPoint, to: IntPoint) -> Self {
        if to.x == from.x {
            Self::Vertical
        } else if to.y == from.y {
            Self::Horizontal
        } else {
            Self::Other
        }
    }

    /// Direction of a forced 45 degree line; a zero-length line is `Other`.
    fn of_line45(from: IntPoint, to: IntPoint) -> Self {
        if to.x == from.x && to.y != from.y {
            Self::Vertical
        } else if to.y == from.y && to.x != from.x {
            Self::Horizontal
        } else {
            Self::Other
        }
    }
}

/// Pen state of one glyph decode.
#[derive(Debug, Clone, Copy)]
struct PathState {
    current: IntPoint,
    shift: IntPoint,
    pen_down: bool,
    direction: Direction,
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            current: IntPoint::new(0, 0),
            shift: IntPoint::new(0, 0),
            pen_down: false,
            direction: Direction::Other,
        }
    }
}

struct GlyphBuilder<'s, S: PathSink + ?Sized> {
    sink: &'s mut S,
    chord_degrees: f64,
    state: PathState,
}

impl<'s, S: PathSink + ?Sized> GlyphBuilder<'s, S> {
    fn new(sink: &'s mut S, chord_degrees: f64) -> Self {
        Self {
            sink,
            chord_degrees,
            state: PathState::default(),
        }
    }

    fn run(mut self, program: GlyphProgram<'_>) -> Result<(), FontError> {
        self.sink.move_to(Point::from(self.state.current))?;
        for op in program.ops() {
            self.step(op)?;
        }
        Ok(())
    }

    fn step(&mut self, op: StrokeOp) -> Result<(), FontError> {
        let shift = self.state.shift;
        match op {
            StrokeOp::PenUp => self.state.pen_down = false,
            StrokeOp::HalfCircle { center } => {
                let center = center + shift;
                self.state.pen_down = true;
                self.arc(center, -180.0)?;
                self.state.current = center + center - self.state.current;
            }
            StrokeOp::Circle { center } => {
                self.state.pen_down = true;
                self.arc(center + shift, -360.0)?;
            }
            StrokeOp::Line45 { to } => {
                let to = to + shift;
                self.state.pen_down = true;
                self.sink.line_to(Point::from(to))?;
                self.state.direction = Direction::of_line45(self.state.current, to);
                self.state.current = to;
            }
            StrokeOp::ForceVertical => self.state.direction = Direction::Vertical,
            StrokeOp::Backspace | StrokeOp::Unused(_) => {}
            StrokeOp::Shift { delta } => self.state.shift = shift + delta,
            StrokeOp::Point(p) => self.segment(p + shift)?,
        }
        Ok(())
    }

    /// A plain coordinate: move, straight line, or rounded 45 degree corner.
    fn segment(&mut self, to: IntPoint) -> Result<(), FontError> {
        let from = self.state.current;
        let d = to - from;
        let corner = d.x.abs() == d.y.abs() && self.state.direction != Direction::Other;
        match (self.state.pen_down, corner) {
            (false, _) => {
                self.sink.move_to(Point::from(to))?;
                self.state.direction = Direction::of_move(from, to);
                self.state.pen_down = true;
            }
            (true, true) => {
                let quadrant_odd = (d.x > 0) ^ (d.y > 0);
                let (center, clockwise, next) = if self.state.direction == Direction::Vertical {
                    (IntPoint::new(to.x, from.y), !quadrant_odd, Direction::Horizontal)
                } else {
                    (IntPoint::new(from.x, to.y), quadrant_odd, Direction::Vertical)
                };
                self.arc(center, if clockwise { -90.0 } else { 90.0 })?;
                self.state.direction = next;
            }
            (true, false) => {
                self.sink.line_to(Point::from(to))?;
                self.state.direction = Direction::of_move(from, to);
            }
        }
        self.state.current = to;
        Ok(())
    }

    fn arc(&mut self, center: IntPoint, sweep_degrees: f64) -> Result<(), FontError> {
        let arc = ArcSpec::new(center, self.state.current, sweep_degrees, self.chord_degrees);
        add_arc(&mut *self.sink, &arc)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
