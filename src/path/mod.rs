//! Path construction surface consumed by glyph builders.
//!
//! Glyph builders never rasterize: they emit `move_to`/`line_to` into a
//! `PathSink` supplied by the caller. `PathRecorder` collects the segments
//! in memory and `ScaledSink` applies a temporary coordinate scale that only
//! lives as long as one glyph build.

use std::fmt;
use std::ops::{Add, Sub};

/// A point on the integer stroke grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for IntPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IntPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A point in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<IntPoint> for Point {
    fn from(p: IntPoint) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Affine transform `[xx xy yx yy tx ty]` in PostScript order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Uniform or anisotropic scale about the origin.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            xx: sx,
            xy: 0.0,
            yx: 0.0,
            yy: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform a point, translation included.
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.xx + p.y * self.yx + self.tx,
            p.x * self.xy + p.y * self.yy + self.ty,
        )
    }

    /// Transform a distance vector, translation ignored.
    pub fn transform_distance(&self, d: Point) -> Point {
        Point::new(d.x * self.xx + d.y * self.yx, d.x * self.xy + d.y * self.yy)
    }
}

/// Failure reported by a path sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError(pub String);

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PathError {}

/// Receiver of path segments.
///
/// Implemented by the caller's rasterizer or stroker. Any error aborts the
/// glyph being built and is handed back unchanged.
pub trait PathSink {
    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: Point) -> Result<(), PathError>;

    /// Append a straight segment from the current point to `p`.
    fn line_to(&mut self, p: Point) -> Result<(), PathError>;
}

/// One recorded path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
}

impl PathOp {
    pub fn point(self) -> Point {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => p,
        }
    }
}

/// In-memory path sink.
///
/// Consecutive moves collapse into the last one, as in PostScript path
/// construction, so a recorded path never starts a subpath it doesn't use.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    ops: Vec<PathOp>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded segments in emission order.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Whether nothing at all was emitted.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of `LineTo` segments.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PathOp::LineTo(_)))
            .count()
    }

    /// The point the next segment would start from.
    pub fn current_point(&self) -> Option<Point> {
        self.ops.last().map(|op| op.point())
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, p: Point) -> Result<(), PathError> {
        if let Some(PathOp::MoveTo(last)) = self.ops.last_mut() {
            *last = p;
        } else {
            self.ops.push(PathOp::MoveTo(p));
        }
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> Result<(), PathError> {
        if self.ops.is_empty() {
            return Err(PathError("line_to without a current point".to_owned()));
        }
        self.ops.push(PathOp::LineTo(p));
        Ok(())
    }
}

/// Sink adapter that maps every point through a matrix before forwarding.
///
/// Holds the inner sink by mutable borrow, so the scale is gone as soon as
/// the adapter is dropped.
pub struct ScaledSink<'a, S: PathSink + ?Sized> {
    inner: &'a mut S,
    ctm: Matrix,
}

impl<'a, S: PathSink + ?Sized> ScaledSink<'a, S> {
    pub fn new(inner: &'a mut S, ctm: Matrix) -> Self {
        Self { inner, ctm }
    }
}

impl<S: PathSink + ?Sized> PathSink for ScaledSink<'_, S> {
    fn move_to(&mut self, p: Point) -> Result<(), PathError> {
        self.inner.move_to(self.ctm.transform_point(p))
    }

    fn line_to(&mut self, p: Point) -> Result<(), PathError> {
        self.inner.line_to(self.ctm.transform_point(p))
    }
}
