//! Arc tessellation.
//!
//! Arcs are never handed to the sink as curves. They are flattened into an
//! inscribed polyline with `ceil(|sweep| / chord)` equal steps, every vertex
//! lying exactly on the circle.

use crate::path::{IntPoint, PathError, PathSink, Point};

/// A circular arc on the stroke grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: IntPoint,
    /// Where the arc starts; the radius is its distance to `center`.
    pub start: IntPoint,
    /// Signed sweep; negative is clockwise.
    pub sweep_degrees: f64,
    /// Largest angular step of one chord.
    pub chord_degrees: f64,
}

impl ArcSpec {
    pub const fn new(
        center: IntPoint,
        start: IntPoint,
        sweep_degrees: f64,
        chord_degrees: f64,
    ) -> Self {
        Self {
            center,
            start,
            sweep_degrees,
            chord_degrees,
        }
    }

    /// Number of chords the arc is split into.
    ///
    /// Zero for a zero sweep or a non-positive chord angle.
    pub fn segment_count(&self) -> usize {
        if self.chord_degrees.is_nan() || self.chord_degrees <= 0.0 || !self.sweep_degrees.is_finite() {
            return 0;
        }
        (self.sweep_degrees.abs() / self.chord_degrees).ceil() as usize
    }

    /// Radius and start angle in degrees, exact for axis-aligned starts.
    fn polar_start(&self) -> (f64, f64) {
        let d = self.start - self.center;
        if d.x == 0 {
            (f64::from(d.y.abs()), if d.y >= 0 { 90.0 } else { 270.0 })
        } else if d.y == 0 {
            (f64::from(d.x.abs()), if d.x >= 0 { 0.0 } else { 180.0 })
        } else {
            let (dx, dy) = (f64::from(d.x), f64::from(d.y));
            (dx.hypot(dy), dy.atan2(dx).to_degrees())
        }
    }

    /// The exact end point of the arc.
    pub fn end_point(&self) -> Point {
        let (radius, angle) = self.polar_start();
        self.on_circle(radius, angle + self.sweep_degrees)
    }

    fn on_circle(&self, radius: f64, angle: f64) -> Point {
        let (sin, cos) = sincos_degrees(angle);
        let c = Point::from(self.center);
        Point::new(c.x + cos * radius, c.y + sin * radius)
    }

    /// Polyline vertices after the start point, in drawing order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let count = self.segment_count();
        let (radius, start_angle) = self.polar_start();
        let delta = if count == 0 {
            0.0
        } else {
            self.sweep_degrees / count as f64
        };
        (1..=count).map(move |i| self.on_circle(radius, start_angle + delta * i as f64))
    }
}

/// Emit the tessellated arc as `line_to` segments.
///
/// The sink's current point is expected to be the arc start.
pub fn add_arc<S: PathSink + ?Sized>(sink: &mut S, arc: &ArcSpec) -> Result<(), PathError> {
    for p in arc.points() {
        sink.line_to(p)?;
    }
    Ok(())
}

/// Sine and cosine of an angle in degrees, exact at multiples of 90.
pub fn sincos_degrees(degrees: f64) -> (f64, f64) {
    let a = degrees.rem_euclid(360.0);
    let quarter = a / 90.0;
    if (quarter - quarter.round()).abs() < 1e-12 {
        return match quarter.round() as u32 % 4 {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        };
    }
    a.to_radians().sin_cos()
}

#[cfg(test)]
mod tests;
