use super::{ArcSpec, add_arc, sincos_degrees};
use crate::path::{IntPoint, PathRecorder, PathSink, Point};

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    a.distance(b) < EPS
}

#[test]
fn segment_count_is_ceiling_of_sweep_over_chord() {
    let c = IntPoint::new(0, 0);
    let s = IntPoint::new(3, 0);
    assert_eq!(ArcSpec::new(c, s, -90.0, 22.5).segment_count(), 4);
    assert_eq!(ArcSpec::new(c, s, -100.0, 22.5).segment_count(), 5);
    assert_eq!(ArcSpec::new(c, s, 360.0, 22.5).segment_count(), 16);
    assert_eq!(ArcSpec::new(c, s, -180.0, 11.25).segment_count(), 16);
    assert_eq!(ArcSpec::new(c, s, 1.0, 22.5).segment_count(), 1);
    assert_eq!(ArcSpec::new(c, s, 0.0, 22.5).segment_count(), 0);
}

#[test]
fn degenerate_chord_produces_nothing() {
    let arc = ArcSpec::new(IntPoint::new(0, 0), IntPoint::new(1, 0), 90.0, 0.0);
    assert_eq!(arc.segment_count(), 0);
    assert_eq!(arc.points().count(), 0);
    let nan = ArcSpec { chord_degrees: f64::NAN, ..arc };
    assert_eq!(nan.segment_count(), 0);
}

#[test]
fn polyline_ends_on_exact_arc_end() {
    let center = IntPoint::new(4, 7);
    for start in [IntPoint::new(9, 7), IntPoint::new(4, 2), IntPoint::new(7, 11)] {
        for sweep in [-360.0, -270.0, -180.0, -90.0, -33.0, 15.0, 90.0, 200.0, 360.0] {
            let arc = ArcSpec::new(center, start, sweep, 22.5);
            let last = arc.points().last().unwrap();
            assert!(
                close(last, arc.end_point()),
                "start {start:?} sweep {sweep}: {last:?} vs {:?}",
                arc.end_point()
            );
        }
    }
}

#[test]
fn every_vertex_lies_on_the_circle() {
    let arc = ArcSpec::new(IntPoint::new(5, 5), IntPoint::new(8, 9), -250.0, 11.25);
    let c = Point::from(arc.center);
    for p in arc.points() {
        assert!((p.distance(c) - 5.0).abs() < EPS);
    }
}

#[test]
fn half_circle_lands_opposite_the_start() {
    let arc = ArcSpec::new(IntPoint::new(5, 5), IntPoint::new(5, 0), -180.0, 22.5);
    assert!(close(arc.end_point(), Point::new(5.0, 10.0)));
    assert_eq!(arc.points().count(), 8);
}

#[test]
fn full_circle_returns_to_start() {
    let arc = ArcSpec::new(IntPoint::new(2, 2), IntPoint::new(2, 5), -360.0, 22.5);
    let last = arc.points().last().unwrap();
    assert!(close(last, Point::new(2.0, 5.0)));
}

#[test]
fn clockwise_quarter_turn_passes_through_expected_side() {
    // From the top of the circle, clockwise goes through the right half.
    let arc = ArcSpec::new(IntPoint::new(0, 0), IntPoint::new(0, 4), -90.0, 22.5);
    for p in arc.points() {
        assert!(p.x >= -EPS);
    }
    assert!(close(arc.end_point(), Point::new(4.0, 0.0)));
}

#[test]
fn add_arc_emits_one_line_per_step() {
    let mut rec = PathRecorder::new();
    rec.move_to(Point::new(3.0, 0.0)).unwrap();
    let arc = ArcSpec::new(IntPoint::new(0, 0), IntPoint::new(3, 0), 90.0, 22.5);
    add_arc(&mut rec, &arc).unwrap();
    assert_eq!(rec.line_count(), 4);
    assert!(close(rec.current_point().unwrap(), Point::new(0.0, 3.0)));
}

#[test]
fn sincos_is_exact_on_axes() {
    assert_eq!(sincos_degrees(0.0), (0.0, 1.0));
    assert_eq!(sincos_degrees(90.0), (1.0, 0.0));
    assert_eq!(sincos_degrees(180.0), (0.0, -1.0));
    assert_eq!(sincos_degrees(-90.0), (-1.0, 0.0));
    assert_eq!(sincos_degrees(450.0), (1.0, 0.0));
    let (s, c) = sincos_degrees(45.0);
    assert!((s - c).abs() < EPS);
}
