//! Bend-point-aware wire routing
//!
//! When a relation carries externally supplied bend-point hints (typically
//! from an automatic layout pass) and those hints are still valid, the wire
//! is drawn through them with filleted corners instead of the plain
//! orthogonal route.

use crate::renderer::path::{PathSegment, ResolvedPath};

use super::manhattan::SitePoint;
use super::types::Point;

const DEGENERATE_SEGMENT: f64 = 1e-6;

/// Decide whether a hint list is stored in reverse order relative to the
/// link's head/tail orientation.
///
/// The hint source has no intrinsic head/tail ordering, so the cheaper of
/// the two traversal directions wins. A tie counts as not reversed.
pub fn hints_reversed(head: Point, tail: Point, hints: &[Point]) -> bool {
    if hints.is_empty() {
        return false;
    }
    let first = hints[0];
    let last = hints[hints.len() - 1];
    let forward = head.distance(first) + tail.distance(last);
    let backward = tail.distance(first) + head.distance(last);
    backward < forward
}

/// Build the full control-point sequence: head, hints in traversal order,
/// tail.
pub fn control_points(head: SitePoint, tail: SitePoint, hints: &[Point]) -> Vec<Point> {
    let mut points = Vec::with_capacity(hints.len() + 2);
    points.push(head.point);
    if hints_reversed(head.point, tail.point, hints) {
        points.extend(hints.iter().rev().copied());
    } else {
        points.extend(hints.iter().copied());
    }
    points.push(tail.point);
    points
}

/// The fillet radius actually used at a corner: the configured radius,
/// clamped to half of each adjacent segment so the arc never overshoots.
pub fn effective_radius(configured: f64, before: f64, after: f64) -> f64 {
    configured.min(before / 2.0).min(after / 2.0)
}

/// Build a drawable path through the control points, rounding each interior
/// corner with a circular fillet.
///
/// Degenerate (zero-length) adjacent segments and collinear corners get a
/// straight join instead of an arc.
pub fn fillet_path(points: &[Point], radius: f64) -> ResolvedPath {
    if points.is_empty() {
        return ResolvedPath { segments: vec![] };
    }
    let mut segments = vec![PathSegment::MoveTo(points[0])];
    for i in 1..points.len().saturating_sub(1) {
        let prev = points[i - 1];
        let corner = points[i];
        let next = points[i + 1];
        let before = prev.distance(corner);
        let after = corner.distance(next);
        if before < DEGENERATE_SEGMENT || after < DEGENERATE_SEGMENT {
            segments.push(PathSegment::LineTo(corner));
            continue;
        }
        let u_in = ((corner.x - prev.x) / before, (corner.y - prev.y) / before);
        let u_out = ((next.x - corner.x) / after, (next.y - corner.y) / after);
        let cross = u_in.0 * u_out.1 - u_in.1 * u_out.0;
        let r = effective_radius(radius, before, after);
        if cross.abs() < 1e-9 || r < DEGENERATE_SEGMENT {
            // Straight-through or hairpin corner: no arc to draw
            segments.push(PathSegment::LineTo(corner));
            continue;
        }
        let arc_start = Point::new(corner.x - u_in.0 * r, corner.y - u_in.1 * r);
        let arc_end = Point::new(corner.x + u_out.0 * r, corner.y + u_out.1 * r);
        segments.push(PathSegment::LineTo(arc_start));
        segments.push(PathSegment::ArcTo {
            end: arc_end,
            radius: r,
            large_arc: false,
            // Positive cross product is a clockwise turn in y-down coordinates
            sweep: cross > 0.0,
        });
    }
    if points.len() > 1 {
        segments.push(PathSegment::LineTo(points[points.len() - 1]));
    }
    ResolvedPath { segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints() -> Vec<Point> {
        vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]
    }

    #[test]
    fn test_forward_hints_not_reversed() {
        // head near the first hint, tail near the last
        assert!(!hints_reversed(
            Point::new(0.0, 0.0),
            Point::new(30.0, 30.0),
            &hints()
        ));
    }

    #[test]
    fn test_backward_hints_detected() {
        assert!(hints_reversed(
            Point::new(30.0, 30.0),
            Point::new(0.0, 0.0),
            &hints()
        ));
    }

    #[test]
    fn test_tie_counts_as_not_reversed() {
        // Symmetric placement: both traversal orders cost the same
        let symmetric = vec![Point::new(10.0, 0.0)];
        assert!(!hints_reversed(
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            &symmetric
        ));
    }

    #[test]
    fn test_control_points_forward_order() {
        let head = SitePoint::new(Point::new(0.0, 0.0), None);
        let tail = SitePoint::new(Point::new(30.0, 30.0), None);
        let points = control_points(head, tail, &hints());
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_control_points_reversed_traversal() {
        let head = SitePoint::new(Point::new(30.0, 30.0), None);
        let tail = SitePoint::new(Point::new(0.0, 0.0), None);
        let points = control_points(head, tail, &hints());
        assert_eq!(
            points,
            vec![
                Point::new(30.0, 30.0),
                Point::new(20.0, 20.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_swapping_endpoints_reverses_the_path() {
        let a = SitePoint::new(Point::new(0.0, 0.0), None);
        let b = SitePoint::new(Point::new(30.0, 30.0), None);
        let forward = control_points(a, b, &hints());
        let mut backward = control_points(b, a, &hints());
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_effective_radius_clamped_by_short_segments() {
        assert_eq!(effective_radius(10.0, 100.0, 100.0), 10.0);
        assert_eq!(effective_radius(10.0, 8.0, 100.0), 4.0);
        assert_eq!(effective_radius(10.0, 100.0, 6.0), 3.0);
        assert_eq!(effective_radius(2.0, 100.0, 100.0), 2.0);
    }

    #[test]
    fn test_fillet_path_rounds_interior_corners() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 50.0),
        ];
        let path = fillet_path(&points, 10.0);
        // MoveTo, LineTo tangent, ArcTo, final LineTo
        assert_eq!(path.segments.len(), 4);
        match &path.segments[2] {
            PathSegment::ArcTo { end, radius, sweep, .. } => {
                assert_eq!(*radius, 10.0);
                assert_eq!(*end, Point::new(50.0, 10.0));
                // Right turn in y-down coordinates is clockwise
                assert!(*sweep);
            }
            other => panic!("expected arc, got {:?}", other),
        }
        match &path.segments[1] {
            PathSegment::LineTo(p) => assert_eq!(*p, Point::new(40.0, 0.0)),
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_fillet_radius_never_exceeds_half_segment() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(8.0, 0.0),
            Point::new(8.0, 100.0),
        ];
        let path = fillet_path(&points, 10.0);
        match &path.segments[2] {
            PathSegment::ArcTo { radius, .. } => assert_eq!(*radius, 4.0),
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_segment_gets_straight_join() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
        ];
        let path = fillet_path(&points, 10.0);
        for seg in &path.segments {
            assert!(
                !matches!(seg, PathSegment::ArcTo { .. }),
                "no arc expected for a zero-length segment"
            );
        }
    }

    #[test]
    fn test_collinear_corner_gets_straight_join() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(25.0, 0.0),
            Point::new(50.0, 0.0),
        ];
        let path = fillet_path(&points, 10.0);
        for seg in &path.segments {
            assert!(!matches!(seg, PathSegment::ArcTo { .. }));
        }
    }

    #[test]
    fn test_two_point_path_is_a_single_segment() {
        let points = vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0)];
        let path = fillet_path(&points, 10.0);
        assert_eq!(path.segments.len(), 2);
    }
}
