//! Plain orthogonal wire routing
//!
//! The fallback router: an axis-aligned polyline from the head attachment
//! point to the tail attachment point. Wires leave a port along its outward
//! normal by a short stub before the first bend.

use super::config::RouteConfig;
use super::site::normalize_angle;
use super::types::Point;

/// An attachment point together with its outward normal, if it has one.
/// Relation vertices attach without a normal and get no stub.
#[derive(Debug, Clone, Copy)]
pub struct SitePoint {
    pub point: Point,
    pub normal: Option<f64>,
}

impl SitePoint {
    pub fn new(point: Point, normal: Option<f64>) -> Self {
        Self { point, normal }
    }
}

/// Route an axis-aligned polyline between two attachment points
pub fn route(head: SitePoint, tail: SitePoint, config: &RouteConfig) -> Vec<Point> {
    let start = stub_point(head, config.stub_length);
    let end = stub_point(tail, config.stub_length);

    let mut points = vec![head.point];
    if start != head.point {
        points.push(start);
    }
    connect_orthogonal(&mut points, start, end, head.normal, config);
    if end != tail.point {
        points.push(end);
    }
    points.push(tail.point);
    compress(points, config.alignment_tolerance)
}

/// Offset an attachment point outward along its normal
fn stub_point(site: SitePoint, length: f64) -> Point {
    match site.normal.map(axis_direction) {
        Some((dx, dy)) => Point::new(site.point.x + dx * length, site.point.y + dy * length),
        None => site.point,
    }
}

/// Snap a normal angle to the nearest axis-aligned unit direction
fn axis_direction(normal: f64) -> (f64, f64) {
    use std::f64::consts::FRAC_PI_4;
    let a = normalize_angle(normal);
    if a.abs() <= FRAC_PI_4 {
        (1.0, 0.0)
    } else if a.abs() >= 3.0 * FRAC_PI_4 {
        (-1.0, 0.0)
    } else if a > 0.0 {
        (0.0, 1.0)
    } else {
        (0.0, -1.0)
    }
}

/// Connect two points with at most two interior bends
fn connect_orthogonal(
    points: &mut Vec<Point>,
    start: Point,
    end: Point,
    head_normal: Option<f64>,
    config: &RouteConfig,
) {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let tol = config.alignment_tolerance;

    // Aligned on either axis: a single straight segment will do
    if dx < tol || dy < tol {
        return;
    }

    // Split on the axis the head normal runs along so the wire keeps
    // leaving the port straight; without a normal, split on the longer axis
    let horizontal_first = match head_normal.map(axis_direction) {
        Some((dx_dir, _)) => dx_dir != 0.0,
        None => dx >= dy,
    };

    if horizontal_first {
        let mid_x = (start.x + end.x) / 2.0;
        points.push(Point::new(mid_x, start.y));
        points.push(Point::new(mid_x, end.y));
    } else {
        let mid_y = (start.y + end.y) / 2.0;
        points.push(Point::new(start.x, mid_y));
        points.push(Point::new(end.x, mid_y));
    }
}

/// Drop duplicate and collinear interior points
pub fn compress(points: Vec<Point>, tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points;
    }
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    out.push(points[0]);
    for point in points.iter().skip(1) {
        let prev = out[out.len() - 1];
        if (point.x - prev.x).abs() < tolerance && (point.y - prev.y).abs() < tolerance {
            continue;
        }
        // Collapse a collinear middle point on the same axis run
        if out.len() >= 2 {
            let before = out[out.len() - 2];
            let same_column =
                (before.x - prev.x).abs() < tolerance && (prev.x - point.x).abs() < tolerance;
            let same_row =
                (before.y - prev.y).abs() < tolerance && (prev.y - point.y).abs() < tolerance;
            if same_column || same_row {
                out.pop();
            }
        }
        out.push(*point);
    }
    out
}
