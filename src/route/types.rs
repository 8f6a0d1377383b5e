//! Core geometry types for the wire router

use crate::renderer::path::ResolvedPath;

/// A 2D point in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A rectangle representing a node boundary on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Angle from the rectangle center to a point, in (-π, π], y-down
    pub fn angle_to(&self, point: Point) -> f64 {
        let c = self.center();
        (point.y - c.y).atan2(point.x - c.x)
    }

    /// Compute the union of two rectangles (smallest rectangle containing both)
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Expand this rectangle to include a point
    pub fn expand_to_include(&self, point: Point) -> Rect {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        Rect::new(x, y, right - x, bottom - y)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

/// Text anchor position for wire labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Layout information for a wire label
#[derive(Debug, Clone)]
pub struct LabelLayout {
    pub text: String,
    pub position: Point,
    pub anchor: TextAnchor,
}

/// Which routing produced a wire on the last pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingStrategy {
    /// Plain axis-aligned polyline between the attachment points
    PlainManhattan,
    /// Curved path through externally supplied bend-point hints
    HintedBend,
}

/// One routed wire, ready for rendering
#[derive(Debug, Clone)]
pub struct RoutedWire {
    /// Index of the link in the diagram's link list
    pub link: usize,
    /// Strategy selected on this route pass
    pub strategy: RoutingStrategy,
    /// Control polyline the wire passes through
    pub path: Vec<Point>,
    /// Drawable shape (straight segments, plus fillet arcs for hinted routes)
    pub shape: ResolvedPath,
    /// Anchor point for a label attached to this wire
    pub label_anchor: Point,
    /// Optional label carried by the link
    pub label: Option<LabelLayout>,
}

impl RoutedWire {
    /// Distance from a point to the nearest segment of the control polyline
    pub fn distance_to(&self, point: Point) -> f64 {
        distance_to_polyline(&self.path, point)
    }

    /// Hit-test the wire against a point with a pick tolerance
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        !self.path.is_empty() && self.distance_to(point) <= tolerance
    }
}

/// Distance from a point to the nearest segment of a polyline
pub fn distance_to_polyline(path: &[Point], point: Point) -> f64 {
    if path.len() == 1 {
        return path[0].distance(point);
    }
    let mut best = f64::MAX;
    for segment in path.windows(2) {
        best = best.min(segment_distance(segment[0], segment[1], point));
    }
    best
}

fn segment_distance(a: Point, b: Point, p: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-12 {
        return a.distance(p);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::path::ResolvedPath;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_angle_to_cardinal_points() {
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        // East
        assert!((r.angle_to(Point::new(40.0, 10.0))).abs() < 1e-9);
        // South (y-down): positive half-pi
        assert!((r.angle_to(Point::new(10.0, 40.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        // West
        assert!((r.angle_to(Point::new(-20.0, 10.0)) - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(100.0, 100.0, 50.0, 50.0);
        let union = a.union(&b);
        assert_eq!(union, Rect::new(0.0, 0.0, 150.0, 150.0));
    }

    #[test]
    fn test_hit_test_near_and_far() {
        let wire = RoutedWire {
            link: 0,
            strategy: RoutingStrategy::PlainManhattan,
            path: vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            shape: ResolvedPath { segments: vec![] },
            label_anchor: Point::new(50.0, 0.0),
            label: None,
        };
        assert!(wire.hit_test(Point::new(50.0, 2.0), 3.0));
        assert!(!wire.hit_test(Point::new(50.0, 10.0), 3.0));
    }
}
