//! Drawable path shapes
//!
//! Converts routed wire geometry into SVG path `d` attribute strings.

use crate::route::types::Point;

/// A segment in a drawable path
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Build a path of straight segments through a polyline
    pub fn polyline(points: &[Point]) -> Self {
        let mut segments = Vec::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                segments.push(PathSegment::MoveTo(*point));
            } else {
                segments.push(PathSegment::LineTo(*point));
            }
        }
        Self { segments }
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        if self.segments.is_empty() {
            return String::new();
        }

        let mut d = String::new();
        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!(" L{:.2} {:.2}", p.x, p.y));
                }
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let large = if *large_arc { 1 } else { 0 };
                    let sw = if *sweep { 1 } else { 0 };
                    // SVG arc: A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    // Using equal rx and ry for circular arcs
                    d.push_str(&format!(
                        " A{:.2} {:.2} 0 {} {} {:.2} {:.2}",
                        radius, radius, large, sw, end.x, end.y
                    ));
                }
                PathSegment::Close => {
                    d.push_str(" Z");
                }
            }
        }
        d
    }

    /// End point of the last positioned segment, if any
    pub fn end_point(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(|seg| match seg {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
            PathSegment::ArcTo { end, .. } => Some(*end),
            PathSegment::Close => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_d() {
        let path = ResolvedPath {
            segments: vec![
                PathSegment::MoveTo(Point::new(0.0, 0.0)),
                PathSegment::LineTo(Point::new(100.0, 0.0)),
                PathSegment::LineTo(Point::new(100.0, 100.0)),
                PathSegment::Close,
            ],
        };
        assert_eq!(path.to_svg_d(), "M0.00 0.00 L100.00 0.00 L100.00 100.00 Z");
    }

    #[test]
    fn test_arc_segment_flags() {
        let path = ResolvedPath {
            segments: vec![
                PathSegment::MoveTo(Point::new(0.0, 0.0)),
                PathSegment::ArcTo {
                    end: Point::new(10.0, 10.0),
                    radius: 10.0,
                    large_arc: false,
                    sweep: true,
                },
            ],
        };
        assert_eq!(path.to_svg_d(), "M0.00 0.00 A10.00 10.00 0 0 1 10.00 10.00");
    }

    #[test]
    fn test_polyline_builder() {
        let path = ResolvedPath::polyline(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 30.0),
        ]);
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.to_svg_d(), "M0.00 0.00 L50.00 0.00 L50.00 30.00");
        assert_eq!(path.end_point(), Some(Point::new(50.0, 30.0)));
    }

    #[test]
    fn test_empty_path() {
        let path = ResolvedPath { segments: vec![] };
        assert!(path.to_svg_d().is_empty());
        assert!(path.end_point().is_none());
    }
}
