//! Attachment sites on a node boundary
//!
//! An attachment site is one fixed location where a wire may attach to a
//! node. Site 0 is the canonical single-connection site at the midpoint of
//! the chosen edge. Sites with higher ordinals fan out along the same edge
//! so that several wires into one multiport never share a point.

use super::types::{Point, Rect};

/// Which rectangle edge a site lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// One attachment location on a node boundary
///
/// The outward normal is fixed at construction: once sibling sites have been
/// laid out along an edge, moving the normal would invalidate their offsets.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentSite {
    bounds: Rect,
    id: usize,
    count: usize,
    normal: f64,
}

impl AttachmentSite {
    /// Create a site with ordinal `id` out of `count` attached wires.
    ///
    /// `normal` is the outward direction angle in radians, y-down screen
    /// coordinates (0 = east, π/2 = south, π = west, -π/2 = north).
    pub fn new(bounds: Rect, id: usize, count: usize, normal: f64) -> Self {
        Self {
            bounds,
            id,
            count,
            normal: normalize_angle(normal),
        }
    }

    /// The site ordinal
    pub fn id(&self) -> usize {
        self.id
    }

    /// The outward normal angle fixed at construction
    pub fn normal(&self) -> f64 {
        self.normal
    }

    /// The rectangle edge this site lies on, selected by comparing the
    /// normal against the four boundary-corner angles.
    pub fn edge(&self) -> Edge {
        let w = self.bounds.width / 2.0;
        let h = self.bounds.height / 2.0;
        let ne = (-h).atan2(w);
        let nw = (-h).atan2(-w);
        let se = h.atan2(w);
        let sw = h.atan2(-w);
        let a = self.normal;
        if a >= ne && a <= se {
            Edge::Right
        } else if a > se && a < sw {
            Edge::Bottom
        } else if a >= nw && a < ne {
            Edge::Top
        } else {
            Edge::Left
        }
    }

    /// The attachment point for this site.
    ///
    /// Site 0 sits at the edge midpoint. Higher ordinals offset along the
    /// edge by `spacing × (count − id)` on the left/top edges and
    /// `spacing × (id − 1)` on the right/bottom edges, so the fan radiates
    /// outward from the midpoint in wire-creation order. Pure geometry.
    pub fn point(&self, spacing: f64) -> Point {
        let b = self.bounds;
        let c = b.center();
        match self.edge() {
            Edge::Left => Point::new(b.x, c.y + self.leading_offset(spacing)),
            Edge::Top => Point::new(c.x + self.leading_offset(spacing), b.y),
            Edge::Right => Point::new(b.right(), c.y + self.trailing_offset(spacing)),
            Edge::Bottom => Point::new(c.x + self.trailing_offset(spacing), b.bottom()),
        }
    }

    fn leading_offset(&self, spacing: f64) -> f64 {
        if self.id == 0 {
            0.0
        } else {
            spacing * (self.count.saturating_sub(self.id)) as f64
        }
    }

    fn trailing_offset(&self, spacing: f64) -> f64 {
        if self.id == 0 {
            0.0
        } else {
            spacing * (self.id - 1) as f64
        }
    }
}

/// Normalize an angle to (-π, π]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::PI;
    let mut a = angle % (2.0 * PI);
    if a <= -PI {
        a += 2.0 * PI;
    } else if a > PI {
        a -= 2.0 * PI;
    }
    a
}
