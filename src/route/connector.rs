//! Connector state machine
//!
//! A connector pairs two attachment points with optional bend-point hints
//! and caches the routed result. Routing is idempotent for unchanged inputs;
//! anything that changes an input invalidates the cache.

use crate::renderer::path::ResolvedPath;

use super::config::RouteConfig;
use super::hinted::{control_points, fillet_path};
use super::manhattan::{self, SitePoint};
use super::types::{distance_to_polyline, Point, RoutingStrategy};

/// The cached product of one route pass
#[derive(Debug, Clone)]
pub struct ConnectorRoute {
    pub strategy: RoutingStrategy,
    pub path: Vec<Point>,
    pub shape: ResolvedPath,
    pub label_anchor: Point,
}

/// A wire between two attachment points, with route caching
#[derive(Debug, Clone)]
pub struct Connector {
    head: SitePoint,
    tail: SitePoint,
    hints: Vec<Point>,
    routed: Option<ConnectorRoute>,
}

impl Connector {
    pub fn new(head: SitePoint, tail: SitePoint) -> Self {
        Self {
            head,
            tail,
            hints: Vec::new(),
            routed: None,
        }
    }

    /// Supply bend-point hints for the next route pass.
    ///
    /// Replaces any previous hints and invalidates the cached route.
    pub fn set_hints(&mut self, hints: Vec<Point>) {
        self.hints = hints;
        self.routed = None;
    }

    /// Move an endpoint, invalidating the cached route
    pub fn set_endpoints(&mut self, head: SitePoint, tail: SitePoint) {
        self.head = head;
        self.tail = tail;
        self.routed = None;
    }

    /// Route the connector, reusing the cached result when inputs are
    /// unchanged since the last pass.
    pub fn route(&mut self, config: &RouteConfig) -> &ConnectorRoute {
        let route = match self.routed.take() {
            Some(cached) => cached,
            None => self.compute_route(config),
        };
        self.routed.insert(route)
    }

    /// The drawable shape of the last route pass, if any
    pub fn shape(&self) -> Option<&ResolvedPath> {
        self.routed.as_ref().map(|r| &r.shape)
    }

    /// Anchor point for a label on this wire.
    ///
    /// Routes once if no cached result exists; that single bounce is the
    /// only recursion between routing and label placement.
    pub fn label_anchor(&mut self, config: &RouteConfig) -> Point {
        self.route(config).label_anchor
    }

    /// Whether a point lies within `tolerance` of the routed polyline.
    /// An unrouted connector is never hit.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match &self.routed {
            Some(route) => distance_to_polyline(&route.path, point) <= tolerance,
            None => false,
        }
    }

    fn compute_route(&self, config: &RouteConfig) -> ConnectorRoute {
        if self.hints.is_empty() {
            let path = manhattan::route(self.head, self.tail, config);
            let shape = ResolvedPath::polyline(&path);
            let label_anchor = middle_segment_midpoint(&path);
            ConnectorRoute {
                strategy: RoutingStrategy::PlainManhattan,
                path,
                shape,
                label_anchor,
            }
        } else {
            let path = control_points(self.head, self.tail, &self.hints);
            let shape = fillet_path(&path, config.fillet_radius);
            let label_anchor = middle_segment_midpoint(&path);
            ConnectorRoute {
                strategy: RoutingStrategy::HintedBend,
                path,
                shape,
                label_anchor,
            }
        }
    }
}

/// Midpoint of the middle segment of a polyline; a single vertex anchors at
/// itself and an empty polyline falls back to the origin.
pub fn middle_segment_midpoint(path: &[Point]) -> Point {
    match path.len() {
        0 => Point::new(0.0, 0.0),
        1 => path[0],
        len => {
            let mid = len / 2;
            path[mid - 1].midpoint(path[mid])
        }
    }
}
