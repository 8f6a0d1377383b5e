//! Portwire - connector routing and rendering for port-based block diagrams
//!
//! This library loads a diagram document (nodes, ports, relations, links),
//! routes every link as a Manhattan-style wire with multiport fan-out and
//! optional bend-point hints, and renders the result to SVG.
//!
//! # Example
//!
//! ```rust
//! use portwire::render;
//!
//! let svg = render(r#"
//! [[node]]
//! id = "source"
//! x = 0
//! y = 0
//! width = 40
//! height = 40
//!
//! [[node]]
//! id = "sink"
//! x = 120
//! y = 0
//! width = 40
//! height = 40
//!
//! [[port]]
//! id = "out"
//! node = "source"
//! output = true
//!
//! [[port]]
//! id = "in"
//! node = "sink"
//! input = true
//!
//! [[relation]]
//! id = "r1"
//!
//! [[link]]
//! relation = "r1"
//! head = "source.out"
//! tail = "sink.in"
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod model;
pub mod renderer;
pub mod route;
pub mod stylesheet;

pub use error::ModelError;
pub use model::Diagram;
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use route::{route_links, RouteConfig, RouteOutcome};
pub use stylesheet::{Stylesheet, StylesheetError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading or validating the diagram document
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Routing configuration
    pub route: RouteConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Debug mode: trace routing decisions to stderr
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            route: RouteConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the routing configuration
    pub fn with_route(mut self, config: RouteConfig) -> Self {
        self.route = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a diagram document to SVG with default configuration.
///
/// This is the main entry point for the library. It loads the document,
/// routes every link, and generates SVG output.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a diagram document to SVG with custom configuration
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let diagram = Diagram::from_str(source)?;
    let outcome = route_links(&diagram, &config.route);

    if config.debug {
        eprintln!("=== Routing Debug ===");
        for wire in &outcome.wires {
            let points: Vec<String> = wire
                .path
                .iter()
                .map(|p| format!("({:.1},{:.1})", p.x, p.y))
                .collect();
            eprintln!(
                "link {} [{:?}] {}",
                wire.link,
                wire.strategy,
                points.join(" -> ")
            );
        }
        for relation in &outcome.stale_relations {
            eprintln!("stale hints: {}", relation);
        }
        eprintln!("=====================");
    }

    Ok(render_svg_with_stylesheet(
        &diagram,
        &outcome,
        &config.svg,
        &config.stylesheet,
    ))
}
