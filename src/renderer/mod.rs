//! SVG renderer for routed diagrams
//!
//! Takes a diagram and the outcome of a routing pass and produces an SVG
//! string with CSS classes for styling.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{PathSegment, ResolvedPath};
pub use svg::{render_svg, render_svg_with_stylesheet};
