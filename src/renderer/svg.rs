//! SVG generation from routed diagrams

use crate::model::{Diagram, Port};
use crate::route::{AttachmentSite, Point, Rect, RouteOutcome, TextAnchor};
use crate::stylesheet::Stylesheet;

use super::path::ResolvedPath;
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    wires: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            wires: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties from a stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut css = String::from(":root {\n");
        for (token, value) in &stylesheet.colors {
            css.push_str(&format!("    --{}: {};\n", token, value));
        }
        css.push_str("  }\n");
        if stylesheet.colors.contains_key("font-family") {
            let prefix = self.prefix();
            css.push_str(&format!(
                "  .{}label {{ font-family: var(--font-family); }}",
                prefix
            ));
        }
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a node rectangle
    pub fn add_node(&mut self, id: &str, bounds: Rect, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect id="{}" class="{}node" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            id,
            prefix,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            styles
        ));
    }

    /// Add a port glyph: a small triangle at the port's canonical attachment
    /// point, pointing along the outward normal.
    pub fn add_port_glyph(&mut self, id: &str, at: Point, normal: f64, styles: &str) {
        let prefix = self.prefix();
        let s = self.config.port_glyph_size / 2.0;
        let (cos, sin) = (normal.cos(), normal.sin());
        // Tip along the normal, base perpendicular to it
        let tip = Point::new(at.x + cos * s, at.y + sin * s);
        let base_a = Point::new(at.x - cos * s - sin * s, at.y - sin * s + cos * s);
        let base_b = Point::new(at.x - cos * s + sin * s, at.y - sin * s - cos * s);
        self.elements.push(format!(
            r#"{}<polygon id="{}" class="{}port" points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}"{}/>"#,
            self.indent_str(),
            id,
            prefix,
            tip.x,
            tip.y,
            base_a.x,
            base_a.y,
            base_b.x,
            base_b.y,
            styles
        ));
    }

    /// Add a routed wire path
    pub fn add_wire(&mut self, shape: &ResolvedPath, styles: &str) {
        let prefix = self.prefix();
        self.wires.push(format!(
            r#"{}<path class="{}wire" d="{}" fill="none"{}/>"#,
            self.indent_str(),
            prefix,
            shape.to_svg_d(),
            styles
        ));
    }

    /// Add a text element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, anchor: TextAnchor, styles: &str) {
        let prefix = self.prefix();
        let anchor_str = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="{}"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            anchor_str,
            styles,
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: Rect) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Wires render on top of nodes and ports
        for wire in &self.wires {
            svg.push_str(wire);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a routed diagram to an SVG string (with default stylesheet)
pub fn render_svg(diagram: &Diagram, outcome: &RouteOutcome, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(diagram, outcome, config, &Stylesheet::default())
}

/// Render a routed diagram to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    diagram: &Diagram,
    outcome: &RouteOutcome,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    let node_styles = format!(
        r#" fill="{}" stroke="{}""#,
        stylesheet.resolve_or_default("background-2"),
        stylesheet.resolve_or_default("foreground-1")
    );
    let port_styles = format!(r#" fill="{}""#, stylesheet.resolve_or_default("foreground-dark"));
    let wire_styles = format!(
        r#" stroke="{}" stroke-width="2""#,
        stylesheet.resolve_or_default("foreground-1")
    );
    let text_styles = format!(r#" fill="{}""#, stylesheet.resolve_or_default("text-1"));

    for node in &diagram.nodes {
        builder.add_node(&node.id, node.bounds(), &node_styles);
        if let Some(label) = &node.label {
            let center = node.bounds().center();
            builder.add_text(label, center.x, center.y, TextAnchor::Middle, &text_styles);
        }
    }

    for port in &diagram.ports {
        if let Some(at) = port_glyph_point(diagram, port) {
            builder.add_port_glyph(&format!("{}-{}", port.node, port.id), at, port.normal(), &port_styles);
        }
    }

    for wire in &outcome.wires {
        builder.add_wire(&wire.shape, &wire_styles);
        if let Some(label) = &wire.label {
            builder.add_text(
                &label.text,
                label.position.x,
                label.position.y - 4.0,
                label.anchor,
                &text_styles,
            );
        }
    }

    builder.build(diagram_bounds(diagram, outcome))
}

/// The canonical glyph location for a port: the midpoint site on its edge
fn port_glyph_point(diagram: &Diagram, port: &Port) -> Option<Point> {
    let node = diagram.node(&port.node)?;
    Some(AttachmentSite::new(node.bounds(), 0, 1, port.normal()).point(0.0))
}

/// Smallest rectangle containing every node and every routed wire vertex
fn diagram_bounds(diagram: &Diagram, outcome: &RouteOutcome) -> Rect {
    let mut bounds: Option<Rect> = None;
    for node in &diagram.nodes {
        bounds = Some(match bounds {
            Some(b) => b.union(&node.bounds()),
            None => node.bounds(),
        });
    }
    for wire in &outcome.wires {
        for point in &wire.path {
            bounds = Some(match bounds {
                Some(b) => b.expand_to_include(*point),
                None => Rect::new(point.x, point.y, 0.0, 0.0),
            });
        }
    }
    bounds.unwrap_or_default()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
