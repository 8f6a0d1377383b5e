//! End-to-end tests: TOML diagram documents through routing to SVG output.

use portwire::renderer::ResolvedPath;
use portwire::route::hinted::fillet_path;
use portwire::route::{route_links, Point, RouteConfig, RoutingStrategy};
use portwire::{render, Diagram, RenderError};

const SIMPLE: &str = r#"
[[node]]
id = "source"
x = 0
y = 0
width = 40
height = 40
label = "Source"

[[node]]
id = "sink"
x = 120
y = 0
width = 40
height = 40
label = "Sink"

[[port]]
id = "out"
node = "source"
output = true

[[port]]
id = "in"
node = "sink"
input = true

[[relation]]
id = "r1"

[[link]]
relation = "r1"
head = "source.out"
tail = "sink.in"
label = "stream"
"#;

#[test]
fn simple_diagram_renders_to_svg() {
    let svg = render(SIMPLE).expect("document should render");
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(r#"id="source""#));
    assert!(svg.contains(r#"id="sink""#));
    assert!(svg.contains("pw-node"));
    assert!(svg.contains("pw-port"));
    assert!(svg.contains("pw-wire"));
    assert!(svg.contains(">stream</text>"));
}

#[test]
fn aligned_ports_produce_a_straight_wire() {
    let diagram = Diagram::from_str(SIMPLE).expect("document should load");
    let outcome = route_links(&diagram, &RouteConfig::default());
    assert_eq!(outcome.wires.len(), 1);
    let wire = &outcome.wires[0];
    assert_eq!(wire.strategy, RoutingStrategy::PlainManhattan);
    // Ports at the same height: one horizontal segment from edge to edge
    assert_eq!(
        wire.path,
        vec![Point::new(40.0, 20.0), Point::new(120.0, 20.0)]
    );
}

#[test]
fn hinted_route_renders_with_arcs() {
    let doc = r#"
[[relation]]
id = "r1"
bend_points = "10,0;10,30"
marker = "head={w1,0,0,1}, tail={w2,30,30,1}"

[[relation.vertex]]
id = "w1"
x = 0
y = 0

[[relation.vertex]]
id = "w2"
x = 30
y = 30

[[link]]
relation = "r1"
head = "w1"
tail = "w2"
"#;
    let diagram = Diagram::from_str(doc).expect("document should load");
    let outcome = route_links(&diagram, &RouteConfig::default());
    assert_eq!(outcome.wires[0].strategy, RoutingStrategy::HintedBend);
    assert!(outcome.stale_relations.is_empty());
    // Rounded corners show up as SVG arc commands
    let d = outcome.wires[0].shape.to_svg_d();
    assert!(d.contains(" A"), "expected arcs in {}", d);

    let svg = render(doc).expect("document should render");
    assert!(svg.contains(" A"));
}

#[test]
fn stale_marker_falls_back_to_plain_routing() {
    let doc = r#"
[[relation]]
id = "r1"
bend_points = "10,0;10,30"
marker = "head={w1,99,99,1}, tail={w2,30,30,1}"

[[relation.vertex]]
id = "w1"
x = 0
y = 0

[[relation.vertex]]
id = "w2"
x = 30
y = 30

[[link]]
relation = "r1"
head = "w1"
tail = "w2"
"#;
    let diagram = Diagram::from_str(doc).expect("document should load");
    let outcome = route_links(&diagram, &RouteConfig::default());
    assert_eq!(outcome.wires[0].strategy, RoutingStrategy::PlainManhattan);
    assert_eq!(outcome.stale_relations, vec!["r1".to_string()]);
    let d = outcome.wires[0].shape.to_svg_d();
    assert!(!d.contains(" A"), "stale hints must not produce arcs: {}", d);
}

#[test]
fn multiport_fan_out_end_to_end() {
    let doc = r#"
[[node]]
id = "merge"
x = 0
y = 0
width = 20
height = 40

[[node]]
id = "a"
x = 100
y = 0
width = 20
height = 20

[[node]]
id = "b"
x = 100
y = 60
width = 20
height = 20

[[port]]
id = "in"
node = "merge"
input = true
multiport = true

[[port]]
id = "out"
node = "a"
output = true

[[port]]
id = "out"
node = "b"
output = true

[[relation]]
id = "r1"

[[relation]]
id = "r2"

[[link]]
relation = "r1"
head = "a.out"
tail = "merge.in"

[[link]]
relation = "r2"
head = "b.out"
tail = "merge.in"
"#;
    let diagram = Diagram::from_str(doc).expect("document should load");
    let outcome = route_links(&diagram, &RouteConfig::default());
    assert_eq!(outcome.wires.len(), 2);
    let first = outcome.wires[0].path.last().expect("path is never empty");
    let second = outcome.wires[1].path.last().expect("path is never empty");
    assert_ne!(first, second);
    // Link-creation order fans outward from below the edge midpoint
    assert_eq!(*first, Point::new(0.0, 25.0));
    assert_eq!(*second, Point::new(0.0, 20.0));
}

#[test]
fn invalid_reference_is_a_model_error() {
    let doc = r#"
[[relation]]
id = "r1"

[[link]]
relation = "r1"
head = "ghost.out"
tail = "ghost.in"
"#;
    let result = render(doc);
    assert!(matches!(result, Err(RenderError::Model(_))));
}

#[test]
fn fillet_path_svg_shape() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(50.0, 50.0),
    ];
    let path: ResolvedPath = fillet_path(&points, 10.0);
    insta::assert_snapshot!(
        path.to_svg_d(),
        @"M0.00 0.00 L40.00 0.00 A10.00 10.00 0 0 1 50.00 10.00 L50.00 50.00"
    );
}
