//! The diagram document
//!
//! A diagram is loaded from a TOML document: nodes with ports on their
//! boundary, relations that group links, and the links themselves. The
//! router reads this model; it never mutates it.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ModelError;
use crate::route::types::{Point, Rect};

/// A block in the diagram
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: Option<String>,
}

impl Node {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A port on a node boundary
#[derive(Debug, Clone, Deserialize)]
pub struct Port {
    pub id: String,
    pub node: String,
    #[serde(default)]
    pub input: bool,
    #[serde(default)]
    pub output: bool,
    #[serde(default)]
    pub multiport: bool,
    /// Explicit outward direction in degrees (y-down). Absent means the
    /// conventional default for the port kind.
    pub direction_deg: Option<f64>,
}

impl Port {
    /// The `node.port` reference used by link endpoints
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.node, self.id)
    }

    /// Outward normal angle in radians.
    ///
    /// Defaults: inputs face west, outputs face east, bidirectional ports
    /// face south. An explicit direction overrides all of these.
    pub fn normal(&self) -> f64 {
        use std::f64::consts::{FRAC_PI_2, PI};
        match self.direction_deg {
            Some(deg) => deg.to_radians(),
            None if self.input && self.output => FRAC_PI_2,
            None if self.input => PI,
            None => 0.0,
        }
    }
}

/// A waypoint a relation exposes for links to attach to
#[derive(Debug, Clone, Deserialize)]
pub struct Vertex {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A named group of links, optionally carrying persisted bend-point hints
#[derive(Debug, Clone, Deserialize)]
pub struct Relation {
    pub id: String,
    /// Persisted bend points (`"x1,y1;x2,y2;…"`)
    pub bend_points: Option<String>,
    /// Modification marker recording the endpoint state the bend points
    /// were computed for
    pub marker: Option<String>,
    #[serde(default, rename = "vertex")]
    pub vertices: Vec<Vertex>,
}

/// One wire: a relation plus its head and tail endpoints.
///
/// Endpoints are `node.port` references or relation vertex ids. The
/// `*_inside` flags mark attachment on the inner face of a composite
/// node's port.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub relation: String,
    pub head: String,
    pub tail: String,
    #[serde(default)]
    pub head_inside: bool,
    #[serde(default)]
    pub tail_inside: bool,
    pub label: Option<String>,
}

/// A resolved link endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Index into the diagram's port list
    Port(usize),
    /// Relation index and vertex index within it
    Vertex(usize, usize),
}

/// The full diagram document
#[derive(Debug, Clone, Deserialize)]
pub struct Diagram {
    #[serde(default, rename = "node")]
    pub nodes: Vec<Node>,
    #[serde(default, rename = "port")]
    pub ports: Vec<Port>,
    #[serde(default, rename = "relation")]
    pub relations: Vec<Relation>,
    #[serde(default, rename = "link")]
    pub links: Vec<Link>,
}

impl Diagram {
    /// Load a diagram from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a diagram from a TOML string and validate its references
    pub fn from_str(content: &str) -> Result<Self, ModelError> {
        let diagram: Diagram = toml::from_str(content)?;
        diagram.validate()?;
        Ok(diagram)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut node_ids = HashSet::new();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(ModelError::duplicate("node", &node.id));
            }
        }
        let mut port_refs = HashSet::new();
        for port in &self.ports {
            if !port_refs.insert(port.qualified()) {
                return Err(ModelError::duplicate("port", port.qualified()));
            }
            if !node_ids.contains(port.node.as_str()) {
                return Err(ModelError::unknown_node(
                    &port.id,
                    &port.node,
                    suggest(&port.node, self.nodes.iter().map(|n| n.id.clone())),
                ));
            }
        }
        let mut relation_ids = HashSet::new();
        for relation in &self.relations {
            if !relation_ids.insert(relation.id.as_str()) {
                return Err(ModelError::duplicate("relation", &relation.id));
            }
        }
        for link in &self.links {
            if !relation_ids.contains(link.relation.as_str()) {
                return Err(ModelError::unknown_relation(
                    &link.relation,
                    suggest(&link.relation, self.relations.iter().map(|r| r.id.clone())),
                ));
            }
            for endpoint in [&link.head, &link.tail] {
                if self.resolve_endpoint(endpoint).is_none() {
                    return Err(ModelError::unknown_endpoint(
                        endpoint,
                        suggest(endpoint, self.endpoint_names()),
                    ));
                }
            }
        }
        Ok(())
    }

    fn endpoint_names(&self) -> impl Iterator<Item = String> + '_ {
        self.ports.iter().map(|p| p.qualified()).chain(
            self.relations
                .iter()
                .flat_map(|r| r.vertices.iter().map(|v| v.id.clone())),
        )
    }

    /// Resolve an endpoint reference to a port or relation vertex
    pub fn resolve_endpoint(&self, reference: &str) -> Option<Endpoint> {
        if let Some(i) = self.ports.iter().position(|p| p.qualified() == reference) {
            return Some(Endpoint::Port(i));
        }
        for (ri, relation) in self.relations.iter().enumerate() {
            if let Some(vi) = relation.vertices.iter().position(|v| v.id == reference) {
                return Some(Endpoint::Vertex(ri, vi));
            }
        }
        None
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn relation(&self, id: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.id == id)
    }

    /// The relations attached to a port on one side, in link document order.
    ///
    /// Link-creation order is what determines multiport fan-out order, so
    /// this list's order is part of the routing contract.
    pub fn attached_relations(&self, port: usize, inside: bool) -> Vec<String> {
        let qualified = self.ports[port].qualified();
        let mut relations = Vec::new();
        for link in &self.links {
            let head_here = link.head == qualified && link.head_inside == inside;
            let tail_here = link.tail == qualified && link.tail_inside == inside;
            if head_here || tail_here {
                relations.push(link.relation.clone());
            }
        }
        relations
    }
}

/// Rank known names by edit distance to a misspelled reference
fn suggest(target: &str, candidates: impl Iterator<Item = String>) -> Vec<String> {
    let mut scored: Vec<(usize, String)> = candidates
        .map(|c| (edit_distance(target, &c), c))
        .filter(|(d, _)| *d <= 3)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    scored.into_iter().take(3).map(|(_, c)| c).collect()
}

fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
[[node]]
id = "source"
x = 0
y = 0
width = 20
height = 40

[[node]]
id = "sink"
x = 100
y = 0
width = 20
height = 40

[[port]]
id = "out"
node = "source"
output = true

[[port]]
id = "in"
node = "sink"
input = true
multiport = true

[[relation]]
id = "r1"

[[relation]]
id = "r2"
bend_points = "10,10;20,20"

[[link]]
relation = "r1"
head = "source.out"
tail = "sink.in"

[[link]]
relation = "r2"
head = "source.out"
tail = "sink.in"
"#;

    #[test]
    fn test_load_valid_document() {
        let diagram = Diagram::from_str(DOC).expect("document should load");
        assert_eq!(diagram.nodes.len(), 2);
        assert_eq!(diagram.ports.len(), 2);
        assert_eq!(diagram.links.len(), 2);
    }

    #[test]
    fn test_port_normal_defaults() {
        use std::f64::consts::{FRAC_PI_2, PI};
        let diagram = Diagram::from_str(DOC).expect("document should load");
        assert_eq!(diagram.ports[0].normal(), 0.0);
        assert_eq!(diagram.ports[1].normal(), PI);
        let both = Port {
            id: "io".to_string(),
            node: "n".to_string(),
            input: true,
            output: true,
            multiport: false,
            direction_deg: None,
        };
        assert_eq!(both.normal(), FRAC_PI_2);
    }

    #[test]
    fn test_explicit_direction_overrides_default() {
        let port = Port {
            id: "out".to_string(),
            node: "n".to_string(),
            input: false,
            output: true,
            multiport: false,
            direction_deg: Some(90.0),
        };
        assert!((port.normal() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_attached_relations_follow_link_order() {
        let diagram = Diagram::from_str(DOC).expect("document should load");
        let port = diagram
            .resolve_endpoint("sink.in")
            .expect("port should resolve");
        let Endpoint::Port(index) = port else {
            panic!("expected a port endpoint");
        };
        assert_eq!(
            diagram.attached_relations(index, false),
            vec!["r1".to_string(), "r2".to_string()]
        );
        assert!(diagram.attached_relations(index, true).is_empty());
    }

    #[test]
    fn test_vertex_endpoint_resolution() {
        let doc = r#"
[[relation]]
id = "r1"

[[relation.vertex]]
id = "w1"
x = 50
y = 50
"#;
        let diagram = Diagram::from_str(doc).expect("document should load");
        assert_eq!(
            diagram.resolve_endpoint("w1"),
            Some(Endpoint::Vertex(0, 0))
        );
    }

    #[test]
    fn test_duplicate_node_id_rejected() {
        let doc = r#"
[[node]]
id = "a"
x = 0
y = 0
width = 10
height = 10

[[node]]
id = "a"
x = 20
y = 0
width = 10
height = 10
"#;
        let err = Diagram::from_str(doc).expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate node id 'a'"));
    }

    #[test]
    fn test_unknown_endpoint_suggests_near_miss() {
        let doc = r#"
[[node]]
id = "source"
x = 0
y = 0
width = 20
height = 40

[[port]]
id = "out"
node = "source"
output = true

[[relation]]
id = "r1"

[[link]]
relation = "r1"
head = "source.ot"
tail = "source.out"
"#;
        let err = Diagram::from_str(doc).expect_err("bad endpoint should fail");
        assert_eq!(
            err.suggestions(),
            Some(&["source.out".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_port_node_rejected() {
        let doc = r#"
[[port]]
id = "out"
node = "missing"
output = true
"#;
        let err = Diagram::from_str(doc).expect_err("missing node should fail");
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("out", "out"), 0);
        assert_eq!(edit_distance("ot", "out"), 1);
        assert_eq!(edit_distance("abc", "xyz"), 3);
    }
}
