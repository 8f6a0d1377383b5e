//! Wire routing
//!
//! Turns a diagram's links into drawable wires. Each link resolves its two
//! endpoints to attachment points (multiport fan-out sites for ports,
//! waypoints for relation vertices) and is routed either through its
//! relation's bend-point hints or as a plain orthogonal polyline.

pub mod config;
pub mod connector;
pub mod hinted;
pub mod manhattan;
pub mod site;
pub mod terminal;
pub mod types;

pub use config::RouteConfig;
pub use connector::Connector;
pub use manhattan::SitePoint;
pub use site::{AttachmentSite, Edge};
pub use terminal::{Attachment, Terminal};
pub use types::{LabelLayout, Point, Rect, RoutedWire, RoutingStrategy, TextAnchor};

use crate::model::hints::{link_fingerprint, parse_bend_points, EndpointMark};
use crate::model::{Diagram, Endpoint};

/// The product of one routing pass over a diagram
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    /// One routed wire per resolvable link, in link document order
    pub wires: Vec<RoutedWire>,
    /// Relations whose bend-point hints no longer match their endpoints.
    /// The routing pass only collects these; regenerating the hints is the
    /// caller's business and is never awaited.
    pub stale_relations: Vec<String>,
}

/// Route every link of a diagram.
///
/// Anomalies degrade instead of failing: a link whose endpoint cannot be
/// resolved is skipped, and stale hints fall back to plain routing.
pub fn route_links(diagram: &Diagram, config: &RouteConfig) -> RouteOutcome {
    let mut wires = Vec::with_capacity(diagram.links.len());
    let mut stale_relations: Vec<String> = Vec::new();

    for (index, link) in diagram.links.iter().enumerate() {
        let head_side = Attachment::from_inside_flag(link.head_inside);
        let tail_side = Attachment::from_inside_flag(link.tail_inside);
        let head = resolve_site(diagram, &link.head, head_side, &link.relation, config);
        let tail = resolve_site(diagram, &link.tail, tail_side, &link.relation, config);
        let (Some(head), Some(tail)) = (head, tail) else {
            continue;
        };

        let mut connector = Connector::new(head.site, tail.site);
        if let Some(relation) = diagram.relation(&link.relation) {
            if let Some(raw) = relation.bend_points.as_deref() {
                let fingerprint = link_fingerprint(
                    &head.mark(&link.head),
                    &tail.mark(&link.tail),
                );
                if relation.marker.as_deref() == Some(fingerprint.as_str()) {
                    connector.set_hints(parse_bend_points(raw));
                } else if !stale_relations.contains(&relation.id) {
                    stale_relations.push(relation.id.clone());
                }
            }
        }

        let route = connector.route(config);
        let label = link.label.as_ref().map(|text| LabelLayout {
            text: text.clone(),
            position: route.label_anchor,
            anchor: TextAnchor::Middle,
        });
        wires.push(RoutedWire {
            link: index,
            strategy: route.strategy,
            path: route.path.clone(),
            shape: route.shape.clone(),
            label_anchor: route.label_anchor,
            label,
        });
    }

    RouteOutcome {
        wires,
        stale_relations,
    }
}

/// A resolved endpoint: its attachment point plus the link count that goes
/// into the hint fingerprint.
struct ResolvedSite {
    site: SitePoint,
    links: usize,
}

impl ResolvedSite {
    fn mark(&self, name: &str) -> EndpointMark {
        EndpointMark::new(
            name,
            self.site.point.x.trunc() as i64,
            self.site.point.y.trunc() as i64,
            self.links,
        )
    }
}

fn resolve_site(
    diagram: &Diagram,
    reference: &str,
    side: Attachment,
    relation: &str,
    config: &RouteConfig,
) -> Option<ResolvedSite> {
    match diagram.resolve_endpoint(reference)? {
        Endpoint::Port(index) => {
            let port = &diagram.ports[index];
            let node = diagram.node(&port.node)?;
            let terminal = Terminal::new(
                node.bounds(),
                port.normal(),
                port.multiport,
                diagram.attached_relations(index, side == Attachment::Inside),
            );
            let links = terminal.number_of_links();
            let site = terminal.site(relation);
            Some(ResolvedSite {
                site: SitePoint::new(site.point(config.site_spacing), Some(site.normal())),
                links,
            })
        }
        Endpoint::Vertex(ri, vi) => {
            let vertex = &diagram.relations[ri].vertices[vi];
            let links = diagram
                .links
                .iter()
                .filter(|l| l.head == reference || l.tail == reference)
                .count();
            Some(ResolvedSite {
                site: SitePoint::new(vertex.point(), None),
                links,
            })
        }
    }
}
