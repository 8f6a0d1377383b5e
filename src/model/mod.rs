//! Diagram document model

pub mod diagram;
pub mod hints;

pub use diagram::{Diagram, Endpoint, Link, Node, Port, Relation, Vertex};
pub use hints::{
    link_fingerprint, parse_bend_points, revalidate_hints, serialize_bend_points, EndpointMark,
    Revalidation,
};
