//! Per-port terminal bookkeeping
//!
//! A terminal owns the ordered list of relations attached to one port for a
//! single render pass and answers where each wire should attach. Terminals
//! are rebuilt every pass and discarded with the figures they decorate.

use super::site::AttachmentSite;
use super::types::Rect;

/// Which side of a port a terminal represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// Wires linked from outside the port's node
    Outside,
    /// Wires linked from inside (the port belongs to a composite node)
    Inside,
}

impl Attachment {
    /// Build from the model's per-endpoint inside flag
    pub fn from_inside_flag(inside: bool) -> Self {
        if inside {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

/// Attachment bookkeeping for one port
#[derive(Debug, Clone)]
pub struct Terminal {
    bounds: Rect,
    normal: f64,
    multiport: bool,
    relations: Vec<String>,
}

impl Terminal {
    /// Build a terminal from the port's relation list for the chosen side.
    ///
    /// The list order is owned by the model (wire-creation order); the
    /// terminal only reads it.
    pub fn new(bounds: Rect, normal: f64, multiport: bool, relations: Vec<String>) -> Self {
        Self {
            bounds,
            normal,
            multiport,
            relations,
        }
    }

    /// Number of wires currently attached on this side of the port
    pub fn number_of_links(&self) -> usize {
        self.relations.len()
    }

    /// Order position of a relation among the attached wires.
    ///
    /// `None` means the relation is not (yet) in the list; the caller must
    /// fall back to the default id-0 site. A wire in mid-construction is
    /// legitimately absent, so this is not an error.
    pub fn order_index_of(&self, relation: &str) -> Option<usize> {
        self.relations.iter().position(|r| r == relation)
    }

    /// The attachment site for a given relation's wire.
    ///
    /// A multiport with more than one attached wire hands out sites
    /// `order_index + 1`, leaving the shared id-0 midpoint site unused so
    /// simultaneous wires never collide. Everything else gets site 0.
    pub fn site(&self, relation: &str) -> AttachmentSite {
        let count = self.number_of_links();
        let id = if self.multiport && count > 1 {
            match self.order_index_of(relation) {
                Some(index) => index + 1,
                None => 0,
            }
        } else {
            0
        };
        AttachmentSite::new(self.bounds, id, count, self.normal)
    }
}
