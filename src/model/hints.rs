//! Persisted bend-point hints
//!
//! Relations may carry bend points produced by an external layout pass,
//! persisted as an attribute string, plus a modification marker that records
//! the endpoint state the bend points were computed for. A marker that no
//! longer matches the current endpoints means the hints are stale.

use crate::route::types::Point;

/// Parse a persisted bend-point string (`"x1,y1;x2,y2;…"`).
///
/// Coordinates are truncated to integer pixels. Malformed pairs are skipped
/// individually rather than failing the whole list; an empty string yields
/// no hints.
pub fn parse_bend_points(raw: &str) -> Vec<Point> {
    raw.split(';')
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            let x: f64 = x.trim().parse().ok()?;
            let y: f64 = y.trim().parse().ok()?;
            Some(Point::new(x.trunc(), y.trunc()))
        })
        .collect()
}

/// Serialize bend points back into the persisted attribute format
pub fn serialize_bend_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x.trunc() as i64, p.y.trunc() as i64))
        .collect::<Vec<_>>()
        .join(";")
}

/// The endpoint state a hint marker records: the endpoint's name, its
/// integer location, and how many links were attached when the hints were
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMark {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub links: usize,
}

impl EndpointMark {
    pub fn new(name: impl Into<String>, x: i64, y: i64, links: usize) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            links,
        }
    }
}

/// Compute the modification marker for a link's current endpoints.
///
/// Markers are compared by exact string equality, so the format is part of
/// the persisted contract.
pub fn link_fingerprint(head: &EndpointMark, tail: &EndpointMark) -> String {
    format!(
        "head={{{},{},{},{}}}, tail={{{},{},{},{}}}",
        head.name, head.x, head.y, head.links, tail.name, tail.x, tail.y, tail.links
    )
}

/// Parse a stored marker back into its endpoint records.
///
/// Returns `None` for markers written by other tools or damaged in transit;
/// those are simply stale.
pub fn parse_fingerprint(marker: &str) -> Option<(EndpointMark, EndpointMark)> {
    let rest = marker.strip_prefix("head={")?;
    let (head_body, rest) = rest.split_once('}')?;
    let rest = rest.strip_prefix(", tail={")?;
    let tail_body = rest.strip_suffix('}')?;
    Some((parse_mark(head_body)?, parse_mark(tail_body)?))
}

fn parse_mark(body: &str) -> Option<EndpointMark> {
    // The name itself may contain commas, so split the three trailing
    // numeric fields off the right
    let (rest, links) = body.rsplit_once(',')?;
    let (rest, y) = rest.rsplit_once(',')?;
    let (name, x) = rest.rsplit_once(',')?;
    Some(EndpointMark {
        name: name.to_string(),
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
        links: links.trim().parse().ok()?,
    })
}

/// Outcome of a hint revalidation pass
#[derive(Debug, Clone, PartialEq)]
pub enum Revalidation {
    /// The marker already matches the current endpoints
    Current,
    /// Both endpoints moved by the same integer delta: the bend points have
    /// been translated and a fresh marker issued
    Translated { marker: String },
    /// The hints cannot be salvaged and should be regenerated
    Stale,
}

/// Accept a stale marker when head and tail moved by the same integer delta,
/// translating the stored bend points to follow.
///
/// This is a maintenance operation run outside routing; the route pass
/// itself only ever compares markers by equality.
pub fn revalidate_hints(
    marker: &str,
    head: &EndpointMark,
    tail: &EndpointMark,
    bend_points: &mut Vec<Point>,
) -> Revalidation {
    if marker == link_fingerprint(head, tail) {
        return Revalidation::Current;
    }
    let Some((stored_head, stored_tail)) = parse_fingerprint(marker) else {
        return Revalidation::Stale;
    };
    if stored_head.name != head.name
        || stored_tail.name != tail.name
        || stored_head.links != head.links
        || stored_tail.links != tail.links
    {
        return Revalidation::Stale;
    }
    let dx = head.x - stored_head.x;
    let dy = head.y - stored_head.y;
    if dx != tail.x - stored_tail.x || dy != tail.y - stored_tail.y {
        return Revalidation::Stale;
    }
    for point in bend_points.iter_mut() {
        point.x += dx as f64;
        point.y += dy as f64;
    }
    Revalidation::Translated {
        marker: link_fingerprint(head, tail),
    }
}
