use campus_route_core::{Graph, NodeId};
use thiserror::Error;

/// Rejected point number typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    #[error("'{0}' is neither a point number nor a person's name")]
    Unknown(String),

    #[error("point {point} out of range 1-{max}")]
    OutOfRange { point: i64, max: usize },
}

/// Parse a 1-based point number as listed by `points` into a node id.
///
/// Negative and zero values are rejected like any other out-of-range input.
pub fn parse_point(input: &str, node_count: usize) -> Result<NodeId, PointError> {
    let point: i64 = input
        .trim()
        .parse()
        .map_err(|_| PointError::Unknown(input.trim().to_string()))?;
    if point < 1 || point as u64 > node_count as u64 {
        return Err(PointError::OutOfRange {
            point,
            max: node_count,
        });
    }
    Ok(point as NodeId - 1)
}

/// Resolve a person's exact name first, then fall back to a point number.
pub fn resolve_point(graph: &Graph, input: &str) -> Result<NodeId, PointError> {
    let name = input.trim();
    match graph.find_by_name(name).filter(|_| !name.is_empty()) {
        Some(node) => Ok(node),
        None => parse_point(input, graph.node_count()),
    }
}

/// Names along a path, joined with ` -> `.
pub fn format_path(graph: &Graph, path: &[NodeId]) -> String {
    path.iter()
        .map(|&n| person_name(graph, n))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Person name at `node`, falling back to `node <id>` for unnamed records.
pub fn person_name(graph: &Graph, node: NodeId) -> String {
    match graph.person(node) {
        Some(p) if !p.name.is_empty() => p.name.clone(),
        _ => format!("node {}", node),
    }
}
