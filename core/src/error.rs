use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised by graph setup and shortest-path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Query source outside `[0, node_count)`. The query is not run.
    #[error("invalid node {node}: graph has {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },

    /// Edge endpoint outside `[0, node_count)` during setup.
    ///
    /// Setup range errors come in two shapes: this one names both edge
    /// endpoints, `OutOfRange` names the single node of a person record.
    #[error("edge {from} -> {to} out of range: graph has {node_count} nodes")]
    EdgeOutOfRange {
        from: NodeId,
        to: NodeId,
        node_count: usize,
    },

    /// Person record written to a node outside `[0, node_count)`.
    #[error("node {node} out of range: graph has {node_count} nodes")]
    OutOfRange { node: NodeId, node_count: usize },
}

/// Errors raised while writing a graph description to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write graph description to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
