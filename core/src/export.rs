//! Graphviz DOT export of a campus graph.
//!
//! The emitter only needs a node count, a label per node and an edge list,
//! so it works against the `GraphDescription` trait rather than `Graph`
//! itself.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::graph::{Graph, NodeId, Weight};

/// Read-only view of a graph sufficient to describe it.
pub trait GraphDescription {
    fn node_count(&self) -> usize;

    /// Multi-line label; lines separated by `\n`.
    fn node_label(&self, node: NodeId) -> String;

    /// Edges as `(from, to, weight)` in output order.
    fn edge_list(&self) -> Vec<(NodeId, NodeId, Weight)>;
}

impl GraphDescription for Graph {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn node_label(&self, node: NodeId) -> String {
        Graph::node_label(self, node)
    }

    fn edge_list(&self) -> Vec<(NodeId, NodeId, Weight)> {
        self.edges().collect()
    }
}

/// DOT output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Graph identifier written in the header.
    pub name: String,
    /// `digraph` with `->` edges instead of `graph` with `--`.
    pub directed: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            name: "University".to_string(),
            directed: false,
        }
    }
}

/// Escape a label for a double-quoted DOT string. Newlines become the DOT
/// line-break escape `\n`.
fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Write the DOT description of `desc` to `writer`.
pub fn write_dot<D, W>(desc: &D, options: &DotOptions, writer: &mut W) -> io::Result<()>
where
    D: GraphDescription + ?Sized,
    W: Write + ?Sized,
{
    let (keyword, connector) = if options.directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    writeln!(writer, "{} {} {{", keyword, options.name)?;
    for node in 0..desc.node_count() {
        writeln!(
            writer,
            "  {} [label=\"{}\"];",
            node,
            escape_label(&desc.node_label(node))
        )?;
    }
    for (from, to, weight) in desc.edge_list() {
        writeln!(writer, "  {} {} {} [label=\"{}\"];", from, connector, to, weight)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the DOT description of `desc` to the file at `path`, replacing it.
pub fn export_dot<D>(desc: &D, options: &DotOptions, path: &Path) -> Result<(), ExportError>
where
    D: GraphDescription + ?Sized,
{
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_dot(desc, options, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::debug!(
        path = %path.display(),
        nodes = desc.node_count(),
        "graph description written"
    );
    Ok(())
}
