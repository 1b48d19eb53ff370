use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use campus_route_core::{DotOptions, Graph, NodeId};
use serde::{Deserialize, Serialize};

/// Settings read from the optional JSON config file. Every field has a
/// default, so an empty object (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Node id (0-based) used by `all` and menu option 1.
    pub default_source: NodeId,
    /// Where DOT exports are written.
    pub dot_output: PathBuf,
    /// Graph identifier in the DOT header.
    pub graph_name: String,
    /// Emit `digraph` / `->` instead of `graph` / `--`.
    pub directed_export: bool,
    /// Write the DOT file after every full report.
    pub export_after_report: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_source: 0,
            dot_output: PathBuf::from("university_graph.dot"),
            graph_name: "University".to_string(),
            directed_export: false,
            export_after_report: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Check settings that depend on the loaded graph.
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        if self.graph_name.trim().is_empty() {
            bail!("graph_name must not be empty");
        }
        if self.graph_name.chars().any(|c| !(c.is_alphanumeric() || c == '_')) {
            bail!(
                "graph_name '{}' must contain only letters, digits and underscores",
                self.graph_name
            );
        }
        if !graph.contains(self.default_source) {
            bail!(
                "default_source {} out of range: campus has {} nodes",
                self.default_source,
                graph.node_count()
            );
        }
        Ok(())
    }

    pub fn dot_options(&self) -> DotOptions {
        DotOptions {
            name: self.graph_name.clone(),
            directed: self.directed_export,
        }
    }
}
