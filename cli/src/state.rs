use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use campus_route_core::{demo_campus, Graph, Roster};

use crate::config::Settings;

/// Loaded campus plus the settings it is queried with.
///
/// The graph is built once at startup and only read afterwards; every query
/// borrows it immutably.
pub struct Session {
    pub graph: Graph,
    pub settings: Settings,
    /// Roster file path, or `built-in` for the demo campus.
    pub origin: String,
    pub load_time_ms: f64,
}

impl Session {
    /// Build the session from an optional roster file and settings.
    pub fn load(roster: Option<&Path>, settings: Settings) -> Result<Self> {
        let start = Instant::now();

        let (graph, origin) = match roster {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading roster {}", path.display()))?;
                let roster: Roster = serde_json::from_str(&text)
                    .with_context(|| format!("parsing roster {}", path.display()))?;
                let graph = roster
                    .into_graph()
                    .with_context(|| format!("building campus from {}", path.display()))?;
                (graph, path.display().to_string())
            }
            None => (demo_campus(), "built-in".to_string()),
        };

        settings.validate(&graph)?;

        let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            origin = %origin,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            load_time_ms,
            "campus loaded"
        );

        Ok(Self {
            graph,
            settings,
            origin,
            load_time_ms,
        })
    }

    /// Session over an already-built graph with default settings.
    #[cfg(test)]
    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph,
            settings: Settings::default(),
            origin: "test".to_string(),
            load_time_ms: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_campus() {
        let s = Session::load(None, Settings::default()).unwrap();
        assert_eq!(s.graph.node_count(), 12);
        assert_eq!(s.origin, "built-in");
    }

    #[test]
    fn test_roster_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"people": [{{"name": "A", "role": "Student"}}, {{"name": "B", "role": "Staff"}}],
               "edges": [{{"from": 0, "to": 1, "weight": 2}}]}}"#
        )
        .unwrap();
        let s = Session::load(Some(file.path()), Settings::default()).unwrap();
        assert_eq!(s.graph.node_count(), 2);
        assert_eq!(s.graph.weight(0, 1), Some(2));
    }

    #[test]
    fn test_roster_with_bad_edge() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"people": [{{"name": "A"}}], "edges": [{{"from": 0, "to": 3, "weight": 2}}]}}"#
        )
        .unwrap();
        assert!(Session::load(Some(file.path()), Settings::default()).is_err());
    }

    #[test]
    fn test_settings_validated_against_campus() {
        let settings = Settings {
            default_source: 40,
            ..Settings::default()
        };
        assert!(Session::load(None, settings).is_err());
    }
}
