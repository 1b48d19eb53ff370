//! Query reports: the full distance listing and single start/end routes.

use std::io::{self, Write};
use std::time::Instant;

use campus_route_core::{export_dot, run_shortest_path, GraphResult, NodeId, ShortestPaths};
use serde::Serialize;

use crate::state::Session;
use crate::util::{format_path, person_name};

/// One row of the full report.
#[derive(Debug, Serialize)]
pub struct NodeReport {
    pub node: NodeId,
    pub name: String,
    /// None when unreachable.
    pub distance: Option<u64>,
    pub path: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FullReport {
    pub source: NodeId,
    pub nodes: Vec<NodeReport>,
    pub elapsed_ms: f64,
}

/// Result of a start/end query.
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub distance: Option<u64>,
    pub path: Vec<String>,
    pub elapsed_ms: f64,
}

fn timed_query(session: &Session, source: NodeId) -> GraphResult<(ShortestPaths, f64)> {
    let start = Instant::now();
    let result = run_shortest_path(&session.graph, source)?;
    Ok((result, start.elapsed().as_secs_f64() * 1000.0))
}

fn path_names(session: &Session, path: &[NodeId]) -> Vec<String> {
    path.iter().map(|&n| person_name(&session.graph, n)).collect()
}

/// Distances and paths from `source` to every node.
pub fn full_report(session: &Session, source: NodeId) -> GraphResult<FullReport> {
    let (result, elapsed_ms) = timed_query(session, source)?;
    let nodes = (0..session.graph.node_count())
        .map(|node| NodeReport {
            node,
            name: person_name(&session.graph, node),
            distance: result.distance(node).finite(),
            path: if node == source {
                Vec::new()
            } else {
                path_names(session, &result.path_to(node))
            },
        })
        .collect();
    Ok(FullReport {
        source,
        nodes,
        elapsed_ms,
    })
}

/// Print the full report, then export the DOT file if configured to.
///
/// An invalid source prints `Invalid starting node.` and nothing else.
/// Export failures are printed but do not fail the report.
pub fn write_full_report<W: Write + ?Sized>(
    session: &Session,
    source: NodeId,
    out: &mut W,
) -> io::Result<()> {
    let (result, elapsed_ms) = match timed_query(session, source) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "full report rejected");
            writeln!(out, "Invalid starting node.")?;
            return Ok(());
        }
    };

    for node in 0..session.graph.node_count() {
        writeln!(
            out,
            "Distance from node {} to node {}: {}",
            source,
            node,
            result.distance(node)
        )?;
        // The source has no predecessor, so it gets no path line
        if result.predecessor(node).is_some() {
            writeln!(
                out,
                "Path: {}",
                format_path(&session.graph, &result.path_to(node))
            )?;
        }
    }
    writeln!(out, "Time taken: {:.3} milliseconds", elapsed_ms)?;

    if session.settings.export_after_report {
        write_export(session, out)?;
    }
    Ok(())
}

/// Export the campus to the configured DOT path, reporting the outcome.
pub fn write_export<W: Write + ?Sized>(session: &Session, out: &mut W) -> io::Result<()> {
    let path = &session.settings.dot_output;
    match export_dot(&session.graph, &session.settings.dot_options(), path) {
        Ok(()) => writeln!(out, "Graph description written to {}", path.display()),
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            writeln!(out, "Error opening file for writing DOT data: {}", e)
        }
    }
}

/// Route between two nodes. None when either endpoint is out of range.
pub fn route(session: &Session, from: NodeId, to: NodeId) -> Option<RouteReport> {
    if !session.graph.contains(to) {
        return None;
    }
    let (result, elapsed_ms) = timed_query(session, from).ok()?;
    tracing::debug!(from, to, elapsed_ms, "route query");
    Some(RouteReport {
        from: person_name(&session.graph, from),
        to: person_name(&session.graph, to),
        distance: result.distance(to).finite(),
        path: path_names(session, &result.path_to(to)),
        elapsed_ms,
    })
}

/// Print a route in the console format.
pub fn write_route<W: Write + ?Sized>(report: &RouteReport, out: &mut W) -> io::Result<()> {
    match report.distance {
        Some(d) => writeln!(out, "Distance from {} to {}: {}", report.from, report.to, d)?,
        None => writeln!(out, "Distance from {} to {}: INFINITY", report.from, report.to)?,
    }
    if !report.path.is_empty() {
        writeln!(out, "Path: {}", report.path.join(" -> "))?;
    }
    writeln!(out, "Time taken: {:.3} milliseconds", report.elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use campus_route_core::{demo_campus, small_campus};

    fn session_without_export(graph: campus_route_core::Graph) -> Session {
        let mut s = Session::with_graph(graph);
        s.settings.export_after_report = false;
        s
    }

    fn render(session: &Session, source: NodeId) -> String {
        let mut buf = Vec::new();
        write_full_report(session, source, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_full_report_small_campus() {
        let s = session_without_export(small_campus());
        let out = render(&s, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Distance from node 0 to node 0: 0");
        assert_eq!(lines[1], "Distance from node 0 to node 1: 5");
        assert_eq!(lines[2], "Path: Ammar -> Dr ShahNawaz");
        assert!(out.contains("Distance from node 0 to node 3: 7\nPath: Ammar -> Dr ShahNawaz -> Arshad\n"));
        assert!(out.contains("Distance from node 0 to node 4: 4\nPath: Ammar -> ALI -> node 4\n"));
        assert!(lines.last().unwrap().starts_with("Time taken: "));
    }

    #[test]
    fn test_full_report_unreachable() {
        let s = session_without_export(demo_campus());
        let out = render(&s, 3);
        assert!(out.contains("Distance from node 3 to node 0: INFINITY\nDistance from node 3 to node 1"));
        assert!(out.contains("Distance from node 3 to node 9: 5\nPath: Amir Rehman -> Farhan -> Zubair\n"));
    }

    #[test]
    fn test_full_report_invalid_source() {
        let s = session_without_export(demo_campus());
        assert_eq!(render(&s, 99), "Invalid starting node.\n");
        assert!(full_report(&s, 99).is_err());
    }

    #[test]
    fn test_full_report_struct() {
        let s = session_without_export(demo_campus());
        let report = full_report(&s, 0).unwrap();
        assert_eq!(report.nodes.len(), 12);
        assert_eq!(report.nodes[0].distance, Some(0));
        assert!(report.nodes[0].path.is_empty());
        assert_eq!(report.nodes[11].distance, Some(13));
        assert_eq!(report.nodes[11].path.len(), 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["nodes"][3]["name"], "Amir Rehman");
    }

    #[test]
    fn test_report_exports_dot() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Session::with_graph(small_campus());
        s.settings = Settings {
            dot_output: dir.path().join("campus.dot"),
            ..Settings::default()
        };
        let out = render(&s, 0);
        assert!(out.contains("Graph description written to"));
        let dot = std::fs::read_to_string(dir.path().join("campus.dot")).unwrap();
        assert!(dot.starts_with("graph University {\n"));
        assert!(dot.contains("  2 -- 4 [label=\"1\"];"));
    }

    #[test]
    fn test_report_export_failure_is_not_fatal() {
        let mut s = Session::with_graph(small_campus());
        s.settings.dot_output = "/no/such/dir/campus.dot".into();
        let out = render(&s, 0);
        assert!(out.contains("Distance from node 0 to node 3: 7"));
        assert!(out.contains("Error opening file for writing DOT data"));
    }

    #[test]
    fn test_route() {
        let s = session_without_export(demo_campus());
        let r = route(&s, 0, 9).unwrap();
        assert_eq!(r.distance, Some(12));
        assert_eq!(r.path, vec!["Ahmad", "Dr Behjat Zuhaira", "Amir Rehman", "Farhan", "Zubair"]);

        let mut buf = Vec::new();
        write_route(&r, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Distance from Ahmad to Zubair: 12");
        assert_eq!(
            lines[1],
            "Path: Ahmad -> Dr Behjat Zuhaira -> Amir Rehman -> Farhan -> Zubair"
        );
        assert!(lines[2].starts_with("Time taken: "));
        assert!(lines[2].ends_with(" milliseconds"));
    }

    #[test]
    fn test_route_unreachable() {
        let s = session_without_export(demo_campus());
        let r = route(&s, 11, 0).unwrap();
        assert_eq!(r.distance, None);
        assert!(r.path.is_empty());
        let mut buf = Vec::new();
        write_route(&r, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Distance from Malaika to Ahmad: INFINITY\nTime taken: "));
    }

    #[test]
    fn test_route_out_of_range() {
        let s = session_without_export(demo_campus());
        assert!(route(&s, 12, 0).is_none());
        assert!(route(&s, 0, 12).is_none());
    }

    #[test]
    fn test_route_to_self() {
        let s = session_without_export(demo_campus());
        let r = route(&s, 4, 4).unwrap();
        assert_eq!(r.distance, Some(0));
        assert_eq!(r.path, vec!["Aiman"]);
    }
}
