//! campus-route-core: campus people graph and shortest-path engine.
//!
//! A fixed-size directed graph whose nodes are people (students, faculty,
//! staff) and whose edges carry positive integer weights, plus a
//! single-source Dijkstra query and path reconstruction over it.
//! No I/O beyond the optional DOT export. The CLI and benchmark crates are
//! thin callers of this library.

mod campus;
mod dijkstra;
mod error;
mod export;
mod frontier;
mod graph;
#[cfg(feature = "serde")]
mod roster;

pub use campus::{demo_campus, small_campus};
pub use dijkstra::{reconstruct_path, run_shortest_path, Distance, ShortestPaths};
pub use error::{ExportError, GraphError, GraphResult};
pub use export::{export_dot, write_dot, DotOptions, GraphDescription};
pub use graph::{Edge, Graph, NodeId, Person, Role, Weight};
#[cfg(feature = "serde")]
pub use roster::{EdgeSpec, Roster};
