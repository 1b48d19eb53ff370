//! Serializable campus roster: the people and edges needed to build a graph.

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId, Person, Weight};

/// One directed edge of a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// People (node `i` is `people[i]`) plus the edges between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    pub people: Vec<Person>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Roster {
    /// Build a graph with one node per person. Fails on the first edge whose
    /// endpoint is not a person index.
    pub fn into_graph(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.people.len());
        for (node, person) in self.people.into_iter().enumerate() {
            graph.set_person(node, person)?;
        }
        for e in self.edges {
            graph.add_edge(e.from, e.to, e.weight)?;
        }
        Ok(graph)
    }

    /// Snapshot an existing graph.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            people: graph.people().to_vec(),
            edges: graph
                .edges()
                .map(|(from, to, weight)| EdgeSpec { from, to, weight })
                .collect(),
        }
    }
}
