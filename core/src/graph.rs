use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;

use crate::error::{GraphError, GraphResult};

/// Node identifier: index into the graph's person table, `0..node_count`.
pub type NodeId = usize;

/// Edge weight. Zero is reserved and means "no edge".
pub type Weight = u32;

/// What a person does on campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Student,
    Faculty,
    Staff,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person record attached to a node.
///
/// A default record has an empty name and no role; every node starts out
/// that way until `Graph::set_person` fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Person {
    pub name: String,
    pub role: Option<Role>,
    pub office: Option<String>,
    pub description: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role: Some(role),
            office: None,
            description: None,
        }
    }

    pub fn student(name: impl Into<String>) -> Self {
        Self::new(name, Role::Student)
    }

    pub fn staff(name: impl Into<String>) -> Self {
        Self::new(name, Role::Staff)
    }

    pub fn faculty(
        name: impl Into<String>,
        office: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, Role::Faculty).with_office(office, description)
    }

    /// Attach office and description. Only Faculty labels show them.
    pub fn with_office(mut self, office: impl Into<String>, description: impl Into<String>) -> Self {
        self.office = Some(office.into());
        self.description = Some(description.into());
        self
    }

    pub fn is_faculty(&self) -> bool {
        self.role == Some(Role::Faculty)
    }

    /// Display label: the name, plus office and description lines for faculty.
    pub fn label_lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone()];
        if self.is_faculty() {
            lines.push(format!("Office: {}", self.office.as_deref().unwrap_or_default()));
            lines.push(format!(
                "Description: {}",
                self.description.as_deref().unwrap_or_default()
            ));
        }
        lines
    }
}

/// A directed edge as seen from its source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

/// Fixed-size campus graph: one person per node plus a directed weighted
/// edge relation.
///
/// Each ordered pair `(from, to)` holds at most one edge. Outgoing edges are
/// kept per source in target order, so iteration is deterministic. Absent
/// edges have no entry at all; a stored weight is never zero.
#[derive(Debug, Clone)]
pub struct Graph {
    outgoing: Vec<BTreeMap<NodeId, NonZeroU32>>,
    people: Vec<Person>,
}

impl Graph {
    /// Allocate `node_count` nodes with no edges and default person records.
    pub fn new(node_count: usize) -> Self {
        Self {
            outgoing: vec![BTreeMap::new(); node_count],
            people: vec![Person::default(); node_count],
        }
    }

    /// Set the directed edge `from -> to`, replacing any previous weight.
    ///
    /// A weight of zero leaves the slot empty (and clears an existing edge
    /// on the same pair): zero means "no edge".
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> GraphResult<()> {
        let node_count = self.node_count();
        if from >= node_count || to >= node_count {
            return Err(GraphError::EdgeOutOfRange {
                from,
                to,
                node_count,
            });
        }

        match NonZeroU32::new(weight) {
            Some(w) => {
                self.outgoing[from].insert(to, w);
            }
            None => {
                tracing::warn!(from, to, "zero-weight edge treated as absent");
                self.outgoing[from].remove(&to);
            }
        }
        Ok(())
    }

    /// Overwrite the person record at `node`.
    pub fn set_person(&mut self, node: NodeId, person: Person) -> GraphResult<()> {
        let node_count = self.node_count();
        let slot = self
            .people
            .get_mut(node)
            .ok_or(GraphError::OutOfRange { node, node_count })?;
        *slot = person;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.people.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|m| m.len()).sum()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    pub fn person(&self, node: NodeId) -> Option<&Person> {
        self.people.get(node)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Weight of the edge `from -> to`, or None if absent.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.outgoing
            .get(from)
            .and_then(|m| m.get(&to))
            .map(|w| w.get())
    }

    /// Outgoing edges of `node` in ascending target order. Empty for
    /// out-of-range nodes.
    pub fn neighbors_out(&self, node: NodeId) -> impl Iterator<Item = Edge> + '_ {
        self.outgoing
            .get(node)
            .into_iter()
            .flat_map(|m| m.iter())
            .map(|(&target, w)| Edge {
                target,
                weight: w.get(),
            })
    }

    /// All edges as `(from, to, weight)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.outgoing.iter().enumerate().flat_map(|(from, m)| {
            m.iter().map(move |(&to, w)| (from, to, w.get()))
        })
    }

    /// Label for `node`: the person's name, with office and description
    /// lines for faculty. Lines are separated by `\n`.
    pub fn node_label(&self, node: NodeId) -> String {
        self.person(node)
            .map(|p| p.label_lines().join("\n"))
            .unwrap_or_default()
    }

    /// First node whose person has exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.people.iter().position(|p| p.name == name)
    }
}
