//! Built-in campus data sets.

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId, Person, Weight};

const DEMO_EDGES: [(NodeId, NodeId, Weight); 11] = [
    (0, 1, 5),
    (0, 2, 3),
    (1, 3, 2),
    (2, 4, 1),
    (1, 5, 4),
    (3, 6, 3),
    (4, 7, 2),
    (5, 8, 3),
    (6, 9, 2),
    (7, 10, 4),
    (8, 11, 1),
];

fn demo_people() -> Vec<Person> {
    vec![
        Person::student("Ahmad"),
        Person::faculty("Dr Behjat Zuhaira", "Office #205-A Block-C", "Head of Department"),
        Person::student("Umer"),
        Person::staff("Amir Rehman").with_office("Office #203-C Block-C", "Administrative Assistant"),
        Person::student("Aiman"),
        Person::faculty("Prof. Usama Imran", "Office A-307 Block-A", "Senior Professor"),
        Person::staff("Farhan").with_office("Office #101-a Block-B", "Manager Academics"),
        Person::student("Rabia"),
        Person::faculty("Dr Ifrah Qaiser", "Office #110-B Block-C", "Assistant Professor"),
        Person::staff("Zubair").with_office("Office #503-B Block-C", "Manager Academics Computing"),
        Person::faculty("Mrs Amna", "Office #102-B Block-C", "Associate Professor"),
        Person::staff("Malaika").with_office("Office #07-B Block-A", "One-stop Office"),
    ]
}

fn build(
    node_count: usize,
    people: Vec<Person>,
    edges: &[(NodeId, NodeId, Weight)],
) -> GraphResult<Graph> {
    let mut graph = Graph::new(node_count);
    for (node, person) in people.into_iter().enumerate() {
        graph.set_person(node, person)?;
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight)?;
    }
    Ok(graph)
}

/// Twelve-person campus: students, faculty with offices, and staff.
pub fn demo_campus() -> Graph {
    let people = demo_people();
    build(people.len(), people, &DEMO_EDGES).expect("demo campus tables out of range")
}

/// Five-node campus with four named people; node 4 keeps a default record.
pub fn small_campus() -> Graph {
    let people = vec![
        Person::student("Ammar"),
        Person::new("Dr ShahNawaz", crate::graph::Role::Faculty),
        Person::student("ALI"),
        Person::staff("Arshad"),
    ];
    build(5, people, &DEMO_EDGES[..4]).expect("small campus tables out of range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::{run_shortest_path, Distance};
    use crate::error::GraphError;

    #[test]
    fn test_demo_campus_shape() {
        let g = demo_campus();
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.edge_count(), 11);
        assert_eq!(g.person(10).unwrap().name, "Mrs Amna");
        assert!(g.person(1).unwrap().is_faculty());
    }

    #[test]
    fn test_demo_campus_distances_from_root() {
        let sp = run_shortest_path(&demo_campus(), 0).unwrap();
        let expected: Vec<Distance> = [0, 5, 3, 7, 4, 9, 10, 6, 12, 12, 10, 13]
            .iter()
            .map(|&d| Distance::Finite(d))
            .collect();
        assert_eq!(sp.distances(), expected.as_slice());
        assert_eq!(sp.path_to(11), vec![0, 1, 5, 8, 11]);
    }

    #[test]
    fn test_small_campus() {
        let g = small_campus();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.person(4).unwrap().name, "");
        assert_eq!(g.node_label(1), "Dr ShahNawaz\nOffice: \nDescription: ");
    }

    #[test]
    fn test_build_rejects_bad_tables() {
        assert_eq!(
            build(2, vec![Person::student("A")], &[(0, 2, 1)]).unwrap_err(),
            GraphError::EdgeOutOfRange {
                from: 0,
                to: 2,
                node_count: 2
            }
        );
        let people = vec![Person::student("A"), Person::student("B")];
        assert_eq!(
            build(1, people, &[]).unwrap_err(),
            GraphError::OutOfRange {
                node: 1,
                node_count: 1
            }
        );
    }
}
