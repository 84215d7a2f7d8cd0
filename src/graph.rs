//! Nomination graph construction.
//!
//! Converts parsed records into a directed graph: one node per person,
//! classified by role, and one edge per nomination, directed from nominator
//! to candidate. Candidates are registered in a dedicated first pass so that a
//! person who is both a candidate in one record and a nominator in another
//! always keeps the `candidate` role, independent of row order.

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::record::Record;

/// Classification of a person node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Candidate,
    Proposer,
    Seconder,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Proposer => "proposer",
            Role::Seconder => "seconder",
        }
    }
}

/// Edge label distinguishing a proposer nomination from a seconder nomination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Proposer,
    Seconder,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Proposer => "proposer",
            Relation::Seconder => "seconder",
        }
    }

    /// Role assigned to a nominator first seen through this relation
    pub fn nominator_role(&self) -> Role {
        match self {
            Relation::Proposer => Role::Proposer,
            Relation::Seconder => Role::Seconder,
        }
    }
}

/// A person node: display name plus the role it was first registered with
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub role: Role,
}

/// Directed graph of nomination relationships.
///
/// Wraps a `DiGraph` with a display-name index so node registration is
/// idempotent. `DiGraph` permits parallel edges, so `add_nomination`
/// de-duplicates on the (source, target, relation) triple itself.
#[derive(Debug)]
pub struct NominationGraph {
    graph: DiGraph<Person, Relation>,
    index: IndexMap<String, NodeIndex>,
}

impl Default for NominationGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NominationGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: IndexMap::new(),
        }
    }

    /// Build the graph from records in two passes: all candidates first,
    /// then nominator nodes and edges.
    pub fn build(records: &[Record]) -> Self {
        let mut graph = Self::new();

        for record in records {
            graph.add_person(&record.candidate_display_name(), Role::Candidate);
        }

        for record in records {
            let candidate = graph.add_person(&record.candidate_display_name(), Role::Candidate);
            for (field, relation) in [
                (&record.proposer, Relation::Proposer),
                (&record.seconder, Relation::Seconder),
            ] {
                let nominator = field.trim();
                if nominator.is_empty() {
                    continue;
                }
                let nominator = graph.add_person(nominator, relation.nominator_role());
                graph.add_nomination(nominator, candidate, relation);
            }
        }

        graph
    }

    /// Register a person, keeping the existing role if the name is already
    /// present. Returns the node index either way.
    pub fn add_person(&mut self, name: &str, role: Role) -> NodeIndex {
        if let Some(&existing) = self.index.get(name) {
            return existing;
        }
        let idx = self.graph.add_node(Person {
            name: name.to_string(),
            role,
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add a nominator-to-candidate edge unless an identical
    /// (source, target, relation) edge already exists.
    pub fn add_nomination(&mut self, nominator: NodeIndex, candidate: NodeIndex, relation: Relation) {
        let duplicate = self
            .graph
            .edges_connecting(nominator, candidate)
            .any(|edge| *edge.weight() == relation);
        if !duplicate {
            self.graph.add_edge(nominator, candidate, relation);
        }
    }

    /// People in registration order
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.index.values().map(|&idx| &self.graph[idx])
    }

    /// Look up a person by display name
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.index.get(name).map(|&idx| &self.graph[idx])
    }

    /// All nominations as (nominator name, candidate name, relation)
    pub fn nominations(&self) -> impl Iterator<Item = (&str, &str, Relation)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].name.as_str(),
                self.graph[edge.target()].name.as_str(),
                *edge.weight(),
            )
        })
    }

    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn nomination_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(surname: &str, firstname: &str, proposer: &str, seconder: &str) -> Record {
        Record {
            candidate_surname: surname.to_string(),
            candidate_firstname: firstname.to_string(),
            proposer: proposer.to_string(),
            seconder: seconder.to_string(),
        }
    }

    #[test]
    fn test_candidate_role_wins_regardless_of_row_order() {
        // Alice Smith proposes Jane Doe in row A, then stands herself in row B.
        // She must come out as a candidate, never a proposer.
        let records = vec![
            record("Doe", "Jane", "Alice Smith", ""),
            record("Smith", "Alice", "Bob Lee", "Jane Doe"),
        ];

        let graph = NominationGraph::build(&records);

        assert_eq!(graph.person_count(), 3);
        assert_eq!(graph.person("Jane Doe").unwrap().role, Role::Candidate);
        assert_eq!(graph.person("Alice Smith").unwrap().role, Role::Candidate);
        assert_eq!(graph.person("Bob Lee").unwrap().role, Role::Proposer);

        let nominations: Vec<_> = graph.nominations().collect();
        assert_eq!(nominations.len(), 3);
        assert!(nominations.contains(&("Alice Smith", "Jane Doe", Relation::Proposer)));
        assert!(nominations.contains(&("Bob Lee", "Alice Smith", Relation::Proposer)));
        assert!(nominations.contains(&("Jane Doe", "Alice Smith", Relation::Seconder)));
    }

    #[test]
    fn test_empty_and_whitespace_nominators_skipped() {
        let records = vec![record("Doe", "Jane", "   ", "")];

        let graph = NominationGraph::build(&records);

        assert_eq!(graph.person_count(), 1);
        assert_eq!(graph.nomination_count(), 0);
    }

    #[test]
    fn test_nominator_names_are_trimmed() {
        let records = vec![
            record("Doe", "Jane", "  Alice Smith  ", ""),
            record("Roe", "Richard", "Alice Smith", ""),
        ];

        let graph = NominationGraph::build(&records);

        // Both rows resolve to the same proposer node
        assert_eq!(graph.person_count(), 3);
        assert_eq!(graph.person("Alice Smith").unwrap().role, Role::Proposer);
        assert_eq!(graph.nomination_count(), 2);
    }

    #[test]
    fn test_duplicate_nominations_are_idempotent() {
        let records = vec![
            record("Doe", "Jane", "Alice Smith", ""),
            record("Doe", "Jane", "Alice Smith", ""),
        ];

        let graph = NominationGraph::build(&records);

        assert_eq!(graph.nomination_count(), 1);
    }

    #[test]
    fn test_same_pair_different_relations_coexist() {
        let records = vec![
            record("Doe", "Jane", "Alice Smith", ""),
            record("Doe", "Jane", "", "Alice Smith"),
        ];

        let graph = NominationGraph::build(&records);

        assert_eq!(graph.nomination_count(), 2);
        let nominations: Vec<_> = graph.nominations().collect();
        assert!(nominations.contains(&("Alice Smith", "Jane Doe", Relation::Proposer)));
        assert!(nominations.contains(&("Alice Smith", "Jane Doe", Relation::Seconder)));
    }

    #[test]
    fn test_self_nomination_produces_self_loop() {
        let records = vec![record("Doe", "Jane", "Jane Doe", "")];

        let graph = NominationGraph::build(&records);

        assert_eq!(graph.person_count(), 1);
        assert_eq!(graph.nomination_count(), 1);
        let nominations: Vec<_> = graph.nominations().collect();
        assert_eq!(nominations[0], ("Jane Doe", "Jane Doe", Relation::Proposer));
    }

    #[test]
    fn test_seconder_role_assigned_on_first_sight() {
        let records = vec![record("Doe", "Jane", "", "Carol Park")];

        let graph = NominationGraph::build(&records);

        assert_eq!(graph.person("Carol Park").unwrap().role, Role::Seconder);
    }
}
