//! Dependency Graph - In-memory representation of parsed declarations
//!
//! A plain adjacency map from library to its direct dependencies, paired
//! with the order in which libraries were first declared.

use std::collections::{BTreeSet, HashMap};
use serde::Serialize;

/// Adjacency mapping from a declared library to its direct dependencies.
///
/// Dependency lists keep insertion order and never contain duplicates or
/// the owning library. Identifiers that only ever appear as dependencies
/// have no entry and are treated as leaves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dependency list of `library`, returning the list it replaced.
    ///
    /// `None` means this is the first declaration of `library`.
    pub(crate) fn declare(&mut self, library: String, deps: Vec<String>) -> Option<Vec<String>> {
        self.edges.insert(library, deps)
    }

    /// Direct dependencies of a declared library
    pub fn dependencies(&self, library: &str) -> Option<&[String]> {
        self.edges.get(library).map(|v| v.as_slice())
    }

    /// Whether `library` has its own declaration
    pub fn contains(&self, library: &str) -> bool {
        self.edges.contains_key(library)
    }

    /// Number of declared libraries
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All declared libraries with their direct dependencies, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of direct dependency edges
    pub fn edge_count(&self) -> usize {
        self.iter().map(|(_, deps)| deps.len()).sum()
    }

    /// Identifiers referenced as dependencies but never declared, sorted
    pub fn leaves(&self) -> BTreeSet<&str> {
        self.iter()
            .flat_map(|(_, deps)| deps.iter().map(String::as_str))
            .filter(|dep| !self.contains(dep))
            .collect()
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            libraries: self.len(),
            leaves: self.leaves().len(),
            edges: self.edge_count(),
        }
    }
}

/// Libraries in the order of their first declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeclarationOrder {
    libraries: Vec<String>,
}

impl DeclarationOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, library: String) {
        self.libraries.push(library);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.libraries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.libraries
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

/// Statistics about a dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub libraries: usize,
    pub leaves: usize,
    pub edges: usize,
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} libraries, {} leaves, {} edges",
            self.libraries, self.leaves, self.edges
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_declare_and_lookup() {
        let mut graph = DependencyGraph::new();
        assert!(graph.declare("A".into(), deps(&["B", "C"])).is_none());

        assert!(graph.contains("A"));
        assert!(!graph.contains("B"));
        assert_eq!(graph.dependencies("A"), Some(&deps(&["B", "C"])[..]));
        assert_eq!(graph.dependencies("B"), None);
    }

    #[test]
    fn test_redeclare_returns_previous() {
        let mut graph = DependencyGraph::new();
        graph.declare("A".into(), deps(&["B"]));
        let previous = graph.declare("A".into(), deps(&["C"]));

        assert_eq!(previous, Some(deps(&["B"])));
        assert_eq!(graph.dependencies("A"), Some(&deps(&["C"])[..]));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_iter_declared_libraries() {
        let mut graph = DependencyGraph::new();
        graph.declare("A".into(), deps(&["B"]));
        graph.declare("B".into(), deps(&[]));

        let mut pairs: Vec<_> = graph.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("A", &deps(&["B"])[..]), ("B", &[][..])]);
        assert!(DependencyGraph::new().iter().next().is_none());
    }

    #[test]
    fn test_leaves_and_stats() {
        let mut graph = DependencyGraph::new();
        graph.declare("A".into(), deps(&["B", "C"]));
        graph.declare("B".into(), deps(&["D"]));

        let leaves: Vec<_> = graph.leaves().into_iter().collect();
        assert_eq!(leaves, vec!["C", "D"]);

        let stats = graph.stats();
        assert_eq!(stats, GraphStats { libraries: 2, leaves: 2, edges: 3 });
        assert_eq!(stats.to_string(), "2 libraries, 2 leaves, 3 edges");
    }
}
