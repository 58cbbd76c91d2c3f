//! Closure Resolver - Transitive dependencies of a single library
//!
//! Traversal algorithm:
//! 1. Seed the frontier with the queried library
//! 2. Pop a node; undeclared nodes are leaves and are not expanded
//! 3. Add each direct dependency to the closure (never the queried library)
//! 4. Push dependencies not yet visited
//!
//! Each node's edges are expanded at most once, so cycles of any length
//! terminate. No recursion is used.

use crate::graph::DependencyGraph;
use std::collections::HashSet;

/// All libraries reachable from `library`, excluding `library` itself.
///
/// A library without a declaration has no known dependencies and yields an
/// empty set. The result is unordered; callers that display it sort it.
pub fn resolve_closure(library: &str, graph: &DependencyGraph) -> HashSet<String> {
    let mut closure = HashSet::new();
    if !graph.contains(library) {
        return closure;
    }

    let mut frontier = vec![library];
    let mut visited: HashSet<&str> = HashSet::from([library]);

    while let Some(current) = frontier.pop() {
        let Some(deps) = graph.dependencies(current) else {
            continue;
        };

        for dep in deps {
            if dep != library {
                closure.insert(dep.clone());
            }
            if visited.insert(dep.as_str()) {
                frontier.push(dep.as_str());
            }
        }
    }

    tracing::debug!("Resolved {}: {} dependencies", library, closure.len());
    closure
}
