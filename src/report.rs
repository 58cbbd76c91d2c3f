//! Report rendering - per-library closures in declaration order

use crate::graph::{DeclarationOrder, DependencyGraph, GraphStats};
use crate::parser::SEPARATOR;
use crate::resolver::resolve_closure;
use serde::{Deserialize, Serialize};

/// Text shown in place of an empty closure
pub const NO_DEPENDENCIES: &str = "no dependencies";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Closure of one library, sorted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryClosure {
    pub library: String,
    pub dependencies: Vec<String>,
}

impl LibraryClosure {
    /// `<library> depends on <deps...>` or `<library> depends on no dependencies`
    pub fn to_line(&self) -> String {
        let deps = if self.dependencies.is_empty() {
            NO_DEPENDENCIES.to_string()
        } else {
            self.dependencies.join(" ")
        };
        format!("{} {} {}", self.library, SEPARATOR, deps)
    }
}

/// Closures for every declared library of one input
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: String,
    pub libraries: Vec<LibraryClosure>,
    pub stats: GraphStats,
}

impl Report {
    /// Resolve every library of `order` against `graph`
    pub fn build(input: impl Into<String>, graph: &DependencyGraph, order: &DeclarationOrder) -> Self {
        let libraries = order
            .iter()
            .map(|library| {
                let mut dependencies: Vec<String> =
                    resolve_closure(library, graph).into_iter().collect();
                dependencies.sort();
                LibraryClosure {
                    library: library.to_string(),
                    dependencies,
                }
            })
            .collect();

        Self {
            input: input.into(),
            libraries,
            stats: graph.stats(),
        }
    }

    /// One rendered line per library, in declaration order
    pub fn lines(&self) -> Vec<String> {
        self.libraries.iter().map(LibraryClosure::to_line).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
