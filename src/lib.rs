//! # Depclosure - Dependency Closure Calculator
//!
//! Reads line-oriented library declarations (`A depends on B C`) and reports,
//! for every declared library, the full set of direct and transitive
//! dependencies.
//!
//! Depclosure provides:
//! - A strict line parser producing a dependency graph plus declaration order
//! - A cycle-safe closure resolver over that graph
//! - Text and JSON rendering of per-library closures
//! - Batch processing of a directory of declaration files

pub mod graph;
pub mod parser;
pub mod resolver;
pub mod report;
pub mod batch;
pub mod config;
pub mod ui;

use std::path::PathBuf;

// Re-exports for convenient access
pub use graph::{DeclarationOrder, DependencyGraph, GraphStats};
pub use parser::{parse_file, parse_str};
pub use resolver::resolve_closure;
pub use report::{OutputFormat, Report};

/// Result type alias for Depclosure operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Depclosure operations
///
/// Line-level variants carry the input identity, the 1-based line number
/// of the declaration that failed and the offending text (the
/// whitespace-normalized line for grammar errors, the bad name otherwise).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("error in {input}, line {line}: missing 'depends on' separator in '{text}'")]
    MissingSeparator {
        input: String,
        line: usize,
        text: String,
    },

    #[error("error in {input}, line {line}: line must have exactly one 'depends on' separator in '{text}'")]
    MultipleSeparators {
        input: String,
        line: usize,
        text: String,
    },

    #[error("error in {input}, line {line}: library name cannot be empty in '{text}'")]
    EmptyLibraryName {
        input: String,
        line: usize,
        text: String,
    },

    #[error("error in {input}, line {line}: library name '{name}' must be alphanumeric")]
    InvalidLibraryName {
        input: String,
        line: usize,
        name: String,
    },

    #[error("error in {input}, line {line}: dependency name '{name}' must be alphanumeric")]
    InvalidDependencyName {
        input: String,
        line: usize,
        name: String,
    },

    #[error("error in {input}, line {line}: '{library}' cannot depend on itself")]
    SelfDependency {
        input: String,
        line: usize,
        library: String,
    },

    #[error("no files matching '{pattern}' in {}", .dir.display())]
    NoInputs { dir: PathBuf, pattern: String },

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("directory scan failed: {0}")]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Line number of the failing declaration, for line-level errors
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingSeparator { line, .. }
            | Error::MultipleSeparators { line, .. }
            | Error::EmptyLibraryName { line, .. }
            | Error::InvalidLibraryName { line, .. }
            | Error::InvalidDependencyName { line, .. }
            | Error::SelfDependency { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Identity of the input the error refers to, when there is one
    pub fn input(&self) -> Option<String> {
        match self {
            Error::NotFound { path } | Error::Io { path, .. } => {
                Some(path.display().to_string())
            }
            Error::MissingSeparator { input, .. }
            | Error::MultipleSeparators { input, .. }
            | Error::EmptyLibraryName { input, .. }
            | Error::InvalidLibraryName { input, .. }
            | Error::InvalidDependencyName { input, .. }
            | Error::SelfDependency { input, .. } => Some(input.clone()),
            Error::NoInputs { dir, .. } => Some(dir.display().to_string()),
            Error::Pattern(_) | Error::Walk(_) => None,
        }
    }
}
