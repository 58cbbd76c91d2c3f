//! Declaration Parser - Turns declaration text into a dependency graph
//!
//! Grammar, one declaration per line:
//!
//! ```text
//! <line>        ::= <blank> | <declaration>
//! <declaration> ::= <identifier> "depends on" <identifier>*
//! <identifier>  ::= one or more alphanumeric characters
//! ```
//!
//! Parsing is all-or-nothing: the first invalid line aborts the parse and
//! no graph is returned.

use crate::graph::{DeclarationOrder, DependencyGraph};
use crate::{Error, Result};
use std::path::Path;

/// Separator between a library and its dependencies
pub const SEPARATOR: &str = "depends on";

/// Parse the declaration file at `path`.
///
/// The path must name an existing regular file. Errors report the path
/// as the input identity.
pub fn parse_file(path: &Path) -> Result<(DependencyGraph, DeclarationOrder)> {
    if !path.is_file() {
        return Err(Error::NotFound { path: path.to_path_buf() });
    }

    let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound { path: path.to_path_buf() },
        _ => Error::Io { path: path.to_path_buf(), err },
    })?;

    parse_str(&path.display().to_string(), &content)
}

/// Parse declaration text. `input` names the source in errors.
pub fn parse_str(input: &str, text: &str) -> Result<(DependencyGraph, DeclarationOrder)> {
    let mut graph = DependencyGraph::new();
    let mut order = DeclarationOrder::new();

    for (idx, raw) in split_lines(text).enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let (library, deps) = parse_declaration(input, line, raw)?;
        tracing::trace!("{}:{}: {} -> {:?}", input, line, library, deps);

        // Only a first declaration enters the order
        match graph.declare(library.clone(), deps) {
            None => order.record(library),
            Some(_) => tracing::warn!(
                "{}:{}: '{}' redeclared, replacing its dependency list",
                input,
                line,
                library
            ),
        }
    }

    tracing::debug!("Parsed {}: {}", input, graph.stats());
    Ok((graph, order))
}

/// Parse a single non-blank declaration line into (library, dependencies)
fn parse_declaration(input: &str, line: usize, raw: &str) -> Result<(String, Vec<String>)> {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    match normalized.matches(SEPARATOR).count() {
        0 => {
            return Err(Error::MissingSeparator {
                input: input.to_string(),
                line,
                text: normalized,
            });
        }
        1 => {}
        _ => {
            return Err(Error::MultipleSeparators {
                input: input.to_string(),
                line,
                text: normalized,
            });
        }
    }

    let Some((head, tail)) = normalized.split_once(SEPARATOR) else {
        return Err(Error::MissingSeparator {
            input: input.to_string(),
            line,
            text: normalized.clone(),
        });
    };

    let library = head.trim();
    if library.is_empty() {
        return Err(Error::EmptyLibraryName {
            input: input.to_string(),
            line,
            text: normalized.clone(),
        });
    }
    if !is_identifier(library) {
        return Err(Error::InvalidLibraryName {
            input: input.to_string(),
            line,
            name: library.to_string(),
        });
    }

    let mut deps: Vec<String> = Vec::new();
    for dep in tail.split_whitespace() {
        if !is_identifier(dep) {
            return Err(Error::InvalidDependencyName {
                input: input.to_string(),
                line,
                name: dep.to_string(),
            });
        }
        if dep == library {
            return Err(Error::SelfDependency {
                input: input.to_string(),
                line,
                library: library.to_string(),
            });
        }
        if !deps.iter().any(|d| d == dep) {
            deps.push(dep.to_string());
        }
    }

    Ok((library.to_string(), deps))
}

/// Lines ending in `\n`, `\r\n` or a lone `\r`
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Non-empty and alphanumeric only
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}
