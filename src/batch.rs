//! Batch processing - resolve every declaration file in a directory

use crate::parser::parse_file;
use crate::report::Report;
use crate::{Error, Result};
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "tests/test_data";
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Files directly inside `dir` whose name matches `pattern`, sorted by name.
///
/// Subdirectories are not descended into. Hidden files and files listed in
/// `.gitignore`/`.ignore` are still inputs.
pub fn discover_inputs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotFound { path: dir.to_path_buf() });
    }

    let matcher = glob::Pattern::new(pattern)?;
    let mut inputs = Vec::new();

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .build();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches(name));
        if matches {
            inputs.push(entry.into_path());
        }
    }

    if inputs.is_empty() {
        return Err(Error::NoInputs {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!("Found {} inputs in {}", inputs.len(), dir.display());
    Ok(inputs)
}

/// Outcome of processing one file of a batch
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: Result<Report>,
}

impl BatchEntry {
    /// File name for display, falling back to the full path
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Serializable view of a batch entry
#[derive(Debug, Serialize)]
pub struct BatchEntryView<'a> {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a BatchEntry> for BatchEntryView<'a> {
    fn from(entry: &'a BatchEntry) -> Self {
        let (report, error) = match &entry.outcome {
            Ok(report) => (Some(report), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            file: entry.name(),
            report,
            error,
        }
    }
}

/// Parse and resolve every input. A failing file does not stop the batch.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Vec<BatchEntry> {
    inputs
        .iter()
        .map(|path| {
            let outcome = parse_file(path).map(|(graph, order)| {
                Report::build(path.display().to_string(), &graph, &order)
            });
            if let Err(e) = &outcome {
                tracing::debug!("Failed {}: {}", path.display(), e);
            }
            BatchEntry {
                path: path.clone(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_input.txt"), "A depends on B\nB depends on C\n").unwrap();
        fs::write(dir.path().join("a_input.txt"), "X depends on Y").unwrap();
        fs::write(dir.path().join("c_broken.txt"), "A depends on A").unwrap();
        fs::write(dir.path().join("notes.md"), "not an input").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "D depends on E").unwrap();
        dir
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = data_dir();
        let inputs = discover_inputs(dir.path(), DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a_input.txt", "b_input.txt", "c_broken.txt"]);
    }

    #[test]
    fn test_discover_keeps_hidden_and_ignored_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "A depends on B").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "H depends on I").unwrap();
        fs::write(dir.path().join("b.txt"), "B depends on C").unwrap();
        fs::write(dir.path().join(".gitignore"), "b.txt\n").unwrap();
        fs::write(dir.path().join(".ignore"), "a.txt\n").unwrap();

        let inputs = discover_inputs(dir.path(), DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![".hidden.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_custom_pattern() {
        let dir = data_dir();
        let inputs = discover_inputs(dir.path(), "*.md").unwrap();
        assert_eq!(inputs.len(), 1);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            discover_inputs(&missing, DEFAULT_PATTERN),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_discover_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        assert!(matches!(
            discover_inputs(dir.path(), DEFAULT_PATTERN),
            Err(Error::NoInputs { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = data_dir();
        assert!(matches!(
            discover_inputs(dir.path(), "[*.txt"),
            Err(Error::Pattern(_))
        ));
    }

    #[test]
    fn test_resolve_inputs_continues_past_failures() {
        let dir = data_dir();
        let inputs = discover_inputs(dir.path(), DEFAULT_PATTERN).unwrap();
        let entries = resolve_inputs(&inputs);

        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_ok());
        assert!(entries[1].is_ok());
        assert!(!entries[2].is_ok());

        let report = entries[1].outcome.as_ref().unwrap();
        assert_eq!(report.lines(), vec!["A depends on B C", "B depends on C"]);

        let view = BatchEntryView::from(&entries[2]);
        assert_eq!(view.file, "c_broken.txt");
        assert!(view.report.is_none());
        assert!(view.error.unwrap().contains("cannot depend on itself"));
    }

    #[test]
    fn test_bundled_test_data() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR);
        let entries = resolve_inputs(&discover_inputs(&dir, DEFAULT_PATTERN).unwrap());
        assert_eq!(entries.len(), 4);

        let first = entries[0].outcome.as_ref().unwrap();
        assert_eq!(
            first.lines(),
            vec![
                "A depends on B C E F G H",
                "B depends on C E F G H",
                "C depends on G",
                "D depends on A B C E F G H",
                "E depends on F H",
                "F depends on H",
            ]
        );

        let cycle = entries[1].outcome.as_ref().unwrap();
        assert_eq!(
            cycle.lines(),
            vec!["A depends on B C", "B depends on A C", "C depends on A B"]
        );

        let redeclared = entries[2].outcome.as_ref().unwrap();
        assert_eq!(
            redeclared.lines(),
            vec![
                "App depends on Cli Io Log Net",
                "Net depends on Io",
                "Log depends on no dependencies",
            ]
        );

        let err = entries[3].outcome.as_ref().unwrap_err();
        assert!(matches!(err, Error::SelfDependency { line: 2, .. }));
    }
}
