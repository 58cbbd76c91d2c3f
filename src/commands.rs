use depclosure::batch::{discover_inputs, resolve_inputs, BatchEntry, BatchEntryView};
use depclosure::ui::{self, Icons};
use depclosure::{parse_file, OutputFormat, Report};
use std::path::Path;
use std::process::ExitCode;

pub fn run_resolve(input: &Path, format: OutputFormat) -> anyhow::Result<ExitCode> {
    // Nothing reaches stdout unless the whole input parsed
    let rendered = render_resolve(input, format)?;
    print!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

/// Full `resolve` output for one input, one line per library
fn render_resolve(input: &Path, format: OutputFormat) -> anyhow::Result<String> {
    let (graph, order) = parse_file(input)?;
    let report = Report::build(input.display().to_string(), &graph, &order);

    let leaves = graph.leaves();
    if !leaves.is_empty() {
        tracing::debug!("Undeclared leaves: {:?}", leaves);
    }

    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                out.push_str(&line);
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            out.push_str(&report.to_json()?);
            out.push('\n');
        }
    }
    Ok(out)
}

pub fn run_batch(dir: &Path, pattern: &str, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let inputs = discover_inputs(dir, pattern)?;
    let entries = resolve_inputs(&inputs);
    let failed = failed_count(&entries);

    if format.is_text() {
        for entry in &entries {
            println!();
            ui::file_header(Icons::FILE, &entry.name());
            ui::divider();
            match &entry.outcome {
                Ok(report) => {
                    for line in report.lines() {
                        println!("{}", line);
                    }
                }
                Err(e) => ui::error(&e.to_string()),
            }
            ui::divider();
        }

        ui::section(&format!("{} Summary", Icons::STATS));
        println!("{}", ui::batch_table(&entries));
        ui::summary_row("Directory:", &ui::muted(&dir.display().to_string()));
        ui::summary_row("Pattern:", &ui::muted(pattern));
        ui::summary_row("Status:", &ui::theme().status(failed == 0));

        if failed == 0 {
            ui::success(&format!("Resolved {} files", entries.len()));
        } else {
            ui::warn(&format!("{} of {} files failed", failed, entries.len()));
        }
    } else {
        let views: Vec<BatchEntryView> = entries.iter().map(BatchEntryView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn failed_count(entries: &[BatchEntry]) -> usize {
    entries.iter().filter(|e| !e.is_ok()).count()
}
