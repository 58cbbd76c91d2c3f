use crate::batch::BatchEntry;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct BatchRow {
    #[tabled(rename = "File")]
    pub file: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Libraries")]
    pub libraries: String,
}

pub struct BatchTable {
    rows: Vec<BatchRow>,
}

impl BatchTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_entry(&mut self, entry: &BatchEntry) {
        let (status, libraries) = match &entry.outcome {
            Ok(report) => ("ok".to_string(), report.libraries.len().to_string()),
            Err(e) => match e.line() {
                Some(line) => (format!("failed (line {})", line), "-".to_string()),
                None => ("failed".to_string(), "-".to_string()),
            },
        };
        self.rows.push(BatchRow {
            file: entry.name(),
            status,
            libraries,
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for BatchTable {
    fn default() -> Self {
        Self::new()
    }
}

pub fn batch_table(entries: &[BatchEntry]) -> String {
    let mut table = BatchTable::new();
    for entry in entries {
        table.add_entry(entry);
    }
    table.build()
}
