use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

const DIVIDER_WIDTH: usize = 50;

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().ok.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().failed.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

/// `<icon> Processing: <file>` header for one batch input
pub fn file_header(icon: &str, file: &str) {
    println!(
        "{} {} {}",
        icon,
        "Processing:".style(theme().header.clone()),
        file.style(theme().file.clone())
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn divider() {
    println!("{}", "-".repeat(DIVIDER_WIDTH).style(theme().muted.clone()));
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
