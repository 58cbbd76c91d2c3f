use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for CLI output. Report lines themselves are never styled.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    /// Input file names in batch headers
    pub file: Style,
    pub ok: Style,
    pub failed: Style,
    pub warn: Style,
    pub dim: Style,
    pub muted: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            file: Style::new().blue().underline(),
            ok: Style::new().green().bold(),
            failed: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            file: Style::new(),
            ok: Style::new(),
            failed: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
            muted: Style::new(),
        }
    }

    /// `ok` or `failed`, styled to match
    pub fn status(&self, succeeded: bool) -> String {
        if succeeded {
            "ok".style(self.ok.clone()).to_string()
        } else {
            "failed".style(self.failed.clone()).to_string()
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_status_has_no_escapes() {
        let plain = Theme::plain();
        assert_eq!(plain.status(true), "ok");
        assert_eq!(plain.status(false), "failed");
    }

    #[test]
    fn test_colored_status_is_styled() {
        let colored = Theme::colored();
        let status = colored.status(false);
        assert!(status.contains("failed"));
        assert!(status.contains('\u{1b}'));
    }
}
