//! Terminal output formatting.

use std::io::Write;
use std::sync::Mutex;

use claimforge_core::submission::{ANALYZING_MESSAGE, BACKEND_ERROR_MESSAGE, EMPTY_CLAIM_MESSAGE};
use claimforge_core::{OutputSurface, Section, Theme};
use colored::{ColoredString, Colorize};

type Sink = Mutex<Box<dyn Write + Send>>;

/// Writes handler output to the terminal.
///
/// Status and error messages go to stderr so stdout carries only the
/// analysis text.
pub struct TerminalSurface {
    theme: Theme,
    out: Sink,
    err: Sink,
}

impl TerminalSurface {
    pub fn new(theme: Theme) -> Self {
        Self::with_writers(theme, Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    pub fn with_writers(
        theme: Theme,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            theme,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    fn heading(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => text.cyan().bold(),
            Theme::Light => text.blue().bold(),
        }
    }

    fn score(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => text.yellow(),
            Theme::Light => text.magenta(),
        }
    }
}

fn write_line(sink: &Sink, line: impl std::fmt::Display) {
    if let Ok(mut writer) = sink.lock() {
        let _ = writeln!(writer, "{}", line);
    }
}

impl OutputSurface for TerminalSurface {
    fn show(&self, text: &str) {
        match text {
            ANALYZING_MESSAGE => write_line(&self.err, text.dimmed()),
            EMPTY_CLAIM_MESSAGE => write_line(&self.err, text.yellow()),
            BACKEND_ERROR_MESSAGE => write_line(&self.err, text.red().bold()),
            _ => write_line(&self.out, text.trim_end()),
        }
    }

    fn show_analysis(&self, sections: &[Section], text: &str) {
        if sections.is_empty() {
            write_line(&self.out, text);
            return;
        }

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                write_line(&self.out, "");
            }
            if section.inline {
                write_line(
                    &self.out,
                    format!("{} {}", self.heading(section.heading), self.score(&section.body)),
                );
            } else {
                write_line(&self.out, self.heading(section.heading));
                write_line(&self.out, &section.body);
            }
        }
    }
}
