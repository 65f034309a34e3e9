//! Formatting helpers for CLI output.

use ansi_term::{Colour, Style};
use std::io::IsTerminal;

fn colors_enabled() -> bool {
    std::io::stdout().is_terminal()
}

pub fn bold(s: &str) -> String {
    if colors_enabled() {
        Style::new().bold().paint(s).to_string()
    } else {
        s.to_string()
    }
}

pub fn dimmed(s: &str) -> String {
    if colors_enabled() {
        Colour::Fixed(8).paint(s).to_string()
    } else {
        s.to_string()
    }
}

/// Green when time is still owed, yellow once the target is exceeded.
pub fn surplus(s: &str, done: bool) -> String {
    if !colors_enabled() {
        return s.to_string();
    }
    if done {
        Colour::Yellow.paint(s).to_string()
    } else {
        Colour::Green.paint(s).to_string()
    }
}
