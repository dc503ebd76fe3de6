//! Terminal emphasis used by the reporters.
//!
//! Output code never touches color state directly: it asks a [`Style`]
//! to decorate each fragment, so tests can swap in [`PlainStyle`].

use colored::Colorize;

/// Decorates fragments of operator-facing output.
pub trait Style: Send + Sync {
    /// Repository paths.
    fn path(&self, text: &str) -> String;

    /// Branch names, commands, and clean states.
    fn highlight(&self, text: &str) -> String;

    /// Dirty states, status text, and warnings.
    fn alert(&self, text: &str) -> String;
}

/// ANSI colors via the `colored` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColoredStyle;

impl Style for ColoredStyle {
    fn path(&self, text: &str) -> String {
        text.cyan().to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn alert(&self, text: &str) -> String {
        text.red().to_string()
    }
}

/// No decoration at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn path(&self, text: &str) -> String {
        text.to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }

    fn alert(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a style for stdout: colors only when enabled and attached to a terminal.
pub fn style_for_stdout(color_enabled: bool) -> Box<dyn Style> {
    if color_enabled && atty::is(atty::Stream::Stdout) {
        colored::control::set_override(true);
        Box::new(ColoredStyle)
    } else {
        colored::control::set_override(false);
        Box::new(PlainStyle)
    }
}
