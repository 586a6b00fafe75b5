//! User-facing message boxes
//!
//! Generation reports its outcome through a [`Dialogs`] implementation so
//! the same flow drives the interactive form, the one-shot command and the
//! tests.

use std::io::Write;

/// Severity of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

impl DialogKind {
    fn tag(self) -> &'static str {
        match self {
            DialogKind::Info => "info",
            DialogKind::Warning => "warning",
            DialogKind::Error => "error",
        }
    }
}

/// Blocking message boxes
pub trait Dialogs {
    fn show(&mut self, kind: DialogKind, title: &str, message: &str);

    fn info(&mut self, title: &str, message: &str) {
        self.show(DialogKind::Info, title, message);
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.show(DialogKind::Warning, title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        self.show(DialogKind::Error, title, message);
    }
}

/// Prints messages to a terminal stream
pub struct TerminalDialogs<W: Write> {
    out: W,
}

impl<W: Write> TerminalDialogs<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Dialogs for TerminalDialogs<W> {
    fn show(&mut self, kind: DialogKind, title: &str, message: &str) {
        // Nowhere left to report a failing terminal
        let _ = writeln!(self.out, "[{}] {}: {}", kind.tag(), title, message);
        let _ = self.out.flush();
    }
}

/// Collects messages instead of showing them
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordedDialogs {
    pub shown: Vec<(DialogKind, String, String)>,
}

#[cfg(test)]
impl RecordedDialogs {
    pub fn kinds(&self) -> Vec<DialogKind> {
        self.shown.iter().map(|(kind, _, _)| *kind).collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.shown.last().map(|(_, _, message)| message.as_str())
    }
}

#[cfg(test)]
impl Dialogs for RecordedDialogs {
    fn show(&mut self, kind: DialogKind, title: &str, message: &str) {
        self.shown.push((kind, title.to_string(), message.to_string()));
    }
}
