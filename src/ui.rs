//! Terminal output.
//!
//! A small UI abstraction so commands can be tested without capturing
//! stdout: [`ConsoleUi`] writes styled output to the terminal, [`MockUi`]
//! records it for assertions.

use console::style;

/// How much output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Result lines only.
    Quiet,
    /// Results plus context messages.
    Normal,
}

/// Trait for command output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// A result line: always printed, machine-consumable.
    fn result(&mut self, line: &str);

    /// A context message: suppressed in quiet mode.
    fn message(&mut self, msg: &str);

    /// An error message.
    fn error(&mut self, msg: &str);
}

/// Console-backed UI.
pub struct ConsoleUi {
    mode: OutputMode,
}

impl ConsoleUi {
    /// Create a console UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for ConsoleUi {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn result(&mut self, line: &str) {
        println!("{line}");
    }

    fn message(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", style(msg).dim());
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }
}

/// UI that records output for tests.
#[derive(Debug, Default)]
pub struct MockUi {
    results: Vec<String>,
    messages: Vec<String>,
    errors: Vec<String>,
}

impl MockUi {
    /// Create an empty mock UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Result lines produced so far.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Context messages produced so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Error messages produced so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUi {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn result(&mut self, line: &str) {
        self.results.push(line.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
