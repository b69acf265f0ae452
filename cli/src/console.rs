//! Terminal dialogs.
//!
//! Alerts block until the user presses Enter; confirmations read a line and
//! accept only `y` or `yes`. End of input counts as dismissal (alerts) or
//! "no" (confirmations).

use std::io::{BufRead, Write};

use employee_core::Dialogs;
use tracing::warn;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, trimmed. `None` on end of input or a read error.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!(error = %err, "reading from terminal failed");
                None
            }
        }
    }

    pub fn print(&mut self, text: &str) {
        if let Err(err) = write!(self.output, "{text}").and_then(|_| self.output.flush()) {
            warn!(error = %err, "writing to terminal failed");
        }
    }
}

impl<R: BufRead, W: Write> Dialogs for Console<R, W> {
    fn alert(&mut self, message: &str) {
        self.print(&format!("\n[!] {message}\n    press Enter to continue "));
        let _ = self.read_line();
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.print(&format!("\n[?] {message} [y/N] "));
        matches!(
            self.read_line().map(|answer| answer.to_ascii_lowercase()).as_deref(),
            Some("y" | "yes")
        )
    }
}
