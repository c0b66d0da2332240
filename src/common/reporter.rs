//! User-facing message sink.
//!
//! Every message the clone workflow produces goes through a [`Reporter`]:
//! it is printed for the user and mirrored into the log file with ANSI
//! escape sequences removed.

use colored::Colorize;
use std::borrow::Cow;

/// Print + log surface used by the application layer
pub trait Reporter: Send + Sync {
    /// Report an informational message. `debug_only` messages are printed
    /// only in verbose mode but always reach the debug log.
    fn trace(&self, message: &str, debug_only: bool);

    /// Report a non-fatal problem
    fn warn(&self, message: &str);
}

/// Reporter writing to stdout and to the `tracing` log
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn trace(&self, message: &str, debug_only: bool) {
        if debug_only {
            if self.verbose {
                println!("{}", message);
            }
            tracing::debug!("{}", clean_for_log(message));
        } else {
            println!("{}", message);
            tracing::info!("{}", clean_for_log(message));
        }
    }

    fn warn(&self, message: &str) {
        println!("{}", format!("⚠ {}", message).bright_yellow());
        tracing::warn!("{}", clean_for_log(message));
    }
}

/// Strip ANSI colour sequences so log files stay plain text
pub fn clean_for_log(message: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(message)
}
