//! Failure notices for the terminal.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use ava_gateway::{GatewayError, Notifier};

/// Prints gateway failures to stderr, the terminal stand-in for a toast.
///
/// Remembers what it printed so the exit path does not repeat it.
#[derive(Debug)]
pub struct TerminalNotifier {
    quiet: bool,
    shown: Mutex<Vec<String>>,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
            shown: Mutex::new(Vec::new()),
        }
    }

    fn was_shown(&self, message: &str) -> bool {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|m| m == message)
    }

    /// Replace a command error with [`Reported`] when it is a gateway failure
    /// this notifier already printed. Anything else is returned unchanged.
    pub fn absorb(&self, error: anyhow::Error) -> anyhow::Error {
        match error.downcast_ref::<GatewayError>() {
            Some(gateway) if self.was_shown(&gateway.to_string()) => anyhow::Error::new(Reported),
            _ => error,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("! {message}");
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// A failure the user has already seen on stderr.
#[derive(Debug, Clone, Copy)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error already reported")
    }
}

impl std::error::Error for Reported {}
