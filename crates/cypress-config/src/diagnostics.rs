//! Non-fatal diagnostics emitted during resolution
//!
//! Resolvers never print directly. They report through a [`DiagnosticSink`],
//! which defaults to [`TracingSink`]; tests substitute a [`RecordingSink`].

use std::cell::RefCell;
use std::fmt;

/// A condition worth reporting that does not abort resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A flag expecting a value was the last argument; the flag is treated as absent
    MissingFlagArgument { flag: String },

    /// `--env`/`-e` was given more than once; only the most recent applies
    RepeatedEnvFlag { occurrences: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFlagArgument { flag } => write!(f, "'{flag}' argument missing"),
            Self::RepeatedEnvFlag { .. } => write!(
                f,
                "You have specified -e / --env multiple times. This is likely a mistake, \
                 as only the last one will take affect. Multiple values should instead be \
                 comma-separated."
            ),
        }
    }
}

/// Receiver for [`Diagnostic`]s
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
///
/// Missing flag arguments are debug output; repeated `--env` flags are warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::MissingFlagArgument { .. } => tracing::debug!("{diagnostic}"),
            Diagnostic::RepeatedEnvFlag { occurrences } => {
                tracing::warn!(occurrences, "{diagnostic}")
            }
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}
