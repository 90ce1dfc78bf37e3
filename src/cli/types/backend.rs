//! Storage backend selection for CLI commands.

use std::fmt;

/// Which storage backend a command runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// Transient in-memory store, discarded when the process exits
    Memory,
    /// Persistent SQLite database
    #[default]
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Backend::Memory => "memory",
            Backend::Sqlite => "sqlite",
        };
        write!(f, "{}", s)
    }
}
