//! Type-safe wrappers and enums used by the CLI and the core API.

pub mod backend;
pub mod ids;
