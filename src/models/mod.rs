//! Row models shared by the query catalog and command output.

pub mod output;

pub use output::*;
