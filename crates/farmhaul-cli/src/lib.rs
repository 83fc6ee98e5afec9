//! farmhaul CLI library.
//!
//! Command handlers, terminal styling, and output formatting for the
//! `farmhaul-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
