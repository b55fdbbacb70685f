//! CLI subcommands.

pub mod common;
pub mod lookup;
pub mod shell;
