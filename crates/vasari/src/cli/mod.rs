//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! vasari binary.

mod commands;
mod generate;
mod tasks;

pub use commands::{Cli, Commands, FormatArg, KindArg};
pub use generate::handle_generate_command;
pub use tasks::handle_tasks_command;
