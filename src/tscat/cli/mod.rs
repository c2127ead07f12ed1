//! # CLI Behavior
//!
//! This is **one possible UI client** for tscat. The CLI is the only place that knows
//! about terminal I/O, exit codes, and output formatting.
//!
//! Running `tscat` with no arguments lists the scopes.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print the result
//! - `print`: Output formatting (scope table, scope view, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
