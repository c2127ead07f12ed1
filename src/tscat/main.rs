//! # tscat CLI
//!
//! The binary is thin: the CLI lives in `src/tscat/cli/`, and this file only invokes
//! `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument parsing,
//! context initialization, dispatch, log setup, and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
