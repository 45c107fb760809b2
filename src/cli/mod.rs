//! Command-line interface.
//!
//! One subcommand for now:
//!
//! ```bash
//! doctree serve --ip 0.0.0.0 --port 3075 --seed seed.json
//! ```
//!
//! `--seed` points at a JSON file holding the initial document; without it
//! the store starts as an empty mapping.

mod commands;

pub use commands::{run_cli, Cli, Commands};
