//! # Command-Line Interface
//!
//! Entry point for the `example-plugin` executable.
//!
//! ## Modes
//!
//! | Invocation | Purpose |
//! |------------|---------|
//! | `example-plugin --manifest` | Print the plugin descriptor as JSON |
//! | `example-plugin` | Serve protocol requests from stdin |
//! | `example-plugin info` | Show plugin metadata |
//! | `example-plugin list` | List commands with help text |
//! | `example-plugin call greet '{"name": "Ada"}'` | Run a command by hand |
//!
//! ## Output Formats
//!
//! `info`, `list` and `call` support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.

mod app;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
