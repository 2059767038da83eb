//! Line-oriented front-end for the inquiry wizard.

mod commands;
mod completion;
mod context;
pub mod errors;
pub mod io;
pub mod output;
mod registry;
mod shell;

pub use errors::{CliError, CommandError};
pub use shell::{run_cli, SCRIPT_ENV};
