/// CLI layer: argument parsing and output writing.
pub mod args;
pub mod output;

pub use args::{Cli, Command};
pub use output::{DebugTimer, write_error, write_rendered};
