pub mod args;
pub mod commands;
pub mod report;

pub use args::{Cli, Commands};
pub use commands::{execute, run, setup_logging};
pub use report::{ConsoleReporter, FatalReporter};
