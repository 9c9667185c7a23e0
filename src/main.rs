use clap::Parser;
use rainfall2mohid::cli::{execute, setup_logging, Cli, ConsoleReporter, FatalReporter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = ConsoleReporter::new(cli.exit_delay);

    if let Err(e) = setup_logging(cli.verbose, cli.quiet) {
        return reporter.report_fatal(&e);
    }

    execute(cli, &reporter)
}
