use crate::error::ProcessingError;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;

/// Final handling of an error that ends the run.
pub trait FatalReporter {
    fn report_fatal(&self, error: &ProcessingError) -> ExitCode;
}

/// Prints the failure to stderr, optionally counting down before exit.
pub struct ConsoleReporter {
    exit_delay: u64,
}

impl ConsoleReporter {
    pub fn new(exit_delay_secs: u64) -> Self {
        Self {
            exit_delay: exit_delay_secs,
        }
    }

    fn countdown(&self) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            pb.set_style(style);
        }
        for remaining in (1..=self.exit_delay).rev() {
            pb.set_message(format!("Program will exit in {} seconds...", remaining));
            std::thread::sleep(Duration::from_secs(1));
        }
        pb.finish_with_message("Program exited.");
    }
}

impl FatalReporter for ConsoleReporter {
    fn report_fatal(&self, error: &ProcessingError) -> ExitCode {
        eprintln!("Error [{}]: {}", error.category(), error);

        if self.exit_delay > 0 {
            self.countdown();
        }
        ExitCode::FAILURE
    }
}
