use crate::cli::args::{Cli, Commands};
use crate::cli::report::FatalReporter;
use crate::config::{ConversionConfig, StationMatching};
use crate::error::{ProcessingError, Result};
use crate::interpolation::{FillMatrixRunner, Interpolator};
use crate::processors::Converter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

/// Run the command and hand any failure to `reporter`.
pub fn execute(cli: Cli, reporter: &dyn FatalReporter) -> ExitCode {
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => reporter.report_fatal(&error),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = ConversionConfig::load(cli.config.as_deref())?;
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Convert {
            coordinates,
            rainfall,
            output_dir,
            match_by_name,
            run_fillmatrix,
            fillmatrix_exe,
            fillmatrix_args,
            json,
        } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if match_by_name {
                config.station_matching = StationMatching::ByName;
            }

            let runner = FillMatrixRunner::new(fillmatrix_exe, config.control.output_file.clone())
                .with_args(fillmatrix_args);
            preflight(&config, run_fillmatrix.then_some(&runner))?;

            if !cli.quiet && !json {
                println!("Converting hourly rainfall data...");
                println!("Coordinates file: {}", coordinates.display());
                println!("Rainfall file: {}", rainfall.display());
                println!("Output directory: {}", config.output_dir.display());
            }

            let converter = Converter::new(config.clone()).with_progress(!cli.quiet && !json);
            let summary = converter.convert(&coordinates, &rainfall)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if !cli.quiet {
                println!("\n{}", summary.summary());
            }

            if run_fillmatrix {
                let output = runner.run(&config.output_dir)?;
                if !cli.quiet && !json {
                    println!("{} created successfully", output.display());
                }
            }
        }

        Commands::Validate {
            coordinates,
            rainfall,
            match_by_name,
        } => {
            if match_by_name {
                config.station_matching = StationMatching::ByName;
            }

            let converter = Converter::new(config);
            let inputs = converter.validate_inputs(&coordinates, &rainfall)?;

            if !cli.quiet {
                println!(
                    "All checks passed: {} stations, {} hourly rows ({} to {})",
                    inputs.stations.len(),
                    inputs.rainfall.time_steps(),
                    inputs.start,
                    inputs.end
                );
            }
        }
    }

    Ok(())
}

/// Checks on the files FillMatrix needs, made before any input is read.
fn preflight(config: &ConversionConfig, runner: Option<&FillMatrixRunner>) -> Result<()> {
    let grid_file: PathBuf = config.output_dir.join(&config.control.grid_data_file);

    match runner {
        Some(runner) => {
            runner.ensure_available()?;
            if !grid_file.is_file() {
                return Err(ProcessingError::file_access(
                    &grid_file,
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "grid data file required by FillMatrix not found",
                    ),
                ));
            }
        }
        None => {
            if !grid_file.is_file() {
                warn!(
                    "Grid data file {} not found; FillMatrix will need it",
                    grid_file.display()
                );
            }
        }
    }

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the level.
pub fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rainfall2mohid={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| ProcessingError::Config(format!("cannot initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
