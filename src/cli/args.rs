use crate::utils::constants::{
    DEFAULT_COORDINATES_FILE, DEFAULT_FILLMATRIX_EXE, DEFAULT_RAINFALL_FILE,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rainfall2mohid")]
#[command(about = "Hourly rainfall data to MOHID FillMatrix converter")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Only report errors")]
    pub quiet: bool,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        default_value = "0",
        help = "Seconds to wait before exiting after a fatal error"
    )]
    pub exit_delay: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert rainfall and coordinate tables into SRM series files and a FillMatrix control file
    Convert {
        #[arg(short, long, default_value = DEFAULT_COORDINATES_FILE)]
        coordinates: PathBuf,

        #[arg(short, long, default_value = DEFAULT_RAINFALL_FILE)]
        rainfall: PathBuf,

        #[arg(
            short,
            long,
            help = "Directory for the generated files [default: from configuration, else current directory]"
        )]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Pair rainfall columns with coordinate rows by station ID")]
        match_by_name: bool,

        #[arg(long, help = "Run FillMatrix on the generated files")]
        run_fillmatrix: bool,

        #[arg(long, default_value = DEFAULT_FILLMATRIX_EXE)]
        fillmatrix_exe: PathBuf,

        #[arg(
            long,
            help = "Arguments passed to the FillMatrix executable",
            num_args = 1..,
            allow_hyphen_values = true
        )]
        fillmatrix_args: Vec<String>,

        #[arg(long, help = "Print the conversion summary as JSON")]
        json: bool,
    },

    /// Validate the input tables without writing anything
    Validate {
        #[arg(short, long, default_value = DEFAULT_COORDINATES_FILE)]
        coordinates: PathBuf,

        #[arg(short, long, default_value = DEFAULT_RAINFALL_FILE)]
        rainfall: PathBuf,

        #[arg(long, help = "Pair rainfall columns with coordinate rows by station ID")]
        match_by_name: bool,
    },
}
