pub mod fillmatrix;

pub use fillmatrix::FillMatrixRunner;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// External tool that turns the control file and series files into a gridded result.
pub trait Interpolator {
    /// Run in `work_dir` and return the path of the produced result file.
    fn run(&self, work_dir: &Path) -> Result<PathBuf>;
}
