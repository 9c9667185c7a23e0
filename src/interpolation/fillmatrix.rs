use crate::error::{ProcessingError, Result};
use crate::interpolation::Interpolator;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Launches the MOHID FillMatrix executable.
///
/// FillMatrix reads `FillMatrix.dat` from its working directory, so it is
/// started inside the conversion output directory. Extra arguments allow
/// launching through a wrapper such as `wine FillMatrix.exe`.
pub struct FillMatrixRunner {
    executable: PathBuf,
    args: Vec<String>,
    output_file: String,
}

impl FillMatrixRunner {
    pub fn new(executable: impl Into<PathBuf>, output_file: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
            output_file: output_file.into(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Fail early when the executable is not where it is expected.
    pub fn ensure_available(&self) -> Result<()> {
        if self.executable.is_file() {
            Ok(())
        } else {
            Err(ProcessingError::Interpolator {
                message: format!("{} not found", self.executable.display()),
            })
        }
    }
}

impl Interpolator for FillMatrixRunner {
    fn run(&self, work_dir: &Path) -> Result<PathBuf> {
        let executable = self
            .executable
            .canonicalize()
            .map_err(|e| ProcessingError::file_access(&self.executable, e))?;
        info!("Starting {}...", executable.display());

        let status = Command::new(&executable)
            .args(&self.args)
            .current_dir(work_dir)
            .status()
            .map_err(|e| ProcessingError::Interpolator {
                message: format!("cannot start {}: {}", executable.display(), e),
            })?;

        if !status.success() {
            warn!("{} exited with {}", executable.display(), status);
            return Err(ProcessingError::Interpolator {
                message: format!("{} exited with {}", executable.display(), status),
            });
        }

        let output = work_dir.join(&self.output_file);
        if !output.is_file() {
            return Err(ProcessingError::InterpolationOutputMissing { path: output });
        }

        info!("{} created successfully", output.display());
        Ok(output)
    }
}
