//! Conversion jobs and their outcomes.

use std::path::{Path, PathBuf};

use woff2_batch_font::Flavor;

use crate::config::BatchConfig;

/// One input font and the WOFF2 file it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self { input_path: input_path.into(), output_path: output_path.into() }
    }

    /// Resolve `file_name` against the configured directories.
    ///
    /// The output keeps the input's stem with the extension replaced by `woff2`.
    pub fn from_config(config: &BatchConfig, file_name: &str) -> Self {
        let input_path = config.directory.join(file_name);
        let output_name = Path::new(file_name).with_extension(Flavor::Woff2.extension());
        let output_path = config.output_dir().join(output_name);
        Self { input_path, output_path }
    }

    /// Input file name for status lines.
    pub fn input_name(&self) -> String {
        file_name(&self.input_path)
    }

    pub fn output_name(&self) -> String {
        file_name(&self.output_path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy().into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    Failed { error: String },
    /// Input did not exist; nothing was attempted.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub job: ConversionJob,
    pub outcome: Outcome,
}

impl ConversionResult {
    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Converted
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Whether conversion was attempted, i.e. the input existed.
    pub fn attempted(&self) -> bool {
        self.outcome != Outcome::Missing
    }
}
