//! Batch configuration.

use std::path::{Path, PathBuf};

use woff2_batch_font::Woff2Options;

/// Directory holding the source fonts, relative to the working directory.
pub const DEFAULT_FONTS_DIR: &str = "public/fonts";

/// Fonts converted when no file list is given.
pub const DEFAULT_FONT_FILES: &[&str] = &[
    "GangwonEduSaeum.otf",
    "GangwonEduModuBold.otf",
    "GangwonEduModuLight.otf",
    "GangwonEduHyunok.otf",
];

/// What the `converted/total` summary divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryDenominator {
    /// Every configured file, including missing ones.
    #[default]
    Configured,
    /// Only files that were found and attempted.
    Attempted,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory the file names are resolved against.
    pub directory: PathBuf,
    /// Ordered input file names.
    pub files: Vec<String>,
    /// Where outputs go. `None` writes next to the inputs.
    pub output_dir: Option<PathBuf>,
    pub denominator: SummaryDenominator,
    /// Convert found files on the rayon thread pool.
    pub parallel: bool,
    pub woff2: Woff2Options,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FONTS_DIR, DEFAULT_FONT_FILES.iter().copied())
    }
}

impl BatchConfig {
    pub fn new(
        directory: impl Into<PathBuf>,
        files: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            directory: directory.into(),
            files: files.into_iter().map(Into::into).collect(),
            output_dir: None,
            denominator: SummaryDenominator::default(),
            parallel: false,
            woff2: Woff2Options::default(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.directory, Path::new("public/fonts"));
        assert_eq!(config.files.len(), 4);
        assert_eq!(config.files[0], "GangwonEduSaeum.otf");
        assert_eq!(config.files[3], "GangwonEduHyunok.otf");
        assert_eq!(config.denominator, SummaryDenominator::Configured);
        assert!(!config.parallel);
    }

    #[test]
    fn test_output_dir_defaults_to_input_dir() {
        let mut config = BatchConfig::new("in", ["a.otf"]);
        assert_eq!(config.output_dir(), Path::new("in"));

        config.output_dir = Some("out".into());
        assert_eq!(config.output_dir(), Path::new("out"));
    }
}
