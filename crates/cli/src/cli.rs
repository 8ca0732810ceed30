//! CLI definitions and dispatch.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use woff2_batch_core::{
    BatchConfig, DEFAULT_FONT_FILES, DEFAULT_FONTS_DIR, SummaryDenominator, Woff2Options,
    print_report, run_batch,
};

#[derive(Parser)]
#[command(name = "woff2-batch", version)]
#[command(about = "Convert OpenType fonts to WOFF2")]
pub struct Cli {
    /// Font file names inside --dir (default: the bundled Gangwon Edu fonts)
    pub files: Vec<String>,

    /// Directory containing the input fonts
    #[arg(short, long, default_value = DEFAULT_FONTS_DIR)]
    pub dir: PathBuf,

    /// Output directory (default: same as --dir)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// What the converted/total summary counts as total
    #[arg(long, value_enum, default_value_t = Denominator::Configured)]
    pub denominator: Denominator,

    /// Convert files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Drop glyphs known to fail WOFF2 validation (U+F8FF) before encoding
    #[arg(long)]
    pub drop_problematic_glyphs: bool,

    /// Exit with a failure status when no file was converted
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Denominator {
    /// Every listed file, found or not
    Configured,
    /// Only files that were found
    Attempted,
}

impl From<Denominator> for SummaryDenominator {
    fn from(value: Denominator) -> Self {
        match value {
            Denominator::Configured => SummaryDenominator::Configured,
            Denominator::Attempted => SummaryDenominator::Attempted,
        }
    }
}

impl Cli {
    pub fn config(&self) -> BatchConfig {
        let mut config = if self.files.is_empty() {
            BatchConfig::new(&self.dir, DEFAULT_FONT_FILES.iter().copied())
        } else {
            BatchConfig::new(&self.dir, self.files.iter().cloned())
        };
        config.output_dir = self.out_dir.clone();
        config.denominator = self.denominator.into();
        config.parallel = self.parallel;
        config.woff2 = Woff2Options { drop_problematic_codepoints: self.drop_problematic_glyphs };
        config
    }

    pub fn run(self) -> Result<ExitCode> {
        let report = run_batch(&self.config());
        print_report(&report);

        if self.strict && report.converted() == 0 {
            info!("No fonts converted; exiting with failure (--strict)");
            return Ok(ExitCode::FAILURE);
        }
        Ok(ExitCode::SUCCESS)
    }
}
