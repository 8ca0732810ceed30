//! Driving a list of conversion jobs to completion.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use woff2_batch_font::{Flavor, Font, Woff2Options};

use crate::{
    config::BatchConfig,
    job::{ConversionJob, ConversionResult, Outcome},
    report::BatchReport,
};

/// Convert one font to WOFF2 with default options.
pub fn convert_one(input_path: &Path, output_path: &Path) -> Result<()> {
    convert_with_options(input_path, output_path, Woff2Options::default())
}

pub fn convert_with_options(
    input_path: &Path,
    output_path: &Path,
    options: Woff2Options,
) -> Result<()> {
    let mut font = Font::load(input_path)
        .with_context(|| format!("Failed to load {}", input_path.display()))?;
    debug!("Loaded {} ({} bytes)", input_path.display(), font.data().len());

    font.set_flavor(Flavor::Woff2);
    font.set_woff2_options(options);
    font.save(output_path)
        .with_context(|| format!("Failed to save {}", output_path.display()))
}

/// Convert every configured file, skipping missing inputs.
pub fn run_batch(config: &BatchConfig) -> BatchReport {
    let options = config.woff2;
    run_batch_with(config, |job| convert_with_options(&job.input_path, &job.output_path, options))
}

/// Run `op` for every configured file whose input exists.
///
/// Errors from `op` are recorded per job and never stop the batch. Results
/// follow the configured order even when running in parallel.
pub fn run_batch_with<F>(config: &BatchConfig, op: F) -> BatchReport
where
    F: Fn(&ConversionJob) -> Result<()> + Sync,
{
    info!("Converting {} fonts in {}", config.files.len(), config.directory.display());

    let jobs: Vec<ConversionJob> =
        config.files.iter().map(|name| ConversionJob::from_config(config, name)).collect();

    let run = |job: ConversionJob| -> ConversionResult {
        let outcome = attempt(&job, &op);
        ConversionResult { job, outcome }
    };

    let results: Vec<ConversionResult> = if config.parallel {
        jobs.into_par_iter().map(run).collect()
    } else {
        jobs.into_iter().map(run).collect()
    };

    let report = BatchReport::new(results, config.denominator);
    info!(
        "Batch complete: {} converted, {} failed, {} missing",
        report.converted(),
        report.failed(),
        report.missing()
    );
    report
}

fn attempt<F>(job: &ConversionJob, op: &F) -> Outcome
where
    F: Fn(&ConversionJob) -> Result<()>,
{
    if !job.input_path.exists() {
        warn!("Input not found: {}", job.input_path.display());
        return Outcome::Missing;
    }

    debug!("Converting {} -> {}", job.input_path.display(), job.output_path.display());
    match op(job) {
        Ok(()) => Outcome::Converted,
        Err(e) => {
            warn!("{e:?}");
            Outcome::Failed { error: format!("{e:#}") }
        }
    }
}
