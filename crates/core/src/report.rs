//! Batch results, the summary computed from them, and console rendering.

use std::fmt;

use crate::{
    config::SummaryDenominator,
    job::{ConversionResult, Outcome},
};

#[derive(Debug, Clone)]
pub struct BatchReport {
    results: Vec<ConversionResult>,
    denominator: SummaryDenominator,
}

/// Aggregate counts of a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    /// Denominator under the configured [`SummaryDenominator`].
    pub total: usize,
    pub failed: usize,
    pub missing: usize,
}

impl BatchReport {
    pub fn new(results: Vec<ConversionResult>, denominator: SummaryDenominator) -> Self {
        Self { results, denominator }
    }

    /// Results in configured order.
    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    pub fn converted(&self) -> usize {
        self.count(|o| *o == Outcome::Converted)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| *o == Outcome::Missing)
    }

    pub fn attempted(&self) -> usize {
        self.converted() + self.failed()
    }

    pub fn configured(&self) -> usize {
        self.results.len()
    }

    pub fn denominator(&self) -> usize {
        match self.denominator {
            SummaryDenominator::Configured => self.configured(),
            SummaryDenominator::Attempted => self.attempted(),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            converted: self.converted(),
            total: self.denominator(),
            failed: self.failed(),
            missing: self.missing(),
        }
    }

    fn count(&self, f: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| f(&r.outcome)).count()
    }
}

/// Status line for a single file.
pub fn render_result(result: &ConversionResult) -> String {
    let job = &result.job;
    match &result.outcome {
        Outcome::Converted => format!("Converted {} -> {}", job.input_name(), job.output_name()),
        Outcome::Failed { error } => format!("Failed {}: {error}", job.input_name()),
        Outcome::Missing => format!("Skipped {} (not found)", job.input_path.display()),
    }
}

/// Final `converted/total` line.
pub fn render_summary(report: &BatchReport) -> String {
    report.summary().to_string()
}

/// Print one status line per file and the summary to stdout.
pub fn print_report(report: &BatchReport) {
    for result in report.results() {
        println!("{}", render_result(result));
    }
    println!("{}", render_summary(report));
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converted {}/{} files", self.converted, self.total)?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        if self.missing > 0 {
            write!(f, ", {} missing", self.missing)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::job::ConversionJob;

    fn result(name: &str, outcome: Outcome) -> ConversionResult {
        let job = ConversionJob::new(format!("fonts/{name}.otf"), format!("fonts/{name}.woff2"));
        ConversionResult { job, outcome }
    }

    fn mixed(denominator: SummaryDenominator) -> BatchReport {
        BatchReport::new(
            vec![
                result("A", Outcome::Converted),
                result("B", Outcome::Missing),
                result("C", Outcome::Failed { error: "bad header".into() }),
            ],
            denominator,
        )
    }

    #[test]
    fn test_counts() {
        let report = mixed(SummaryDenominator::Configured);
        assert_eq!(report.converted(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.missing(), 1);
        assert_eq!(report.attempted(), 2);
        assert_eq!(report.configured(), 3);
    }

    #[test]
    fn test_summary_configured() {
        let summary = mixed(SummaryDenominator::Configured).summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.to_string(), "Converted 1/3 files, 1 failed, 1 missing");
    }

    #[test]
    fn test_summary_attempted() {
        let summary = mixed(SummaryDenominator::Attempted).summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.to_string(), "Converted 1/2 files, 1 failed, 1 missing");
    }

    #[test]
    fn test_summary_all_converted() {
        let report = BatchReport::new(
            vec![result("A", Outcome::Converted), result("B", Outcome::Converted)],
            SummaryDenominator::Configured,
        );
        assert_eq!(render_summary(&report), "Converted 2/2 files");
    }

    #[test]
    fn test_render_result() {
        let report = mixed(SummaryDenominator::Configured);
        let lines: Vec<String> = report.results().iter().map(render_result).collect();
        assert_eq!(lines[0], "Converted A.otf -> A.woff2");
        assert_eq!(lines[1], format!("Skipped {} (not found)", Path::new("fonts/B.otf").display()));
        assert_eq!(lines[2], "Failed C.otf: bad header");
    }
}
