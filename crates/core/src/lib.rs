//! Batch conversion of OpenType fonts to WOFF2.
//!
//! [`run_batch`] walks a [`BatchConfig`] in order, converting every input
//! that exists and recording a [`ConversionResult`] per file. Failures are
//! kept per file; the batch itself never fails.

pub mod batch;
pub mod config;
pub mod job;
pub mod report;

pub use batch::{convert_one, convert_with_options, run_batch, run_batch_with};
pub use config::{BatchConfig, DEFAULT_FONT_FILES, DEFAULT_FONTS_DIR, SummaryDenominator};
pub use job::{ConversionJob, ConversionResult, Outcome};
pub use report::{BatchReport, Summary, print_report, render_result, render_summary};
pub use woff2_batch_font::Woff2Options;
