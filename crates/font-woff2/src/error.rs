//! Error types for loading and serializing fonts.

use std::{io, result};

use read_fonts::ReadError;

use crate::Flavor;

/// Errors that can occur while loading, converting or saving a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("cannot serialize as {0:?}")]
    UnsupportedFlavor(Flavor),

    #[error("no mapped codepoints in font")]
    NoCodepoints,

    #[error("failed to subset font: {0}")]
    Subset(String),

    #[error("failed to encode WOFF2: {0}")]
    Encode(String),
}

pub type Result<T> = result::Result<T, Error>;
