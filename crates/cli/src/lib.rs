//! woff2-batch CLI library.

pub mod cli;
