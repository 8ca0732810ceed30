//! Font loading and WOFF2 serialization.
//!
//! A [`Font`] wraps sfnt data together with an output [`Flavor`]. Switching
//! the flavor to [`Flavor::Woff2`] makes [`Font::save`] write a WOFF2 file;
//! the table transforms and Brotli compression are done by `ttf2woff2`.
//!
//! # Example
//!
//! ```no_run
//! use woff2_batch_font::{Flavor, Font};
//!
//! let mut font = Font::load("fonts/Example.otf").unwrap();
//! font.set_flavor(Flavor::Woff2);
//! font.save("fonts/Example.woff2").unwrap();
//! ```

mod error;
mod flavor;
mod font;
mod subset;

pub use error::{Error, Result};
pub use flavor::Flavor;
pub use font::{Font, Woff2Options};
pub use subset::{PROBLEMATIC_CODEPOINTS, drop_problematic_codepoints, mapped_codepoints};
