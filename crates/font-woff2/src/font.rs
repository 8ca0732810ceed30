use std::{
    fs::{create_dir_all, read, write},
    path::Path,
};

use log::debug;
use read_fonts::FontRef;
use ttf2woff2::{BrotliQuality, encode};

use crate::{Error, Flavor, Result, subset::drop_problematic_codepoints};

/// Options applied when serializing as [`Flavor::Woff2`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Woff2Options {
    /// Subset away [`PROBLEMATIC_CODEPOINTS`](crate::PROBLEMATIC_CODEPOINTS) before encoding.
    pub drop_problematic_codepoints: bool,
}

/// A loaded sfnt font and the flavor it will be written as.
///
/// Loading only checks that the table directory parses; tables are passed
/// through untouched to the encoder.
#[derive(Debug, Clone)]
pub struct Font {
    data: Vec<u8>,
    flavor: Flavor,
    options: Woff2Options,
}

impl Font {
    /// Load a font from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading {}", path.display());
        Self::from_bytes(read(path)?)
    }

    /// Wrap raw font data, rejecting anything that isn't a single sfnt font.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        match Flavor::detect(&data) {
            Some(Flavor::Sfnt) => {}
            Some(flavor) => {
                return Err(Error::UnsupportedInput(format!("{flavor} data cannot be decoded")));
            }
            None if data.starts_with(b"ttcf") => {
                return Err(Error::UnsupportedInput("font collections".into()));
            }
            // Let read-fonts describe what's wrong with the header.
            None => {}
        }
        FontRef::new(&data)?;

        Ok(Self { data, flavor: Flavor::Sfnt, options: Woff2Options::default() })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Select the format used by [`Font::to_bytes`] and [`Font::save`].
    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.flavor = flavor;
    }

    pub fn set_woff2_options(&mut self, options: Woff2Options) {
        self.options = options;
    }

    /// The font data as loaded.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Serialize in the current flavor.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self.flavor {
            Flavor::Sfnt => Ok(self.data.clone()),
            Flavor::Woff2 => {
                let sfnt = if self.options.drop_problematic_codepoints {
                    drop_problematic_codepoints(&self.data)?
                } else {
                    self.data.clone()
                };
                encode(&sfnt, BrotliQuality::default())
                    .map_err(|e| Error::Encode(format!("{e:?}")))
            }
            Flavor::Woff => Err(Error::UnsupportedFlavor(Flavor::Woff)),
        }
    }

    /// Serialize in the current flavor and write to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)?;
        }
        write(path, &bytes)?;
        debug!("Wrote {} ({} bytes, {})", path.display(), bytes.len(), self.flavor);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subset::tests::with_apple_logo;

    fn sample() -> Font {
        Font::from_bytes(font_test_data::NOTO_SERIF_DISPLAY_TRIMMED.to_vec()).unwrap()
    }

    #[test]
    fn test_default_flavor_is_sfnt() {
        assert_eq!(sample().flavor(), Flavor::Sfnt);
    }

    #[test]
    fn test_sfnt_passthrough() {
        let bytes = sample().to_bytes().unwrap();
        assert_eq!(bytes, font_test_data::NOTO_SERIF_DISPLAY_TRIMMED);
    }

    #[test]
    fn test_woff2_signature() {
        let mut font = sample();
        font.set_flavor(Flavor::Woff2);
        let bytes = font.to_bytes().unwrap();
        assert_eq!(Flavor::detect(&bytes), Some(Flavor::Woff2));
    }

    #[test]
    fn test_woff_output_unsupported() {
        let mut font = sample();
        font.set_flavor(Flavor::Woff);
        assert!(matches!(font.to_bytes(), Err(Error::UnsupportedFlavor(Flavor::Woff))));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = Font::from_bytes(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_rejects_woff2_input() {
        let result = Font::from_bytes(b"wOF2\0\x01\0\0rest".to_vec());
        assert!(matches!(result, Err(Error::UnsupportedInput(_))));
    }

    #[test]
    fn test_rejects_collection() {
        let result = Font::from_bytes(b"ttcf\0\x01\0\0\0\0\0\0".to_vec());
        assert!(matches!(result, Err(Error::UnsupportedInput(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Font::load(dir.path().join("missing.otf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/out.woff2");

        let mut font = sample();
        font.set_flavor(Flavor::Woff2);
        font.save(&output).unwrap();

        let written = std::fs::read(&output).unwrap();
        assert_eq!(&written[..4], b"wOF2");
    }

    #[test]
    fn test_woff2_with_options_on_clean_font() {
        let mut font = sample();
        font.set_flavor(Flavor::Woff2);
        font.set_woff2_options(Woff2Options { drop_problematic_codepoints: true });
        assert_eq!(font.to_bytes().unwrap(), {
            let mut plain = sample();
            plain.set_flavor(Flavor::Woff2);
            plain.to_bytes().unwrap()
        });
    }

    #[test]
    fn test_woff2_drops_problematic_codepoints() {
        let data = with_apple_logo(font_test_data::NOTO_SERIF_DISPLAY_TRIMMED);

        let mut plain = Font::from_bytes(data.clone()).unwrap();
        plain.set_flavor(Flavor::Woff2);

        let mut cleaned = Font::from_bytes(data).unwrap();
        cleaned.set_flavor(Flavor::Woff2);
        cleaned.set_woff2_options(Woff2Options { drop_problematic_codepoints: true });

        let bytes = cleaned.to_bytes().unwrap();
        assert_eq!(Flavor::detect(&bytes), Some(Flavor::Woff2));
        assert_ne!(bytes, plain.to_bytes().unwrap());
    }
}
