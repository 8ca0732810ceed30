use std::fmt;

/// Serialization format of a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// Plain OpenType/TrueType (`.otf`, `.ttf`).
    #[default]
    Sfnt,
    /// WOFF 1.0, detected on input only.
    Woff,
    /// WOFF 2.0.
    Woff2,
}

impl Flavor {
    /// Detect the flavor from the leading signature of font data.
    ///
    /// Returns `None` for data that is not a single font (including collections).
    pub fn detect(data: &[u8]) -> Option<Self> {
        match data.get(..4)? {
            b"\x00\x01\x00\x00" | b"OTTO" | b"true" => Some(Self::Sfnt),
            b"wOFF" => Some(Self::Woff),
            b"wOF2" => Some(Self::Woff2),
            _ => None,
        }
    }

    /// File extension without the leading dot. `Sfnt` maps to `otf`.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Sfnt => "otf",
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
