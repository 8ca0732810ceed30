//! Removal of codepoints that break WOFF2 validation.

use std::collections::BTreeSet;

use hb_subset::{Blob, FontFace, SubsetInput, Tag};
use log::debug;
use read_fonts::{FontRef, TableProvider, tables::cmap::PlatformId};

use crate::{Error, Result};

/// Codepoints known to cause WOFF2 OTS validation errors.
///
/// U+F8FF (Apple logo) references `.notdef` as a composite component,
/// which Chrome's OTS parser rejects during WOFF2 decompression.
pub const PROBLEMATIC_CODEPOINTS: &[u32] = &[0xF8FF];

/// Layout features kept when subsetting.
const LAYOUT_FEATURES: &[&[u8; 4]] = &[
    b"aalt", b"ccmp", b"dlig", b"fwid", b"hwid", b"jp78", b"jp83", b"jp90", b"liga", b"locl",
    b"pwid", b"vert", b"vjmo", b"vrt2", b"halt", b"vhal", b"kern", b"mark", b"mkmk", b"calt",
    b"rvrn", b"ss01", b"ss02", b"ss03", b"ss04", b"ss05", b"ss06", b"ss07", b"ss08", b"ss09",
    b"ss10", b"dnom", b"numr", b"frac", b"ordn", b"sups", b"subs", b"sinf", b"case", b"zero",
];

/// Collect every Unicode codepoint the font's cmap maps to a non-`.notdef` glyph.
///
/// Only Unicode encoding records are read; Macintosh and symbol subtables use
/// their own character codes.
pub fn mapped_codepoints(data: &[u8]) -> Result<BTreeSet<u32>> {
    let font = FontRef::new(data)?;
    let cmap = font.cmap()?;

    let mut codepoints = BTreeSet::new();
    for record in cmap.encoding_records() {
        if !is_unicode_encoding(record.platform_id(), record.encoding_id()) {
            continue;
        }
        let Ok(subtable) = record.subtable(cmap.offset_data()) else {
            continue;
        };
        codepoints.extend(
            subtable.iter().filter(|(_, gid)| gid.to_u32() != 0).map(|(codepoint, _)| codepoint),
        );
    }
    Ok(codepoints)
}

/// Subset font data so it no longer maps any of [`PROBLEMATIC_CODEPOINTS`].
///
/// Fonts that don't map any of them are returned unchanged.
pub fn drop_problematic_codepoints(data: &[u8]) -> Result<Vec<u8>> {
    let codepoints = mapped_codepoints(data)?;
    if codepoints.is_empty() {
        return Err(Error::NoCodepoints);
    }

    if !PROBLEMATIC_CODEPOINTS.iter().any(|cp| codepoints.contains(cp)) {
        return Ok(data.to_vec());
    }
    debug!("Dropping problematic codepoints {PROBLEMATIC_CODEPOINTS:04X?}");

    let mut input = SubsetInput::new().map_err(subset_error)?;
    {
        let mut feature_set = input.layout_feature_tag_set();
        for tag in LAYOUT_FEATURES {
            feature_set.insert(Tag::new(*tag));
        }
    }
    {
        let mut unicode_set = input.unicode_set();
        for c in codepoints
            .iter()
            .filter(|cp| !PROBLEMATIC_CODEPOINTS.contains(cp))
            .filter_map(|cp| char::from_u32(*cp))
        {
            unicode_set.insert(c);
        }
    }

    let face = FontFace::new(Blob::from_bytes(data).map_err(subset_error)?).map_err(subset_error)?;
    let subset = input.subset_font(&face).map_err(subset_error)?;
    Ok(subset.underlying_blob().to_vec())
}

fn is_unicode_encoding(platform_id: PlatformId, encoding_id: u16) -> bool {
    // Windows: 1 = Unicode BMP, 10 = Unicode full repertoire.
    platform_id == PlatformId::Unicode
        || (platform_id == PlatformId::Windows && matches!(encoding_id, 1 | 10))
}

fn subset_error(e: impl std::error::Error) -> Error {
    Error::Subset(e.to_string())
}
