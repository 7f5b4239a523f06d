//! Reading OpenType and TrueType font files, and matching font
//! requests against the fonts installed on the system.
//!
//! [`Face`] exposes one font of a `.ttf`/`.otf`/`.ttc`/`.otc` image:
//! its names, weight and style classification, vertical metrics,
//! per-glyph horizontal metrics and codepoint→glyph mapping.
//! [`FontRegistry`] indexes every font the platform ships and resolves
//! `(family, weight, style)` requests to the best physical font.
//!
//! Glyph outlines are out of scope: this crate reads metrics and
//! character coverage, nothing that would be needed to rasterize.

use thiserror::Error;

pub mod buffer;
pub mod classify;
pub mod face;
pub mod loader;
pub mod registry;
pub mod tables;

pub use buffer::UnexpectedEnd;
pub use classify::{Classification, Style, Weight};
pub use face::{Baseline, Face};
pub use registry::{FontRegistry, KnownFont};
pub use tables::Tag;

/// Everything that can go wrong between raw bytes and a resolved face.
#[derive(Error, Debug)]
pub enum FontError {
    /// A read ran past the end of the file image or a table slice.
    #[error(transparent)]
    UnexpectedEnd(#[from] UnexpectedEnd),

    /// A font file could not be read from disk.
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    /// The container tag or the 'head' magic number mismatched.
    #[error("unrecognized font container or header magic")]
    BadMagic,

    /// A table the requested operation needs is absent.
    #[error("required table '{0}' is missing")]
    TableMissing(Tag),

    /// The file holds fewer fonts than the requested index.
    #[error("font index out of bounds")]
    FaceIndexOutOfBounds,

    /// A table declares a format or flag this crate does not read,
    /// such as a nonzero 'hhea' metric data format, a 'name' format
    /// above 1, or a 'cmap' without a Windows Unicode record.
    #[error("unsupported table format")]
    UnsupportedFormat,

    /// The chosen 'cmap' subtable is not format 4.
    #[error("unsupported cmap subtable format {0}")]
    UnsupportedCmapFormat(u16),

    /// The 'cmap' subtable contradicts itself: odd segment counts or
    /// range offsets, or a glyph index past the glyph table.
    #[error("malformed cmap subtable")]
    CorruptCmap,

    /// A name record carries a UTF-16 payload of odd byte length.
    #[error("malformed name record payload")]
    BadName,

    /// A glyph fallback was requested from a font with no glyphs.
    #[error("font contains no glyphs")]
    EmptyFont,

    /// The registry has no fonts to match against.
    #[error("no fonts are available")]
    NoFontAvailable,
}
