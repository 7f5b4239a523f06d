use crate::FontError;
use crate::buffer::Cursor;

/// Magic number every 'head' table carries at offset 12.
const MAGIC: u32 = 0x5F0F_3CF5;

/// The fields this crate needs from the
/// [font header](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6head.html).
///
/// `mac_style` is decoded in the same pass because the classifier
/// falls back to it when a font ships without an 'OS/2' table.
#[derive(Debug, Clone, Copy)]
pub struct Head {
    /// Units per em; the design-space denominator for every metric.
    pub units_per_em: u16,

    /// The union of all glyph bounding boxes: xMin, yMin, xMax, yMax.
    pub bbox: [i16; 4],

    /// Bit 0 bold, bit 1 italic.
    pub mac_style: u16,
}

impl Head {
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(12)?; // version, fontRevision, checkSumAdjustment
        if cursor.read_u32()? != MAGIC {
            return Err(FontError::BadMagic);
        }
        cursor.skip(2)?; // flags
        let units_per_em = cursor.read_u16()?;
        cursor.skip(16)?; // created, modified
        let bbox = [
            cursor.read_i16()?,
            cursor.read_i16()?,
            cursor.read_i16()?,
            cursor.read_i16()?,
        ];
        let mac_style = cursor.read_u16()?;
        // The remaining 10 bytes (lowestRecPPEM through glyphDataFormat)
        // are of no interest here.
        Ok(Self {
            units_per_em,
            bbox,
            mac_style,
        })
    }
}
