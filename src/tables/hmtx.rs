use crate::FontError;
use crate::buffer::Cursor;

/// Horizontal metrics for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub advance_width: u16,
    pub left_side_bearing: i16,
}

/// Decodes 'hmtx' into one entry per glyph.
///
/// The table stores `number_of_h_metrics` full pairs followed by a
/// bearing-only run for the remaining glyphs, which all reuse the last
/// advance. Monospaced fonts exploit this to store a single advance.
pub fn parse(
    data: &[u8],
    number_of_h_metrics: u16,
    num_glyphs: u16,
) -> Result<Vec<GlyphMetrics>, FontError> {
    let mut cursor = Cursor::new(data);
    let mut glyphs = Vec::with_capacity(usize::from(num_glyphs));
    let mut last_advance = 0;
    for _ in 0..number_of_h_metrics {
        let advance_width = cursor.read_u16()?;
        let left_side_bearing = cursor.read_i16()?;
        last_advance = advance_width;
        glyphs.push(GlyphMetrics {
            advance_width,
            left_side_bearing,
        });
    }
    for _ in number_of_h_metrics..num_glyphs {
        glyphs.push(GlyphMetrics {
            advance_width: last_advance,
            left_side_bearing: cursor.read_i16()?,
        });
    }
    Ok(glyphs)
}
