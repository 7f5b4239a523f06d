use crate::FontError;
use crate::buffer::Cursor;

/// The glyph count from the maximum profile table. Nothing else in
/// 'maxp' matters for metrics.
#[derive(Debug, Clone, Copy)]
pub struct Maxp {
    pub num_glyphs: u16,
}

impl Maxp {
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(4)?; // version
        let num_glyphs = cursor.read_u16()?;
        Ok(Self { num_glyphs })
    }
}
