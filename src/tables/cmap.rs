use rustc_hash::FxHashMap;

use crate::FontError;
use crate::buffer::{Cursor, UnexpectedEnd, read_u16_at};

const PLATFORM_WINDOWS: u16 = 3;
const FORMAT_SEGMENT_MAPPING: u16 = 4;

/// The decoded character map of one font: every BMP codepoint the
/// chosen subtable covers, mapped to its glyph index.
///
/// Built from the first Windows encoding record (platform 3, encoding
/// 0, 1 or 4) whose subtable must be
/// [format 4](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6cmap.html),
/// the segment-mapping format virtually every TrueType font carries.
#[derive(Debug, Default)]
pub struct CharMap {
    map: FxHashMap<u32, u16>,
    ranges: Vec<(u32, u32)>,
    max_codepoint: u32,
}

impl CharMap {
    /// Walks the encoding records and decodes the selected subtable.
    /// `num_glyphs` bounds the glyph indices the map may produce.
    pub fn parse(data: &[u8], num_glyphs: u16) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(2)?; // version
        let num_tables = cursor.read_u16()?;

        let mut subtable_offset = None;
        for _ in 0..num_tables {
            let platform_id = cursor.read_u16()?;
            let encoding_id = cursor.read_u16()?;
            let offset = cursor.read_u32()?;
            if platform_id == PLATFORM_WINDOWS && matches!(encoding_id, 0 | 1 | 4) {
                subtable_offset = Some(offset);
                break;
            }
        }
        let Some(offset) = subtable_offset else {
            // No Windows Unicode encoding record at all.
            return Err(FontError::UnsupportedFormat);
        };
        let subtable = data.get(offset as usize..).ok_or(UnexpectedEnd)?;
        Self::parse_format4(subtable, num_glyphs)
    }

    fn parse_format4(subtable: &[u8], num_glyphs: u16) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(subtable);
        let format = cursor.read_u16()?;
        if format != FORMAT_SEGMENT_MAPPING {
            return Err(FontError::UnsupportedCmapFormat(format));
        }
        cursor.skip(4)?; // length, language
        let seg_count_x2 = cursor.read_u16()?;
        if seg_count_x2 % 2 != 0 {
            return Err(FontError::CorruptCmap);
        }
        let seg_count = usize::from(seg_count_x2 / 2);
        cursor.skip(6)?; // searchRange, entrySelector, rangeShift

        let mut end_codes = Vec::with_capacity(seg_count);
        for _ in 0..seg_count {
            end_codes.push(cursor.read_u16()?);
        }
        cursor.skip(2)?; // reservedPad
        let mut start_codes = Vec::with_capacity(seg_count);
        for _ in 0..seg_count {
            start_codes.push(cursor.read_u16()?);
        }
        let mut id_deltas = Vec::with_capacity(seg_count);
        for _ in 0..seg_count {
            id_deltas.push(cursor.read_i16()?);
        }
        // idRangeOffset values are byte distances from the offset
        // array itself, so remember where it starts.
        let anchor = cursor.pos();
        let mut id_range_offsets = Vec::with_capacity(seg_count);
        for _ in 0..seg_count {
            id_range_offsets.push(cursor.read_u16()?);
        }

        let mut charmap = CharMap::default();
        for segment in 0..seg_count {
            let start = u32::from(start_codes[segment]);
            let end = u32::from(end_codes[segment]);
            if start > end {
                continue;
            }
            charmap.ranges.push((start, end + 1));

            let id_range_offset = id_range_offsets[segment];
            if id_range_offset % 2 != 0 {
                return Err(FontError::CorruptCmap);
            }
            let id_delta = id_deltas[segment] as u16;
            for codepoint in start..=end {
                let glyph = if id_range_offset == 0 {
                    (codepoint as u16).wrapping_add(id_delta)
                } else {
                    let pos = anchor
                        + 2 * segment
                        + 2 * (codepoint - start) as usize
                        + usize::from(id_range_offset);
                    let value = read_u16_at(subtable, pos)?;
                    if value == 0 {
                        // Missing glyph inside a sparse segment.
                        continue;
                    }
                    value.wrapping_add(id_delta)
                };
                if glyph >= num_glyphs {
                    return Err(FontError::CorruptCmap);
                }
                charmap.map.insert(codepoint, glyph);
                charmap.max_codepoint = charmap.max_codepoint.max(codepoint);
            }
        }
        Ok(charmap)
    }

    /// The glyph index for `codepoint`, or `None` when the map does
    /// not cover it. A mapped codepoint may still resolve to glyph 0.
    pub fn glyph_index(&self, codepoint: u32) -> Option<u16> {
        self.map.get(&codepoint).copied()
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.map.contains_key(&codepoint)
    }

    /// Every segment the subtable covered, as half-open
    /// `[start, stop)` codepoint ranges.
    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    pub fn max_codepoint(&self) -> u32 {
        self.max_codepoint
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u16)> + '_ {
        self.map.iter().map(|(&codepoint, &glyph)| (codepoint, glyph))
    }
}
