//! A small synthetic font builder: enough of an sfnt writer to
//! exercise the reader end to end without shipping binary fixtures.

#![allow(dead_code)]

const HEAD_MAGIC: u32 = 0x5F0F_3CF5;

/// Assembles an sfnt image from table payloads, keeping the directory
/// sorted by tag the way the format requires.
pub struct FontBuilder {
    tables: Vec<([u8; 4], Vec<u8>)>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn table(mut self, tag: [u8; 4], data: Vec<u8>) -> Self {
        self.tables.push((tag, data));
        self
    }

    /// Builds the font with table offsets relative to `base`, which is
    /// the position this image will occupy in the final file. A
    /// standalone font uses base 0.
    fn build_at(&self, base: usize) -> Vec<u8> {
        let mut tables: Vec<_> = self.tables.iter().collect();
        tables.sort_by_key(|(tag, _)| u32::from_be_bytes(*tag));

        let mut data = Vec::new();
        data.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        data.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        data.extend_from_slice(&[0; 6]); // searchRange, entrySelector, rangeShift
        let mut offset = base + 12 + 16 * tables.len();
        for (tag, payload) in &tables {
            data.extend_from_slice(tag);
            data.extend_from_slice(&[0; 4]); // checksum
            data.extend_from_slice(&(offset as u32).to_be_bytes());
            data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
            offset += payload.len();
        }
        for (_, payload) in &tables {
            data.extend_from_slice(payload);
        }
        data
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_at(0)
    }
}

/// Wraps several fonts into a 'ttcf' collection.
pub fn build_collection(fonts: &[&FontBuilder]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"ttcf");
    data.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    data.extend_from_slice(&(fonts.len() as u32).to_be_bytes());
    let mut images = Vec::new();
    let mut offset = 12 + 4 * fonts.len();
    for font in fonts {
        data.extend_from_slice(&(offset as u32).to_be_bytes());
        let image = font.build_at(offset);
        offset += image.len();
        images.push(image);
    }
    for image in images {
        data.extend_from_slice(&image);
    }
    data
}

pub fn head(units_per_em: u16, bbox: [i16; 4], mac_style: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    data.extend_from_slice(&[0; 8]); // fontRevision, checkSumAdjustment
    data.extend_from_slice(&HEAD_MAGIC.to_be_bytes());
    data.extend_from_slice(&[0; 2]); // flags
    data.extend_from_slice(&units_per_em.to_be_bytes());
    data.extend_from_slice(&[0; 16]); // created, modified
    for value in bbox {
        data.extend_from_slice(&value.to_be_bytes());
    }
    data.extend_from_slice(&mac_style.to_be_bytes());
    data.extend_from_slice(&[0; 10]); // lowestRecPPEM .. glyphDataFormat
    data
}

pub fn hhea(ascender: i16, descender: i16, line_gap: i16, number_of_h_metrics: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    data.extend_from_slice(&ascender.to_be_bytes());
    data.extend_from_slice(&descender.to_be_bytes());
    data.extend_from_slice(&line_gap.to_be_bytes());
    data.extend_from_slice(&[0; 22]); // advanceWidthMax .. reserved
    data.extend_from_slice(&0i16.to_be_bytes()); // metricDataFormat
    data.extend_from_slice(&number_of_h_metrics.to_be_bytes());
    data
}

pub fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0x0000_5000u32.to_be_bytes()); // version 0.5
    data.extend_from_slice(&num_glyphs.to_be_bytes());
    data
}

pub fn hmtx(pairs: &[(u16, i16)], tail_bearings: &[i16]) -> Vec<u8> {
    let mut data = Vec::new();
    for (advance, bearing) in pairs {
        data.extend_from_slice(&advance.to_be_bytes());
        data.extend_from_slice(&bearing.to_be_bytes());
    }
    for bearing in tail_bearings {
        data.extend_from_slice(&bearing.to_be_bytes());
    }
    data
}

pub fn post(italic_angle: i32, is_fixed_pitch: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0x0003_0000u32.to_be_bytes()); // version 3.0
    data.extend_from_slice(&italic_angle.to_be_bytes());
    data.extend_from_slice(&[0; 4]); // underlinePosition, underlineThickness
    data.extend_from_slice(&is_fixed_pitch.to_be_bytes());
    data
}

pub fn os2(weight_class: u16, panose: [u8; 10], fs_selection: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&4u16.to_be_bytes()); // version
    data.extend_from_slice(&[0; 2]); // xAvgCharWidth
    data.extend_from_slice(&weight_class.to_be_bytes());
    data.extend_from_slice(&[0; 26]); // usWidthClass .. sFamilyClass
    data.extend_from_slice(&panose);
    data.extend_from_slice(&[0; 20]); // Unicode ranges, achVendID
    data.extend_from_slice(&fs_selection.to_be_bytes());
    data.extend_from_slice(&[0; 32]); // usFirstCharIndex onwards
    data
}

/// A name table of Windows Unicode records.
pub fn name(records: &[(u16, &str)]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0u16.to_be_bytes()); // format
    data.extend_from_slice(&(records.len() as u16).to_be_bytes());
    let string_offset = 6 + records.len() * 12;
    data.extend_from_slice(&(string_offset as u16).to_be_bytes());
    let mut storage: Vec<u8> = Vec::new();
    for (name_id, text) in records {
        let payload: Vec<u8> = text
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect();
        data.extend_from_slice(&3u16.to_be_bytes()); // platformID: Windows
        data.extend_from_slice(&1u16.to_be_bytes()); // encodingID: Unicode BMP
        data.extend_from_slice(&0x0409u16.to_be_bytes()); // languageID: en-US
        data.extend_from_slice(&name_id.to_be_bytes());
        data.extend_from_slice(&(payload.len() as u16).to_be_bytes());
        data.extend_from_slice(&(storage.len() as u16).to_be_bytes());
        storage.extend_from_slice(&payload);
    }
    data.extend_from_slice(&storage);
    data
}

/// A cmap with one Windows Unicode record and a format-4 subtable.
/// Segments are `(start, end, id_delta, id_range_offset)` and must
/// include the 0xFFFF sentinel.
pub fn cmap(segments: &[(u16, u16, i16, u16)], glyph_array: &[u16]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0u16.to_be_bytes()); // version
    data.extend_from_slice(&1u16.to_be_bytes()); // numTables
    data.extend_from_slice(&3u16.to_be_bytes()); // platformID: Windows
    data.extend_from_slice(&1u16.to_be_bytes()); // encodingID: Unicode BMP
    data.extend_from_slice(&12u32.to_be_bytes()); // subtable offset

    let seg_count = segments.len();
    let length = 16 + 8 * seg_count + 2 * glyph_array.len();
    data.extend_from_slice(&4u16.to_be_bytes()); // format
    data.extend_from_slice(&(length as u16).to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes()); // language
    data.extend_from_slice(&((seg_count * 2) as u16).to_be_bytes());
    data.extend_from_slice(&[0; 6]); // searchRange, entrySelector, rangeShift
    for (_, end, _, _) in segments {
        data.extend_from_slice(&end.to_be_bytes());
    }
    data.extend_from_slice(&0u16.to_be_bytes()); // reservedPad
    for (start, _, _, _) in segments {
        data.extend_from_slice(&start.to_be_bytes());
    }
    for (_, _, delta, _) in segments {
        data.extend_from_slice(&delta.to_be_bytes());
    }
    for (_, _, _, range_offset) in segments {
        data.extend_from_slice(&range_offset.to_be_bytes());
    }
    for glyph in glyph_array {
        data.extend_from_slice(&glyph.to_be_bytes());
    }
    data
}

pub const SENTINEL_SEGMENT: (u16, u16, i16, u16) = (0xFFFF, 0xFFFF, 1, 0);

/// A complete four-glyph font: 'A'..'C' map to glyphs 1..3, the
/// vertical metrics are chosen so `ascender - descender` equals the
/// em size, and classification comes from 'OS/2'.
pub fn sample_font(
    family: &str,
    sub_family: &str,
    weight_class: u16,
    fs_selection: u16,
) -> FontBuilder {
    let full = format!("{family} {sub_family}");
    let postscript = format!("{}-{}", family.replace(' ', ""), sub_family.replace(' ', ""));
    FontBuilder::new()
        .table(*b"head", head(2048, [-100, -200, 1500, 1800], 0))
        .table(*b"hhea", hhea(1638, -410, 67, 3))
        .table(*b"maxp", maxp(4))
        .table(*b"hmtx", hmtx(&[(1229, 20), (1024, 30), (512, 40)], &[50]))
        .table(*b"post", post(0, 0))
        .table(*b"OS/2", os2(weight_class, [2, 0, 0, 3, 0, 0, 0, 0, 0, 0], fs_selection))
        .table(
            *b"name",
            name(&[
                (1, family),
                (2, sub_family),
                (4, &full),
                (6, &postscript),
            ]),
        )
        .table(
            *b"cmap",
            cmap(&[(0x41, 0x43, -0x40, 0), SENTINEL_SEGMENT], &[]),
        )
}
