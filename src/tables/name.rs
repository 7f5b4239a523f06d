use crate::FontError;
use crate::buffer::{Cursor, UnexpectedEnd};

/// [Name identifiers](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6name.html)
/// for the records this crate cares about.
pub mod name_id {
    pub const COPYRIGHT_NOTICE: u16 = 0;
    pub const FONT_FAMILY: u16 = 1;
    pub const FONT_SUBFAMILY: u16 = 2;
    pub const UNIQUE_IDENTIFIER: u16 = 3;
    pub const FULL_NAME: u16 = 4;
    pub const VERSION: u16 = 5;
    pub const POSTSCRIPT_NAME: u16 = 6;
    pub const TRADEMARK: u16 = 7;
    pub const MANUFACTURER: u16 = 8;
    pub const DESIGNER: u16 = 9;
    pub const DESCRIPTION: u16 = 10;
    pub const PREFERRED_FAMILY: u16 = 16;
    pub const PREFERRED_SUBFAMILY: u16 = 17;
}

/// One 12-byte record from the naming table.
#[derive(Debug, Clone, Copy)]
struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    name_id: u16,
    length: u16,
    offset: u16,
}

const PLATFORM_MACINTOSH: u16 = 1;

/// The parsed [name table](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6name.html):
/// the record list plus the string storage area the records point into.
pub struct Name<'a> {
    records: Vec<NameRecord>,
    storage: &'a [u8],
}

impl<'a> Name<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        if cursor.read_u16()? > 1 {
            return Err(FontError::UnsupportedFormat);
        }
        let count = cursor.read_u16()?;
        let string_offset = cursor.read_u16()?;

        let mut records = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let platform_id = cursor.read_u16()?;
            let encoding_id = cursor.read_u16()?;
            cursor.skip(2)?; // languageID
            records.push(NameRecord {
                platform_id,
                encoding_id,
                name_id: cursor.read_u16()?,
                length: cursor.read_u16()?,
                offset: cursor.read_u16()?,
            });
        }
        let storage = data
            .get(usize::from(string_offset)..)
            .ok_or(UnexpectedEnd)?;
        Ok(Self { records, storage })
    }

    /// Decodes the first record carrying the requested name ID, or
    /// `None` when the font has no such record.
    pub fn resolve(&self, name_id: u16) -> Result<Option<String>, FontError> {
        for record in &self.records {
            if record.name_id != name_id {
                continue;
            }
            let start = usize::from(record.offset);
            let end = start + usize::from(record.length);
            let bytes = self.storage.get(start..end).ok_or(UnexpectedEnd)?;
            let decoded = match (record.platform_id, record.encoding_id) {
                (PLATFORM_MACINTOSH, 0) => decode_mac_roman(bytes),
                _ => decode_utf16_be(bytes)?,
            };
            return Ok(Some(decoded));
        }
        Ok(None)
    }

    /// The family name, preferring the typographic ("preferred")
    /// record over the legacy one.
    pub fn family(&self) -> Result<Option<String>, FontError> {
        match self.resolve(name_id::PREFERRED_FAMILY)? {
            Some(family) => Ok(Some(family)),
            None => self.resolve(name_id::FONT_FAMILY),
        }
    }

    /// The sub-family (style) name, with the same preference order as
    /// [`family`](Self::family).
    pub fn sub_family(&self) -> Result<Option<String>, FontError> {
        match self.resolve(name_id::PREFERRED_SUBFAMILY)? {
            Some(sub_family) => Ok(Some(sub_family)),
            None => self.resolve(name_id::FONT_SUBFAMILY),
        }
    }
}

/// The upper half of the MacRoman code page; the lower half is ASCII.
const MAC_ROMAN: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 8249, 8250, 64257, 64258, 8225, 183,
    8218, 8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212,
    63743, 210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733,
    731, 711,
];

fn decode_mac_roman(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| {
            if byte < 0x80 {
                byte as char
            } else {
                char::from_u32(u32::from(MAC_ROMAN[usize::from(byte) - 0x80]))
                    .unwrap_or('\u{FFFD}')
            }
        })
        .collect()
}

fn decode_utf16_be(bytes: &[u8]) -> Result<String, FontError> {
    if bytes.len() % 2 != 0 {
        return Err(FontError::BadName);
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16_lossy(&units))
}
