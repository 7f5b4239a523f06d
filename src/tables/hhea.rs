use crate::FontError;
use crate::buffer::Cursor;

/// The vertical metrics and metric count from the
/// [horizontal header](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6hhea.html).
#[derive(Debug, Clone, Copy)]
pub struct Hhea {
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    /// Number of full (advance, bearing) pairs at the front of 'hmtx'.
    pub number_of_h_metrics: u16,
}

impl Hhea {
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(4)?; // version
        let ascender = cursor.read_i16()?;
        let descender = cursor.read_i16()?;
        let line_gap = cursor.read_i16()?;
        // advanceWidthMax, min bearings, xMaxExtent, caret slope and
        // offset, reserved words.
        cursor.skip(22)?;
        if cursor.read_i16()? != 0 {
            // metricDataFormat: only format 0 was ever defined.
            return Err(FontError::UnsupportedFormat);
        }
        let number_of_h_metrics = cursor.read_u16()?;
        Ok(Self {
            ascender,
            descender,
            line_gap,
            number_of_h_metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hhea_data(
        ascender: i16,
        descender: i16,
        line_gap: i16,
        number_of_h_metrics: u16,
    ) -> Vec<u8> {
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

    #[test]
    fn decodes_fields() {
        let hhea = Hhea::parse(&hhea_data(1900, -500, 200, 3)).unwrap();
        assert_eq!(hhea.ascender, 1900);
        assert_eq!(hhea.descender, -500);
        assert_eq!(hhea.line_gap, 200);
        assert_eq!(hhea.number_of_h_metrics, 3);
    }

    #[test]
    fn rejects_unknown_metric_format() {
        let mut data = hhea_data(1900, -500, 200, 3);
        data[33] = 1; // metricDataFormat: 1
        assert!(matches!(
            Hhea::parse(&data),
            Err(FontError::UnsupportedFormat)
        ));
    }
}
