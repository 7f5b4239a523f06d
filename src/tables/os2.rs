use crate::FontError;
use crate::buffer::Cursor;

/// Bit accessors for the
/// [fsSelection](https://learn.microsoft.com/en-us/typography/opentype/spec/os2#fsselection)
/// word.
#[derive(Debug, Clone, Copy)]
pub struct SelectionFlags(pub u16);

impl SelectionFlags {
    pub fn italic(self) -> bool {
        self.0 & (1 << 0) != 0
    }

    pub fn oblique(self) -> bool {
        self.0 & (1 << 9) != 0
    }
}

/// The classification inputs from the 'OS/2' table: weight class, the
/// PANOSE vector and the style selection flags.
#[derive(Debug, Clone, Copy)]
pub struct Os2 {
    pub us_weight_class: u16,
    pub panose: [u8; 10],
    pub selection: SelectionFlags,
}

impl Os2 {
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(4)?; // version, xAvgCharWidth
        let us_weight_class = cursor.read_u16()?;
        // usWidthClass, fsType, the ten y-metrics, sFamilyClass.
        cursor.skip(26)?;
        let mut panose = [0; 10];
        panose.copy_from_slice(cursor.take(10)?);
        cursor.skip(20)?; // ulUnicodeRange1..4, achVendID
        let selection = SelectionFlags(cursor.read_u16()?);
        Ok(Self {
            us_weight_class,
            panose,
            selection,
        })
    }

    /// PANOSE family kind 2 (Latin text) with proportion 9 means
    /// monospaced.
    pub fn is_monospaced(&self) -> bool {
        self.panose[0] == 2 && self.panose[3] == 9
    }
}
