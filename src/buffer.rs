use thiserror::Error;

/// The error produced when a read or skip runs past the end of the data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unexpected end of data")]
pub struct UnexpectedEnd;

macro_rules! impl_read {
    ($fn_name:ident, $typ:ty) => {
        /// Reads a big-endian value and advances past it.
        pub fn $fn_name(&mut self) -> Result<$typ, UnexpectedEnd> {
            let bytes = self.take(size_of::<$typ>())?;
            Ok(<$typ>::from_be_bytes(bytes.try_into().unwrap()))
        }
    };
}

/// A positioned, read-only view over a byte slice.
///
/// Every multi-byte read is big-endian, MSB first; signed reads are
/// two's complement. This is the only type in the crate that touches
/// raw bytes. Tables hand their slices to a `Cursor` and read fields
/// through it.
///
/// The cursor borrows the underlying buffer, so table slices stay
/// aliased views into the original file image; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The current offset from the start of the underlying slice.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advances the position by `n` bytes without reading them.
    pub fn skip(&mut self, n: usize) -> Result<(), UnexpectedEnd> {
        self.take(n).map(|_| ())
    }

    /// Consumes the next `n` bytes and returns them as a slice of the
    /// underlying buffer.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], UnexpectedEnd> {
        let end = self.pos.checked_add(n).ok_or(UnexpectedEnd)?;
        let bytes = self.data.get(self.pos..end).ok_or(UnexpectedEnd)?;
        self.pos = end;
        Ok(bytes)
    }

    impl_read!(read_u8, u8);
    impl_read!(read_u16, u16);
    impl_read!(read_u32, u32);
    impl_read!(read_u64, u64);
    impl_read!(read_i8, i8);
    impl_read!(read_i16, i16);
    impl_read!(read_i32, i32);
    impl_read!(read_i64, i64);

    /// Reads four big-endian bytes as an IEEE-754 single.
    pub fn read_f32(&mut self) -> Result<f32, UnexpectedEnd> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads eight big-endian bytes as an IEEE-754 double.
    pub fn read_f64(&mut self) -> Result<f64, UnexpectedEnd> {
        Ok(f64::from_bits(self.read_u64()?))
    }
}

/// Reads a big-endian `u16` at an absolute offset, without a cursor.
///
/// The cmap format-4 glyph lookup computes byte addresses from segment
/// arithmetic and reads single values at them; going through this
/// helper keeps those reads bounds-checked.
pub fn read_u16_at(data: &[u8], pos: usize) -> Result<u16, UnexpectedEnd> {
    let end = pos.checked_add(2).ok_or(UnexpectedEnd)?;
    let bytes = data.get(pos..end).ok_or(UnexpectedEnd)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}
