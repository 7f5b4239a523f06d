use crate::FontError;
use crate::buffer::Cursor;

/// The two values this crate reads from the
/// [PostScript table](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6post.html):
/// the italic angle and the fixed-pitch flag the classifier falls back
/// to when 'OS/2' is absent.
#[derive(Debug, Clone, Copy)]
pub struct Post {
    /// Counter-clockwise slant in 16.16 fixed-point degrees; zero for
    /// upright text.
    pub italic_angle: i32,
    pub is_fixed_pitch: bool,
}

impl Post {
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(4)?; // version
        let italic_angle = cursor.read_i32()?;
        cursor.skip(4)?; // underlinePosition, underlineThickness
        let is_fixed_pitch = cursor.read_u32()? != 0;
        Ok(Self {
            italic_angle,
            is_fixed_pitch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_data(italic_angle: i32, is_fixed_pitch: u32) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&0x0003_0000u32.to_be_bytes()); // version 3.0
        data.extend_from_slice(&italic_angle.to_be_bytes());
        data.extend_from_slice(&[0; 4]); // underlinePosition, underlineThickness
        data.extend_from_slice(&is_fixed_pitch.to_be_bytes());
        data
    }

    #[test]
    fn decodes_fields() {
        // -12.5 degrees in 16.16 fixed point.
        let angle = -(12 << 16) - (1 << 15);
        let post = Post::parse(&post_data(angle, 1)).unwrap();
        assert_eq!(post.italic_angle, angle);
        assert!(post.is_fixed_pitch);

        let post = Post::parse(&post_data(0, 0)).unwrap();
        assert_eq!(post.italic_angle, 0);
        assert!(!post.is_fixed_pitch);
    }
}
