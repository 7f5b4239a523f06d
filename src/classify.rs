//! Weight and style classification.
//!
//! The source of truth is a cascade: 'OS/2' when present, then the
//! 'head' macStyle bits, and as a last resort substring heuristics on
//! the sub-family name. Monospace detection follows its own shorter
//! cascade through PANOSE and 'post'.

use crate::FontError;
use crate::tables::{Tag, TableDirectory};
use crate::tables::head::Head;
use crate::tables::os2::Os2;
use crate::tables::post::Post;

/// Standard weight classes on the 0–900 axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Weight {
    Thinest,
    Thin,
    ExtraLight,
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl Weight {
    /// The numeric position on the weight axis, used by the matcher's
    /// distance scoring.
    pub fn to_number(self) -> u16 {
        match self {
            Weight::Thinest => 0,
            Weight::Thin => 100,
            Weight::ExtraLight => 200,
            Weight::Light => 300,
            Weight::Normal => 400,
            Weight::Medium => 500,
            Weight::SemiBold => 600,
            Weight::Bold => 700,
            Weight::ExtraBold => 800,
            Weight::Black => 900,
        }
    }

    /// Rounds an 'OS/2' usWeightClass half-up to the nearest class.
    /// Values beyond the axis clamp to `Black`.
    pub fn from_class(class: u16) -> Self {
        match (u32::from(class) + 50) / 100 {
            0 => Weight::Thinest,
            1 => Weight::Thin,
            2 => Weight::ExtraLight,
            3 => Weight::Light,
            4 => Weight::Normal,
            5 => Weight::Medium,
            6 => Weight::SemiBold,
            7 => Weight::Bold,
            8 => Weight::ExtraBold,
            _ => Weight::Black,
        }
    }
}

/// Slant style of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// What the classifier decided for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub weight: Weight,
    pub style: Style,
    pub is_monospaced: bool,
}

/// Where weight and style are read from, picked once per face.
enum StyleSource<'a> {
    /// 'OS/2' is present; it answers everything.
    WindowsMetrics(Os2),
    /// No 'OS/2'; the 'head' macStyle bits cover bold and italic.
    MacStyle(Head),
    /// Neither table; fall back to the sub-family name, if any.
    SubFamily(Option<&'a str>),
}

impl<'a> StyleSource<'a> {
    fn pick(
        directory: &TableDirectory<'_>,
        sub_family: Option<&'a str>,
    ) -> Result<Self, FontError> {
        if let Some(data) = directory.find(Tag::OS2) {
            return Ok(StyleSource::WindowsMetrics(Os2::parse(data)?));
        }
        if let Some(data) = directory.find(Tag::HEAD) {
            return Ok(StyleSource::MacStyle(Head::parse(data)?));
        }
        Ok(StyleSource::SubFamily(sub_family))
    }
}

/// Runs the classification cascade over the tables of one face.
pub fn classify(
    directory: &TableDirectory<'_>,
    sub_family: Option<&str>,
) -> Result<Classification, FontError> {
    let source = StyleSource::pick(directory, sub_family)?;

    let is_monospaced = match &source {
        StyleSource::WindowsMetrics(os2) => os2.is_monospaced(),
        _ => match directory.find(Tag::POST) {
            Some(data) => Post::parse(data)?.is_fixed_pitch,
            None => false,
        },
    };

    let (weight, style) = match source {
        StyleSource::WindowsMetrics(os2) => {
            let style = if os2.selection.oblique() {
                Style::Oblique
            } else if os2.selection.italic() {
                Style::Italic
            } else {
                Style::Normal
            };
            (Weight::from_class(os2.us_weight_class), style)
        }
        StyleSource::MacStyle(head) => {
            let weight = if head.mac_style & (1 << 0) != 0 {
                Weight::Bold
            } else {
                Weight::Normal
            };
            let style = if head.mac_style & (1 << 1) != 0 {
                Style::Italic
            } else {
                Style::Normal
            };
            (weight, style)
        }
        StyleSource::SubFamily(name) => from_sub_family(name.unwrap_or("")),
    };

    Ok(Classification {
        weight,
        style,
        is_monospaced,
    })
}

/// Case-insensitive substring heuristics over a sub-family name such
/// as "Bold Italic" or "Light Oblique"; first match wins.
fn from_sub_family(name: &str) -> (Weight, Style) {
    let name = name.to_lowercase();
    let contains = |needle: &str| name.contains(needle);

    let weight = if contains("thin") {
        Weight::Thin
    } else if contains("ultra light") || contains("ultralight") || contains("hairline") {
        Weight::Thinest
    } else if contains("extralight") {
        Weight::ExtraLight
    } else if contains("light") {
        Weight::Light
    } else if contains("demi bold") || contains("semibold") {
        Weight::SemiBold
    } else if contains("extrabold") {
        Weight::ExtraBold
    } else if contains("bold") || contains("heavy") {
        Weight::Bold
    } else if contains("medium") {
        Weight::Medium
    } else if contains("black") || contains("negreta") {
        Weight::Black
    } else {
        Weight::Normal
    };

    let style = if contains("italic") {
        Style::Italic
    } else if contains("oblique") {
        Style::Oblique
    } else {
        Style::Normal
    };

    (weight, style)
}
