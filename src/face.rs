use std::cell::OnceCell;
use std::sync::Arc;

use crate::FontError;
use crate::classify::{Classification, Style, Weight, classify};
use crate::tables::cmap::CharMap;
use crate::tables::head::Head;
use crate::tables::hhea::Hhea;
use crate::tables::hmtx::{self, GlyphMetrics};
use crate::tables::maxp::Maxp;
use crate::tables::name::{Name, name_id};
use crate::tables::post::Post;
use crate::tables::{FontIndex, TableDirectory, Tag};

/// The baselines a renderer can align text to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Baseline {
    Top,
    Hanging,
    Middle,
    Alphabetic,
    Bottom,
}

/// Everything the one-shot metrics parse produces: the five metric
/// tables plus the character map, decoded together.
#[derive(Debug)]
struct ParsedMetrics {
    units_per_em: u16,
    bbox: [i16; 4],
    ascender: i16,
    descender: i16,
    line_gap: i16,
    /// 16.16 fixed-point degrees.
    italic_angle: i32,
    glyphs: Vec<GlyphMetrics>,
    charmap: CharMap,
}

impl ParsedMetrics {
    fn parse(data: &[u8], table_offset: u32) -> Result<Self, FontError> {
        let directory = TableDirectory::parse(data, table_offset)?;
        let head = Head::parse(directory.get(Tag::HEAD)?)?;
        let hhea = Hhea::parse(directory.get(Tag::HHEA)?)?;
        let maxp = Maxp::parse(directory.get(Tag::MAXP)?)?;
        let glyphs = hmtx::parse(
            directory.get(Tag::HMTX)?,
            hhea.number_of_h_metrics,
            maxp.num_glyphs,
        )?;
        let post = Post::parse(directory.get(Tag::POST)?)?;
        let charmap = CharMap::parse(directory.get(Tag::CMAP)?, maxp.num_glyphs)?;
        Ok(Self {
            units_per_em: head.units_per_em,
            bbox: head.bbox,
            ascender: hhea.ascender,
            descender: hhea.descender,
            line_gap: hhea.line_gap,
            italic_angle: post.italic_angle,
            glyphs,
            charmap,
        })
    }
}

/// One font of a font file, ready to answer metric queries.
///
/// Opening a face decodes its names and classification, which is what
/// the registry needs to build descriptors cheaply. The metric tables
/// and the character map parse once, on the first query that needs
/// them; after that every query is a lookup.
///
/// The face shares ownership of the raw file image, so table slices
/// can alias it without copies for as long as any face is alive.
pub struct Face {
    data: Arc<Vec<u8>>,
    font_index: u32,
    table_offset: u32,
    family_name: Option<String>,
    sub_family_name: Option<String>,
    full_name: Option<String>,
    postscript_name: Option<String>,
    classification: Classification,
    metrics: OnceCell<ParsedMetrics>,
}

impl Face {
    /// Opens font `font_index` of a file image.
    pub fn parse(data: Arc<Vec<u8>>, font_index: u32) -> Result<Self, FontError> {
        let index = FontIndex::parse(&data)?;
        let table_offset = index
            .offset_for(font_index)
            .ok_or(FontError::FaceIndexOutOfBounds)?;
        let directory = TableDirectory::parse(&data, table_offset)?;

        let (family_name, sub_family_name, full_name, postscript_name) =
            match directory.find(Tag::NAME) {
                Some(name_data) => {
                    let name = Name::parse(name_data)?;
                    (
                        name.family()?,
                        name.sub_family()?,
                        name.resolve(name_id::FULL_NAME)?,
                        name.resolve(name_id::POSTSCRIPT_NAME)?,
                    )
                }
                None => (None, None, None, None),
            };
        let classification = classify(&directory, sub_family_name.as_deref())?;

        Ok(Self {
            data,
            font_index,
            table_offset,
            family_name,
            sub_family_name,
            full_name,
            postscript_name,
            classification,
            metrics: OnceCell::new(),
        })
    }

    /// Runs the one-shot metrics parse, or returns the already parsed
    /// state. The transition happens at most once per face.
    fn metrics(&self) -> Result<&ParsedMetrics, FontError> {
        if let Some(metrics) = self.metrics.get() {
            return Ok(metrics);
        }
        let parsed = ParsedMetrics::parse(&self.data, self.table_offset)?;
        Ok(self.metrics.get_or_init(|| parsed))
    }

    pub fn font_index(&self) -> u32 {
        self.font_index
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    pub fn sub_family_name(&self) -> Option<&str> {
        self.sub_family_name.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn postscript_name(&self) -> Option<&str> {
        self.postscript_name.as_deref()
    }

    pub fn weight(&self) -> Weight {
        self.classification.weight
    }

    pub fn style(&self) -> Style {
        self.classification.style
    }

    pub fn is_monospaced(&self) -> bool {
        self.classification.is_monospaced
    }

    /// The union of all glyph bounding boxes: xMin, yMin, xMax, yMax.
    pub fn bbox(&self) -> Result<[i16; 4], FontError> {
        Ok(self.metrics()?.bbox)
    }

    pub fn units_per_em(&self) -> Result<u16, FontError> {
        Ok(self.metrics()?.units_per_em)
    }

    /// `1 / units_per_em`, the factor that scales design units to em
    /// space.
    pub fn em_reciprocal(&self) -> Result<f32, FontError> {
        Ok(1.0 / f32::from(self.metrics()?.units_per_em))
    }

    pub fn ascent(&self) -> Result<i16, FontError> {
        Ok(self.metrics()?.ascender)
    }

    /// Conventionally negative.
    pub fn descent(&self) -> Result<i16, FontError> {
        Ok(self.metrics()?.descender)
    }

    pub fn line_gap(&self) -> Result<i16, FontError> {
        Ok(self.metrics()?.line_gap)
    }

    /// The default line-to-line distance:
    /// `ascender - descender + line_gap`.
    pub fn line_height(&self) -> Result<i32, FontError> {
        let metrics = self.metrics()?;
        Ok(i32::from(metrics.ascender) - i32::from(metrics.descender)
            + i32::from(metrics.line_gap))
    }

    /// The italic angle in degrees, counter-clockwise from vertical.
    pub fn italic_angle(&self) -> Result<f32, FontError> {
        Ok(self.metrics()?.italic_angle as f32 / 65536.0)
    }

    /// The offset of a baseline from the alphabetic baseline, in
    /// design units, normalized so ascender-to-descender spans one em.
    ///
    /// The hanging baseline is approximated by the ascent; resolving
    /// it properly would need the 'BASE' table.
    pub fn baseline_offset(&self, baseline: Baseline) -> Result<f32, FontError> {
        let metrics = self.metrics()?;
        let ascender = f32::from(metrics.ascender);
        let descender = f32::from(metrics.descender);
        let units_per_em = f32::from(metrics.units_per_em);
        let actual = ascender - descender;
        Ok(match baseline {
            Baseline::Top => ascender * units_per_em / actual,
            Baseline::Hanging => ascender,
            Baseline::Middle => 0.5 * (ascender + descender) * units_per_em / actual,
            Baseline::Alphabetic => 0.0,
            Baseline::Bottom => descender * units_per_em / actual,
        })
    }

    pub fn glyph_count(&self) -> Result<u16, FontError> {
        Ok(self.metrics()?.glyphs.len() as u16)
    }

    /// Whether the character map covers `c`. A covered codepoint may
    /// still map to glyph 0; coverage is membership, not renderability.
    pub fn has_glyph(&self, c: char) -> Result<bool, FontError> {
        Ok(self.metrics()?.charmap.contains(c as u32))
    }

    /// The glyph index for `c`, with 0 (the missing-glyph slot) for
    /// anything the character map does not cover.
    pub fn glyph_index(&self, c: char) -> Result<u16, FontError> {
        Ok(self
            .metrics()?
            .charmap
            .glyph_index(c as u32)
            .unwrap_or(0))
    }

    /// The glyph to render for `c`, falling back through the
    /// replacement character, DEL, `?` and space before settling on
    /// glyph 0. Fails with [`FontError::EmptyFont`] when the font has
    /// no glyphs at all.
    pub fn glyph_for(&self, c: char) -> Result<u16, FontError> {
        let metrics = self.metrics()?;
        if metrics.glyphs.is_empty() {
            return Err(FontError::EmptyFont);
        }
        for candidate in [c, '\u{FFFD}', '\u{7F}', '?', ' '] {
            if let Some(glyph) = metrics.charmap.glyph_index(candidate as u32) {
                return Ok(glyph);
            }
        }
        Ok(0)
    }

    fn glyph_metrics(&self, c: char) -> Result<GlyphMetrics, FontError> {
        let metrics = self.metrics()?;
        let glyph = metrics.charmap.glyph_index(c as u32).unwrap_or(0);
        metrics
            .glyphs
            .get(usize::from(glyph))
            .copied()
            .ok_or(FontError::EmptyFont)
    }

    pub fn left_side_bearing(&self, c: char) -> Result<i16, FontError> {
        Ok(self.glyph_metrics(c)?.left_side_bearing)
    }

    pub fn horizontal_advance(&self, c: char) -> Result<u16, FontError> {
        Ok(self.glyph_metrics(c)?.advance_width)
    }

    /// The advance of `text` in design units: the sum of per-codepoint
    /// advances, with unmapped codepoints contributing the
    /// missing-glyph advance.
    pub fn measure_text(&self, text: &str) -> Result<u32, FontError> {
        let mut width = 0u32;
        for c in text.chars() {
            width += u32::from(self.horizontal_advance(c)?);
        }
        Ok(width)
    }

    /// The codepoint ranges the character map covers, as half-open
    /// `[start, stop)` pairs.
    pub fn char_ranges(&self) -> Result<&[(u32, u32)], FontError> {
        Ok(self.metrics()?.charmap.ranges())
    }

    pub fn max_codepoint(&self) -> Result<u32, FontError> {
        Ok(self.metrics()?.charmap.max_codepoint())
    }
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face")
            .field("font_index", &self.font_index)
            .field("family_name", &self.family_name)
            .field("sub_family_name", &self.sub_family_name)
            .field("weight", &self.classification.weight)
            .field("style", &self.classification.style)
            .field("parsed", &self.metrics.get().is_some())
            .finish()
    }
}
