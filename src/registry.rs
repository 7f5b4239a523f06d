use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::FontError;
use crate::classify::{Style, Weight};
use crate::face::Face;
use crate::loader;
use crate::tables::FontIndex;

/// A lightweight descriptor for one font discovered on the system.
/// The parsed face is absent until a match asks for it.
#[derive(Debug)]
pub struct KnownFont {
    pub path: PathBuf,
    pub font_index: u32,
    pub family_name: String,
    pub weight: Weight,
    pub style: Style,
    parsed: Option<Arc<Face>>,
}

/// A family mismatch dominates everything else.
const SCORE_FAMILY_MISMATCH: u32 = 100_000;
/// An italic face standing in for an oblique request, or the reverse.
const SCORE_SLANT_SUBSTITUTION: u32 = 1;
/// Any other style mismatch.
const SCORE_STYLE_MISMATCH: u32 = 10_000;

fn match_score(family_lower: &str, weight: Weight, style: Style, known: &KnownFont) -> u32 {
    let mut score = 0;
    if known.family_name.to_lowercase() != family_lower {
        score += SCORE_FAMILY_MISMATCH;
    }
    score +=
        (i32::from(weight.to_number()) - i32::from(known.weight.to_number())).unsigned_abs();
    if style != known.style {
        score += match (style, known.style) {
            (Style::Italic, Style::Oblique) | (Style::Oblique, Style::Italic) => {
                SCORE_SLANT_SUBSTITUTION
            }
            _ => SCORE_STYLE_MISMATCH,
        };
    }
    score
}

type MatchKey = (String, Weight, Style);

/// The process-wide font catalog: descriptors for every discovered
/// font, and a cache of resolved matches.
///
/// Descriptors live for the registry's lifetime; parsed faces come
/// and go on demand. Matching is deterministic: the lowest-scoring
/// descriptor wins and ties go to the first one registered.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<KnownFont>,
    matched: FxHashMap<MatchKey, Arc<Face>>,
}

impl FontRegistry {
    /// An empty registry. Fonts are added with
    /// [`register_font_file`](Self::register_font_file).
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated from every platform font directory.
    /// Files that fail to parse are logged and skipped; a system with
    /// no fonts at all still yields a (useless but valid) registry.
    pub fn scan_system_fonts() -> Self {
        let mut registry = Self::new();
        for directory in loader::font_directories() {
            registry.register_fonts_in(&directory);
        }
        log::debug!("discovered {} system fonts", registry.fonts.len());
        registry
    }

    /// Registers every font file under `directory`, skipping the ones
    /// that fail to parse.
    pub fn register_fonts_in(&mut self, directory: &Path) {
        for path in loader::walk(directory) {
            if !loader::has_font_extension(&path) {
                continue;
            }
            if let Err(error) = self.register_font_file(&path) {
                log::warn!("skipping font file {}: {error}", path.display());
            }
        }
    }

    /// Registers every font contained in one file.
    pub fn register_font_file(&mut self, path: &Path) -> Result<(), FontError> {
        let data = Arc::new(loader::read_all(path)?);
        let index = FontIndex::parse(&data)?;
        for font_index in 0..index.font_count() {
            let face = Face::parse(data.clone(), font_index)?;
            let Some(family_name) = face.family_name() else {
                log::warn!(
                    "skipping unnamed font {} #{font_index}",
                    path.display()
                );
                continue;
            };
            self.fonts.push(KnownFont {
                path: path.to_path_buf(),
                font_index,
                family_name: family_name.to_owned(),
                weight: face.weight(),
                style: face.style(),
                parsed: None,
            });
        }
        Ok(())
    }

    /// The descriptors, in registration order.
    pub fn known_fonts(&self) -> &[KnownFont] {
        &self.fonts
    }

    /// Resolves a `(family, weight, style)` request to the best
    /// physical font.
    ///
    /// Scoring: +100000 for a family mismatch (case-insensitive),
    /// plus the absolute weight distance, plus 1 for an
    /// italic↔oblique substitution or 10000 for any other style
    /// mismatch. The face never changes for repeated requests: the
    /// resolved match is cached, and ties are broken by registration
    /// order.
    ///
    /// Glyph coverage is deliberately not considered; callers pick a
    /// family that has the characters they need.
    pub fn find_best_match(
        &mut self,
        family: &str,
        weight: Weight,
        style: Style,
    ) -> Result<Arc<Face>, FontError> {
        let key = (family.to_lowercase(), weight, style);
        if let Some(face) = self.matched.get(&key) {
            return Ok(face.clone());
        }

        let mut best: Option<(u32, usize)> = None;
        for (index, known) in self.fonts.iter().enumerate() {
            let score = match_score(&key.0, weight, style, known);
            if best.is_none_or(|(best_score, _)| score < best_score) {
                best = Some((score, index));
            }
        }
        let (_, index) = best.ok_or(FontError::NoFontAvailable)?;

        let face = self.parsed_face(index)?;
        self.matched.insert(key, face.clone());
        Ok(face)
    }

    /// Returns the parsed face for descriptor `index`, parsing and
    /// memoizing it on first use.
    fn parsed_face(&mut self, index: usize) -> Result<Arc<Face>, FontError> {
        let known = &mut self.fonts[index];
        if let Some(face) = &known.parsed {
            return Ok(face.clone());
        }
        let data = Arc::new(loader::read_all(&known.path)?);
        let face = Arc::new(Face::parse(data, known.font_index)?);
        known.parsed = Some(face.clone());
        Ok(face)
    }

    /// Drops the parsed faces of every descriptor whose family matches
    /// (case-insensitively), along with the cache entries holding
    /// them. The descriptors stay; a later match re-parses from disk.
    pub fn release_parsed_font(&mut self, family: &str) {
        let family_lower = family.to_lowercase();
        let mut released = Vec::new();
        for known in &mut self.fonts {
            if known.family_name.to_lowercase() == family_lower {
                if let Some(face) = known.parsed.take() {
                    released.push(face);
                }
            }
        }
        self.matched.retain(|_, cached| {
            !released.iter().any(|face| Arc::ptr_eq(face, cached))
        });
    }
}
