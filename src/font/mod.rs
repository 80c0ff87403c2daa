//! Fonts, font sources, and symbol maps.
//!
//! A [`Font`] is owned by a [`FontCollection`] inside the [`FontStore`];
//! selection state only holds weak references to it. Fonts are either one
//! of the two procedural stick fonts or a catalog entry describing an
//! outline font whose program is interpreted elsewhere.

mod catalog;
mod collection;

pub use catalog::{CatalogEntry, CatalogLoader, SourceLoader};
pub use collection::{FontCollection, FontLookup, FontStore};

use std::fmt;

use crate::params::{FontSelectionParameters, symset};
use crate::stick::charset::HpglCharset;
use crate::stick::{CHAR_WIDTH, StickFont, StickFontKind};

/// Typeface number of the stick font.
pub const STICK_TYPEFACE: u16 = 48;

/// Typeface number of the arc font.
pub const ARC_TYPEFACE: u16 = 50;

/// Centipoints per point.
const CP_PER_POINT: f64 = 100.0;

/// Where the font program lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataStorage {
    /// Resident in the printer.
    Internal,
    /// Downloaded and surviving printer resets.
    Permanent,
    /// Downloaded and dropped on printer reset.
    Temporary,
    Cartridge(u8),
    Simm(u8),
}

impl DataStorage {
    /// The font source that owns fonts stored here.
    pub fn source(self) -> FontSource {
        match self {
            Self::Internal => FontSource::Internal,
            Self::Permanent | Self::Temporary => FontSource::Soft,
            Self::Cartridge(_) => FontSource::Cartridge,
            Self::Simm(_) => FontSource::Simm,
        }
    }
}

/// A job-language font source.
///
/// Numbered banks (`C1`, `C2`, `M1`, ...) collapse into their family: the
/// bootstrap treats all cartridges, or all SIMMs, as one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSource {
    Internal,
    Soft,
    Cartridge,
    Simm,
}

impl FontSource {
    /// Parse a `FONTSOURCE` value such as `"I"`, `"S"`, `"C1"` or `"M"`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let source = match chars.next()?.to_ascii_uppercase() {
            'I' => Self::Internal,
            'S' => Self::Soft,
            'C' => Self::Cartridge,
            'M' => Self::Simm,
            _ => return None,
        };
        chars.all(|c| c.is_ascii_digit()).then_some(source)
    }

    pub fn letter(self) -> char {
        match self {
            Self::Internal => 'I',
            Self::Soft => 'S',
            Self::Cartridge => 'C',
            Self::Simm => 'M',
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How glyphs of a font are produced.
#[derive(Debug, Clone, Copy)]
pub enum FontKind {
    /// Procedural stick or arc font drawn by this crate.
    Stick(StickFont),
    /// Outline font described by the catalog; rendered by the host.
    Outline,
}

/// One installed font.
#[derive(Debug, Clone)]
pub struct Font {
    /// Numeric id for `ESC ( # X` selection; built-in fonts have none.
    pub id: Option<u32>,
    pub name: String,
    /// Characteristics the font advertises.
    pub params: FontSelectionParameters,
    pub storage: DataStorage,
    /// Scalable fonts take pitch and height from the request.
    pub scalable: bool,
    pub kind: FontKind,
    /// Symbol sets the font can be mapped to; empty means any.
    pub symbol_sets: Vec<u16>,
    /// Advance of the space glyph as a fraction of the point size.
    pub space_advance: f64,
}

impl Font {
    /// A resident stick or arc font.
    pub fn builtin_stick(font: StickFont) -> Self {
        let (name, typeface, proportional, pjl) = match font.kind() {
            StickFontKind::Stick => ("Stick", STICK_TYPEFACE, false, 0),
            StickFontKind::Arc => ("Arc", ARC_TYPEFACE, true, 1),
        };
        Self {
            id: None,
            name: name.to_owned(),
            params: FontSelectionParameters {
                proportional_spacing: proportional,
                typeface_family: typeface,
                pjl_font_number: pjl,
                ..FontSelectionParameters::default()
            },
            storage: DataStorage::Internal,
            scalable: true,
            kind: FontKind::Stick(font),
            symbol_sets: Vec::new(),
            space_advance: CHAR_WIDTH,
        }
    }

    pub fn stick_font(&self) -> Option<&StickFont> {
        match &self.kind {
            FontKind::Stick(f) => Some(f),
            FontKind::Outline => None,
        }
    }

    pub fn source(&self) -> FontSource {
        self.storage.source()
    }

    pub fn supports_symbol_set(&self, symbol_set: u16) -> bool {
        self.symbol_sets.is_empty() || self.symbol_sets.contains(&symbol_set)
    }

    /// Symbol map for `requested`, or the font's own set if unsupported.
    pub fn symbol_map(&self, requested: u16) -> SymbolMap {
        if self.supports_symbol_set(requested) {
            SymbolMap::from_symbol_set(requested)
        } else {
            SymbolMap::from_symbol_set(self.params.symbol_set)
        }
    }

    /// Horizontal motion index in centipoints for this font under `requested`.
    ///
    /// Fixed-pitch fonts advance by their pitch; proportional fonts by the
    /// width of the space at the font's height. Scalable fonts take both
    /// from the request.
    pub fn hmi_cp(&self, requested: &FontSelectionParameters) -> u32 {
        let shape = if self.scalable { requested } else { &self.params };
        if self.params.proportional_spacing {
            (self.space_advance * shape.height_points() * CP_PER_POINT).round() as u32
        } else {
            u32::from(shape.pitch_cp)
        }
    }
}

/// Roman-8, whose upper half maps through the Roman Extension set.
const ROMAN_8: u16 = symset(8, b'U');

/// PCL symbol sets with a national HP-GL/2 character set.
const NATIONAL_SETS: &[(u16, HpglCharset)] = &[
    (symset(0, b'D'), HpglCharset::Norway1),
    (symset(1, b'D'), HpglCharset::Norway2),
    (symset(1, b'E'), HpglCharset::Uk),
    (symset(0, b'F'), HpglCharset::French2),
    (symset(1, b'F'), HpglCharset::French),
    (symset(1, b'G'), HpglCharset::German),
    (symset(0, b'I'), HpglCharset::Italian),
    (symset(0, b'K'), HpglCharset::JisAscii),
    (symset(0, b'S'), HpglCharset::Swedish),
    (symset(2, b'S'), HpglCharset::Spanish),
    (symset(4, b'S'), HpglCharset::Portuguese),
    (symset(2, b'U'), HpglCharset::Irv),
];

/// Maps character codes of one PCL symbol set to stick glyph indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMap {
    pub symbol_set: u16,
    pub charset: HpglCharset,
}

impl SymbolMap {
    pub fn from_symbol_set(symbol_set: u16) -> Self {
        let charset = NATIONAL_SETS
            .iter()
            .find(|(ss, _)| *ss == symbol_set)
            .map_or(HpglCharset::Ascii, |&(_, cs)| cs);
        Self {
            symbol_set,
            charset,
        }
    }

    /// Stick glyph for `code`, or `None` for control and unmapped codes.
    pub fn map_char(&self, code: u16) -> Option<u16> {
        match code {
            0x20..=0x7e => Some(self.charset.translate(code as u8)),
            0xa1..=0xfe if self.symbol_set == ROMAN_8 => {
                Some(HpglCharset::RomanExtension.translate((code - 0x80) as u8))
            }
            _ => None,
        }
    }
}
