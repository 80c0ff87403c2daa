//! Loading font sources into the store.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::params::{
    self, FontSelectionParameters, clamp_stroke_weight, clamp_style, height_4ths_from_points,
    pitch_cp_from_cpi,
};
use crate::stick::StickFont;

use super::{DataStorage, Font, FontKind, FontSource, FontStore};

/// Installs the fonts of one source.
pub trait SourceLoader {
    /// Load `source` into `store`. `path` is the job-language location of
    /// the source, if one was configured.
    ///
    /// Returns `false` when the source cannot be loaded at all. A source
    /// that loads but holds no fonts returns `true`.
    fn load(&mut self, source: FontSource, path: Option<&str>, store: &mut FontStore) -> bool;
}

/// A font described in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    /// Font source letter, optionally with a bank number (`"C1"`).
    pub source: String,
    pub name: String,
    pub id: Option<u32>,
    pub pjl_font_number: i32,
    /// Symbol set as `<number><letter>` or a job-language name.
    pub symbol_set: String,
    pub proportional: bool,
    /// Characters per inch.
    pub pitch: f64,
    /// Point size.
    pub height: f64,
    pub style: u32,
    pub stroke_weight: i32,
    pub typeface: u16,
    pub scalable: bool,
    /// Space width as a fraction of the point size.
    pub space_advance: f64,
}

impl Default for CatalogEntry {
    fn default() -> Self {
        Self {
            source: "S".to_owned(),
            name: String::new(),
            id: None,
            pjl_font_number: 0,
            symbol_set: "8U".to_owned(),
            proportional: false,
            pitch: 10.0,
            height: 12.0,
            style: 0,
            stroke_weight: 0,
            typeface: 3,
            scalable: true,
            space_advance: 0.25,
        }
    }
}

impl CatalogEntry {
    /// The source family this entry belongs to.
    pub fn font_source(&self) -> Option<FontSource> {
        FontSource::parse(&self.source)
    }

    fn storage(&self) -> Option<DataStorage> {
        let bank = self
            .source
            .trim()
            .get(1..)
            .and_then(|digits| digits.parse::<u8>().ok())
            .unwrap_or(0);
        Some(match self.font_source()? {
            FontSource::Internal => DataStorage::Internal,
            FontSource::Soft => DataStorage::Permanent,
            FontSource::Cartridge => DataStorage::Cartridge(bank),
            FontSource::Simm => DataStorage::Simm(bank),
        })
    }

    /// Build the font, or `None` (logged) if a characteristic is invalid.
    pub fn to_font(&self) -> Option<Font> {
        let Some(storage) = self.storage() else {
            log::warn!("catalog font {:?}: unknown source {:?}", self.name, self.source);
            return None;
        };
        let Some(symbol_set) = params::pjl_symbol_set(&self.symbol_set) else {
            log::warn!(
                "catalog font {:?}: unknown symbol set {:?}",
                self.name,
                self.symbol_set
            );
            return None;
        };
        let (pitch_cp, height_4ths) = match (
            pitch_cp_from_cpi(self.pitch),
            height_4ths_from_points(self.height),
        ) {
            (Ok(p), Ok(h)) => (p, h),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("catalog font {:?}: {e}", self.name);
                return None;
            }
        };
        Some(Font {
            id: self.id,
            name: self.name.clone(),
            params: FontSelectionParameters {
                symbol_set,
                proportional_spacing: self.proportional,
                pitch_cp,
                height_4ths,
                style: clamp_style(self.style),
                stroke_weight: clamp_stroke_weight(self.stroke_weight),
                typeface_family: self.typeface,
                pjl_font_number: self.pjl_font_number,
            },
            storage,
            scalable: self.scalable,
            kind: FontKind::Outline,
            symbol_sets: vec![symbol_set],
            space_advance: self.space_advance,
        })
    }
}

/// Loader backed by the built-in stick fonts and the configured catalog.
///
/// The internal source always provides the stick and arc fonts. Cartridge
/// and SIMM sources fail to load unless the catalog lists fonts for them.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    stick: StickFont,
    arc: StickFont,
    entries: Vec<CatalogEntry>,
}

impl CatalogLoader {
    pub fn new(stick: StickFont, arc: StickFont, entries: Vec<CatalogEntry>) -> Self {
        Self {
            stick,
            arc,
            entries,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.stick.stick_font(),
            config.stick.arc_font(),
            config.catalog.clone(),
        )
    }

    fn install_entries(&self, source: FontSource, store: &mut FontStore) -> usize {
        self.entries
            .iter()
            .filter(|e| e.font_source() == Some(source))
            .filter_map(CatalogEntry::to_font)
            .map(|font| store.install(font))
            .count()
    }
}

impl SourceLoader for CatalogLoader {
    fn load(&mut self, source: FontSource, path: Option<&str>, store: &mut FontStore) -> bool {
        if let Some(path) = path {
            log::debug!("loading font source {source} from {path}");
        }
        match source {
            FontSource::Internal => {
                store.install(Font::builtin_stick(self.stick));
                store.install(Font::builtin_stick(self.arc));
                self.install_entries(source, store);
                true
            }
            FontSource::Soft => {
                self.install_entries(source, store);
                true
            }
            FontSource::Cartridge | FontSource::Simm => self.install_entries(source, store) > 0,
        }
    }
}
