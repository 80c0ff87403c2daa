//! Font collections and the ordered lookup chain over them.
//!
//! The store keeps two collections: soft fonts (downloaded, permanent) and
//! built-in fonts (internal, cartridge, SIMM). Lookups try soft fonts first
//! and fall back to built-in fonts, the same priority walk used when a
//! downloaded font shadows a resident one.

use std::sync::Arc;

use crate::error::FontError;
use crate::params::FontSelectionParameters;

use super::{DataStorage, Font, FontSource, SymbolMap};

/// An ordered set of fonts. Insertion order is lookup order.
#[derive(Debug, Default)]
pub struct FontCollection {
    fonts: Vec<Arc<Font>>,
}

impl FontCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `font`, replacing in place a font with the same id, or for
    /// fonts without an id, the same name and storage.
    pub fn insert(&mut self, font: Font) -> Arc<Font> {
        let font = Arc::new(font);
        let existing = self.fonts.iter().position(|f| match (f.id, font.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => f.name == font.name && f.storage == font.storage,
            _ => false,
        });
        match existing {
            Some(i) => self.fonts[i] = Arc::clone(&font),
            None => self.fonts.push(Arc::clone(&font)),
        }
        font
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Arc<Font>> {
        self.fonts.iter().find(|f| f.id == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Font>> {
        self.fonts.iter()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Drop every font matching `pred`; returns how many were removed.
    pub fn remove_where(&mut self, pred: impl Fn(&Font) -> bool) -> usize {
        let before = self.fonts.len();
        self.fonts.retain(|f| !pred(f));
        before - self.fonts.len()
    }

    pub fn clear(&mut self) {
        self.fonts.clear();
    }
}

/// Font queries used by the resolver.
///
/// A miss is `Ok(None)`. Lookups backed by storage that can fail report
/// [`FontError::Collection`], which ends the session; [`FontStore`] is in
/// memory and never does.
pub trait FontLookup {
    /// Font with exactly this numeric id.
    fn find_by_id(&self, id: u32) -> Result<Option<Arc<Font>>, FontError>;

    /// Exact match on typeface, style, stroke weight, spacing and symbol set
    /// within the active font source.
    fn find_by_params(
        &self,
        params: &FontSelectionParameters,
    ) -> Result<Option<Arc<Font>>, FontError>;

    /// Closest available font and the symbol map to use with it.
    fn find_substitute(
        &self,
        params: &FontSelectionParameters,
    ) -> Result<Option<(Arc<Font>, SymbolMap)>, FontError>;
}

/// Soft and built-in collections plus the currently active font source.
#[derive(Debug)]
pub struct FontStore {
    soft: FontCollection,
    built_in: FontCollection,
    active_source: FontSource,
}

impl Default for FontStore {
    fn default() -> Self {
        Self {
            soft: FontCollection::new(),
            built_in: FontCollection::new(),
            active_source: FontSource::Internal,
        }
    }
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `font` into the collection its storage belongs to.
    pub fn install(&mut self, font: Font) -> Arc<Font> {
        log::debug!("installing font {:?} ({:?})", font.name, font.storage);
        match font.storage {
            DataStorage::Permanent | DataStorage::Temporary => self.soft.insert(font),
            DataStorage::Internal | DataStorage::Cartridge(_) | DataStorage::Simm(_) => {
                self.built_in.insert(font)
            }
        }
    }

    pub fn soft(&self) -> &FontCollection {
        &self.soft
    }

    pub fn built_in(&self) -> &FontCollection {
        &self.built_in
    }

    pub fn active_source(&self) -> FontSource {
        self.active_source
    }

    pub fn set_active_source(&mut self, source: FontSource) {
        self.active_source = source;
    }

    /// All fonts in lookup order: soft first, then built-in.
    pub fn fonts(&self) -> impl Iterator<Item = &Arc<Font>> {
        self.soft.iter().chain(self.built_in.iter())
    }

    /// Fonts belonging to `source`, in lookup order.
    pub fn fonts_in(&self, source: FontSource) -> impl Iterator<Item = &Arc<Font>> {
        self.fonts().filter(move |f| f.source() == source)
    }

    pub fn is_empty(&self) -> bool {
        self.soft.is_empty() && self.built_in.is_empty()
    }

    /// Drop temporary soft fonts, as a printer reset does.
    pub fn release_temporary(&mut self) -> usize {
        self.soft
            .remove_where(|f| f.storage == DataStorage::Temporary)
    }

    /// Drop every font in both collections.
    pub fn release_all(&mut self) {
        self.soft.clear();
        self.built_in.clear();
    }
}

/// Ordering key for substitution; lower is better.
///
/// Fields are compared in PCL selection priority: symbol set, spacing,
/// pitch, height, style, stroke weight, typeface.
fn substitution_score(font: &Font, want: &FontSelectionParameters) -> [u32; 7] {
    let have = &font.params;
    let pitch = if font.scalable || want.proportional_spacing {
        0
    } else {
        u32::from(have.pitch_cp.abs_diff(want.pitch_cp))
    };
    let height = if font.scalable {
        0
    } else {
        u32::from(have.height_4ths.abs_diff(want.height_4ths))
    };
    [
        u32::from(!font.supports_symbol_set(want.symbol_set)),
        u32::from(have.proportional_spacing != want.proportional_spacing),
        pitch,
        height,
        u32::from(have.style != want.style),
        u32::from(have.stroke_weight.abs_diff(want.stroke_weight)),
        u32::from(have.typeface_family != want.typeface_family),
    ]
}

fn is_exact(font: &Font, want: &FontSelectionParameters) -> bool {
    let have = &font.params;
    have.typeface_family == want.typeface_family
        && have.style == want.style
        && have.stroke_weight == want.stroke_weight
        && have.proportional_spacing == want.proportional_spacing
        && font.supports_symbol_set(want.symbol_set)
}

impl FontLookup for FontStore {
    fn find_by_id(&self, id: u32) -> Result<Option<Arc<Font>>, FontError> {
        Ok(self
            .soft
            .get_by_id(id)
            .or_else(|| self.built_in.get_by_id(id))
            .cloned())
    }

    fn find_by_params(
        &self,
        params: &FontSelectionParameters,
    ) -> Result<Option<Arc<Font>>, FontError> {
        Ok(self
            .fonts_in(self.active_source)
            .find(|f| is_exact(f, params))
            .cloned())
    }

    fn find_substitute(
        &self,
        params: &FontSelectionParameters,
    ) -> Result<Option<(Arc<Font>, SymbolMap)>, FontError> {
        if self.is_empty() {
            return Err(FontError::Configuration("no fonts installed".to_owned()));
        }
        let best = self
            .fonts()
            .enumerate()
            .min_by_key(|(i, f)| (substitution_score(f, params), *i))
            .map(|(_, f)| f);
        Ok(best.map(|f| (Arc::clone(f), f.symbol_map(params.symbol_set))))
    }
}
