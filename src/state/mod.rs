//! PCL font selection state: two slots, the active font cache, and HMI.
//!
//! Attribute commands only edit a slot's parameters and drop its cached
//! font. Resolution is lazy: the next glyph or HMI request re-resolves the
//! active slot against the font store. Cached fonts are weak references;
//! a font released from its collection reads as "not cached".

mod bootstrap;

pub use bootstrap::{FontContext, ResetType, set_current_font_environment};

use std::sync::{Arc, Weak};

use crate::error::FontError;
use crate::font::{Font, FontKind, FontLookup, SymbolMap};
use crate::params::{
    self, FontSelectionParameters, clamp_stroke_weight, clamp_style, height_4ths_from_points,
    pitch_cp_from_cpi,
};
use crate::path::{Matrix, PathSink, Point};
use crate::stick::GlyphMetrics;

/// One of the two font selection slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotIndex {
    #[default]
    Primary,
    Secondary,
}

impl SlotIndex {
    const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

/// A selection characteristic, for the selected-by-id decache rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    SymbolSet,
    Spacing,
    Pitch,
    Height,
    Style,
    StrokeWeight,
    Typeface,
}

impl Attribute {
    /// Refinements that a font chosen by id ignores.
    fn ignored_after_id_selection(self) -> bool {
        matches!(self, Self::Pitch | Self::Height | Self::Style | Self::Typeface)
    }
}

/// Selection parameters plus the font they resolved to.
#[derive(Debug, Clone, Default)]
pub struct FontSelectionSlot {
    pub params: FontSelectionParameters,
    font: Option<Weak<Font>>,
    map: Option<SymbolMap>,
    selected_by_id: bool,
}

impl FontSelectionSlot {
    /// The cached font, if it is still cached and still installed.
    pub fn resolved_font(&self) -> Option<Arc<Font>> {
        self.font.as_ref().and_then(Weak::upgrade)
    }

    pub fn symbol_map(&self) -> Option<SymbolMap> {
        self.map
    }

    pub fn selected_by_id(&self) -> bool {
        self.selected_by_id
    }

    fn cache(&mut self, font: &Arc<Font>, map: SymbolMap) {
        self.font = Some(Arc::downgrade(font));
        self.map = Some(map);
    }
}

/// Font selection state of one interpreter session.
#[derive(Debug, Clone, Default)]
pub struct FontState {
    slots: [FontSelectionSlot; 2],
    active: SlotIndex,
    active_font: Option<Weak<Font>>,
    active_map: Option<SymbolMap>,
    hmi_cp: Option<u32>,
}

impl FontState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_slot(&self) -> SlotIndex {
        self.active
    }

    pub fn slot(&self, slot: SlotIndex) -> &FontSelectionSlot {
        &self.slots[slot.index()]
    }

    pub fn params(&self, slot: SlotIndex) -> &FontSelectionParameters {
        &self.slots[slot.index()].params
    }

    /// The cached active font without resolving.
    pub fn active_font(&self) -> Option<Arc<Font>> {
        self.active_font.as_ref().and_then(Weak::upgrade)
    }

    pub fn active_symbol_map(&self) -> Option<SymbolMap> {
        self.active_map
    }

    /// The cached HMI in centipoints, if still valid.
    pub fn cached_hmi(&self) -> Option<u32> {
        self.hmi_cp
    }

    // -- Attribute commands --

    /// `ESC ( # <letter>`: symbol set from its number and terminator.
    pub fn set_symbol_set(&mut self, slot: SlotIndex, number: u32, letter: u8) -> Result<(), FontError> {
        let value = params::symbol_set_value(number, letter)?;
        self.update(slot, Attribute::SymbolSet, |p| p.symbol_set = value);
        Ok(())
    }

    /// `ESC ( s # P`: 0 fixed, 1 proportional; larger values are ignored.
    pub fn set_spacing(&mut self, slot: SlotIndex, value: u32) -> Result<(), FontError> {
        if value > 1 {
            return Ok(());
        }
        self.update(slot, Attribute::Spacing, |p| p.proportional_spacing = value == 1);
        Ok(())
    }

    /// `ESC ( s # H`: pitch in characters per inch.
    pub fn set_pitch(&mut self, slot: SlotIndex, cpi: f64) -> Result<(), FontError> {
        let pitch_cp = pitch_cp_from_cpi(cpi)?;
        self.update(slot, Attribute::Pitch, |p| p.pitch_cp = pitch_cp);
        Ok(())
    }

    /// `ESC ( s # V`: height in points.
    pub fn set_height(&mut self, slot: SlotIndex, points: f64) -> Result<(), FontError> {
        let height = height_4ths_from_points(points)?;
        self.update(slot, Attribute::Height, |p| p.height_4ths = height);
        Ok(())
    }

    /// `ESC ( s # S`: style, clamped to 32767.
    pub fn set_style(&mut self, slot: SlotIndex, value: u32) -> Result<(), FontError> {
        let style = clamp_style(value);
        self.update(slot, Attribute::Style, |p| p.style = style);
        Ok(())
    }

    /// `ESC ( s # B`: stroke weight, clamped to -7..=7.
    pub fn set_stroke_weight(&mut self, slot: SlotIndex, value: i32) -> Result<(), FontError> {
        let weight = clamp_stroke_weight(value);
        self.update(slot, Attribute::StrokeWeight, |p| p.stroke_weight = weight);
        Ok(())
    }

    /// `ESC ( s # T`: typeface family.
    pub fn set_typeface(&mut self, slot: SlotIndex, value: u32) -> Result<(), FontError> {
        let typeface = u16::try_from(value).map_err(|_| FontError::Range("typeface"))?;
        self.update(slot, Attribute::Typeface, |p| p.typeface_family = typeface);
        Ok(())
    }

    /// `ESC & k # S`: 0 is 10 cpi, 2 is 16.67 cpi, 4 is 12 cpi.
    ///
    /// Applies to the active slot.
    pub fn set_pitch_mode(&mut self, mode: i32) -> Result<(), FontError> {
        let cpi = match mode {
            0 => 10.0,
            2 => 16.67,
            4 => 12.0,
            _ => return Err(FontError::Range("pitch mode")),
        };
        self.set_pitch(self.active, cpi)
    }

    fn update(&mut self, slot: SlotIndex, attr: Attribute, edit: impl FnOnce(&mut FontSelectionParameters)) {
        let s = &mut self.slots[slot.index()];
        let before = s.params;
        edit(&mut s.params);
        if s.params == before {
            return;
        }
        if s.selected_by_id && attr.ignored_after_id_selection() {
            log::debug!("{attr:?} change on {slot:?} kept font selected by id");
            return;
        }
        self.decache(slot);
    }

    // -- Selection --

    /// `ESC ( # X`: select a font by numeric id.
    ///
    /// A miss returns [`FontError::NotFound`] and leaves the slot as it was.
    pub fn select_by_id<L: FontLookup + ?Sized>(
        &mut self,
        slot: SlotIndex,
        id: u32,
        lookup: &L,
    ) -> Result<(), FontError> {
        let Some(font) = lookup.find_by_id(id)? else {
            log::debug!("font id {id} not found; {slot:?} unchanged");
            return Err(FontError::NotFound(id));
        };
        let s = &mut self.slots[slot.index()];
        let map = font.symbol_map(s.params.symbol_set);
        s.cache(&font, map);
        s.selected_by_id = true;
        log::debug!("{slot:?} selected {:?} by id {id}", font.name);
        if slot == self.active {
            self.active_font = Some(Arc::downgrade(&font));
            self.active_map = Some(map);
            self.decache_hmi();
        }
        Ok(())
    }

    /// `ESC ( 3 @`: select the default font. Only argument 3 is accepted;
    /// the slot is decached and the command reports itself unimplemented.
    pub fn select_default_font(&mut self, slot: SlotIndex, arg: i32) -> Result<(), FontError> {
        if arg != 3 {
            return Err(FontError::Range("default font selector"));
        }
        self.decache(slot);
        Err(FontError::Unimplemented("select default font"))
    }

    /// Shift in (primary) or shift out (secondary).
    pub fn switch_active(&mut self, target: SlotIndex) {
        if self.active == target {
            return;
        }
        self.active = target;
        let s = &self.slots[target.index()];
        self.active_font = s.font.clone();
        self.active_map = s.map;
        self.decache_hmi();
    }

    /// Replace both slots with `params` and make the primary active, with
    /// nothing resolved.
    pub fn reset_selection(&mut self, params: FontSelectionParameters) {
        let slot = FontSelectionSlot {
            params,
            ..FontSelectionSlot::default()
        };
        self.slots = [slot.clone(), slot];
        self.active = SlotIndex::Primary;
        self.active_font = None;
        self.active_map = None;
        self.decache_hmi();
    }

    // -- Cache invalidation --

    /// Drop the cached font of `slot`, and the active cache if it is active.
    pub fn decache(&mut self, slot: SlotIndex) {
        let s = &mut self.slots[slot.index()];
        s.font = None;
        s.map = None;
        if slot == self.active {
            self.active_font = None;
            self.active_map = None;
            self.decache_hmi();
        }
        log::debug!("decached {slot:?}");
    }

    /// Decache both slots.
    pub fn decache_all(&mut self) {
        self.decache(SlotIndex::Primary);
        self.decache(SlotIndex::Secondary);
    }

    pub fn decache_hmi(&mut self) {
        self.hmi_cp = None;
    }

    // -- Resolution --

    /// The font for `slot`, resolving from its parameters if not cached.
    ///
    /// Exact matches in the active source win; otherwise the lookup's
    /// substitute is used. Fails only when no font is available at all.
    pub fn resolve<L: FontLookup + ?Sized>(
        &mut self,
        slot: SlotIndex,
        lookup: &L,
    ) -> Result<Arc<Font>, FontError> {
        let s = &mut self.slots[slot.index()];
        if let Some(font) = s.resolved_font() {
            return Ok(font);
        }
        let params = s.params;
        let (font, map) = match lookup.find_by_params(&params)? {
            Some(font) => {
                let map = font.symbol_map(params.symbol_set);
                (font, map)
            }
            None => lookup.find_substitute(&params)?.ok_or_else(|| {
                FontError::Configuration("no font source available".to_owned())
            })?,
        };
        s.cache(&font, map);
        s.selected_by_id = false;
        log::debug!("{slot:?} resolved to {:?}", font.name);
        Ok(font)
    }

    /// Resolve `slot` and, if it is active, make its font the active font.
    pub fn apply<L: FontLookup + ?Sized>(
        &mut self,
        slot: SlotIndex,
        lookup: &L,
    ) -> Result<Arc<Font>, FontError> {
        let font = self.resolve(slot, lookup)?;
        if slot == self.active {
            let cached = self.active_font();
            if !cached.is_some_and(|f| Arc::ptr_eq(&f, &font)) {
                self.decache_hmi();
            }
            self.active_font = Some(Arc::downgrade(&font));
            self.active_map = self.slots[slot.index()].map;
        }
        Ok(font)
    }

    /// The active font, resolving lazily.
    pub fn current_font<L: FontLookup + ?Sized>(&mut self, lookup: &L) -> Result<Arc<Font>, FontError> {
        if let (Some(font), Some(_)) = (self.active_font(), self.active_map) {
            return Ok(font);
        }
        self.apply(self.active, lookup)
    }

    /// Horizontal motion index of the active font in centipoints.
    pub fn hmi<L: FontLookup + ?Sized>(&mut self, lookup: &L) -> Result<u32, FontError> {
        if let Some(hmi) = self.hmi_cp {
            return Ok(hmi);
        }
        let font = self.current_font(lookup)?;
        let hmi = font.hmi_cp(self.params(self.active));
        self.hmi_cp = Some(hmi);
        Ok(hmi)
    }

    /// Draw character `code` in the active font.
    ///
    /// Codes the symbol map doesn't cover draw nothing. Outline fonts are
    /// rendered by the host and report `Unimplemented` here.
    pub fn draw_char<L: FontLookup + ?Sized, S: PathSink + ?Sized>(
        &mut self,
        code: u16,
        lookup: &L,
        sink: &mut S,
    ) -> Result<GlyphMetrics, FontError> {
        let font = self.current_font(lookup)?;
        let FontKind::Stick(stick) = font.kind else {
            return Err(FontError::Unimplemented("outline glyph rendering"));
        };
        let map = self
            .active_map
            .unwrap_or_else(|| SymbolMap::from_symbol_set(font.params.symbol_set));
        match map.map_char(code) {
            Some(glyph) => stick.build_glyph(glyph, &Matrix::IDENTITY, sink),
            None => Ok(GlyphMetrics {
                advance: Point::default(),
                in_range: false,
            }),
        }
    }
}
