use super::{FontContext, ResetType};
use crate::config::{Personality, PjlConfig};
use crate::error::FontError;
use crate::font::{
    CatalogEntry, CatalogLoader, DataStorage, FontSource, FontStore, SourceLoader,
};
use crate::params::symset;
use crate::pjl::{FONTNUMBER, FONTSOURCE, PITCH, PTSIZE, PjlEnvironment, SYMSET};
use crate::state::SlotIndex;
use crate::stick::StickFont;

type Context = FontContext<PjlEnvironment, CatalogLoader>;

fn context(entries: Vec<CatalogEntry>) -> Context {
    FontContext::new(
        PjlEnvironment::default(),
        CatalogLoader::new(StickFont::stick(), StickFont::arc(), entries),
        Personality::Pcl5,
    )
}

fn entry(source: &str, name: &str, pjl_font_number: i32) -> CatalogEntry {
    CatalogEntry {
        source: source.to_owned(),
        name: name.to_owned(),
        pjl_font_number,
        ..CatalogEntry::default()
    }
}

/// Loads nothing, and reports the internal source as loaded or not.
struct EmptyLoader {
    internal_ok: bool,
}

impl SourceLoader for EmptyLoader {
    fn load(&mut self, source: FontSource, _path: Option<&str>, _store: &mut FontStore) -> bool {
        source != FontSource::Internal || self.internal_ok
    }
}

#[test]
fn initial_reset_selects_stick_font_defaults() {
    let mut ctx = context(Vec::new());
    ctx.reset(ResetType::INITIAL).unwrap();

    let primary = *ctx.state.params(SlotIndex::Primary);
    assert_eq!(primary.typeface_family, 48);
    assert_eq!(primary.pitch_cp, 720);
    assert_eq!(primary.height_4ths, 48);
    assert_eq!(primary.symbol_set, symset(8, b'U'));
    assert_eq!(*ctx.state.params(SlotIndex::Secondary), primary);
    assert_eq!(ctx.state.active_slot(), SlotIndex::Primary);
    assert!(ctx.state.active_font().is_none());

    let font = ctx.state.current_font(&ctx.store).unwrap();
    assert_eq!(font.name, "Stick");
}

#[test]
fn fontnumber_picks_matching_font() {
    let mut ctx = context(Vec::new());
    ctx.env.set_var(FONTNUMBER, "1");
    ctx.reset(ResetType::INITIAL).unwrap();
    let params = ctx.state.params(SlotIndex::Primary);
    assert_eq!(params.typeface_family, 50);
    assert!(params.proportional_spacing);
}

#[test]
fn unknown_fontnumber_uses_first_font() {
    let mut ctx = context(Vec::new());
    ctx.env.set_var(FONTNUMBER, "42");
    ctx.reset(ResetType::INITIAL).unwrap();
    assert_eq!(ctx.state.params(SlotIndex::Primary).typeface_family, 48);
}

#[test]
fn job_overrides_apply_to_both_slots() {
    let mut ctx = context(Vec::new());
    ctx.env.set_var(SYMSET, "PC8");
    ctx.env.set_var(PITCH, "12");
    ctx.env.set_var(PTSIZE, "10");
    ctx.reset(ResetType::INITIAL).unwrap();

    for slot in [SlotIndex::Primary, SlotIndex::Secondary] {
        let params = ctx.state.params(slot);
        assert_eq!(params.symbol_set, symset(10, b'U'));
        assert_eq!(params.pitch_cp, 600);
        assert_eq!(params.height_4ths, 40);
    }
}

#[test]
fn invalid_overrides_are_ignored() {
    let mut ctx = context(Vec::new());
    ctx.env.set_var(SYMSET, "NOSUCHSET");
    ctx.env.set_var(PITCH, "0.01");
    ctx.reset(ResetType::INITIAL).unwrap();
    let params = ctx.state.params(SlotIndex::Primary);
    assert_eq!(params.symbol_set, symset(8, b'U'));
    assert_eq!(params.pitch_cp, 720);
}

#[test]
fn failing_cartridge_falls_through_to_internal() {
    let mut ctx = context(Vec::new());
    ctx.env.set_var(FONTSOURCE, "C1");
    ctx.reset(ResetType::INITIAL).unwrap();
    assert_eq!(ctx.store.active_source(), FontSource::Internal);
    assert_eq!(ctx.state.params(SlotIndex::Primary).typeface_family, 48);
}

#[test]
fn soft_source_with_fonts_is_used() {
    let mut univers = entry("S", "Univers", 0);
    univers.typeface = 52;
    univers.proportional = true;
    let mut ctx = context(vec![univers]);
    ctx.env.set_var(FONTSOURCE, "S");
    ctx.reset(ResetType::INITIAL).unwrap();
    assert_eq!(ctx.store.active_source(), FontSource::Soft);
    assert_eq!(ctx.state.params(SlotIndex::Primary).typeface_family, 52);
    assert_eq!(ctx.state.current_font(&ctx.store).unwrap().name, "Univers");
}

#[test]
fn empty_soft_source_is_skipped() {
    let mut ctx = context(vec![entry("M", "Simm Gothic", 0)]);
    ctx.env.set_var(FONTSOURCE, "S");
    ctx.reset(ResetType::INITIAL).unwrap();
    // S loads but is empty, C fails, M provides a font.
    assert_eq!(ctx.store.active_source(), FontSource::Simm);
}

#[test]
fn internal_failure_is_fatal_for_pcl() {
    let mut ctx = FontContext::new(
        PjlEnvironment::default(),
        EmptyLoader { internal_ok: false },
        Personality::Pcl5,
    );
    let err = ctx.reset(ResetType::INITIAL).unwrap_err();
    assert!(matches!(err, FontError::Configuration(_)));
    assert!(err.is_fatal());
}

#[test]
fn internal_failure_is_tolerated_for_rtl() {
    let mut ctx = FontContext::new(
        PjlEnvironment::default(),
        EmptyLoader { internal_ok: false },
        Personality::Rtl,
    );
    ctx.set_current_font_environment().unwrap();
    assert!(ctx.store.is_empty());
}

#[test]
fn exhausting_sources_is_a_configuration_error() {
    let mut ctx = FontContext::new(
        PjlEnvironment::default(),
        EmptyLoader { internal_ok: true },
        Personality::Pcl5,
    );
    assert!(matches!(
        ctx.set_current_font_environment(),
        Err(FontError::Configuration(_))
    ));
}

#[test]
fn rtl_reset_skips_bootstrap() {
    let mut ctx = context(Vec::new());
    ctx.personality = Personality::Rtl;
    ctx.reset(ResetType::INITIAL).unwrap();
    assert!(ctx.store.is_empty());
}

#[test]
fn printer_reset_releases_temporary_fonts_and_restores_defaults() {
    let mut ctx = context(Vec::new());
    ctx.reset(ResetType::INITIAL).unwrap();

    let mut temp = entry("S", "Temp", 0).to_font().unwrap();
    temp.storage = DataStorage::Temporary;
    temp.id = Some(4);
    ctx.store.install(temp);
    ctx.state
        .select_by_id(SlotIndex::Primary, 4, &ctx.store)
        .unwrap();
    ctx.state.set_pitch(SlotIndex::Primary, 16.67).unwrap();

    ctx.reset(ResetType::PRINTER).unwrap();
    assert!(ctx.store.soft().is_empty());
    assert_eq!(ctx.state.params(SlotIndex::Primary).pitch_cp, 720);
    assert_eq!(ctx.state.current_font(&ctx.store).unwrap().name, "Stick");
}

#[test]
fn permanent_reset_releases_everything() {
    let mut ctx = context(Vec::new());
    ctx.reset(ResetType::INITIAL).unwrap();
    ctx.state.current_font(&ctx.store).unwrap();

    ctx.reset(ResetType::PERMANENT).unwrap();
    assert!(ctx.store.is_empty());
    assert!(ctx.state.active_font().is_none());
    assert!(ctx.state.current_font(&ctx.store).is_err());
}

#[test]
fn overlay_reset_rewinds_source_walk() {
    let config = PjlConfig {
        fontsource: "M".to_owned(),
        ..PjlConfig::default()
    };
    let mut ctx = FontContext::new(
        PjlEnvironment::from_config(&config),
        CatalogLoader::new(StickFont::stick(), StickFont::arc(), Vec::new()),
        Personality::Pcl5,
    );
    ctx.reset(ResetType::INITIAL).unwrap();
    assert_eq!(ctx.store.active_source(), FontSource::Internal);
    ctx.reset(ResetType::OVERLAY).unwrap();
    assert_eq!(ctx.store.active_source(), FontSource::Internal);
}

#[test]
fn permanent_release_follows_bootstrap() {
    let mut ctx = context(Vec::new());
    ctx.reset(ResetType::INITIAL).unwrap();
    ctx.state.set_pitch(SlotIndex::Primary, 16.67).unwrap();

    ctx.reset(ResetType::PRINTER | ResetType::PERMANENT).unwrap();
    // The bootstrap restored the defaults, then the release emptied the store.
    assert_eq!(ctx.state.params(SlotIndex::Primary).pitch_cp, 720);
    assert!(ctx.store.is_empty());
    assert!(ctx.state.current_font(&ctx.store).is_err());
}
