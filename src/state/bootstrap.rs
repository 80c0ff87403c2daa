//! Default font environment and reset handling.
//!
//! On reset the job-language font source enumeration is walked until a
//! source loads and offers a font. That font's characteristics, adjusted
//! by the `SYMSET`, `PITCH` and `PTSIZE` overrides, become the selection
//! parameters of both slots.

use bitflags::bitflags;

use crate::config::Personality;
use crate::error::FontError;
use crate::font::{FontSource, FontStore, SourceLoader};
use crate::params::{FontSelectionParameters, height_4ths_from_points, pitch_cp_from_cpi};
use crate::pjl::{FONTNUMBER, FONTSOURCE, JobEnvironment, PITCH, PTSIZE, SYMSET};

use super::FontState;

bitflags! {
    /// Kinds of reset delivered to the font state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResetType: u32 {
        /// Session start: fresh collections and state.
        const INITIAL = 1 << 0;
        /// Printer reset (`ESC E`): temporary soft fonts are released.
        const PRINTER = 1 << 1;
        /// Macro overlay reset.
        const OVERLAY = 1 << 2;
        /// End of session: every loaded font is released.
        const PERMANENT = 1 << 3;
    }
}

/// Font selection state together with the collections and host services
/// it resolves against.
#[derive(Debug)]
pub struct FontContext<E, L> {
    pub state: FontState,
    pub store: FontStore,
    pub env: E,
    pub loader: L,
    pub personality: Personality,
}

impl<E: JobEnvironment, L: SourceLoader> FontContext<E, L> {
    pub fn new(env: E, loader: L, personality: Personality) -> Self {
        Self {
            state: FontState::new(),
            store: FontStore::new(),
            env,
            loader,
            personality,
        }
    }

    /// Apply a reset.
    ///
    /// Initial, printer and overlay resets re-establish the default font
    /// unless the personality is RTL, which has no text fonts. A permanent
    /// reset releases the collections after that, so a combined reset ends
    /// with nothing installed.
    pub fn reset(&mut self, kind: ResetType) -> Result<(), FontError> {
        log::debug!("font reset {kind:?}");
        if kind.contains(ResetType::INITIAL) {
            self.state = FontState::new();
            self.store = FontStore::new();
        }
        if kind.contains(ResetType::PRINTER) {
            let released = self.store.release_temporary();
            if released > 0 {
                log::info!("released {released} temporary soft fonts");
            }
        }
        let bootstrap = ResetType::INITIAL | ResetType::PRINTER | ResetType::OVERLAY;
        if kind.intersects(bootstrap) && self.personality != Personality::Rtl {
            self.set_current_font_environment()?;
        }
        if kind.contains(ResetType::PERMANENT) {
            self.store.release_all();
            self.state.decache_all();
        }
        Ok(())
    }

    /// Establish the default font from the job-language environment.
    pub fn set_current_font_environment(&mut self) -> Result<(), FontError> {
        set_current_font_environment(
            &mut self.state,
            &mut self.store,
            &mut self.env,
            &mut self.loader,
            self.personality,
        )
    }
}

/// Walk the font sources from the configured initial one and install the
/// first usable default font.
///
/// A source that fails to load, or loads no fonts, moves the walk on. The
/// internal source failing is fatal except under RTL. Running out of
/// sources is a configuration error.
pub fn set_current_font_environment<E, L>(
    state: &mut FontState,
    store: &mut FontStore,
    env: &mut E,
    loader: &mut L,
    personality: Personality,
) -> Result<(), FontError>
where
    E: JobEnvironment + ?Sized,
    L: SourceLoader + ?Sized,
{
    env.rewind_sources();
    loop {
        let name = env.get_var(FONTSOURCE).unwrap_or_else(|| "I".to_owned());
        if let Some(source) = FontSource::parse(&name) {
            let path = env.source_path(&name);
            if loader.load(source, path.as_deref(), store) {
                if let Some(params) = default_params(store, source, env) {
                    store.set_active_source(source);
                    state.reset_selection(params);
                    log::info!(
                        "default font from source {name}: typeface {} symbol set {}",
                        params.typeface_family,
                        params.symbol_set_id()
                    );
                    return Ok(());
                }
                log::debug!("font source {name} has no fonts");
            } else if source == FontSource::Internal {
                if personality == Personality::Rtl {
                    log::info!("no internal fonts; continuing without text");
                    return Ok(());
                }
                return Err(FontError::Configuration(
                    "internal font source failed to load".to_owned(),
                ));
            } else {
                log::debug!("font source {name} failed to load");
            }
        } else {
            log::warn!("unknown font source {name:?}");
        }
        if !env.advance_to_next_source() {
            return Err(FontError::Configuration(
                "no font source provides a default font".to_owned(),
            ));
        }
    }
}

/// Parameters of the `FONTNUMBER` font in `source`, or of its first font,
/// with the job-language overrides applied.
fn default_params<E: JobEnvironment + ?Sized>(
    store: &FontStore,
    source: FontSource,
    env: &E,
) -> Option<FontSelectionParameters> {
    let number = env.var_to_int(FONTNUMBER).unwrap_or(0);
    let mut fonts = store.fonts_in(source).peekable();
    let first = fonts.peek().map(|f| f.params)?;
    let mut params = fonts
        .find(|f| i64::from(f.params.pjl_font_number) == number)
        .map_or(first, |f| f.params);

    if let Some(name) = env.get_var(SYMSET) {
        match env.map_symset(&name) {
            Some(value) => params.symbol_set = value,
            None => log::warn!("ignoring unknown SYMSET {name:?}"),
        }
    }
    if let Some(cpi) = env.var_to_float(PITCH) {
        match pitch_cp_from_cpi(cpi) {
            Ok(pitch) => params.pitch_cp = pitch,
            Err(e) => log::warn!("ignoring PITCH {cpi}: {e}"),
        }
    }
    if let Some(points) = env.var_to_float(PTSIZE) {
        match height_4ths_from_points(points) {
            Ok(height) => params.height_4ths = height,
            Err(e) => log::warn!("ignoring PTSIZE {points}: {e}"),
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests;
