//! Configuration structures and loading logic.

mod io;

pub use io::{config_dir, config_path};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::font::CatalogEntry;
use crate::stick::{ARC_CHORD_DEGREES, STICK_CHORD_DEGREES, StickFont, StickFontKind};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub personality: Personality,
    pub pjl: PjlConfig,
    pub stick: StickConfig,
    /// Fonts available in the permanent, cartridge and SIMM sources.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

/// Interpreter personality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    #[default]
    Pcl5,
    /// Raster transfer only. No default font is required.
    Rtl,
}

/// Job-language environment defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PjlConfig {
    /// Source searched first on reset (`I`, `S`, `C`, `C1`, `M`, ...).
    pub fontsource: String,
    /// Enumeration order of font sources; wraps around.
    pub sources: Vec<String>,
    /// Job-language number of the default font within its source.
    pub fontnumber: i32,
    /// Default pitch in characters per inch.
    pub pitch: f64,
    /// Default point size.
    pub ptsize: f64,
    /// Default symbol set, by job-language name or `<number><letter>`.
    pub symset: String,
    /// Location of each font source, keyed by source name.
    #[serde(default)]
    pub source_paths: HashMap<String, String>,
}

impl Default for PjlConfig {
    fn default() -> Self {
        Self {
            fontsource: "I".to_owned(),
            sources: ["I", "S", "C", "M"].map(str::to_owned).to_vec(),
            fontnumber: 0,
            pitch: 10.0,
            ptsize: 12.0,
            symset: "ROMAN8".to_owned(),
            source_paths: HashMap::new(),
        }
    }
}

/// Arc flattening of the procedural fonts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StickConfig {
    pub stick_chord_degrees: f64,
    pub arc_chord_degrees: f64,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            stick_chord_degrees: STICK_CHORD_DEGREES,
            arc_chord_degrees: ARC_CHORD_DEGREES,
        }
    }
}

impl StickConfig {
    /// Returns the stick chord angle clamped to [1, 90].
    pub fn effective_stick_chord(&self) -> f64 {
        clamp_chord(self.stick_chord_degrees, STICK_CHORD_DEGREES)
    }

    /// Returns the arc chord angle clamped to [1, 90].
    pub fn effective_arc_chord(&self) -> f64 {
        clamp_chord(self.arc_chord_degrees, ARC_CHORD_DEGREES)
    }

    pub fn stick_font(&self) -> StickFont {
        StickFont::with_chord(StickFontKind::Stick, self.effective_stick_chord())
    }

    pub fn arc_font(&self) -> StickFont {
        StickFont::with_chord(StickFontKind::Arc, self.effective_arc_chord())
    }
}

fn clamp_chord(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(1.0, 90.0)
    }
}

#[cfg(test)]
mod tests;
