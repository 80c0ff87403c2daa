//! Font selection characteristics and their unit conversions.
//!
//! PCL carries pitch as characters per inch and height as points, but the
//! selection state stores pitch in 1/7200 inch (`pitch_cp`) and height in
//! quarter points so parameter records compare exactly. Symbol sets are
//! packed as `(number << 5) + letter - 64`, e.g. `8U` (Roman-8) is 277.

use serde::{Deserialize, Serialize};

use crate::error::FontError;

/// Smallest accepted characters-per-inch value; lower requests are raised to it.
pub const MIN_CPI: f64 = 0.1;

/// Largest pitch representable in `pitch_cp`.
pub const MAX_PITCH_CP: f64 = 65535.0;

/// Heights at or above this many quarter points are rejected.
pub const MAX_HEIGHT_4THS: u32 = 4000;

/// Largest symbol-set number before the terminator letter.
pub const MAX_SYMBOL_SET_NUMBER: u32 = 1023;

/// Style values above this are clamped.
pub const MAX_STYLE: u32 = 32767;

/// Stroke weight range (ultra thin to ultra black).
pub const MIN_STROKE_WEIGHT: i32 = -7;
pub const MAX_STROKE_WEIGHT: i32 = 7;

/// Descriptive font selection characteristics of one slot or one font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSelectionParameters {
    /// Packed symbol set value (`8U` = 277).
    pub symbol_set: u16,
    pub proportional_spacing: bool,
    /// Pitch in 1/7200 inch per character (1..=65535).
    pub pitch_cp: u16,
    /// Height in quarter points (< 4000).
    pub height_4ths: u16,
    pub style: u16,
    /// -7 (ultra thin) ..= 7 (ultra black).
    pub stroke_weight: i8,
    pub typeface_family: u16,
    /// Font number the job language uses to name this font.
    pub pjl_font_number: i32,
}

impl Default for FontSelectionParameters {
    /// Roman-8, fixed 10 cpi, 12 point, upright medium Courier.
    fn default() -> Self {
        Self {
            symbol_set: symset(8, b'U'),
            proportional_spacing: false,
            pitch_cp: 720,
            height_4ths: 48,
            style: 0,
            stroke_weight: 0,
            typeface_family: 3,
            pjl_font_number: 0,
        }
    }
}

impl FontSelectionParameters {
    /// Pitch in characters per inch.
    pub fn pitch_per_inch(&self) -> f64 {
        7200.0 / f64::from(self.pitch_cp.max(1))
    }

    /// Height in points.
    pub fn height_points(&self) -> f64 {
        f64::from(self.height_4ths) / 4.0
    }

    /// Symbol set in its `<number><letter>` form.
    pub fn symbol_set_id(&self) -> String {
        symbol_set_id(self.symbol_set)
    }
}

/// Pack a symbol-set number and terminator letter without validation.
pub const fn symset(number: u16, letter: u8) -> u16 {
    (number << 5) + letter as u16 - 64
}

/// Convert characters per inch to `pitch_cp`.
///
/// Negative pitches are rejected. Inputs below [`MIN_CPI`] are raised to
/// it; the result is `round(7200 / cpi)`, at least 1, and must not exceed
/// 65535.
pub fn pitch_cp_from_cpi(cpi: f64) -> Result<u16, FontError> {
    if cpi < 0.0 {
        return Err(FontError::Range("pitch"));
    }
    let cpi = if cpi.is_nan() { MIN_CPI } else { cpi.max(MIN_CPI) };
    let pitch = (7200.0 / cpi).round();
    if pitch > MAX_PITCH_CP {
        return Err(FontError::Range("pitch"));
    }
    Ok(pitch.max(1.0) as u16)
}

/// Convert a point size to quarter points, rounding to nearest.
pub fn height_4ths_from_points(points: f64) -> Result<u16, FontError> {
    if points.is_nan() || points < 0.0 {
        return Err(FontError::Range("height"));
    }
    let fourths = (points * 4.0 + 0.5).floor();
    if fourths >= f64::from(MAX_HEIGHT_4THS) {
        return Err(FontError::Range("height"));
    }
    Ok(fourths as u16)
}

/// Clamp a stroke weight into -7..=7.
pub fn clamp_stroke_weight(weight: i32) -> i8 {
    weight.clamp(MIN_STROKE_WEIGHT, MAX_STROKE_WEIGHT) as i8
}

/// Clamp a style value into the protocol range.
pub fn clamp_style(style: u32) -> u16 {
    style.min(MAX_STYLE) as u16
}

/// Pack a symbol set from its command number and terminator letter.
///
/// The letter must be in `'A'..='^'` and not `'X'` (which is font id
/// selection); the number must fit in 10 bits.
pub fn symbol_set_value(number: u32, letter: u8) -> Result<u16, FontError> {
    if number > MAX_SYMBOL_SET_NUMBER {
        return Err(FontError::Range("symbol set"));
    }
    if !is_symbol_set_letter(letter) {
        return Err(FontError::Range("symbol set letter"));
    }
    Ok(symset(number as u16, letter))
}

/// Terminators that select a symbol set.
pub fn is_symbol_set_letter(letter: u8) -> bool {
    (b'A'..=b'^').contains(&letter) && letter != b'X'
}

/// Render a packed symbol set as `<number><letter>`.
pub fn symbol_set_id(value: u16) -> String {
    let letter = (value & 0x1f) as u8 + 64;
    format!("{}{}", value >> 5, letter as char)
}

/// Parse a `<number><letter>` symbol-set id such as `"8U"` or `"10U"`.
pub fn parse_symbol_set_id(id: &str) -> Option<u16> {
    let id = id.trim();
    if !id.is_ascii() {
        return None;
    }
    let (digits, letter) = id.split_at(id.len().checked_sub(1)?);
    let letter = letter.bytes().next()?.to_ascii_uppercase();
    let number = digits.parse::<u32>().ok()?;
    symbol_set_value(number, letter).ok()
}

/// Job-language symbol-set names and their PCL values.
const PJL_SYMBOL_SETS: &[(&str, u16)] = &[
    ("DESKTOP", symset(7, b'J')),
    ("ISO4", symset(1, b'E')),
    ("ISO6", symset(0, b'U')),
    ("ISO11", symset(0, b'S')),
    ("ISO15", symset(0, b'I')),
    ("ISO17", symset(2, b'S')),
    ("ISO21", symset(1, b'G')),
    ("ISO60", symset(0, b'D')),
    ("ISO69", symset(1, b'F')),
    ("ISOL1", symset(0, b'N')),
    ("ISOL2", symset(2, b'N')),
    ("ISOL5", symset(5, b'N')),
    ("LEGAL", symset(1, b'U')),
    ("MATH8", symset(8, b'M')),
    ("MSPUBL", symset(6, b'J')),
    ("PC8", symset(10, b'U')),
    ("PC8DN", symset(11, b'U')),
    ("PC850", symset(12, b'U')),
    ("PC852", symset(17, b'U')),
    ("PC8TK", symset(9, b'T')),
    ("PIFONT", symset(15, b'U')),
    ("PSMATH", symset(5, b'M')),
    ("PSTEXT", symset(10, b'J')),
    ("ROMAN8", symset(8, b'U')),
    ("VNINTL", symset(13, b'J')),
    ("VNMATH", symset(6, b'M')),
    ("VNUS", symset(14, b'J')),
    ("WIN30", symset(9, b'U')),
    ("WINL1", symset(19, b'U')),
    ("WINL2", symset(9, b'E')),
    ("WINL5", symset(5, b'T')),
];

/// Map a job-language `SYMSET` value to a PCL symbol set.
///
/// Accepts the symbolic names (`ROMAN8`, `PC8`, ...) case-insensitively and
/// the literal `<number><letter>` form.
pub fn pjl_symbol_set(name: &str) -> Option<u16> {
    let upper = name.trim().to_ascii_uppercase();
    PJL_SYMBOL_SETS
        .iter()
        .find(|(n, _)| *n == upper)
        .map(|&(_, v)| v)
        .or_else(|| parse_symbol_set_id(&upper))
}

#[cfg(test)]
mod tests;
