//! Font selection commands and their dispatch onto [`FontState`].
//!
//! [`FontCommand::from_escape`] maps a parsed parameterized escape
//! sequence (`ESC ( s 12 H` arrives as parameter `(`, group `s`,
//! terminator `H`, value 12) onto a command. [`dispatch`] runs it and folds
//! the outcome into a [`Status`].

use crate::error::FontError;
use crate::font::FontLookup;
use crate::state::{FontState, SlotIndex};

/// Outcome reported back to the command parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    RangeError,
    Unimplemented,
}

/// A font selection command.
///
/// Arguments keep the sign they were sent with; [`dispatch`] rejects the
/// negative ones a command does not accept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontCommand {
    SymbolSet { slot: SlotIndex, number: i32, letter: u8 },
    Spacing { slot: SlotIndex, value: i32 },
    Pitch { slot: SlotIndex, cpi: f64 },
    Height { slot: SlotIndex, points: f64 },
    Style { slot: SlotIndex, value: i32 },
    StrokeWeight { slot: SlotIndex, value: i32 },
    Typeface { slot: SlotIndex, value: i32 },
    SelectById { slot: SlotIndex, id: i32 },
    SelectDefault { slot: SlotIndex, arg: i32 },
    PitchMode(i32),
    /// SO: make the secondary slot active.
    ShiftOut,
    /// SI: make the primary slot active.
    ShiftIn,
}

impl FontCommand {
    /// Decode `ESC <parameter> <group> <value> <terminator>`.
    ///
    /// `group` is 0 for sequences without a group character. Returns
    /// `None` for sequences that are not font commands.
    pub fn from_escape(parameter: u8, group: u8, terminator: u8, value: f64) -> Option<Self> {
        let int = value.trunc() as i32;
        let slot = match parameter {
            b'(' => SlotIndex::Primary,
            b')' => SlotIndex::Secondary,
            b'&' => {
                return (group == b'k' && terminator == b'S').then_some(Self::PitchMode(int));
            }
            _ => return None,
        };
        let cmd = match (group, terminator) {
            (b's', b'P') => Self::Spacing {
                slot,
                value: int,
            },
            (b's', b'H') => Self::Pitch {
                slot,
                cpi: value,
            },
            (b's', b'V') => Self::Height {
                slot,
                points: value,
            },
            (b's', b'S') => Self::Style {
                slot,
                value: int,
            },
            (b's', b'B') => Self::StrokeWeight {
                slot,
                value: int,
            },
            (b's', b'T') => Self::Typeface {
                slot,
                value: int,
            },
            (0, b'X') => Self::SelectById { slot, id: int },
            (0, b'@') => Self::SelectDefault { slot, arg: int },
            (0, letter @ b'A'..=b'^') => Self::SymbolSet {
                slot,
                number: int,
                letter,
            },
            _ => return None,
        };
        Some(cmd)
    }

    /// Control code form: SO (0x0e) and SI (0x0f).
    pub fn from_control(code: u8) -> Option<Self> {
        match code {
            0x0e => Some(Self::ShiftOut),
            0x0f => Some(Self::ShiftIn),
            _ => None,
        }
    }

    /// Human-readable command name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SymbolSet { .. } => "Symbol Set",
            Self::Spacing { .. } => "Spacing",
            Self::Pitch { .. } => "Pitch",
            Self::Height { .. } => "Height",
            Self::Style { .. } => "Style",
            Self::StrokeWeight { .. } => "Stroke Weight",
            Self::Typeface { .. } => "Typeface",
            Self::SelectById { .. } => "Font Selection by ID",
            Self::SelectDefault { .. } => "Select Default Font",
            Self::PitchMode(_) => "Set Pitch Mode",
            Self::ShiftOut => "Shift Out",
            Self::ShiftIn => "Shift In",
        }
    }
}

/// A non-negative argument, or a range error naming it.
fn non_negative(value: i32, what: &'static str) -> Result<u32, FontError> {
    u32::try_from(value).map_err(|_| FontError::Range(what))
}

/// Run `cmd` against `state`.
///
/// Range and unimplemented outcomes become a [`Status`]. Only stroke weight
/// accepts a negative argument; a negative spacing is ignored and the rest
/// are range errors. A font id that is not installed is ignored. Other
/// errors come from the lookup and are returned.
pub fn dispatch<L: FontLookup + ?Sized>(
    cmd: FontCommand,
    state: &mut FontState,
    lookup: &L,
) -> Result<Status, FontError> {
    let result = match cmd {
        FontCommand::SymbolSet {
            slot,
            number,
            letter,
        } => non_negative(number, "symbol set").and_then(|n| state.set_symbol_set(slot, n, letter)),
        FontCommand::Spacing { slot, value } => match u32::try_from(value) {
            Ok(value) => state.set_spacing(slot, value),
            Err(_) => Ok(()),
        },
        FontCommand::Pitch { slot, cpi } => state.set_pitch(slot, cpi),
        FontCommand::Height { slot, points } => state.set_height(slot, points),
        FontCommand::Style { slot, value } => {
            non_negative(value, "style").and_then(|v| state.set_style(slot, v))
        }
        FontCommand::StrokeWeight { slot, value } => state.set_stroke_weight(slot, value),
        FontCommand::Typeface { slot, value } => {
            non_negative(value, "typeface").and_then(|v| state.set_typeface(slot, v))
        }
        FontCommand::SelectById { slot, id } => {
            non_negative(id, "font id").and_then(|id| state.select_by_id(slot, id, lookup))
        }
        FontCommand::SelectDefault { slot, arg } => state.select_default_font(slot, arg),
        FontCommand::PitchMode(mode) => state.set_pitch_mode(mode),
        FontCommand::ShiftOut => {
            state.switch_active(SlotIndex::Secondary);
            Ok(())
        }
        FontCommand::ShiftIn => {
            state.switch_active(SlotIndex::Primary);
            Ok(())
        }
    };
    match result {
        Ok(()) | Err(FontError::NotFound(_)) => Ok(Status::Ok),
        Err(FontError::Range(what)) => {
            log::debug!("{}: {what} out of range", cmd.name());
            Ok(Status::RangeError)
        }
        Err(FontError::Unimplemented(_)) => Ok(Status::Unimplemented),
        Err(e) => Err(e),
    }
}
