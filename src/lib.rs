//! PCL5 font selection and the HP-GL/2 stick and arc fonts.
//!
//! [`state::FontState`] holds the primary and secondary selection slots and
//! resolves them lazily against a [`font::FontStore`]. The default font is
//! acquired from the job-language environment on reset. When no outline
//! font applies, glyphs are drawn from the compiled-in stroke programs in
//! [`stick`].

#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod font;
pub mod params;
pub mod path;
pub mod pjl;
pub mod state;
pub mod stick;

pub use command::{FontCommand, Status, dispatch};
pub use error::FontError;
pub use state::{FontContext, FontState, ResetType, SlotIndex};
