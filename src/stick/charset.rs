//! HP-GL/2 character set translation.
//!
//! Each national or special character set replaces a handful of 7-bit codes
//! with other stick glyphs. Table entries are `(code, glyph index)` sorted by
//! code; the index counts from the first stick glyph, so the drawn glyph is
//! `index + 0x20`. Codes without an entry draw themselves.

use serde::{Deserialize, Serialize};

use super::program::FIRST_GLYPH;

/// The character sets selectable with the HP-GL/2 `CS`/`CA` instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpglCharset {
    #[default]
    Ascii,
    Hp9825,
    FrenchGerman,
    Scandinavian,
    SpanishLatin,
    SpecialSymbols,
    JisAscii,
    RomanExtension,
    Irv,
    Swedish,
    SwedishNames,
    Norway1,
    German,
    French,
    Uk,
    Italian,
    Spanish,
    Portuguese,
    Norway2,
    French2,
    Draft,
    /// Only reachable by name; used for the configuration plot.
    ConfigurationPlot,
}

impl HpglCharset {
    /// Character set for an HP-GL/2 `CS` number.
    ///
    /// 0..=29 repeat the HP sets by units digit, 30..=59 the ISO sets,
    /// 60/70/80 are French 2 and 99 is Draft.
    pub fn from_number(number: u32) -> Option<Self> {
        const HP: [HpglCharset; 10] = [
            HpglCharset::Ascii,
            HpglCharset::Hp9825,
            HpglCharset::FrenchGerman,
            HpglCharset::Scandinavian,
            HpglCharset::SpanishLatin,
            HpglCharset::SpecialSymbols,
            HpglCharset::JisAscii,
            HpglCharset::RomanExtension,
            HpglCharset::Ascii,
            HpglCharset::Irv,
        ];
        const ISO: [HpglCharset; 10] = [
            HpglCharset::Swedish,
            HpglCharset::SwedishNames,
            HpglCharset::Norway1,
            HpglCharset::German,
            HpglCharset::French,
            HpglCharset::Uk,
            HpglCharset::Italian,
            HpglCharset::Spanish,
            HpglCharset::Portuguese,
            HpglCharset::Norway2,
        ];
        let units = (number % 10) as usize;
        match number {
            0..=29 => Some(HP[units]),
            30..=59 => Some(ISO[units]),
            60 | 70 | 80 => Some(Self::French2),
            99 => Some(Self::Draft),
            _ => None,
        }
    }

    fn table(self) -> &'static [(u8, u16)] {
        match self {
            Self::Ascii => ASCII,
            Self::Hp9825 => HP_9825,
            Self::FrenchGerman => FRENCH_GERMAN,
            Self::Scandinavian => SCANDINAVIAN,
            Self::SpanishLatin => SPANISH_LATIN,
            Self::SpecialSymbols => SPECIAL_SYMBOLS,
            Self::JisAscii => JIS_ASCII,
            Self::RomanExtension => ROMAN_EXTENSION,
            Self::Irv => IRV_ISO,
            Self::Swedish => SWEDISH_ISO,
            Self::SwedishNames => SWEDISH_NAMES_ISO,
            Self::Norway1 => NORWAY_ISO_1,
            Self::German => GERMAN_ISO,
            Self::French => FRENCH_ISO,
            Self::Uk => UK_ISO,
            Self::Italian => ITALIAN_ISO,
            Self::Spanish => SPANISH_ISO,
            Self::Portuguese => PORTUGUESE_ISO,
            Self::Norway2 => NORWAY_ISO_2,
            Self::French2 => FRENCH_2_ISO,
            Self::Draft => DRAFT,
            Self::ConfigurationPlot => CONFIGURATION_PLOT,
        }
    }

    /// Stick glyph drawn for a 7-bit character code.
    pub fn translate(self, code: u8) -> u16 {
        let table = self.table();
        match table.binary_search_by_key(&code, |&(c, _)| c) {
            Ok(i) => table[i].1 + FIRST_GLYPH,
            Err(_) => u16::from(code),
        }
    }

    /// Number of codes this set replaces.
    pub fn replaced_count(self) -> usize {
        self.table().len()
    }
}

const ASCII: &[(u8, u16)] = &[];

#[rustfmt::skip]
const HP_9825: &[(u8, u16)] = &[
    (92, 0x0af), (94, 0x07b), (95, 0x0d6), (96, 0x0db), (123, 0x075), (124, 0x0b0),
    (125, 0x0a7), (126, 0x0d8),
];

#[rustfmt::skip]
const FRENCH_GERMAN: &[(u8, u16)] = &[
    (35, 0x08b), (39, 0x0dc), (92, 0x09c), (94, 0x0d5), (95, 0x0d6), (96, 0x0db),
    (123, 0x0d2), (124, 0x0d3), (125, 0x0d2), (126, 0x007),
];

#[rustfmt::skip]
const SCANDINAVIAN: &[(u8, u16)] = &[
    (35, 0x08b), (91, 0x09e), (92, 0x093), (93, 0x079), (94, 0x094), (95, 0x0d6),
    (123, 0x0d2), (124, 0x0d3), (125, 0x0d2), (126, 0x0d3),
];

#[rustfmt::skip]
const SPANISH_LATIN: &[(u8, u16)] = &[
    (35, 0x089), (39, 0x0dc), (92, 0x087), (94, 0x0d5), (95, 0x0d6), (123, 0x0d7),
    (124, 0x0d8), (125, 0x0d7), (126, 0x0d8),
];

#[rustfmt::skip]
const SPECIAL_SYMBOLS: &[(u8, u16)] = &[
    (65, 0x0be), (66, 0x0bf), (67, 0x0c0), (68, 0x0c1), (69, 0x0c2), (70, 0x0c3),
    (71, 0x0c4), (72, 0x0c5), (73, 0x0c6), (74, 0x0c7), (75, 0x0c8), (76, 0x0c9),
    (77, 0x0ca), (78, 0x0cb), (79, 0x0cc), (80, 0x0cd), (81, 0x0ce), (97, 0x09f),
    (98, 0x0a0), (99, 0x0a1), (100, 0x0a2), (101, 0x0bb), (102, 0x0a4), (103, 0x0a5),
    (104, 0x06a), (105, 0x05e), (106, 0x067), (107, 0x068), (108, 0x07e), (109, 0x06f),
    (110, 0x075), (111, 0x077), (112, 0x061), (113, 0x0a6), (114, 0x0a7), (115, 0x0b1),
    (116, 0x0a8), (117, 0x0a9), (118, 0x0aa), (119, 0x060), (120, 0x0ab), (121, 0x0ac),
    (122, 0x069),
];

#[rustfmt::skip]
const JIS_ASCII: &[(u8, u16)] = &[
    (92, 0x07f), (126, 0x0bb),
];

#[rustfmt::skip]
const ROMAN_EXTENSION: &[(u8, u16)] = &[
    (33, 0x0e3), (34, 0x0e0), (35, 0x0e8), (36, 0x0e6), (37, 0x0e4), (38, 0x0e9),
    (39, 0x0eb), (40, 0x10e), (41, 0x040), (42, 0x03e), (43, 0x0ba), (44, 0x111),
    (45, 0x0ff), (46, 0x0fd), (47, 0x10f), (48, 0x0bb), (49, 0x0fb), (50, 0x0fa),
    (51, 0x0bd), (52, 0x0b4), (53, 0x09c), (54, 0x088), (55, 0x08a), (56, 0x087),
    (57, 0x089), (58, 0x07d), (59, 0x08b), (60, 0x07f), (61, 0x08e), (62, 0x10b),
    (63, 0x10a), (64, 0x0e1), (65, 0x0e7), (66, 0x0f1), (67, 0x0fe), (68, 0x098),
    (69, 0x08f), (70, 0x09a), (71, 0x09b), (72, 0x08c), (73, 0x091), (74, 0x099),
    (75, 0x090), (76, 0x083), (77, 0x0e5), (78, 0x084), (79, 0x085), (80, 0x095),
    (81, 0x0ea), (82, 0x09e), (83, 0x093), (84, 0x110), (85, 0x0ee), (86, 0x079),
    (87, 0x094), (88, 0x080), (89, 0x0b6), (90, 0x081), (91, 0x082), (92, 0x0b5),
    (93, 0x0ec), (94, 0x086), (95, 0x0f0), (96, 0x0e2), (97, 0x0b2), (98, 0x0b3),
    (99, 0x10c), (100, 0x10d), (101, 0x0ed), (102, 0x0ef), (103, 0x0f3), (104, 0x0f2),
    (105, 0x0b7), (106, 0x0b8), (107, 0x0f6), (108, 0x0f7), (109, 0x0fc), (110, 0x0f8),
    (111, 0x0f9), (112, 0x106), (113, 0x107), (114, 0x00e), (115, 0x073), (116, 0x108),
    (117, 0x105), (118, 0x00d), (119, 0x104), (120, 0x103), (121, 0x0f5), (122, 0x0f4),
    (123, 0x101), (124, 0x102), (125, 0x100), (126, 0x061),
];

#[rustfmt::skip]
const IRV_ISO: &[(u8, u16)] = &[
    (36, 0x07d), (126, 0x0bb),
];

#[rustfmt::skip]
const SWEDISH_ISO: &[(u8, u16)] = &[
    (36, 0x07d), (91, 0x080), (92, 0x081), (93, 0x095), (123, 0x083), (124, 0x084),
    (125, 0x110), (126, 0x0bb),
];

#[rustfmt::skip]
const SWEDISH_NAMES_ISO: &[(u8, u16)] = &[
    (36, 0x07d), (64, 0x0b5), (91, 0x080), (92, 0x081), (93, 0x095), (94, 0x082),
    (96, 0x08f), (123, 0x083), (124, 0x084), (125, 0x110), (126, 0x085),
];

#[rustfmt::skip]
const NORWAY_ISO_1: &[(u8, u16)] = &[
    (91, 0x093), (92, 0x09e), (93, 0x095), (123, 0x094), (124, 0x079), (125, 0x110),
    (126, 0x0bb),
];

#[rustfmt::skip]
const GERMAN_ISO: &[(u8, u16)] = &[
    (64, 0x08e), (91, 0x080), (92, 0x081), (93, 0x082), (123, 0x083), (124, 0x084),
    (125, 0x085), (126, 0x086),
];

#[rustfmt::skip]
const FRENCH_ISO: &[(u8, u16)] = &[
    (35, 0x08b), (64, 0x08c), (91, 0x0bd), (92, 0x09c), (93, 0x08e), (123, 0x08f),
    (124, 0x090), (125, 0x091), (126, 0x0ba),
];

#[rustfmt::skip]
const UK_ISO: &[(u8, u16)] = &[
    (35, 0x08b), (126, 0x0bb),
];

#[rustfmt::skip]
const ITALIAN_ISO: &[(u8, u16)] = &[
    (35, 0x08b), (64, 0x08e), (91, 0x0bd), (92, 0x09c), (93, 0x08f), (96, 0x090),
    (123, 0x08c), (124, 0x099), (125, 0x091), (126, 0x0b6),
];

#[rustfmt::skip]
const SPANISH_ISO: &[(u8, u16)] = &[
    (35, 0x08b), (64, 0x08e), (91, 0x087), (92, 0x088), (93, 0x089), (123, 0x0bd),
    (124, 0x08a), (125, 0x09c),
];

#[rustfmt::skip]
const PORTUGUESE_ISO: &[(u8, u16)] = &[
    (64, 0x08e), (91, 0x0b2), (92, 0x0b4), (93, 0x0b7), (123, 0x0b3), (124, 0x09c),
    (125, 0x0b8), (126, 0x0bd),
];

#[rustfmt::skip]
const NORWAY_ISO_2: &[(u8, u16)] = &[
    (35, 0x08e), (91, 0x093), (92, 0x09e), (93, 0x095), (123, 0x094), (124, 0x079),
    (125, 0x110), (126, 0x05c),
];

#[rustfmt::skip]
const FRENCH_2_ISO: &[(u8, u16)] = &[
    (35, 0x08b), (64, 0x08c), (91, 0x0bd), (92, 0x09c), (93, 0x08e), (96, 0x073),
    (123, 0x08f), (124, 0x090), (125, 0x091), (126, 0x0ba),
];

#[rustfmt::skip]
const DRAFT: &[(u8, u16)] = &[
    (35, 0x10a), (39, 0x10e), (42, 0x113), (44, 0x112), (92, 0x079), (94, 0x0bc),
    (123, 0x073), (124, 0x0bd), (125, 0x109),
];

#[rustfmt::skip]
const CONFIGURATION_PLOT: &[(u8, u16)] = &[
    (91, 0x083), (92, 0x08a), (93, 0x084), (94, 0x085), (123, 0x110), (124, 0x08f),
    (125, 0x09a), (126, 0x09b),
];
