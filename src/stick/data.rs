//! Compiled-in stroke programs for the stick and arc fonts.
//!
//! `STROKES` holds every glyph program back to back; `OFFSETS` and `COUNTS`
//! index it by `glyph - 0x20`.

/// Number of glyphs in the stroke tables.
pub(super) const NUM_SYMBOLS: usize = 276;

#[rustfmt::skip]
pub(super) static STROKES: [u8; 2149] = [
    0xf5, 0x54, 0x4e, 0xf4, 0xf1, 0x5e, 0x54, 0xf0, 0x52, 0xf2, 0x51, 0xf0,
    0x67, 0xf2, 0x57, 0xf0, 0xf7, 0x43, 0x46, 0xf1, 0x56, 0x43, 0x40, 0x43,
    0xf1, 0x53, 0x40, 0xf4, 0x3b, 0x2e, 0xf1, 0x3e, 0x3b, 0xf4, 0xf0, 0x8b,
    0x7e, 0xf1, 0x8e, 0x8b, 0x9a, 0x4a, 0x39, 0x38, 0x47, 0xf0, 0x97, 0x37,
    0x15, 0x14, 0x32, 0x82, 0x93, 0x60, 0x40, 0x04, 0x06, 0x28, 0x38, 0x5a,
    0x5e, 0x4f, 0x3f, 0x2e, 0x2a, 0x90, 0x04, 0x22, 0x82, 0xa4, 0xa6, 0x88,
    0x28, 0x0a, 0x0b, 0x2d, 0x8d, 0xab, 0xf0, 0x50, 0x5f, 0x3c, 0x31, 0x37,
    0xf0, 0x39, 0x3e, 0x5e, 0x50, 0xf0, 0x30, 0x70, 0xf0, 0x5c, 0x5b, 0xf0,
    0x39, 0x59, 0x50, 0xf7, 0x52, 0x30, 0x20, 0x02, 0x82, 0xf0, 0x08, 0x88,
    0xf0, 0x4c, 0x44, 0xf0, 0x15, 0x7b, 0xf0, 0x4c, 0xf0, 0x1b, 0x75, 0x3f,
    0x7f, 0xf0, 0x70, 0x30, 0xf0, 0x50, 0x5f, 0xf0, 0xaf, 0x0f, 0x08, 0xf0,
    0xf6, 0x2c, 0xf2, 0x3c, 0xf0, 0x6c, 0xf2, 0x7c, 0xf0, 0x0a, 0xf7, 0xf0,
    0x0f, 0x04, 0x40, 0x60, 0xa4, 0xaf, 0x50, 0x0f, 0x20, 0x56, 0x80, 0xaf,
    0x00, 0xf0, 0x0a, 0xf1, 0x5a, 0xa5, 0xf1, 0x55, 0x0a, 0xbf, 0xaf, 0x7c,
    0x73, 0xa0, 0xb0, 0x0c, 0x3f, 0x7f, 0xac, 0xab, 0x67, 0x57, 0x02, 0x00,
    0xa0, 0x00, 0x0f, 0xaf, 0xf0, 0x78, 0x08, 0x66, 0xa6, 0xa4, 0xf4, 0x60,
    0x40, 0x04, 0x0b, 0x4f, 0x6f, 0xab, 0xa4, 0xf0, 0x73, 0xa0, 0x58, 0xf0,
    0x00, 0x0f, 0x6f, 0x9c, 0x9b, 0x68, 0x08, 0xf0, 0x68, 0xa4, 0xa3, 0x70,
    0x00, 0x0f, 0x3f, 0xa8, 0xa7, 0x30, 0x00, 0xaf, 0xf0, 0x0f, 0xa0, 0x00,
    0xaf, 0x0f, 0x1f, 0x4c, 0x43, 0x10, 0x00, 0x09, 0xf6, 0xf0, 0x2c, 0xf2,
    0x3c, 0xf0, 0x6c, 0xf2, 0x7c, 0xf0, 0x00, 0xf7, 0xf0, 0x00, 0x5f, 0xa0,
    0xf0, 0x86, 0x26, 0x70, 0x7f, 0x06, 0xa6, 0x0f, 0xaf, 0x59, 0x79, 0xa6,
    0xa4, 0x60, 0x40, 0x04, 0x06, 0x39, 0x69, 0xf0, 0x39, 0x1b, 0x1c, 0x4f,
    0x6f, 0x9c, 0x9b, 0x79, 0x04, 0x40, 0x60, 0xa4, 0xa5, 0x78, 0x38, 0x0b,
    0x0c, 0x3f, 0x7f, 0xac, 0xf0, 0xf6, 0x1f, 0x5c, 0x9f, 0xf7, 0x9f, 0x4f,
    0x0b, 0x03, 0x30, 0x60, 0xa4, 0xa6, 0x6a, 0x3a, 0x07, 0x0f, 0xaf, 0x00,
    0x0f, 0xf0, 0xaf, 0x08, 0xf0, 0x4b, 0xa0, 0xaf, 0x59, 0x0f, 0x00, 0x0f,
    0xf0, 0xaf, 0xa0, 0xf0, 0xa8, 0x08, 0xf5, 0xf0, 0x08, 0xf6, 0xf0, 0x0c,
    0x2e, 0x4e, 0x5d, 0xf3, 0x6c, 0x8c, 0xae, 0xf0, 0x00, 0xf7, 0xf0, 0x00,
    0x0f, 0xa0, 0xaf, 0x16, 0x38, 0x48, 0x57, 0xf3, 0x66, 0x76, 0x98, 0xf0,
    0x9d, 0x7b, 0x6b, 0x5c, 0xf3, 0x4d, 0x3d, 0x1b, 0xf0, 0x19, 0x10, 0x16,
    0x49, 0x59, 0x86, 0x80, 0xf0, 0x1e, 0x19, 0x13, 0x40, 0x50, 0x83, 0xf0,
    0x89, 0x80, 0xf2, 0x82, 0xf0, 0x00, 0xaf, 0xf0, 0x2f, 0xf2, 0x2d, 0x13,
    0x4d, 0xf0, 0x8d, 0x53, 0xf0, 0x1a, 0x9a, 0xf0, 0x86, 0x06, 0x86, 0xf0,
    0x8a, 0x0a, 0xf0, 0x02, 0x8e, 0x52, 0xf2, 0x51, 0xf0, 0x53, 0x57, 0x68,
    0x78, 0x9a, 0x9b, 0x5f, 0x4f, 0x0b, 0x87, 0x03, 0xf0, 0x01, 0x81, 0x83,
    0x07, 0x8b, 0xf0, 0x01, 0x81, 0xa3, 0xf4, 0x70, 0x50, 0x14, 0x18, 0x5c,
    0x6c, 0xa8, 0xa5, 0x83, 0x87, 0x69, 0x59, 0x37, 0x35, 0x53, 0x63, 0x85,
    0x04, 0x40, 0x50, 0xa5, 0xaf, 0xa9, 0xf4, 0x76, 0x46, 0x0a, 0x0b, 0x4f,
    0x6f, 0xab, 0xa4, 0x60, 0x10, 0xf7, 0x10, 0x1e, 0xf0, 0xf6, 0x13, 0xf4,
    0x40, 0x50, 0x83, 0x86, 0x59, 0x49, 0x16, 0x13, 0xf0, 0xf7, 0x80, 0x8e,
    0x89, 0x80, 0xf0, 0x83, 0xf4, 0x50, 0x40, 0x13, 0x16, 0x49, 0x59, 0x86,
    0x85, 0x15, 0x95, 0xf0, 0x53, 0xf2, 0x52, 0xf0, 0x57, 0xf2, 0x58, 0x1e,
    0x10, 0xf0, 0x50, 0x40, 0x13, 0x16, 0x49, 0x59, 0x86, 0x83, 0x50, 0xf0,
    0xf7, 0x8e, 0x83, 0x50, 0x30, 0x12, 0xf4, 0x30, 0x60, 0x82, 0x83, 0x65,
    0x25, 0x16, 0x17, 0x39, 0x79, 0x88, 0xf0, 0x1e, 0x5b, 0x9e, 0xf7, 0x49,
    0xf4, 0x7c, 0x8c, 0xb9, 0xb8, 0x85, 0x75, 0x48, 0x32, 0x30, 0x3c, 0x5e,
    0x6e, 0x8c, 0xf0, 0x59, 0x19, 0xf0, 0x3d, 0x32, 0x50, 0x60, 0x82, 0x99,
    0x70, 0x59, 0x30, 0x19, 0x50, 0x99, 0x00, 0x30, 0x3f, 0x0f, 0xa0, 0x70,
    0x7f, 0xaf, 0x59, 0xf0, 0x0f, 0x59, 0x50, 0xf0, 0x36, 0x76, 0xf0, 0x74,
    0x34, 0x08, 0xf6, 0xf0, 0x2c, 0xf2, 0x3c, 0xf0, 0x6c, 0xf2, 0x7c, 0xf0,
    0xa0, 0xf7, 0xf0, 0xa4, 0x60, 0x40, 0x04, 0x0b, 0x4f, 0x6f, 0xab, 0xa4,
    0xf0, 0x9f, 0x5d, 0x1f, 0x2f, 0x3e, 0x39, 0x58, 0x37, 0x31, 0x20, 0x10,
    0x19, 0x17, 0x39, 0x49, 0x67, 0x60, 0xf0, 0x67, 0x89, 0x99, 0xb7, 0xb0,
    0xbf, 0xaf, 0x9e, 0x99, 0x78, 0x97, 0x91, 0xa0, 0xb0, 0xf5, 0x00, 0x0f,
    0x1f, 0x10, 0x20, 0x2f, 0x3f, 0x30, 0x40, 0x4f, 0x5f, 0x50, 0x60, 0x6f,
    0x7f, 0x70, 0x80, 0x8f, 0x9f, 0x90, 0xa0, 0xaf, 0xbf, 0xb0, 0xc0, 0xcf,
    0xdf, 0xd0, 0xe0, 0xef, 0x0f, 0x0e, 0xee, 0xed, 0x0d, 0x0c, 0xec, 0xeb,
    0x0b, 0x0a, 0xea, 0xe9, 0x09, 0x08, 0xe8, 0xe7, 0x07, 0x06, 0xe6, 0xe5,
    0x05, 0x04, 0xe4, 0xe3, 0x03, 0x02, 0xe2, 0xe1, 0x01, 0x00, 0xe0, 0xf5,
    0x00, 0xe0, 0x2c, 0xf2, 0x3c, 0xf0, 0x6c, 0xf2, 0x7c, 0x6c, 0xf0, 0x19,
    0x50, 0xf0, 0xf7, 0x9e, 0x30, 0x10, 0x01, 0xf0, 0xf6, 0x7d, 0x3b, 0xf7,
    0x4a, 0xf1, 0x4c, 0x5e, 0xf1, 0x5c, 0x4a, 0xf0, 0x12, 0x17, 0x39, 0x69,
    0x87, 0x82, 0x60, 0x30, 0x12, 0xf0, 0x89, 0x80, 0x91, 0x80, 0x70, 0x33,
    0x23, 0x12, 0x11, 0x20, 0x30, 0x52, 0x5d, 0x7f, 0x8f, 0xad, 0xf0, 0x79,
    0x39, 0xf0, 0x77, 0x37, 0x39, 0x59, 0x7b, 0x7c, 0x5e, 0x3e, 0x1c, 0x1b,
    0x39, 0x19, 0x59, 0x86, 0x80, 0xf0, 0x83, 0x50, 0x30, 0x12, 0x14, 0x36,
    0x86, 0xf0, 0x1c, 0xf2, 0x2c, 0xf0, 0x6c, 0xf2, 0x7c, 0x24, 0x33, 0x83,
    0x94, 0x95, 0x86, 0x36, 0x27, 0x29, 0x3a, 0x8a, 0x99, 0x97, 0x86, 0xf0,
    0x8a, 0x3a, 0x2b, 0x2c, 0x3d, 0x8d, 0x9c, 0x18, 0x3a, 0x9a, 0xf0, 0x92,
    0x84, 0x7a, 0xf0, 0x4a, 0x12, 0x3e, 0x6e, 0x8c, 0x8a, 0x68, 0xf0, 0x28,
    0x78, 0x96, 0x94, 0x72, 0x32, 0x14, 0x32, 0x62, 0x84, 0xaa, 0xf0, 0x84,
    0x83, 0x92, 0xa2, 0xf0, 0x3a, 0x01, 0x0c, 0x2e, 0x3e, 0x5c, 0x92, 0xf0,
    0x69, 0x02, 0x5e, 0xa2, 0x02, 0x32, 0x07, 0x0a, 0x4e, 0x5e, 0x9a, 0x97,
    0x62, 0x92, 0x1a, 0x38, 0x43, 0x42, 0x64, 0x9a, 0xf0, 0x6b, 0x41, 0xae,
    0xaf, 0x0f, 0x58, 0x00, 0xa0, 0xa1, 0xf5, 0x2a, 0x6d, 0xaa, 0x6a, 0x3a,
    0x18, 0x14, 0x32, 0x62, 0x84, 0x88, 0x6a, 0x13, 0x16, 0x49, 0x59, 0x86,
    0x83, 0x50, 0x40, 0x13, 0xf0, 0x10, 0x89, 0x83, 0x61, 0x31, 0x13, 0x17,
    0x4a, 0x7a, 0x98, 0x97, 0xaa, 0x83, 0x82, 0x91, 0xb1, 0xa4, 0xf4, 0x60,
    0x40, 0x04, 0x0b, 0x4f, 0x6f, 0xab, 0xa4, 0xf0, 0xaf, 0x00, 0xaf, 0x5f,
    0x50, 0xa0, 0xf0, 0x96, 0x26, 0x07, 0x29, 0x39, 0x48, 0x41, 0x30, 0x20,
    0x02, 0x07, 0xf0, 0x45, 0x85, 0x87, 0x69, 0x59, 0x48, 0x41, 0x50, 0x60,
    0x82, 0x6d, 0x4d, 0xf1, 0x4e, 0x4f, 0x6f, 0xf1, 0x6e, 0xf0, 0x00, 0x4c,
    0x6c, 0xa0, 0x86, 0x26, 0x23, 0xf2, 0x56, 0xf0, 0x1a, 0x29, 0xf0, 0x9a,
    0x89, 0xf0, 0x92, 0x83, 0xf0, 0x12, 0x23, 0x2d, 0x4f, 0x6f, 0x9c, 0x9b,
    0x68, 0x58, 0xf0, 0x68, 0xa4, 0xa3, 0x70, 0x50, 0x32, 0x9d, 0x5f, 0x1d,
    0x10, 0xf0, 0x89, 0x14, 0xf0, 0x80, 0x46, 0x45, 0x57, 0x65, 0xf0, 0x57,
    0x51, 0x10, 0x89, 0xf0, 0x19, 0x80, 0x10, 0x89, 0x19, 0x13, 0x40, 0x50,
    0x83, 0x80, 0x89, 0xf0, 0x1c, 0xf2, 0x2c, 0xf0, 0x6c, 0xf2, 0x7c, 0x6c,
    0xf0, 0x50, 0x40, 0x13, 0x16, 0x49, 0x59, 0x86, 0x83, 0x50, 0x55, 0xf0,
    0x57, 0x58, 0xf4, 0xbe, 0xcf, 0xdf, 0xee, 0xdd, 0xcd, 0xf0, 0xdd, 0xec,
    0xdb, 0xcb, 0xbc, 0xf4, 0xbe, 0xcf, 0xdf, 0xee, 0xed, 0xbb, 0xeb, 0xf7,
    0x04, 0x14, 0x10, 0xf0, 0x21, 0x23, 0x34, 0x44, 0x53, 0x51, 0x40, 0x30,
    0x21, 0xf0, 0xf7, 0xb2, 0xe2, 0xe3, 0xd4, 0xc4, 0xb3, 0xb1, 0xc0, 0xd0,
    0xe1, 0xbb, 0xef, 0xf0, 0xbf, 0xeb, 0x5f, 0xf2, 0x5e, 0xf0, 0x5c, 0x58,
    0x47, 0x37, 0x15, 0x14, 0x50, 0x60, 0x93, 0xf1, 0x64, 0x49, 0xf1, 0x78,
    0x93, 0xf0, 0xb6, 0x26, 0x1e, 0xf2, 0x2d, 0x6b, 0xf0, 0x19, 0x59, 0x86,
    0x80, 0xf0, 0x83, 0x50, 0x30, 0x12, 0x14, 0x36, 0x86, 0xf0, 0x6d, 0x2b,
    0xf0, 0x15, 0x85, 0x86, 0x59, 0x49, 0x16, 0x13, 0x40, 0x50, 0x83, 0xf0,
    0x2d, 0x6b, 0xf0, 0x50, 0x40, 0x13, 0x16, 0x49, 0x59, 0x86, 0x83, 0x50,
    0xf0, 0x6d, 0x2b, 0xf0, 0x19, 0x13, 0x40, 0x50, 0x83, 0x80, 0x89, 0xf0,
    0x2d, 0x6b, 0xf7, 0x42, 0x55, 0xf0, 0xf7, 0x8a, 0xf0, 0x88, 0x55, 0x45,
    0x18, 0x1a, 0x4d, 0x5d, 0x8a, 0xf0, 0x45, 0x34, 0x33, 0x22, 0xa4, 0xf4,
    0x60, 0x40, 0x04, 0x0b, 0x4f, 0x6f, 0xab, 0xf0, 0x00, 0xf7, 0xf0, 0x45,
    0x63, 0x41, 0x13, 0x1f, 0x6f, 0x9c, 0x9b, 0x68, 0x18, 0xf0, 0x68, 0xa4,
    0xa3, 0x70, 0x20, 0x02, 0x68, 0x3b, 0x2b, 0x1a, 0xf0, 0x8f, 0x40, 0xf5,
    0x4e, 0xf2, 0x5e, 0xf0, 0x8e, 0xf2, 0x9e, 0xf5, 0x4d, 0xf2, 0x5e, 0x4c,
    0xf2, 0x5d, 0xf0, 0x19, 0x59, 0x86, 0x80, 0xf0, 0x83, 0x50, 0x30, 0x12,
    0x14, 0x36, 0x86, 0xf5, 0xf6, 0x0c, 0x1d, 0x2d, 0x3c, 0x4c, 0x5d, 0x88,
    0x8e, 0xf0, 0x8e, 0x2e, 0x22, 0xe2, 0xee, 0x8e, 0xf0, 0x88, 0x88, 0x8e,
    0xf0, 0x8e, 0x5e, 0x2b, 0x25, 0x52, 0xb2, 0xe5, 0xeb, 0xbe, 0x8e, 0xf0,
    0x88, 0x88, 0x8e, 0xf0, 0x8e, 0x22, 0xe2, 0x8e, 0xf0, 0x88, 0x88, 0x8e,
    0xf0, 0x88, 0x82, 0xf0, 0x88, 0x28, 0xe8, 0xf0, 0x88, 0xf0, 0x2e, 0xf3,
    0x2e, 0xf3, 0xe2, 0x88, 0x22, 0xee, 0x88, 0x88, 0x8e, 0xf0, 0x8e, 0xf3,
    0x28, 0xf3, 0x82, 0xf3, 0xe8, 0xf3, 0x8e, 0xf0, 0x88, 0x88, 0x8e, 0xf0,
    0x8e, 0xf3, 0x28, 0xf3, 0xe8, 0xe8, 0xf3, 0x8e, 0x82, 0xf0, 0x88, 0xe2,
    0x22, 0xf3, 0xee, 0x2e, 0xf3, 0xe2, 0xf0, 0x88, 0x2e, 0xee, 0xf3, 0x22,
    0xe2, 0xf0, 0x68, 0xa8, 0xf0, 0x88, 0x88, 0x2e, 0xf0, 0x88, 0xee, 0xf0,
    0x88, 0x82, 0xf0, 0x88, 0x88, 0x8a, 0xf0, 0x8a, 0x6a, 0xf3, 0x2e, 0xf3,
    0x6a, 0x66, 0xf3, 0x22, 0xf3, 0x66, 0xa6, 0xf3, 0xe2, 0xf3, 0xa6, 0xaa,
    0xf3, 0xee, 0xf3, 0xaa, 0x8a, 0xf0, 0x88, 0x88, 0x26, 0xf0, 0x26, 0xe6,
    0x8e, 0x26, 0xf0, 0x8b, 0x2b, 0x82, 0xeb, 0x8b, 0xf0, 0x88, 0x08, 0x88,
    0xf0, 0x44, 0x4c, 0xf0, 0x0d, 0x8d, 0x76, 0xa8, 0x7a, 0xf0, 0xa8, 0x28,
    0xf0, 0x56, 0x28, 0x5a, 0x06, 0x26, 0x50, 0xcf, 0xef, 0x54, 0x88, 0x39,
    0xf0, 0x8d, 0x88, 0xd9, 0xf0, 0xb4, 0x88, 0xf5, 0x0f, 0xef, 0xf5, 0x4c,
    0x7e, 0xf5, 0x4e, 0x7c, 0x12, 0x1d, 0xf0, 0x18, 0xb8, 0x67, 0x8a, 0xa7,
    0xf0, 0x8a, 0x82, 0xf0, 0x65, 0x82, 0xa5, 0x3c, 0x9c, 0xf1, 0x97, 0x32,
    0xe2, 0x82, 0xf1, 0x87, 0xec, 0x31, 0x37, 0xf1, 0x87, 0xd1, 0xdc, 0xd6,
    0xf1, 0x86, 0x3c, 0x80, 0x4c, 0xcc, 0x80, 0x23, 0x22, 0x31, 0x41, 0x52,
    0x7c, 0x8d, 0x9d, 0xac, 0xab, 0x38, 0xd8, 0xf0, 0xd5, 0x35, 0xf0, 0x32,
    0xd2, 0xf0, 0x38, 0x59, 0x69, 0xa7, 0xb7, 0xd8, 0xa4, 0xf4, 0x60, 0x40,
    0x04, 0x0b, 0x4f, 0x6f, 0xab, 0xa4, 0xf0, 0x08, 0xf6, 0xf0, 0x0c, 0x2e,
    0x4e, 0x5d, 0xf3, 0x6c, 0x8c, 0xae, 0xf7, 0xf0, 0x00, 0x5f, 0xa0, 0xf0,
    0x86, 0x26, 0xf6, 0xf0, 0x1a, 0x5d, 0x9a, 0xf7, 0x05, 0xf6, 0xf0, 0x7e,
    0x3c, 0xf0, 0x00, 0xf7, 0xf0, 0xf0, 0x00, 0x5f, 0xa0, 0xf0, 0x86, 0x26,
    0xf6, 0xf0, 0x3e, 0x7c, 0xf7, 0xf0, 0x9d, 0x7b, 0x6b, 0x5c, 0xf3, 0x4d,
    0x3d, 0x1b, 0xf0, 0x19, 0x59, 0x86, 0x80, 0xf0, 0x83, 0x50, 0x30, 0x12,
    0x14, 0x36, 0x86, 0xf0, 0x1b, 0x5e, 0x9b, 0x50, 0x40, 0x13, 0x16, 0x49,
    0x59, 0x86, 0x83, 0x50, 0xf0, 0x78, 0x1f, 0xf0, 0x6e, 0x1b, 0x53, 0x43,
    0x16, 0x19, 0x4c, 0x5c, 0x89, 0x86, 0x53, 0xf0, 0x10, 0xa0, 0xf0, 0x8c,
    0x83, 0xf3, 0x86, 0xf7, 0x53, 0x43, 0x16, 0x19, 0x4c, 0x5c, 0x89, 0xaf,
    0xaf, 0x59, 0xf0, 0x0f, 0x59, 0x50, 0xf0, 0x08, 0xf6, 0xf0, 0x1c, 0xf2,
    0x2c, 0xf0, 0x6c, 0xf2, 0x7c, 0xf0, 0x00, 0xf7, 0xf0, 0xa0, 0x00, 0x0f,
    0xaf, 0xf0, 0x78, 0x08, 0xa0, 0x00, 0x0f, 0xaf, 0xf0, 0x78, 0x08, 0xf0,
    0xf6, 0xf0, 0x1c, 0x5f, 0x9c, 0xf7, 0xf0, 0xa4, 0xf4, 0x60, 0x40, 0x04,
    0x0b, 0x4f, 0x6f, 0xab, 0xa4, 0x05, 0xf6, 0xf0, 0x7e, 0x3c, 0xf0, 0x00,
    0xf7, 0xf0, 0xa0, 0x00, 0x0f, 0xaf, 0xf0, 0x78, 0x08, 0xf6, 0xf0, 0x3e,
    0x7c, 0xf7, 0x1c, 0xf2, 0x2c, 0xf0, 0x6c, 0xf2, 0x7c, 0x6c, 0xf0, 0x83,
    0xf4, 0x50, 0x40, 0x13, 0x16, 0x49, 0x59, 0x86, 0x85, 0x15, 0xf0, 0x1a,
    0x5d, 0x9a, 0xf0, 0x0f, 0x04, 0x40, 0x60, 0xa4, 0xaf, 0xf0, 0xf6, 0xf0,
    0x1c, 0x5f, 0x9c, 0xf7, 0xf0, 0x3f, 0x7f, 0xf0, 0x70, 0x30, 0xf0, 0x50,
    0x5f, 0xf0, 0xf6, 0xf0, 0x2c, 0xf2, 0x3c, 0xf0, 0x6c, 0xf2, 0x7c, 0xf7,
    0xf6, 0x7e, 0x3c, 0xf7, 0xf0, 0x3f, 0x7f, 0xf0, 0x70, 0x30, 0xf0, 0x50,
    0x5f, 0xf6, 0xf0, 0x2e, 0x7c, 0x1a, 0x5d, 0x9a, 0xf0, 0x30, 0x70, 0xf0,
    0x39, 0x59, 0x50, 0xf0, 0x1c, 0xf2, 0x2c, 0xf0, 0x6c, 0xf2, 0x7c, 0x6c,
    0x6d, 0x2b, 0xf0, 0x30, 0x70, 0xf0, 0x39, 0x59, 0x50, 0xf0, 0x2d, 0x6b,
    0x9d, 0x7b, 0x6b, 0x5c, 0xf3, 0x4d, 0x3d, 0x1b, 0xf0, 0x50, 0x40, 0x13,
    0x16, 0x49, 0x59, 0x86, 0x83, 0x50, 0xf0, 0x1b, 0x5e, 0x9b, 0xf0, 0x19,
    0x13, 0x40, 0x50, 0x83, 0xf0, 0x89, 0x80, 0xf6, 0x7e, 0x3c, 0xf7, 0xf0,
    0x0f, 0x04, 0x40, 0x60, 0xa4, 0xaf, 0xf6, 0xf0, 0x3e, 0x7c, 0xf7, 0xf6,
    0x7e, 0x3c, 0xf7, 0xf0, 0xaf, 0xaf, 0x59, 0xf0, 0x0f, 0x59, 0x50, 0xf6,
    0x7e, 0x3c, 0xf7, 0xf0, 0xa4, 0xf4, 0x60, 0x40, 0x04, 0x0b, 0x4f, 0x6f,
    0xab, 0xa4, 0xf6, 0xf0, 0x3e, 0x7c, 0xf7, 0xf6, 0x2e, 0x4f, 0x6f, 0xf1,
    0x6d, 0x3a, 0x4a, 0xf1, 0x58, 0x36, 0x27, 0xf7, 0xf0, 0xf6, 0x2d, 0x5e,
    0x6e, 0xf1, 0x6c, 0x3a, 0x6a, 0xf1, 0x68, 0x56, 0x27, 0xf7, 0xf0, 0x08,
    0x98, 0xf0, 0xf7, 0x71, 0x7a, 0xf4, 0x23, 0x83, 0xf6, 0xf0, 0xf6, 0x3b,
    0x6e, 0x66, 0xf7, 0xf0, 0x08, 0x98, 0xf0, 0xf7, 0x29, 0x4a, 0xf1, 0x47,
    0x33, 0x22, 0x21, 0x71, 0xf6, 0x4c, 0xf2, 0x5d, 0x1c, 0xf2, 0x2c, 0xf0,
    0x6c, 0xf2, 0x7c, 0x6c, 0x0e, 0x9e, 0x01, 0xa1, 0xf0, 0x51, 0x5f, 0xf7,
    0x25, 0x24, 0x33, 0x53, 0x64, 0xf6, 0x6d, 0x7e, 0x8e, 0x9e, 0xad, 0xac,
    0xf0, 0x39, 0x89, 0x60, 0x6f, 0xf0, 0xa2, 0x62, 0xf1, 0x67, 0xac, 0x0b,
    0x87, 0x03, 0xf0, 0x4b, 0xc7, 0x43, 0x83, 0x07, 0x8b, 0xf0, 0xc3, 0x47,
    0xcb, 0x00, 0x0a, 0x9a, 0x90, 0x00, 0xf7, 0x10, 0x1e, 0xf6, 0x1d, 0xf0,
    0x13, 0xf4, 0x40, 0x50, 0x83, 0x86, 0x59, 0x49, 0x16, 0x13, 0xf0, 0xf7,
    0x00, 0x30, 0xf0, 0xf6, 0x0d, 0x3d, 0xf8, 0x58, 0xa8, 0xf9, 0xf0, 0x00,
    0x0f, 0x3f, 0xa8, 0xa7, 0x30, 0x00, 0xf0, 0x5f, 0x50, 0xf0, 0x70, 0x7f,
    0xf0, 0x59, 0x59, 0xf1, 0x5c, 0x5f, 0x9f, 0x7d, 0x4b, 0x28, 0xf3, 0x4a,
    0xf0, 0x6a, 0xf3, 0x88, 0xf0, 0x8d, 0xf3, 0x6b, 0xf0, 0x5c, 0x5f, 0xf0,
    0x2d, 0xf3, 0x4b, 0x35, 0x10, 0x25, 0xf2, 0x37, 0xf0, 0x65, 0x65, 0xf2,
    0x77,
];

#[rustfmt::skip]
pub(super) static OFFSETS: [u16; NUM_SYMBOLS] = [
       1,    1,   27,  395,   66,  385,   52,   27,  165,  229,
     106,  106,   22,  106,    8,  389,  158,   79,  171,  259,
     255,  301,  298,  309,  261,  461,    8,   12,  431,  405,
     425,  413,  437,  249,  204,  189,  216,  180,  181,  187,
     322,  119,  456,  311,  180,  318,  346,  189,  204,  189,
     201,  280,  125,  144,  149,  151,  222,  589,  226,  586,
     585,  582,  907,  720, 1502,  492,  515,  495,  491,  495,
     561,  518,  369,   90,   93, 1031,   86,  635,  369,  518,
     473,  478,  369,  533,  567,  378,  579,  575, 1045,  731,
    1049,  648,   82,  627,  351,  658,  505,  103, 1129, 1095,
    1082, 1103, 1118,  431,  425, 1156,  351,  880,  931,  844,
    1264,  877,   40, 1146,  870,  857,  890,  835,  550,  899,
     909,  919,  890, 1039,  155, 1000,  405,  589,  235,  601,
     130,  793, 1060, 1052, 1014, 1077,  331, 1134,  360,  764,
    1158, 1214,  813, 1174, 1204, 1177,  744,  957,  965,  985,
    1029,  625, 1161, 1188, 1191, 1201, 1217, 1250,  945, 1529,
    1519, 1524, 1534, 1495, 1553, 1556, 1462, 1470, 1474, 1513,
    1543, 1485, 1539, 1498, 1502, 1480, 1504, 1509, 1578, 1625,
    1234, 1745, 1863, 1568, 1872, 1188, 2012, 2020, 2022, 2009,
    1307, 1318, 1333, 1342, 1353, 1363, 1377, 1392, 1400, 1410,
    1420, 1342, 1391, 1342, 1447, 1349, 1342,    1,    0,    0,
    1271, 1279,   27,  906,  719,  330, 1299,    0,  657, 1501,
    1498,    0, 1495,    0, 1591, 1635, 1604, 1613, 1699, 1766,
    1720, 1775, 1754, 1798, 1841, 1805, 1845, 1824, 1860, 1829,
    1728, 1881, 1936, 1931, 1666, 1676,  280,  533, 1691,  722,
     731, 1919, 1903, 1791, 1891, 1908, 2051, 2058, 2065, 1990,
    1979, 1965, 2070, 2070, 2107, 2141, 2043, 2027, 2094, 1651,
    2119,  764, 1283, 1625, 2139, 2121,
];

#[rustfmt::skip]
pub(super) static COUNTS: [u8; NUM_SYMBOLS] = [
     0, 10, 13, 11, 15, 10, 14,  6,  6,  6, 13,  5,
     5,  2,  3,  2,  7,  3, 10,  9,  4, 10, 11,  3,
    19, 12,  7, 10,  3,  5,  3, 13, 19,  6, 13,  9,
     7,  7,  6, 11,  8,  8,  5,  8,  3,  5,  5, 10,
     7, 13, 10, 12,  5,  6,  3,  5,  5,  6,  4,  4,
     2,  4,  3,  2,  2, 12, 12,  9, 13, 11,  8, 17,
    10,  9, 11,  8,  6, 13,  7,  9, 15, 14,  6, 13,
     8,  8,  3,  5,  5,  8,  4,  9,  5,  9,  8, 61,
    10,  8,  5,  8, 13, 14, 11,  6,  6,  3, 17, 10,
    14, 14,  7,  4, 13, 10,  8, 13,  6, 10, 11,  7,
    10, 12,  9,  6, 10, 15,  8, 12, 20, 24, 20, 20,
    18, 16, 15,  5, 20, 13, 16, 17, 15, 15, 22, 13,
    10, 13, 20,  8, 20, 15,  3,  3, 15, 12, 12, 10,
    17, 14, 13,  5,  5,  5,  5,  3,  8, 12,  8,  6,
     6,  6, 10, 10,  4,  3,  2,  5,  5,  6, 20, 22,
    16, 16,  9, 23, 19, 12,  8,  2,  5,  3, 11, 15,
     9, 11, 10, 14, 14,  8, 10, 10, 27, 21,  9,  7,
    15,  4,  4,  0,  0,  0,  8,  4,  6,  4,  3, 16,
     8,  1, 62,  3,  3,  1,  3,  0, 13, 16, 16, 12,
    21, 21, 14, 16, 12, 15, 10, 19, 15, 13,  9, 12,
    17, 14, 15, 15, 12, 15, 18, 17, 22, 17, 13, 12,
    11, 14, 12, 11,  7,  7,  5, 19, 16, 25, 24, 16,
    12,  8,  8, 16, 13, 15,  2, 20, 16, 10,  2, 18,
];
