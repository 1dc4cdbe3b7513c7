//! Bitmap data for the clock face glyphs.
//!
//! Each glyph is 24x32: one `u32` row-mask per row, bit `23 - col`
//! selecting column `col`. The upper 8 bits of every mask are unused.
//! Digits are drawn as thick rounded strokes occupying the middle rows
//! of the cell; the colon is two short bars.

use super::Glyph;

pub(super) static DIGIT_0: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_FF00,
        0x0001_C180,
        0x0007_00E0,
        0x000F_00E0,
        0x000E_0070,
        0x001E_0078,
        0x001C_0038,
        0x001C_0038,
        0x003C_0038,
        0x003C_003C,
        0x003C_003C,
        0x003C_003C,
        0x003C_0038,
        0x003C_0038,
        0x001C_0038,
        0x001C_0078,
        0x001E_0070,
        0x000E_0070,
        0x0007_00E0,
        0x0003_81C0,
        0x0001_C380,
        0x0000_3C00,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_1: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0C00,
        0x0000_3C00,
        0x0007_FC00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_1C00,
        0x0000_7E00,
        0x0007_FFE0,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_2: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_FF80,
        0x0007_01E0,
        0x000C_0070,
        0x001C_0070,
        0x001C_0078,
        0x001E_0078,
        0x001E_0070,
        0x0000_0070,
        0x0000_00E0,
        0x0000_01C0,
        0x0000_0380,
        0x0000_0700,
        0x0000_0C00,
        0x0000_3800,
        0x0000_6000,
        0x0001_C000,
        0x0003_0008,
        0x0006_0018,
        0x000C_0018,
        0x0018_0070,
        0x003F_FFF0,
        0x003F_FFF0,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_3: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0001_FF00,
        0x0006_03C0,
        0x000C_00E0,
        0x001C_00E0,
        0x001E_00F0,
        0x000E_00F0,
        0x0000_00E0,
        0x0000_00E0,
        0x0000_01C0,
        0x0000_1E00,
        0x0000_7F00,
        0x0000_01C0,
        0x0000_0070,
        0x0000_0070,
        0x0000_0038,
        0x0000_0038,
        0x001E_0038,
        0x001E_0078,
        0x001E_0070,
        0x000C_00E0,
        0x0007_0380,
        0x0000_FC00,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_4: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0180,
        0x0000_0380,
        0x0000_0780,
        0x0000_0F80,
        0x0000_1B80,
        0x0000_3380,
        0x0000_6380,
        0x0000_C380,
        0x0001_8380,
        0x0003_0380,
        0x0006_0380,
        0x000C_0380,
        0x0018_0380,
        0x0010_0380,
        0x003F_FFFC,
        0x0000_0380,
        0x0000_0380,
        0x0000_0380,
        0x0000_0380,
        0x0000_0380,
        0x0000_07C0,
        0x0000_7FFC,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_5: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0007_FFF0,
        0x0007_FFF0,
        0x0004_0000,
        0x0004_0000,
        0x0004_0000,
        0x0004_0000,
        0x0004_0000,
        0x000C_0000,
        0x000C_FF80,
        0x000D_81E0,
        0x000E_00F0,
        0x000C_0070,
        0x0000_0038,
        0x0000_0038,
        0x0000_0038,
        0x000C_0038,
        0x001E_0038,
        0x001E_0070,
        0x001C_0070,
        0x000C_00E0,
        0x0003_03C0,
        0x0000_FE00,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_6: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_3FC0,
        0x0001_C0E0,
        0x0003_00F0,
        0x0006_00F0,
        0x000E_0000,
        0x000C_0000,
        0x001C_0000,
        0x001C_0000,
        0x001C_7F80,
        0x003D_C1E0,
        0x003F_0070,
        0x003E_0038,
        0x003C_0038,
        0x003C_003C,
        0x003C_003C,
        0x001C_0038,
        0x001C_0038,
        0x000E_0038,
        0x000F_0030,
        0x0007_8060,
        0x0001_C1C0,
        0x0000_3E00,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_7: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x000F_FFF8,
        0x000F_FFF8,
        0x000E_0030,
        0x0018_0060,
        0x0018_0040,
        0x0000_0080,
        0x0000_0180,
        0x0000_0300,
        0x0000_0600,
        0x0000_0600,
        0x0000_0C00,
        0x0000_1C00,
        0x0000_1800,
        0x0000_3800,
        0x0000_3800,
        0x0000_7800,
        0x0000_7800,
        0x0000_7800,
        0x0000_7800,
        0x0000_F800,
        0x0000_7800,
        0x0000_7000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_8: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0001_FF00,
        0x0007_00E0,
        0x000C_0070,
        0x001C_0030,
        0x0018_0038,
        0x001C_0038,
        0x001C_0030,
        0x000F_0070,
        0x0007_C0E0,
        0x0001_FB80,
        0x0001_FF00,
        0x0007_0FC0,
        0x000C_01E0,
        0x001C_00F0,
        0x0038_0078,
        0x0038_0038,
        0x0038_0038,
        0x0038_0038,
        0x0018_0030,
        0x000C_0060,
        0x0003_81C0,
        0x0000_7E00,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static DIGIT_9: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0001_FF00,
        0x0007_01C0,
        0x000E_00E0,
        0x001C_0070,
        0x001C_0070,
        0x0038_0038,
        0x0038_0038,
        0x0038_0038,
        0x0038_0038,
        0x003C_0078,
        0x001C_00B8,
        0x000F_0338,
        0x0007_FE38,
        0x0000_0078,
        0x0000_0078,
        0x0000_0070,
        0x0000_00F0,
        0x0000_00E0,
        0x000F_01C0,
        0x000F_0380,
        0x0007_0E00,
        0x0001_F800,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};

pub(super) static COLON: Glyph = Glyph {
    rows: [
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_7C00,
        0x0000_7C00,
        0x0000_3C00,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_1800,
        0x0000_7C00,
        0x0000_7C00,
        0x0000_3800,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
    ],
};
