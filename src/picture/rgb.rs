//! Packed 24-bit colors: `0x00RRGGBB` in a `u32`.

/// Bits that carry color; `unpack` clears anything above.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

pub const BLACK: u32 = 0x00_0000;
pub const WHITE: u32 = 0xFF_FFFF;

#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub const fn unpack(rgb: u32) -> [u8; 3] {
    let rgb = rgb & RGB_MASK;
    [red(rgb), green(rgb), blue(rgb)]
}

#[inline]
pub const fn red(rgb: u32) -> u8 {
    (rgb >> 16) as u8
}

#[inline]
pub const fn green(rgb: u32) -> u8 {
    (rgb >> 8) as u8
}

#[inline]
pub const fn blue(rgb: u32) -> u8 {
    rgb as u8
}
