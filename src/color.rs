/// Packed framebuffer pixel, 0x00RRGGBB.
pub type Rgb = u32;

#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> Rgb {
    // BGRA8 in little-endian memory
    (b as u32) | ((g as u32) << 8) | ((r as u32) << 16)
    // Alpha at 0
}

pub const BLACK: Rgb = pack_rgb(0, 0, 0);
pub const BACKGROUND: Rgb = pack_rgb(80, 80, 80);

pub const RED: Rgb = pack_rgb(230, 41, 55);
pub const MAROON: Rgb = pack_rgb(190, 33, 55);
pub const YELLOW: Rgb = pack_rgb(253, 249, 0);
pub const GOLD: Rgb = pack_rgb(255, 203, 0);
pub const GREEN: Rgb = pack_rgb(0, 228, 48);
pub const LIME: Rgb = pack_rgb(0, 158, 47);
pub const PURPLE: Rgb = pack_rgb(200, 122, 255);
pub const VIOLET: Rgb = pack_rgb(135, 60, 190);
pub const BLUE: Rgb = pack_rgb(0, 121, 241);
pub const DARK_BLUE: Rgb = pack_rgb(0, 82, 172);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_land_in_xrgb_order() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x0012_3456);
        assert_eq!(BACKGROUND, 0x0050_5050);
    }
}
