//! RGB pixel value type and its packed integer encoding.
//!
//! # Packed Layout
//!
//! ```text
//! bits 24..32  unused (alpha on input, zero on output)
//! bits 16..24  red
//! bits  8..16  green
//! bits  0..8   blue
//! ```

const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;
const CHANNEL_MASK: u32 = 0xff;

/// A 24-bit RGB color. Copied freely; has no identity beyond its value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Returns the green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Returns the blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Returns the channels as `[r, g, b]`.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Decodes a `0x??RRGGBB` value. The top byte is ignored.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> RED_SHIFT) & CHANNEL_MASK) as u8,
            g: ((packed >> GREEN_SHIFT) & CHANNEL_MASK) as u8,
            b: ((packed >> BLUE_SHIFT) & CHANNEL_MASK) as u8,
        }
    }

    /// Encodes as `0x00RRGGBB`.
    pub fn to_packed(&self) -> u32 {
        ((self.r as u32) << RED_SHIFT)
            | ((self.g as u32) << GREEN_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
    }
}

impl From<u32> for Pixel {
    fn from(packed: u32) -> Self {
        Pixel::from_packed(packed)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.to_packed()
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel::new(r, g, b)
    }
}

/// Builds a pixel from its three channels.
pub fn pack(r: u8, g: u8, b: u8) -> Pixel {
    Pixel::new(r, g, b)
}

pub fn unpack_red(pixel: Pixel) -> u8 {
    pixel.r
}

pub fn unpack_green(pixel: Pixel) -> u8 {
    pixel.g
}

pub fn unpack_blue(pixel: Pixel) -> u8 {
    pixel.b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let pixel = pack(0x12, 0x34, 0x56);
        assert_eq!(pixel.to_packed(), 0x0012_3456);
        assert_eq!(u32::from(Pixel::WHITE), 0x00ff_ffff);
    }

    #[test]
    fn test_from_packed_discards_alpha() {
        let pixel = Pixel::from_packed(0xff_80_40_20);
        assert_eq!(pixel, Pixel::new(0x80, 0x40, 0x20));
        assert_eq!(pixel.to_packed(), 0x0080_4020);
    }

    #[test]
    fn test_unpack_channels() {
        let pixel = pack(200, 100, 7);
        assert_eq!(unpack_red(pixel), 200);
        assert_eq!(unpack_green(pixel), 100);
        assert_eq!(unpack_blue(pixel), 7);
        assert_eq!(pixel.channels(), [200, 100, 7]);
    }

    #[test]
    fn test_pack_round_trip_extremes() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (255, 0, 0), (0, 255, 0), (0, 0, 255)] {
            let pixel = Pixel::from_packed(pack(r, g, b).to_packed());
            assert_eq!(
                (unpack_red(pixel), unpack_green(pixel), unpack_blue(pixel)),
                (r, g, b)
            );
        }
    }
}
