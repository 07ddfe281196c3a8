//! RGBA colors and the packed `0xRRGGBBAA` pixel format.

/// An RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const BACKGROUND: Color = Color::rgb(250, 250, 210);
pub const WIREFRAME: Color = Color::rgb(0, 0, 128);
pub const GRID: Color = Color::rgb(205, 201, 201);
pub const AXIS_X: Color = Color::rgb(255, 0, 0);
pub const AXIS_Y: Color = Color::rgb(0, 255, 0);
pub const AXIS_Z: Color = Color::rgb(0, 0, 255);

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Packs into `0xRRGGBBAA`.
    #[inline]
    pub const fn pack(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    #[inline]
    pub const fn unpack(packed: u32) -> Self {
        Self::new(
            (packed >> 24) as u8,
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        )
    }

    /// Channels as floats in `[0, 255]`, for interpolation.
    #[inline]
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Opaque color from float channels, rounded and clamped to `[0, 255]`.
    #[inline]
    pub fn from_rgb_f32(rgb: [f32; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Self::rgb(r, g, b)
    }

    /// Per-channel linear interpolation of R, G and B. Alpha is always 255.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::from_rgb_f32(lerp_rgb(self.to_rgb_f32(), other.to_rgb_f32(), t))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
