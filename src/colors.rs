//! Fixed colors of the bar animation.
//!
//! All values are `palette::Srgb` in the 0.0-1.0 range, ready to hand to
//! [`DrawSurface::fill_rect`](crate::DrawSurface::fill_rect).

use palette::Srgb;

/// Frame background (`#212121`).
pub const BACKGROUND: Srgb = rgb8(0x21, 0x21, 0x21);

/// Segment between the first and second scale (`#2ecc71`).
pub const LEADING_SEGMENT: Srgb = rgb8(0x2e, 0xcc, 0x71);

/// Segment between the second and third scale (`#e74c3c`).
pub const TRAILING_SEGMENT: Srgb = rgb8(0xe7, 0x4c, 0x3c);

/// Creates a color from 8-bit channel values.
#[inline]
pub const fn rgb8(red: u8, green: u8, blue: u8) -> Srgb {
    Srgb::new(
        red as f32 / 255.0,
        green as f32 / 255.0,
        blue as f32 / 255.0,
    )
}
