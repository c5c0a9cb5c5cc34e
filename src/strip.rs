//! Hardware abstraction for addressable LED strips.

use crate::types::Color;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your strip driver (WS2812 over SPI, RMT, PIO, a
/// simulator, etc.) to allow the engine to drive it.
pub trait PixelStrip {
    /// Returns the number of pixels on the strip. Must not change while an
    /// engine owns the strip.
    fn num_pixels(&self) -> usize;

    /// Writes a color into the frame buffer at `index`.
    ///
    /// The engine only calls this with `index < num_pixels()`. Nothing is
    /// visible on the hardware until [`show`](PixelStrip::show) is called.
    fn set_pixel_color(&mut self, index: usize, color: Color);

    /// Flushes the frame buffer to the hardware. Handle any hardware errors
    /// internally - this method cannot fail.
    fn show(&mut self);
}
