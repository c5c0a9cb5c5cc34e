//! Core types shared by every animation.

use palette::Srgb;

/// An 8-bit RGB color as written to a single pixel.
pub type Color = Srgb<u8>;

/// A fixed-capacity list of colors owned by the engine.
///
/// Callers pass palettes as `&[Color]`; this type is only used where the
/// engine or a command has to keep its own copy across calls.
pub type Palette<const N: usize> = heapless::Vec<Color, N>;

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// The sequence name is not in the registry.
    UnknownSequence,

    /// An empty palette was passed to an animation that indexes into it.
    InvalidPalette,

    /// A palette does not fit into the fixed capacity.
    CapacityExceeded,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::UnknownSequence => {
                write!(f, "unknown sequence name")
            }
            EngineError::InvalidPalette => {
                write!(f, "palette must contain at least one color")
            }
            EngineError::CapacityExceeded => {
                write!(f, "palette capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
