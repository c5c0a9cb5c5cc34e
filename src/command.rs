//! Sequence-change requests.

use crate::colors::{is_valid_color_string, parse_palette};
use crate::registry::SequenceKind;
use crate::types::{Color, EngineError, Palette};

/// A request to play a sequence with a given direction and palette.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceCommand<const N: usize> {
    pub kind: SequenceKind,
    pub reverse: bool,
    pub palette: Palette<N>,
}

impl<const N: usize> SequenceCommand<N> {
    /// Creates a command, copying the palette.
    ///
    /// # Errors
    /// * `InvalidPalette` - Empty palette for a sequence other than `alloff`
    /// * `CapacityExceeded` - More than `N` colors
    pub fn new(kind: SequenceKind, reverse: bool, palette: &[Color]) -> Result<Self, EngineError> {
        if palette.is_empty() && kind != SequenceKind::AllOff {
            return Err(EngineError::InvalidPalette);
        }
        let palette = Palette::from_slice(palette).map_err(|_| EngineError::CapacityExceeded)?;
        Ok(Self {
            kind,
            reverse,
            palette,
        })
    }

    /// Builds a command from request strings: a registered sequence name and
    /// a comma-separated list of hex colors such as `"ff0000,0f0"`.
    ///
    /// # Errors
    /// * `UnknownSequence` - `name` is not registered
    /// * `InvalidPalette` - `colors` contains characters other than lowercase hex digits and commas
    /// * `CapacityExceeded` - More than `N` colors
    pub fn parse(name: &str, reverse: bool, colors: &str) -> Result<Self, EngineError> {
        let kind = name.parse::<SequenceKind>()?;
        if !is_valid_color_string(colors) {
            return Err(EngineError::InvalidPalette);
        }
        Ok(Self {
            kind,
            reverse,
            palette: parse_palette(colors)?,
        })
    }
}

impl<const N: usize> Default for SequenceCommand<N> {
    /// Turns the strip off.
    fn default() -> Self {
        Self {
            kind: SequenceKind::AllOff,
            reverse: false,
            palette: Palette::new(),
        }
    }
}
