//! Catalog of the available sequences and their metadata.

use crate::types::{Color, EngineError};
use palette::Srgb;

/// Every animation the engine knows how to render.
///
/// The variants are listed in registry order; see [`SequenceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceKind {
    /// Every pixel black.
    AllOff,
    /// Palette repeated along the strip.
    AllOn,
    /// Plays the other sequences one cycle at a time, chosen at random.
    Random,
    /// Palette pattern alternating with black.
    Flash,
    /// Repeating palette pattern moving one pixel per frame.
    Chaser,
    /// Single-color 4-on/4-off blocks that change color at the far end.
    ChaserChangeColor,
    /// One block of palette colors sliding across a black strip.
    ChaserBackground,
    /// Single pixel runs to the end and stacks up until the strip is full.
    ChaserFillEnd,
}

/// Descriptive metadata for a registered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceInfo {
    /// Identifier used to request the sequence.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Menu group the sequence is listed under.
    pub group: u8,
}

impl SequenceKind {
    /// All sequences in registry order.
    pub const ALL: [SequenceKind; 8] = [
        SequenceKind::AllOff,
        SequenceKind::AllOn,
        SequenceKind::Random,
        SequenceKind::Flash,
        SequenceKind::Chaser,
        SequenceKind::ChaserChangeColor,
        SequenceKind::ChaserBackground,
        SequenceKind::ChaserFillEnd,
    ];

    /// Returns the name used to request this sequence.
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the registry metadata for this sequence.
    pub const fn info(self) -> SequenceInfo {
        match self {
            SequenceKind::AllOff => SequenceInfo {
                name: "alloff",
                title: "All Off",
                description: "Turn all LEDs off",
                group: 0,
            },
            SequenceKind::AllOn => SequenceInfo {
                name: "allon",
                title: "All On",
                description: "Turn all LEDs on",
                group: 0,
            },
            SequenceKind::Random => SequenceInfo {
                name: "random",
                title: "Random",
                description: "Random sequences",
                group: 0,
            },
            SequenceKind::Flash => SequenceInfo {
                name: "flash",
                title: "Flash",
                description: "Flash all LEDs on and off",
                group: 0,
            },
            SequenceKind::Chaser => SequenceInfo {
                name: "chaser",
                title: "Chaser",
                description: "Move the colors along the strip",
                group: 0,
            },
            SequenceKind::ChaserChangeColor => SequenceInfo {
                name: "chaserchangecolor",
                title: "Chaser Change Color",
                description: "Blocks of a single color, changing color at the end of the strip",
                group: 1,
            },
            SequenceKind::ChaserBackground => SequenceInfo {
                name: "chaserbackground",
                title: "Chaser Solid Background",
                description: "Chaser sequence one block of colour across black background",
                group: 1,
            },
            SequenceKind::ChaserFillEnd => SequenceInfo {
                name: "chaserfillend",
                title: "Chaser Fill End",
                description: "Single LED chaser to end and then fill up",
                group: 1,
            },
        }
    }

    /// Looks up a sequence by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the largest position this sequence returns for the given strip
    /// and palette, or `None` for [`SequenceKind::Random`] whose bound depends
    /// on the sub-sequence currently playing.
    ///
    /// Every returned position lies in `0..=max_position`.
    pub fn max_position(self, pixel_count: usize, palette_len: usize) -> Option<usize> {
        match self {
            SequenceKind::AllOff => Some(10),
            SequenceKind::AllOn | SequenceKind::Flash => Some(20),
            SequenceKind::Chaser => Some(palette_len.max(2) - 1),
            SequenceKind::ChaserChangeColor => {
                Some((palette_len * pixel_count).saturating_sub(1))
            }
            SequenceKind::ChaserBackground => Some(pixel_count.saturating_sub(1)),
            // One frame per pixel travelled on each lap, plus the frame that
            // reports the full strip.
            SequenceKind::ChaserFillEnd => Some(pixel_count * (pixel_count + 1) / 2 + 1),
            SequenceKind::Random => None,
        }
    }
}

impl core::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for SequenceKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(EngineError::UnknownSequence)
    }
}

/// Returns true if `name` is a registered sequence.
pub fn is_valid(name: &str) -> bool {
    SequenceKind::from_name(name).is_some()
}

/// Iterates over the metadata of all registered sequences in registry order.
pub fn sequences() -> impl Iterator<Item = SequenceInfo> {
    SequenceKind::ALL.into_iter().map(SequenceKind::info)
}

/// Colors the random sequence picks from when the caller supplied only the
/// default white.
pub const DEFAULT_COLORS: [Color; 11] = [
    Srgb::new(255, 255, 255),
    Srgb::new(32, 32, 32),
    Srgb::new(255, 0, 0),
    Srgb::new(255, 192, 203),
    Srgb::new(0, 128, 0),
    Srgb::new(76, 21, 90),
    Srgb::new(0, 0, 255),
    Srgb::new(0, 255, 255),
    Srgb::new(192, 0, 192),
    Srgb::new(255, 165, 0),
    Srgb::new(0, 0, 0),
];
