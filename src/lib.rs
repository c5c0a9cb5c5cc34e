#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SequenceEngine`**: Renders one frame of a named sequence per call and returns the next position
//! - **`SequenceKind`**: The closed set of registered sequences, with names and metadata
//! - **`PixelStrip`**: Trait to implement for your LED strip driver
//! - **`SequenceCommand`**: A request to play a sequence with a direction and palette
//! - **`SequencePlayer`**: Holds the position between frames for one command at a time
//! - **`animations`**: The step functions, usable directly on any `PixelStrip`
//!
//! Colors are 8-bit `Srgb<u8>` values written to the strip unchanged.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animations;
pub mod colors;
pub mod command;
pub mod engine;
pub mod player;
pub mod position;
pub mod registry;
pub mod strip;
pub mod types;
mod random;

pub use command::SequenceCommand;
pub use engine::SequenceEngine;
pub use player::SequencePlayer;
pub use random::RANDOM_PALETTE_LEN;
pub use registry::{DEFAULT_COLORS, SequenceInfo, SequenceKind};
pub use strip::PixelStrip;
pub use types::{Color, EngineError, Palette};

pub const BLACK: Color = Srgb::new(0, 0, 0);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);
