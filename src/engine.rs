//! Sequence engine dispatching frame updates to the animations.
//!
//! Provides [`SequenceEngine`], which owns the strip and the random source
//! and renders one frame per [`update`](SequenceEngine::update) call. The
//! caller keeps the position between calls and paces the frames.

use crate::animations::{self, step_fn};
use crate::random::{RANDOM_PALETTE_LEN, RandomState};
use crate::registry::SequenceKind;
use crate::strip::PixelStrip;
use crate::types::{Color, EngineError};
use rand::RngCore;

/// Renders animation frames onto a single LED strip.
///
/// Apart from the selection made by the `random` sequence, the engine is
/// stateless: every call receives the position returned by the previous one.
/// Calls must be serialized by the caller.
///
/// # Type Parameters
/// * `S` - Strip implementation type
/// * `R` - Random number generator used by the `random` sequence
/// * `N` - Capacity of the palette kept by the `random` sequence (at least 4)
pub struct SequenceEngine<S: PixelStrip, R: RngCore, const N: usize> {
    strip: S,
    rng: R,
    random: RandomState<N>,
}

impl<S: PixelStrip, R: RngCore, const N: usize> SequenceEngine<S, R, N> {
    /// Creates a new engine with every pixel turned off.
    pub fn new(mut strip: S, rng: R) -> Self {
        const {
            assert!(
                N >= RANDOM_PALETTE_LEN,
                "palette capacity must hold the random default palette"
            )
        };

        animations::blank(&mut strip);
        log::debug!("engine ready for {} pixels", strip.num_pixels());

        Self {
            strip,
            rng,
            random: RandomState::new(),
        }
    }

    /// Renders one frame of the sequence registered as `name`.
    ///
    /// # Returns
    /// * `Ok(position)` - Position to pass in on the next frame
    /// * `Err(UnknownSequence)` - `name` is not registered; nothing was written
    /// * `Err(InvalidPalette)` - Empty palette for a sequence other than `alloff`
    /// * `Err(CapacityExceeded)` - `random` could not copy the palette
    pub fn update(
        &mut self,
        name: &str,
        position: usize,
        reverse: bool,
        palette: &[Color],
    ) -> Result<usize, EngineError> {
        let kind = name
            .parse::<SequenceKind>()
            .inspect_err(|_| log::warn!("unknown sequence {:?}", name))?;
        self.update_kind(kind, position, reverse, palette)
    }

    /// Renders one frame of `kind`. See [`update`](Self::update).
    pub fn update_kind(
        &mut self,
        kind: SequenceKind,
        position: usize,
        reverse: bool,
        palette: &[Color],
    ) -> Result<usize, EngineError> {
        if palette.is_empty() && kind != SequenceKind::AllOff {
            log::warn!("{} called with an empty palette", kind);
            return Err(EngineError::InvalidPalette);
        }

        let next = match step_fn::<S>(kind) {
            Some(step) => step(&mut self.strip, position, reverse, palette)?,
            None => self.random_seq(position, reverse, palette)?,
        };

        log::trace!("{} {} -> {}", kind, position, next);
        Ok(next)
    }

    fn random_seq(
        &mut self,
        position: usize,
        reverse: bool,
        palette: &[Color],
    ) -> Result<usize, EngineError> {
        let kind = self.random.prepare(&mut self.rng, position, palette)?;
        // Selection never yields `random` itself.
        let Some(step) = step_fn::<S>(kind) else {
            return Err(EngineError::UnknownSequence);
        };
        step(&mut self.strip, position, reverse, self.random.palette())
    }

    /// Returns the sequence currently played by `random`, if one was selected.
    pub fn active_sequence(&self) -> Option<SequenceKind> {
        self.random.active()
    }

    /// Returns the palette currently used by `random`.
    pub fn active_palette(&self) -> &[Color] {
        self.random.palette()
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Returns a reference to the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Consumes the engine, returning the strip and the random source.
    pub fn into_parts(self) -> (S, R) {
        (self.strip, self.rng)
    }
}
