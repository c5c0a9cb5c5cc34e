//! State behind the `random` sequence.
//!
//! `random` plays one other sequence at a time. Whenever it is entered with
//! position 0 it picks a new sequence (and possibly a new palette), then
//! keeps delegating to it until that sequence returns position 0 again.

use crate::WHITE;
use crate::registry::{DEFAULT_COLORS, SequenceKind};
use crate::types::{Color, EngineError, Palette};
use rand::{Rng, RngCore};

/// Number of colors drawn from [`DEFAULT_COLORS`] when the caller only
/// supplied the default white.
pub const RANDOM_PALETTE_LEN: usize = 4;

/// Selection state of the `random` sequence, owned by one engine.
#[derive(Debug, Clone)]
pub(crate) struct RandomState<const N: usize> {
    active: Option<SequenceKind>,
    palette: Palette<N>,
}

impl<const N: usize> RandomState<N> {
    pub(crate) fn new() -> Self {
        Self {
            active: None,
            palette: Palette::new(),
        }
    }

    pub(crate) fn active(&self) -> Option<SequenceKind> {
        self.active
    }

    pub(crate) fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Returns the sequence to delegate to for this frame, selecting a new
    /// one first if `position` is 0 or nothing has been selected yet.
    ///
    /// State is only replaced once the new palette has been built, so a
    /// failed selection leaves the previous one in place.
    pub(crate) fn prepare<R: RngCore>(
        &mut self,
        rng: &mut R,
        position: usize,
        palette: &[Color],
    ) -> Result<SequenceKind, EngineError> {
        match self.active {
            Some(kind) if position != 0 => Ok(kind),
            _ => self.select(rng, palette),
        }
    }

    fn select<R: RngCore>(
        &mut self,
        rng: &mut R,
        palette: &[Color],
    ) -> Result<SequenceKind, EngineError> {
        // Redraw until the pick is not `random` itself. The registry always
        // has other entries, so this terminates.
        let kind = loop {
            let candidate = SequenceKind::ALL[rng.gen_range(0..SequenceKind::ALL.len())];
            if candidate != SequenceKind::Random {
                break candidate;
            }
        };

        let colors = if palette == [WHITE] {
            let mut colors = Palette::new();
            for _ in 0..RANDOM_PALETTE_LEN {
                let color = DEFAULT_COLORS[rng.gen_range(0..DEFAULT_COLORS.len())];
                colors.push(color).map_err(|_| EngineError::CapacityExceeded)?;
            }
            colors
        } else {
            Palette::from_slice(palette).map_err(|_| EngineError::CapacityExceeded)?
        };

        log::debug!("random: playing {} with {} colors", kind, colors.len());
        self.active = Some(kind);
        self.palette = colors;
        Ok(kind)
    }
}
