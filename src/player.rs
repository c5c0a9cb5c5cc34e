//! Frame-by-frame playback of sequence commands.

use crate::command::SequenceCommand;
use crate::engine::SequenceEngine;
use crate::strip::PixelStrip;
use crate::types::EngineError;
use rand::RngCore;

/// Plays one [`SequenceCommand`] at a time on an engine.
///
/// Holds the position that a caller of [`SequenceEngine`] would otherwise
/// have to carry between frames. Call [`tick`](Self::tick) once per frame at
/// whatever rate suits the animation.
pub struct SequencePlayer<S: PixelStrip, R: RngCore, const N: usize> {
    engine: SequenceEngine<S, R, N>,
    command: SequenceCommand<N>,
    position: usize,
}

impl<S: PixelStrip, R: RngCore, const N: usize> SequencePlayer<S, R, N> {
    /// Creates a player that starts out playing `alloff`.
    pub fn new(engine: SequenceEngine<S, R, N>) -> Self {
        Self {
            engine,
            command: SequenceCommand::default(),
            position: 0,
        }
    }

    /// Switches to a new command. Playback restarts from position 0.
    pub fn load(&mut self, command: SequenceCommand<N>) {
        log::debug!(
            "loading {} (reverse: {}, {} colors)",
            command.kind,
            command.reverse,
            command.palette.len()
        );
        self.command = command;
        self.position = 0;
    }

    /// Renders the next frame and stores the returned position.
    ///
    /// On error the position is left unchanged.
    pub fn tick(&mut self) -> Result<usize, EngineError> {
        let next = self.engine.update_kind(
            self.command.kind,
            self.position,
            self.command.reverse,
            &self.command.palette,
        )?;
        self.position = next;
        Ok(next)
    }

    /// Returns the position the next frame will be rendered at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the command being played.
    pub fn command(&self) -> &SequenceCommand<N> {
        &self.command
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &SequenceEngine<S, R, N> {
        &self.engine
    }

    /// Consumes the player, returning the engine.
    pub fn into_engine(self) -> SequenceEngine<S, R, N> {
        self.engine
    }
}
