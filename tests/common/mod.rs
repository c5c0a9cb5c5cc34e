//! Shared test infrastructure for pixel-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pixel_sequencer::{Color, PixelStrip, SequenceEngine, Srgb};
use rand::{RngCore, SeedableRng, rngs::SmallRng};

// ============================================================================
// Mock Strip
// ============================================================================

/// Color a mock pixel holds until something writes to it.
pub const UNWRITTEN: Color = Srgb::new(1, 2, 3);

/// Mock strip that records the frame buffer and every flush
pub struct MockStrip {
    buffer: Vec<Color>,
    shown: Vec<Color>,
    writes: usize,
    shows: usize,
}

impl MockStrip {
    pub fn new(num_pixels: usize) -> Self {
        Self {
            buffer: vec![UNWRITTEN; num_pixels],
            shown: vec![UNWRITTEN; num_pixels],
            writes: 0,
            shows: 0,
        }
    }

    /// Pixels as of the last flush
    pub fn shown(&self) -> &[Color] {
        &self.shown
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn shows(&self) -> usize {
        self.shows
    }

    /// Overwrites the buffer and flushes, simulating a previous frame
    pub fn fill(&mut self, color: Color) {
        self.buffer.iter_mut().for_each(|pixel| *pixel = color);
        self.shown.clone_from(&self.buffer);
    }

    /// Marks every pixel as unwritten again
    pub fn reset(&mut self) {
        self.fill(UNWRITTEN);
    }
}

impl PixelStrip for MockStrip {
    fn num_pixels(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Color) {
        assert!(
            index < self.buffer.len(),
            "pixel {} out of range for strip of {}",
            index,
            self.buffer.len()
        );
        self.buffer[index] = color;
        self.writes += 1;
    }

    fn show(&mut self) {
        self.shown.clone_from(&self.buffer);
        self.shows += 1;
    }
}

// ============================================================================
// Counting RNG
// ============================================================================

/// Seeded RNG that counts how often it was drawn from
pub struct CountingRng {
    inner: SmallRng,
    draws: usize,
}

impl CountingRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestEngine = SequenceEngine<MockStrip, CountingRng, 8>;

pub fn engine(num_pixels: usize) -> TestEngine {
    SequenceEngine::new(MockStrip::new(num_pixels), CountingRng::new(7))
}

pub fn engine_with_seed(num_pixels: usize, seed: u64) -> TestEngine {
    SequenceEngine::new(MockStrip::new(num_pixels), CountingRng::new(seed))
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use pixel_sequencer::{BLACK, BLUE, GREEN, RED, WHITE};
