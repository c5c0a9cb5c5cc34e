//! Step functions for every animation.
//!
//! A step function paints one frame into the strip's buffer, flushes it and
//! returns the position to pass in on the next frame. Positions are owned by
//! the caller; apart from [`SequenceKind::Random`], which lives in the engine,
//! these functions keep no state between calls.
//!
//! Every function except [`all_off`] returns [`EngineError::InvalidPalette`]
//! for an empty palette before touching the strip.

use crate::position::{dec_position, inc_color_index, inc_position};
use crate::registry::SequenceKind;
use crate::strip::PixelStrip;
use crate::types::{Color, EngineError};
use crate::BLACK;

/// Signature shared by all step functions.
pub type StepFn<S> = fn(&mut S, usize, bool, &[Color]) -> Result<usize, EngineError>;

/// Returns the step function rendering `kind`, or `None` for
/// [`SequenceKind::Random`], which needs engine state and is handled there.
pub fn step_fn<S: PixelStrip>(kind: SequenceKind) -> Option<StepFn<S>> {
    let step: StepFn<S> = match kind {
        SequenceKind::AllOff => all_off::<S>,
        SequenceKind::AllOn => all_on::<S>,
        SequenceKind::Random => return None,
        SequenceKind::Flash => flash::<S>,
        SequenceKind::Chaser => chaser::<S>,
        SequenceKind::ChaserChangeColor => chaser_change_color::<S>,
        SequenceKind::ChaserBackground => chaser_background::<S>,
        SequenceKind::ChaserFillEnd => chaser_fill_end::<S>,
    };
    Some(step)
}

fn require_colors(palette: &[Color]) -> Result<usize, EngineError> {
    if palette.is_empty() {
        return Err(EngineError::InvalidPalette);
    }
    Ok(palette.len())
}

/// Palette index of the first pixel for [`all_on`] and [`flash`].
///
/// In reverse the pattern starts where the forward pattern would end, so the
/// strip shows its mirror image.
fn start_color_index(num_pixels: usize, len: usize, reverse: bool) -> usize {
    if !reverse {
        return 0;
    }
    (num_pixels % len).checked_sub(1).unwrap_or(len - 1)
}

/// Writes black to every pixel and flushes.
pub(crate) fn blank<S: PixelStrip>(strip: &mut S) {
    for i in 0..strip.num_pixels() {
        strip.set_pixel_color(i, BLACK);
    }
    strip.show();
}

/// Turns every pixel off. Position runs `0..=10`.
pub fn all_off<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    _reverse: bool,
    _palette: &[Color],
) -> Result<usize, EngineError> {
    blank(strip);
    Ok(inc_position(position, 10))
}

/// Lays the palette along the strip, one color per pixel. Position runs `0..=20`.
pub fn all_on<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    reverse: bool,
    palette: &[Color],
) -> Result<usize, EngineError> {
    let len = require_colors(palette)?;
    let num_pixels = strip.num_pixels();

    let mut color_index = start_color_index(num_pixels, len, reverse);
    for i in 0..num_pixels {
        strip.set_pixel_color(i, palette[color_index]);
        color_index = inc_color_index(color_index, len, reverse);
    }
    strip.show();
    Ok(inc_position(position, 20))
}

/// Shows the [`all_on`] pattern on even positions and black on odd ones.
/// Position runs `0..=20`.
pub fn flash<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    reverse: bool,
    palette: &[Color],
) -> Result<usize, EngineError> {
    let len = require_colors(palette)?;
    let num_pixels = strip.num_pixels();
    let lit = position % 2 == 0;

    let mut color_index = start_color_index(num_pixels, len, reverse);
    for i in 0..num_pixels {
        if lit {
            strip.set_pixel_color(i, palette[color_index]);
            color_index = inc_color_index(color_index, len, reverse);
        } else {
            strip.set_pixel_color(i, BLACK);
        }
    }
    strip.show();
    Ok(inc_position(position, 20))
}

/// Moves the palette pattern one pixel per frame.
///
/// The position is the palette index of the first pixel. A single color is
/// padded with black so the pattern visibly moves. Forward motion walks the
/// position down, reverse walks it up.
pub fn chaser<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    reverse: bool,
    palette: &[Color],
) -> Result<usize, EngineError> {
    require_colors(palette)?;

    let padded;
    let colors: &[Color] = if palette.len() < 2 {
        padded = [palette[0], BLACK];
        &padded
    } else {
        palette
    };

    let mut color_index = position;
    for i in 0..strip.num_pixels() {
        if color_index >= colors.len() {
            color_index = 0;
        }
        strip.set_pixel_color(i, colors[color_index]);
        color_index += 1;
    }
    strip.show();

    let max_position = colors.len() - 1;
    if reverse {
        Ok(inc_position(position, max_position))
    } else {
        Ok(dec_position(position, max_position))
    }
}

/// Single-color blocks of 4 lit and 4 dark pixels shifting along the strip.
///
/// `position / num_pixels` selects the palette color in use. Lit pixels
/// below `position % num_pixels` already show the next palette color, so
/// the color changes block by block as the pattern moves. Position runs
/// `0..=palette.len() * num_pixels - 1`.
pub fn chaser_change_color<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    reverse: bool,
    palette: &[Color],
) -> Result<usize, EngineError> {
    let len = require_colors(palette)?;
    let num_pixels = strip.num_pixels();

    let block = position.checked_div(num_pixels).unwrap_or(0);
    let current_color = block % len;
    let next_color = if current_color + 1 >= len { 0 } else { current_color + 1 };
    let handoff = position - num_pixels * block;
    let phase = (position % 8) as isize;

    for i in 0..num_pixels {
        let slot = (i % 8) as isize;
        let lit = (slot >= phase && slot < phase + 4) || (slot >= phase - 7 && slot <= phase - 5);
        let color = if !lit {
            BLACK
        } else if i < handoff {
            palette[next_color]
        } else {
            palette[current_color]
        };
        strip.set_pixel_color(i, color);
    }
    strip.show();

    let max_position = (len * num_pixels).saturating_sub(1);
    if reverse {
        Ok(dec_position(position, max_position))
    } else {
        Ok(inc_position(position, max_position))
    }
}

/// One block of palette colors sliding over a black strip and wrapping
/// around the far end. A single color becomes a block of four.
/// Position is the first pixel of the block and runs `0..=num_pixels - 1`.
pub fn chaser_background<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    reverse: bool,
    palette: &[Color],
) -> Result<usize, EngineError> {
    require_colors(palette)?;

    let repeated;
    let block: &[Color] = if palette.len() < 2 {
        repeated = [palette[0]; 4];
        &repeated
    } else {
        palette
    };

    let num_pixels = strip.num_pixels();
    let block_len = block.len() as isize;
    let start = position as isize;
    let pixels = num_pixels as isize;

    for i in 0..num_pixels {
        let pixel = i as isize;
        let color = if pixel >= start && pixel < start + block_len {
            block[(pixel - start) as usize]
        } else if pixel < start - pixels + block_len {
            // Tail of a block that ran off the far end.
            block[(pixels - start + pixel).rem_euclid(block_len) as usize]
        } else {
            BLACK
        };
        strip.set_pixel_color(i, color);
    }
    strip.show();

    let max_position = num_pixels.saturating_sub(1);
    if reverse {
        Ok(dec_position(position, max_position))
    } else {
        Ok(inc_position(position, max_position))
    }
}

/// A single pixel travels to the far end, where it stays lit; the next one
/// travels a strip one pixel shorter, until the strip is full.
///
/// Static pixels take consecutive palette colors from the first pixel on
/// (backwards through the palette in reverse). The travelling pixel takes
/// the color of the static pixel it is about to become. Reverse fills from
/// pixel 0 instead of the last pixel. Returns 0 on the frame that shows the
/// full strip.
pub fn chaser_fill_end<S: PixelStrip>(
    strip: &mut S,
    position: usize,
    reverse: bool,
    palette: &[Color],
) -> Result<usize, EngineError> {
    let len = require_colors(palette)?;
    let num_pixels = strip.num_pixels();

    let mut working = position;
    let mut active_len = num_pixels;
    let mut static_count = 0;
    while working > active_len && active_len > 0 {
        working -= active_len;
        active_len -= 1;
        static_count += 1;
    }

    let physical = |i: usize| if reverse { num_pixels - i - 1 } else { i };
    let first_static = num_pixels - static_count;

    let mut color_index = 0;
    let mut moving_color = 0;
    for i in 0..num_pixels {
        let color = if i >= first_static { palette[color_index] } else { BLACK };
        strip.set_pixel_color(physical(i), color);
        if i + 1 == first_static {
            moving_color = color_index;
        }
        color_index = inc_color_index(color_index, len, reverse);
    }

    if working > 0 && working <= num_pixels {
        strip.set_pixel_color(physical(working - 1), palette[moving_color]);
    }
    strip.show();

    if static_count >= num_pixels {
        Ok(0)
    } else {
        Ok(position + 1)
    }
}
