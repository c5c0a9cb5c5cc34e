//! Wraparound helpers shared by every animation.
//!
//! All animations advance their position and palette index through these
//! three functions so the wrap thresholds stay identical everywhere.

/// Increments `position`, wrapping to 0 once it exceeds `max_position`.
#[inline]
pub fn inc_position(position: usize, max_position: usize) -> usize {
    let next = position + 1;
    if next > max_position { 0 } else { next }
}

/// Decrements `position`, wrapping to `max_position` when it would go below 0.
#[inline]
pub fn dec_position(position: usize, max_position: usize) -> usize {
    position.checked_sub(1).unwrap_or(max_position)
}

/// Steps a palette index forward, or backward when `reverse` is set.
///
/// Forward wraps to 0 at `count`; backward wraps to `count - 1` below 0.
#[inline]
pub fn inc_color_index(index: usize, count: usize, reverse: bool) -> usize {
    if !reverse {
        let next = index + 1;
        if next >= count { 0 } else { next }
    } else {
        index.checked_sub(1).unwrap_or(count.saturating_sub(1))
    }
}
