//! Core elapsed-time computation over a wrapping tick counter.
//!
//! A free-running hardware counter (e.g. a millisecond timer) increments at a
//! fixed rate and wraps to zero after [`MAX_TICK`]. Subtracting two raw
//! readings is wrong whenever a wrap occurred between them; [`elapsed`]
//! special-cases the wrapped ordering and is correct across at most one
//! wraparound.

/// Maximum value of the 32-bit tick counter (2^32 - 1).
///
/// The counter wraps to zero after reaching this value.
pub const MAX_TICK: u32 = u32::MAX;

/// Number of ticks elapsed from `from` to `to` on a wrapping 32-bit counter.
///
/// Total over all input pairs; there is no failure mode. The result is always
/// in range `[0, MAX_TICK]`:
///
/// - `from <= to` (no wrap): `to - from`.
/// - `from > to` (counter wrapped once): `(MAX_TICK - from) + to`, the
///   distance from `from` up to the counter maximum plus the distance from
///   zero up to `to` after the wrap.
///
/// Callers must sample the counter often enough that at most one wraparound
/// can occur between `from` and `to`. If the counter wrapped more than once,
/// the result is smaller than the true elapsed time; that condition is not
/// detectable from the two samples alone.
///
/// # Examples
///
/// ```
/// use tick_span::interval::elapsed;
///
/// assert_eq!(elapsed(100, 350), 250);
///
/// // Counter wrapped between the two readings.
/// assert_eq!(elapsed(4_294_967_290, 4), 9);
/// ```
#[inline]
#[must_use]
pub const fn elapsed(from: u32, to: u32) -> u32 {
    if from <= to {
        to - from
    } else {
        (MAX_TICK - from) + to
    }
}
