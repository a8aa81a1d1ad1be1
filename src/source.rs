//! Platform seam for reading the hardware tick counter.
//!
//! The `TickSource` trait plays the same role character I/O traits play in
//! embedded CLI crates: the library never touches hardware itself, the
//! platform supplies a small implementation (a SysTick read, a timer
//! peripheral register, a test mock). Everything above the trait is pure
//! arithmetic over sampled values.

use crate::duration::TickSpan;
use crate::instant::TickInstant;

/// Platform-agnostic read access to a free-running 32-bit tick counter.
///
/// Implementations return the current counter value; the counter must
/// increment at a fixed rate and wrap to zero after `u32::MAX`. Readings may
/// be taken from any context, including interrupt handlers.
///
/// Callers comparing two readings must do so before the counter can wrap
/// more than once between them; elapsed-time arithmetic over this trait
/// assumes at most one wraparound (see
/// [`interval::elapsed`](crate::interval::elapsed)).
pub trait TickSource {
    /// The current counter reading.
    ///
    /// Must not block and must have no side effects beyond reading the
    /// counter.
    fn now(&self) -> TickInstant;
}

impl<S: TickSource + ?Sized> TickSource for &S {
    fn now(&self) -> TickInstant {
        (**self).now()
    }
}

/// Elapsed-time measurement between two reads of a tick source.
///
/// A `Stopwatch` is just a remembered start reading; it owns no hardware and
/// holds no interior mutability, so it is safe to create and query from any
/// execution context. The source is passed to each call rather than stored,
/// keeping the stopwatch `Copy` and free of lifetimes.
///
/// ```
/// use tick_span::{Stopwatch, TickInstant, TickSource};
///
/// struct FakeCounter(u32);
///
/// impl TickSource for FakeCounter {
///     fn now(&self) -> TickInstant {
///         TickInstant::from_ticks(self.0)
///     }
/// }
///
/// let mut counter = FakeCounter(100);
/// let watch = Stopwatch::start(&counter);
/// counter.0 = 350;
/// assert_eq!(watch.elapsed(&counter).ticks(), 250);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stopwatch {
    started_at: TickInstant,
}

impl Stopwatch {
    /// Start measuring from the source's current reading.
    #[must_use]
    pub fn start<S: TickSource>(source: &S) -> Self {
        Self {
            started_at: source.now(),
        }
    }

    /// Start measuring from an already-sampled reading.
    #[inline]
    #[must_use]
    pub const fn start_at(instant: TickInstant) -> Self {
        Self {
            started_at: instant,
        }
    }

    /// The reading the stopwatch was started at.
    #[inline]
    #[must_use]
    pub const fn started_at(self) -> TickInstant {
        self.started_at
    }

    /// Ticks elapsed since the stopwatch was started.
    ///
    /// Correct as long as the counter has wrapped at most once since
    /// [`Stopwatch::start`].
    #[must_use]
    pub fn elapsed<S: TickSource>(self, source: &S) -> TickSpan {
        source.now().elapsed_since(self.started_at)
    }

    /// Restart from the source's current reading, returning the span that
    /// elapsed since the previous start.
    pub fn restart<S: TickSource>(&mut self, source: &S) -> TickSpan {
        let now = source.now();
        let lap = now.elapsed_since(self.started_at);
        self.started_at = now;
        lap
    }
}
