//! Typed readings of the wrapping tick counter.
//!
//! [`TickInstant`] wraps a raw counter sample. Unlike [`TickSpan`], an
//! instant has no meaningful magnitude on its own: the counter wraps, so a
//! numerically smaller reading may be *later* than a larger one. For that
//! reason `TickInstant` implements no ordering; the only way to compare two
//! readings is [`TickInstant::elapsed_since`], which accounts for a single
//! wraparound.

use core::ops::Sub;

use crate::duration::TickSpan;
use crate::interval;

/// A sample of the free-running 32-bit tick counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct TickInstant(u32);

impl TickInstant {
    /// Wrap a raw counter reading.
    #[inline]
    #[must_use]
    pub const fn from_ticks(ticks: u32) -> Self {
        Self(ticks)
    }

    /// The raw counter reading.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// Correct across at most one counter wraparound between the two
    /// readings; see [`interval::elapsed`] for the exact contract.
    #[inline]
    #[must_use]
    pub const fn elapsed_since(self, earlier: Self) -> TickSpan {
        TickSpan::from_ticks(interval::elapsed(earlier.0, self.0))
    }

    /// The counter reading `span` ticks after `self`, wrapping past the
    /// counter maximum.
    ///
    /// Useful for computing deadlines on the raw counter.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, span: TickSpan) -> Self {
        Self(self.0.wrapping_add(span.ticks()))
    }
}

impl From<u32> for TickInstant {
    fn from(ticks: u32) -> Self {
        Self(ticks)
    }
}

impl From<TickInstant> for u32 {
    fn from(instant: TickInstant) -> Self {
        instant.0
    }
}

impl Sub for TickInstant {
    type Output = TickSpan;

    /// Operator form of [`TickInstant::elapsed_since`]:
    /// `later - earlier` yields the elapsed span.
    fn sub(self, earlier: Self) -> TickSpan {
        self.elapsed_since(earlier)
    }
}
