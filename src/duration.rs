//! Typed elapsed-tick counts.
//!
//! [`TickSpan`] wraps the raw `u32` result of an elapsed-time computation so
//! that tick differences cannot be confused with raw counter readings
//! ([`TickInstant`](crate::instant::TickInstant)). A span is a plain
//! non-negative count; it carries no unit beyond "ticks of the source
//! counter".

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// An elapsed number of ticks, in range `[0, u32::MAX]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct TickSpan(u32);

impl TickSpan {
    /// A span of zero ticks.
    pub const ZERO: Self = Self(0);

    /// The largest representable span (`u32::MAX` ticks).
    pub const MAX: Self = Self(u32::MAX);

    /// Create a span from a raw tick count.
    #[inline]
    #[must_use]
    pub const fn from_ticks(ticks: u32) -> Self {
        Self(ticks)
    }

    /// The raw tick count.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Add two spans, returning `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Add two spans, clamping to [`TickSpan::MAX`] on overflow.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtract `other` from `self`, returning `None` if `other > self`.
    #[inline]
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(diff) => Some(Self(diff)),
            None => None,
        }
    }

    /// Subtract `other` from `self`, clamping to zero if `other > self`.
    ///
    /// Used for "remaining time" calculations where a step may already have
    /// run past its deadline.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `true` if the span is zero ticks.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for TickSpan {
    fn from(ticks: u32) -> Self {
        Self(ticks)
    }
}

impl From<TickSpan> for u32 {
    fn from(span: TickSpan) -> Self {
        span.0
    }
}

impl Add for TickSpan {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for TickSpan {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for TickSpan {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for TickSpan {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl fmt::Display for TickSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

// ============================================================================
// fugit Interop (feature-gated)
// ============================================================================

/// Conversions to and from [`fugit`] timer durations.
///
/// The tick rate is bound only here, at the conversion site; the rest of the
/// crate is rate-agnostic.
#[cfg(feature = "fugit")]
impl TickSpan {
    /// Reinterpret this span as a `fugit` duration at `HZ` ticks per second.
    #[must_use]
    pub const fn to_duration<const HZ: u32>(self) -> fugit::TimerDurationU32<HZ> {
        fugit::TimerDurationU32::<HZ>::from_ticks(self.0)
    }

    /// Create a span from a `fugit` duration at `HZ` ticks per second.
    #[must_use]
    pub const fn from_duration<const HZ: u32>(duration: fugit::TimerDurationU32<HZ>) -> Self {
        Self(duration.ticks())
    }
}
