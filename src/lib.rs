//! # tick-span
//!
//! Wraparound-correct elapsed-time arithmetic for free-running embedded tick
//! counters, with zero heap allocation.
//!
//! **Key features:**
//! - **Single-wrap correctness** - Elapsed time stays right when the counter
//!   wraps past its maximum between two readings
//! - **Total functions** - Every input pair is valid; no error states
//! - **Typed arithmetic** - `TickInstant` (counter readings) and `TickSpan`
//!   (elapsed counts) cannot be mixed up
//! - **Flexible sampling** - Platform-agnostic `TickSource` trait; the crate
//!   never reads hardware itself
//! - **Interrupt-safe** - Pure computation over `Copy` values, no shared
//!   mutable state
//!
//! The arithmetic assumes at most one counter wraparound between any two
//! readings being compared. Sample often enough relative to the counter
//! width that multiple wraps cannot occur; a 1 kHz 32-bit counter wraps
//! roughly every 49.7 days.
//!
//! ## Optional Features
//!
//! - `defmt` - `defmt::Format` implementations on public types
//! - `fugit` - Conversions between `TickSpan` and `fugit` durations
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Optional dependencies (feature-gated)
#[cfg(feature = "defmt")]
extern crate defmt;

#[cfg(feature = "fugit")]
extern crate fugit;

// ============================================================================
// Module Declarations
// ============================================================================

// Core elapsed computation
pub mod interval;

// Typed tick arithmetic
pub mod duration;
pub mod instant;

// Platform seam and measurement helpers
pub mod source;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core computation
pub use interval::{MAX_TICK, elapsed};

// Typed arithmetic
pub use duration::TickSpan;
pub use instant::TickInstant;

// Sampling seam
pub use source::{Stopwatch, TickSource};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
