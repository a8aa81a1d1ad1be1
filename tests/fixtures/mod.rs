//! Test fixtures and utilities for tick-span testing.
//!
//! Provides:
//! - `ScriptedCounter`: Test implementation of the TickSource trait that
//!   replays a pre-loaded sequence of counter readings
//! - Tick constants for boundary scenarios around the counter maximum

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use tick_span::{TickInstant, TickSource};

// ============================================================================
// ScriptedCounter - Test TickSource Implementation
// ============================================================================

/// Mock tick source for testing.
///
/// Replays a scripted sequence of counter readings; once the script is
/// exhausted, the last reading is repeated (a counter the test stopped
/// advancing). Uses `std` types (RefCell, VecDeque) since tests run with std
/// support, and interior mutability because `TickSource::now` takes `&self`.
#[derive(Debug)]
pub struct ScriptedCounter {
    /// Pending readings (simulates the counter advancing between samples)
    script: RefCell<VecDeque<u32>>,

    /// Reading repeated once the script runs out
    last: RefCell<u32>,
}

impl ScriptedCounter {
    /// Create a counter that replays `readings` in order.
    pub fn new(readings: &[u32]) -> Self {
        let last = readings.last().copied().unwrap_or(0);
        Self {
            script: RefCell::new(readings.iter().copied().collect()),
            last: RefCell::new(last),
        }
    }

    /// Create a counter frozen at a single reading.
    pub fn frozen(reading: u32) -> Self {
        Self::new(&[reading])
    }

    /// Append readings to the script.
    pub fn push_readings(&self, readings: &[u32]) {
        let mut script = self.script.borrow_mut();
        for &reading in readings {
            script.push_back(reading);
        }
        if let Some(&new_last) = readings.last() {
            *self.last.borrow_mut() = new_last;
        }
    }

    /// Number of scripted readings not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl TickSource for ScriptedCounter {
    fn now(&self) -> TickInstant {
        let reading = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or(*self.last.borrow());
        TickInstant::from_ticks(reading)
    }
}

// ============================================================================
// Boundary Constants
// ============================================================================

/// The counter maximum (2^32 - 1), spelled out in full.
pub const COUNTER_MAX: u32 = 4_294_967_295;

/// A reading five ticks before the counter wraps.
pub const NEAR_WRAP: u32 = 4_294_967_290;
