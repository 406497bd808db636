//! Test fixtures and utilities for tick-mux testing.
//!
//! Provides:
//! - `MockAlarm`: Test implementation of the TickAlarm trait
//! - `MockAlarmError`: Error type for failure-path tests

#![allow(dead_code)]

use tick_mux::TickAlarm;

// ============================================================================
// MockAlarm - Test Alarm Implementation
// ============================================================================

/// Error returned by a [`MockAlarm`] configured to fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockAlarmError;

/// Mock periodic alarm for testing.
///
/// Records the configuration it receives, accounts busy-wait time instead of
/// sleeping, and lets tests simulate hardware interrupts by invoking the
/// attached handler.
#[derive(Debug)]
pub struct MockAlarm {
    fail_start: bool,

    /// How many times `start` was called (idempotence checks).
    pub start_calls: u32,

    /// Period the alarm was configured with, if started.
    pub period_us: Option<u32>,

    /// Total microseconds of busy-wait requested via `delay_us`.
    pub delayed_us: u64,

    isr: Option<fn()>,
}

impl MockAlarm {
    /// Create a mock alarm that starts successfully.
    pub fn new() -> Self {
        Self {
            fail_start: false,
            start_calls: 0,
            period_us: None,
            delayed_us: 0,
            isr: None,
        }
    }

    /// Create a mock alarm whose `start` fails.
    pub fn failing() -> Self {
        Self {
            fail_start: true,
            ..Self::new()
        }
    }

    /// Simulate `n` hardware tick interrupts through the attached handler.
    ///
    /// No-op if the alarm was never started.
    pub fn fire_ticks(&self, n: u32) {
        if let Some(isr) = self.isr {
            for _ in 0..n {
                isr();
            }
        }
    }

    /// Reset the busy-wait accounting.
    pub fn clear_delay(&mut self) {
        self.delayed_us = 0;
    }
}

impl Default for MockAlarm {
    fn default() -> Self {
        Self::new()
    }
}

impl TickAlarm for MockAlarm {
    type Error = MockAlarmError;

    fn start(&mut self, period_us: u32, isr: fn()) -> Result<(), Self::Error> {
        self.start_calls += 1;
        if self.fail_start {
            return Err(MockAlarmError);
        }
        self.period_us = Some(period_us);
        self.isr = Some(isr);
        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.delayed_us += u64::from(us);
    }
}
