//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::MockAlarm;
use tick_mux::{DefaultConfig, TickSource, TimerMux};

// ============================================================================
// Mux Creation Helpers
// ============================================================================

/// The mux shape used by most tests: mock alarm, default config, 8 slots.
pub type TestMux<'t> = TimerMux<'t, MockAlarm, DefaultConfig, 8>;

/// ISR placeholder for tests that drive the tick source directly.
pub fn noop_isr() {}

/// Create an initialized mux over `tick` with a mock alarm.
pub fn create_test_mux(tick: &TickSource) -> TestMux<'_> {
    let mut mux = TimerMux::new(MockAlarm::new(), tick, noop_isr);
    mux.initialize().unwrap();
    mux
}

// ============================================================================
// Tick Driving Helpers
// ============================================================================

/// One hardware tick followed by one dispatcher pass.
pub fn tick_once(mux: &mut TestMux<'_>, tick: &TickSource) {
    tick.tick_isr();
    mux.dispatch_once();
}

/// Run `n` tick/dispatch rounds.
pub fn tick_n(mux: &mut TestMux<'_>, tick: &TickSource, n: u32) {
    for _ in 0..n {
        tick_once(mux, tick);
    }
}
