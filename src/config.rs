//! Configuration traits and implementations for tick timing.
//!
//! The `TimerConfig` trait allows compile-time configuration of the base tick
//! period and dispatcher wait bound without runtime overhead. Pool capacity is
//! a const generic on [`crate::TimerPool`] rather than a trait const, since
//! trait consts cannot size arrays on stable Rust.

/// Timer configuration trait defining tick timing parameters.
///
/// All values are const (zero runtime cost). Implementations define the
/// hardware tick period and the upper bound on the dispatcher's wait for a
/// pending tick signal.
pub trait TimerConfig {
    /// Hardware tick period in milliseconds (default: 100).
    ///
    /// Must divide 1000 evenly so that the second/minute unit scalars stay
    /// exact.
    const BASE_TICK_MS: u32;

    /// Upper bound on the dispatcher's wait for a pending tick, in
    /// microseconds (default: 10_000).
    ///
    /// Zero makes [`crate::TimerMux::dispatch_once`] purely non-blocking.
    const SIGNAL_WAIT_US: u32;
}

/// Default configuration matching the reference tick rate.
///
/// - BASE_TICK_MS: 100 ms base tick
/// - SIGNAL_WAIT_US: 10 ms dispatcher wait bound
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl TimerConfig for DefaultConfig {
    const BASE_TICK_MS: u32 = 100;
    const SIGNAL_WAIT_US: u32 = 10_000;
}

/// Finer base tick for high-rate control loops.
///
/// - BASE_TICK_MS: 10 ms base tick
/// - SIGNAL_WAIT_US: 1 ms dispatcher wait bound
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FastTickConfig;

impl TimerConfig for FastTickConfig {
    const BASE_TICK_MS: u32 = 10;
    const SIGNAL_WAIT_US: u32 = 1_000;
}
