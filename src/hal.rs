//! Periodic alarm abstraction for platform-agnostic tick generation.
//!
//! The `TickAlarm` trait wraps whatever hardware timer the platform provides
//! (ESP32 general-purpose timer, Cortex-M SysTick, a host-side mock in tests)
//! behind the two primitives the multiplexer needs: a periodic interrupt and
//! a short busy-wait.

/// Platform periodic alarm trait.
///
/// Implementations own the hardware timer peripheral. The attached `isr` runs
/// in interrupt context, so it must only be handed functions that do bounded,
/// non-blocking work - in this crate that is always a thin wrapper around
/// [`crate::TickSource::tick_isr`].
pub trait TickAlarm {
    /// Platform-specific error type
    type Error;

    /// Configure the alarm to raise a periodic interrupt every `period_us`
    /// microseconds and attach `isr` as its handler.
    ///
    /// Called once, from [`crate::TimerMux::initialize`]. Implementations
    /// must not invoke `isr` before this returns `Ok`.
    fn start(&mut self, period_us: u32, isr: fn()) -> Result<(), Self::Error>;

    /// Busy-wait for `us` microseconds.
    ///
    /// Used for the dispatcher's bounded signal wait and for short caller
    /// delays. Interrupts must remain enabled while waiting.
    fn delay_us(&mut self, us: u32);
}
