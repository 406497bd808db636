//! Tick counting and ISR-to-main-loop handoff.
//!
//! The interrupt handler's entire writable surface lives here: one monotonic
//! tick counter and one binary signal. Nothing else in the crate is ever
//! touched from interrupt context.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

// ============================================================================
// TickSignal - binary ISR/dispatcher handoff
// ============================================================================

/// Binary handoff signal between the tick interrupt and the dispatcher.
///
/// Single-producer/single-consumer: raised only from the ISR, consumed only
/// from the main loop. A raise while the signal is already up coalesces with
/// the pending one, like a binary semaphore at its cap - the tick *counter*
/// in [`TickSource`] still records every interrupt.
#[derive(Debug)]
pub struct TickSignal {
    raised: AtomicBool,
}

impl TickSignal {
    /// Create a lowered signal.
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raise the signal. ISR-safe: a single store.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Consume the signal if raised. Returns `true` if a tick was pending.
    ///
    /// Non-blocking. Uses load+store rather than an atomic swap so the
    /// primitive stays usable on cores without read-modify-write atomics;
    /// the single-consumer invariant makes that sound. A raise landing
    /// between the load and the store coalesces with the tick being taken.
    pub fn try_take(&self) -> bool {
        if self.raised.load(Ordering::Acquire) {
            self.raised.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Whether the signal is currently raised, without consuming it.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for TickSignal {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TickSource - interrupt-side tick state
// ============================================================================

/// Tick counter plus handoff signal - the ISR-facing half of the multiplexer.
///
/// `const`-constructible so it can live in a `static`, which lets a plain
/// `fn()` interrupt handler reach it:
///
/// `static TICK: TickSource = TickSource::new();` with an interrupt handler
/// that does nothing but call `TICK.tick_isr()`.
#[derive(Debug)]
pub struct TickSource {
    ticks: AtomicU32,
    signal: TickSignal,
}

impl TickSource {
    /// Create a tick source with a zeroed counter and lowered signal.
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
            signal: TickSignal::new(),
        }
    }

    /// Record one hardware tick. Call from the alarm interrupt handler.
    ///
    /// Bounded, constant-time work regardless of pool occupancy: one counter
    /// increment and one signal store. No callbacks, no logging.
    pub fn tick_isr(&self) {
        // Single writer (the ISR); load+store keeps this valid on cores
        // without fetch_add.
        let t = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(t.wrapping_add(1), Ordering::Relaxed);
        self.signal.raise();
    }

    /// Total ticks recorded since construction, wrapping at `u32::MAX`.
    ///
    /// Counts every interrupt, including ticks whose dispatch passes
    /// coalesced.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// The handoff signal consumed by the dispatcher.
    pub fn signal(&self) -> &TickSignal {
        &self.signal
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}
