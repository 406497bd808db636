//! Timer multiplexer orchestration.
//!
//! `TimerMux` brings the pieces together: the platform alarm, the ISR-side
//! [`TickSource`], and the slot pool. It owns initialization (configuring the
//! periodic alarm) and the per-loop-iteration dispatch that turns ticks into
//! timer expirations and callback invocations.

use core::fmt;

use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::hal::TickAlarm;
use crate::tick::TickSource;

// Sub-modules
pub mod handle;
pub mod pool;

// Re-export key types
pub use handle::{TimeUnit, TimerCallback, TimerHandle, TimerId};
pub use pool::TimerPool;

/// Poll granularity of the dispatcher's bounded signal wait.
const SIGNAL_POLL_STEP_US: u32 = 100;

/// Software timer multiplexer over a single hardware tick.
///
/// Generic over:
/// - `'t`: lifetime of the tick source borrow (typically `'static`)
/// - `A`: [`TickAlarm`] implementation owning the hardware timer
/// - `C`: [`TimerConfig`] implementation (tick period, wait bound)
/// - `N`: pool capacity, fixed at build time
///
/// The multiplexer itself runs entirely in main-loop context; only the
/// [`TickSource`] it borrows is shared with the interrupt handler. There is
/// no explicit teardown: once initialized, the tick alarm runs for the life
/// of the program.
pub struct TimerMux<'t, A, C, const N: usize>
where
    A: TickAlarm,
    C: TimerConfig,
{
    alarm: A,
    tick: &'t TickSource,
    isr: fn(),
    pool: TimerPool<C, N>,
    initialized: bool,
}

impl<'t, A, C, const N: usize> TimerMux<'t, A, C, N>
where
    A: TickAlarm,
    C: TimerConfig,
{
    /// Create an uninitialized multiplexer.
    ///
    /// `isr` is attached to the alarm interrupt during
    /// [`initialize`](Self::initialize); it must call
    /// [`TickSource::tick_isr`] on the same `tick` passed here - a plain
    /// `fn()` wrapper around a `static` tick source.
    pub fn new(alarm: A, tick: &'t TickSource, isr: fn()) -> Self {
        Self {
            alarm,
            tick,
            isr,
            pool: TimerPool::new(),
            initialized: false,
        }
    }

    /// Configure the periodic tick alarm. Call once at boot, before
    /// allocating timers.
    ///
    /// Idempotent: calling again while initialized is a no-op reporting
    /// success without touching the hardware. First-time initialization
    /// zeroes the timer pool, then starts the alarm at
    /// [`TimerConfig::BASE_TICK_MS`]. A hardware failure is fatal to the
    /// subsystem - the error is returned, the module stays uninitialized,
    /// and no retry is attempted here.
    pub fn initialize(&mut self) -> Result<(), TimerError<A::Error>> {
        if self.initialized {
            log::debug!("tick alarm already initialized");
            return Ok(());
        }

        log::debug!("tick alarm initializing");
        self.pool.reset();

        let period_us = C::BASE_TICK_MS.saturating_mul(1000);
        match self.alarm.start(period_us, self.isr) {
            Ok(()) => {
                self.initialized = true;
                log::debug!("tick alarm running, {} ms per tick", C::BASE_TICK_MS);
                Ok(())
            }
            Err(err) => {
                log::error!("tick alarm start failed, timers cannot be serviced");
                Err(TimerError::Hardware(err))
            }
        }
    }

    /// Pump the dispatcher. Call every main-loop iteration.
    ///
    /// Waits for a pending tick for at most [`TimerConfig::SIGNAL_WAIT_US`]
    /// (polling in short busy-wait steps), then advances every active slot
    /// and fires those that reach their target - in pool-index order, with
    /// callbacks invoked synchronously in this (main-loop) context. Returns
    /// `true` if a tick was consumed, `false` if none arrived within the
    /// bound (no side effects) or the module is uninitialized.
    pub fn dispatch_once(&mut self) -> bool {
        if !self.initialized {
            return false;
        }

        if !self.tick.signal().try_take() {
            let mut waited = 0u32;
            loop {
                if waited >= C::SIGNAL_WAIT_US {
                    return false;
                }
                self.alarm.delay_us(SIGNAL_POLL_STEP_US);
                waited = waited.saturating_add(SIGNAL_POLL_STEP_US);
                if self.tick.signal().try_take() {
                    break;
                }
            }
        }

        self.pool.advance();
        true
    }

    // ------------------------------------------------------------------------
    // Timer pool operations
    // ------------------------------------------------------------------------

    /// Claim a free slot; see [`TimerPool::allocate`].
    pub fn allocate(
        &mut self,
        period: u32,
        unit: TimeUnit,
        callback: Option<TimerCallback>,
        one_shot: bool,
    ) -> Option<TimerHandle> {
        self.pool.allocate(period, unit, callback, one_shot)
    }

    /// Start (or restart) a timer's countdown; see [`TimerPool::activate`].
    pub fn activate(&mut self, id: TimerId) {
        self.pool.activate(id);
    }

    /// Stop a timer, keeping its configuration; see
    /// [`TimerPool::deactivate`].
    pub fn deactivate(&mut self, id: TimerId) {
        self.pool.deactivate(id);
    }

    /// Change a timer's period and unit; see [`TimerPool::update_period`].
    pub fn update_period(&mut self, id: TimerId, period: u32, unit: TimeUnit) {
        self.pool.update_period(id, period, unit);
    }

    /// Change a timer's one-shot flag; see [`TimerPool::update_one_shot`].
    pub fn update_one_shot(&mut self, id: TimerId, one_shot: bool) {
        self.pool.update_one_shot(id, one_shot);
    }

    /// Release a slot for reuse; see [`TimerPool::clear`].
    pub fn clear(&mut self, id: TimerId) {
        self.pool.clear(id);
    }

    /// Snapshot of a timer's caller-visible state; see
    /// [`TimerPool::handle`].
    pub fn handle(&self, id: TimerId) -> Option<TimerHandle> {
        self.pool.handle(id)
    }

    /// Whether a timer is currently counting down.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.pool.is_active(id)
    }

    /// Whether a timer's sticky fired flag is set.
    pub fn has_fired(&self, id: TimerId) -> bool {
        self.pool.has_fired(id)
    }

    // ------------------------------------------------------------------------
    // Miscellaneous
    // ------------------------------------------------------------------------

    /// Ticks recorded by the ISR since boot, wrapping at `u32::MAX`.
    ///
    /// Counts every interrupt, including ticks whose dispatch passes
    /// coalesced.
    pub fn uptime_ticks(&self) -> u32 {
        self.tick.ticks()
    }

    /// Whether [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Busy-wait for `ms` milliseconds.
    ///
    /// Delays of a second or more are silently ignored: blocking that long
    /// in a cooperative loop would starve the dispatcher.
    pub fn delay_ms(&mut self, ms: u16) {
        if ms < 1000 {
            self.alarm.delay_us(u32::from(ms) * 1000);
        }
    }

    /// Read access to the slot pool.
    pub fn pool(&self) -> &TimerPool<C, N> {
        &self.pool
    }

    /// Mutable access to the platform alarm.
    pub fn alarm_mut(&mut self) -> &mut A {
        &mut self.alarm
    }
}

impl<'t, A, C, const N: usize> fmt::Debug for TimerMux<'t, A, C, N>
where
    A: TickAlarm,
    C: TimerConfig,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerMux")
            .field("initialized", &self.initialized)
            .field("capacity", &N)
            .field("free_slots", &self.pool.free_slots())
            .finish_non_exhaustive()
    }
}
