//! Caller-visible timer identity, period units, and fired-state polling.

/// Callback invoked from dispatch context when a timer fires.
///
/// A plain `fn` pointer: callbacks capture nothing, so they stay cheap to
/// store in the slot arena and safe to invoke from the main loop.
pub type TimerCallback = fn();

// ============================================================================
// TimeUnit
// ============================================================================

/// Granularity of a timer period.
///
/// A period is counted in whole base ticks: ticks-to-fire is
/// `period * unit scalar`, where the scalar is how many base ticks one unit
/// spans. At the reference 100 ms tick ([`crate::DefaultConfig`]) the scalars
/// are 1, 10 and 600 - so `Millis` resolves no finer than one tick (100 ms).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    /// Period counted directly in base ticks (100 ms steps at the default
    /// tick rate).
    Millis,
    /// Period counted in seconds.
    Seconds,
    /// Period counted in minutes.
    Minutes,
}

impl TimeUnit {
    /// Number of base ticks spanned by one unit of this granularity, for a
    /// base tick of `base_tick_ms` milliseconds.
    ///
    /// `base_tick_ms` must be non-zero and divide 1000 for the scalars to be
    /// exact; [`crate::TimerConfig`] implementations uphold this.
    pub const fn ticks_per_unit(self, base_tick_ms: u32) -> u64 {
        match self {
            TimeUnit::Millis => 1,
            TimeUnit::Seconds => (1000 / base_tick_ms) as u64,
            TimeUnit::Minutes => (60_000 / base_tick_ms) as u64,
        }
    }
}

// ============================================================================
// TimerId and TimerHandle
// ============================================================================

/// Identifier of an allocated timer slot.
///
/// Returned inside the [`TimerHandle`] from a successful allocation and
/// passed back to every control operation. A stale id (its slot since
/// cleared) is harmless: control operations on it are silent no-ops.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(pub(crate) usize);

impl TimerId {
    /// The slot index within the pool.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Snapshot of a slot's caller-visible state.
///
/// The `fired` flag is sticky: set when the countdown reaches its target,
/// cleared only by `deactivate` or `clear` (or overwritten on the next
/// fire). It is not consumed by reading, so polling callers that want
/// edge-triggered behavior must clear it themselves. Re-read each loop
/// iteration via [`crate::TimerMux::handle`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle {
    id: TimerId,
    fired: bool,
}

impl TimerHandle {
    pub(crate) fn new(id: TimerId, fired: bool) -> Self {
        Self { id, fired }
    }

    /// The slot identifier, for control operations and later polling.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Whether the timer has fired since the last deactivate/clear.
    pub fn fired(&self) -> bool {
        self.fired
    }
}
