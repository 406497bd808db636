//! Fixed-capacity timer slot arena and the per-tick advance pass.
//!
//! The pool is an array of `N` slots, `N` fixed at build time. Slot index is
//! the sole resource: no heap, no reference counting, no garbage collection.
//! Callers release slots explicitly with [`TimerPool::clear`].
//!
//! Every operation here runs in main-loop context. Nothing in the pool is
//! ever touched from the interrupt handler.

use core::marker::PhantomData;

use crate::config::TimerConfig;
use crate::mux::handle::{TimeUnit, TimerCallback, TimerHandle, TimerId};

// ============================================================================
// TimerSlot
// ============================================================================

/// One entry in the pool.
///
/// A slot is *free* until allocated, *allocated but inactive* until
/// activated, and returns to free only via `clear`. `deactivate` keeps the
/// configuration for a later re-activation.
#[derive(Debug, Copy, Clone)]
struct TimerSlot {
    /// Free/allocated state; the sentinel invariant: free iff `!allocated`.
    allocated: bool,
    /// Whether the slot currently counts down.
    active: bool,
    /// Firing deactivates the slot (true) or resets it and continues (false).
    one_shot: bool,
    period: u32,
    unit: TimeUnit,
    /// Ticks accumulated since the last reset/allocation/fire.
    elapsed: u64,
    callback: Option<TimerCallback>,
    /// Sticky fired flag, exposed through [`TimerHandle`].
    fired: bool,
}

impl TimerSlot {
    const fn free() -> Self {
        Self {
            allocated: false,
            active: false,
            one_shot: false,
            period: 0,
            unit: TimeUnit::Millis,
            elapsed: 0,
            callback: None,
            fired: false,
        }
    }

    /// Ticks-to-fire for the current period/unit. Zero means "never fires"
    /// (degenerate zero period).
    fn target_ticks<C: TimerConfig>(&self) -> u64 {
        self.period as u64 * self.unit.ticks_per_unit(C::BASE_TICK_MS)
    }
}

// ============================================================================
// TimerPool
// ============================================================================

/// Fixed-capacity pool of logical timer slots.
///
/// Generic over:
/// - `C`: [`TimerConfig`] implementation (base tick period for unit scaling)
/// - `N`: pool capacity, fixed at build time
///
/// Control operations taking a [`TimerId`] are silent no-ops for ids that
/// are out of range or whose slot is not currently allocated. Every
/// operation is non-blocking and panic-free on any input.
#[derive(Debug)]
pub struct TimerPool<C: TimerConfig, const N: usize> {
    slots: [TimerSlot; N],
    _config: PhantomData<C>,
}

impl<C: TimerConfig, const N: usize> TimerPool<C, N> {
    /// Create a pool with all slots free.
    pub fn new() -> Self {
        Self {
            slots: [TimerSlot::free(); N],
            _config: PhantomData,
        }
    }

    /// Return every slot to the free state, dropping all configuration.
    pub fn reset(&mut self) {
        self.slots = [TimerSlot::free(); N];
    }

    /// Claim the first free slot.
    ///
    /// The slot is configured but left inactive; start it with
    /// [`TimerPool::activate`]. Returns `None` when every slot is taken -
    /// exhaustion is a normal, reportable condition, never a panic, and
    /// never corrupts existing allocations.
    pub fn allocate(
        &mut self,
        period: u32,
        unit: TimeUnit,
        callback: Option<TimerCallback>,
        one_shot: bool,
    ) -> Option<TimerHandle> {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if !slot.allocated {
                slot.allocated = true;
                slot.active = false;
                slot.one_shot = one_shot;
                slot.period = period;
                slot.unit = unit;
                slot.elapsed = 0;
                slot.callback = callback;
                slot.fired = false;
                log::debug!("timer {} allocated", idx);
                return Some(TimerHandle::new(TimerId(idx), false));
            }
        }
        None
    }

    /// Start (or restart) the countdown.
    ///
    /// Resets the elapsed count, so activating an already-active timer
    /// restarts it from zero rather than compounding.
    pub fn activate(&mut self, id: TimerId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.elapsed = 0;
            slot.active = true;
        }
    }

    /// Stop the countdown, keeping the configuration for a later activate.
    ///
    /// Also clears the sticky fired flag.
    pub fn deactivate(&mut self, id: TimerId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.active = false;
            slot.elapsed = 0;
            slot.fired = false;
        }
    }

    /// Change the period and unit, restarting the countdown from zero.
    ///
    /// Active/one-shot state is untouched.
    pub fn update_period(&mut self, id: TimerId, period: u32, unit: TimeUnit) {
        if let Some(slot) = self.slot_mut(id) {
            slot.elapsed = 0;
            slot.period = period;
            slot.unit = unit;
        }
    }

    /// Change the one-shot flag, restarting the countdown from zero.
    pub fn update_one_shot(&mut self, id: TimerId, one_shot: bool) {
        if let Some(slot) = self.slot_mut(id) {
            slot.one_shot = one_shot;
            slot.elapsed = 0;
        }
    }

    /// Release the slot entirely, making it eligible for a future allocate.
    ///
    /// Does not stop a callback already in progress.
    pub fn clear(&mut self, id: TimerId) {
        if let Some(slot) = self.slot_mut(id) {
            *slot = TimerSlot::free();
        }
    }

    /// Advance every active slot by one tick and fire those that reach
    /// their target. Returns how many slots fired.
    ///
    /// Fire order is pool-index order: deterministic and stable. Firing a
    /// slot deactivates it first if one-shot, resets its elapsed count, sets
    /// the sticky fired flag, then invokes its callback synchronously. A
    /// slow callback delays later slots in the same pass, nothing more.
    pub fn advance(&mut self) -> usize {
        let mut fired = 0;
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if !slot.active {
                continue;
            }
            slot.elapsed += 1;
            let target = slot.target_ticks::<C>();
            // A countdown that overshoots its target still fires; a zero
            // target never does.
            if target != 0 && slot.elapsed >= target {
                if slot.one_shot {
                    slot.active = false;
                }
                slot.elapsed = 0;
                slot.fired = true;
                fired += 1;
                log::trace!("timer {} fired", idx);
                if let Some(callback) = slot.callback {
                    callback();
                }
            }
        }
        fired
    }

    // ------------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------------

    /// Snapshot of a slot's caller-visible state.
    ///
    /// `None` for out-of-range ids and for slots not currently allocated.
    pub fn handle(&self, id: TimerId) -> Option<TimerHandle> {
        self.slot(id)
            .map(|slot| TimerHandle::new(id, slot.fired))
    }

    /// Whether the slot is allocated and currently counting down.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.slot(id).is_some_and(|slot| slot.active)
    }

    /// Whether the slot's sticky fired flag is set.
    pub fn has_fired(&self, id: TimerId) -> bool {
        self.slot(id).is_some_and(|slot| slot.fired)
    }

    /// Total slot count (`N`).
    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of slots currently free.
    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.allocated).count()
    }

    // ------------------------------------------------------------------------
    // Internal
    // ------------------------------------------------------------------------

    fn slot(&self, id: TimerId) -> Option<&TimerSlot> {
        self.slots.get(id.0).filter(|slot| slot.allocated)
    }

    fn slot_mut(&mut self, id: TimerId) -> Option<&mut TimerSlot> {
        self.slots.get_mut(id.0).filter(|slot| slot.allocated)
    }
}

impl<C: TimerConfig, const N: usize> Default for TimerPool<C, N> {
    fn default() -> Self {
        Self::new()
    }
}
