//! Integration tests for the multiplexer: hardware wiring, initialization
//! semantics, bounded waiting, and the full interrupt-to-callback path.

#[path = "fixtures/mod.rs"]
mod fixtures;

use std::sync::atomic::{AtomicU32, Ordering};

use fixtures::{MockAlarm, MockAlarmError};
use tick_mux::{DefaultConfig, TickSource, TimeUnit, TimerError, TimerMux};

type Mux<'t> = TimerMux<'t, MockAlarm, DefaultConfig, 8>;

fn noop_isr() {}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initialize_configures_alarm_once() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::new(), &tick, noop_isr);

    mux.initialize().unwrap();
    assert!(mux.is_initialized());
    // 100 ms base tick, expressed in microseconds.
    assert_eq!(mux.alarm_mut().period_us, Some(100_000));
    assert_eq!(mux.alarm_mut().start_calls, 1);

    // Re-initialization reports success without touching the hardware.
    mux.initialize().unwrap();
    assert_eq!(mux.alarm_mut().start_calls, 1);
}

#[test]
fn test_initialize_failure_leaves_module_dead() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::failing(), &tick, noop_isr);

    assert_eq!(
        mux.initialize(),
        Err(TimerError::Hardware(MockAlarmError))
    );
    assert!(!mux.is_initialized());

    // No timers can be serviced.
    tick.tick_isr();
    assert!(!mux.dispatch_once());
}

#[test]
fn test_first_initialize_wipes_early_allocations() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::new(), &tick, noop_isr);

    // Allocation before initialize is not supported; first-time init zeroes
    // the pool.
    let early = mux.allocate(1, TimeUnit::Millis, None, false).unwrap();
    mux.initialize().unwrap();

    assert!(mux.handle(early.id()).is_none());
    assert_eq!(mux.pool().free_slots(), mux.pool().capacity());
}

// ============================================================================
// End-to-end: interrupt to callback
// ============================================================================

#[test]
fn test_one_shot_end_to_end_through_attached_isr() {
    static TICK: TickSource = TickSource::new();
    fn on_tick() {
        TICK.tick_isr();
    }
    static CALLS: AtomicU32 = AtomicU32::new(0);
    fn on_expiry() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    let mut mux: Mux<'static> = TimerMux::new(MockAlarm::new(), &TICK, on_tick);
    mux.initialize().unwrap();

    let handle = mux
        .allocate(2, TimeUnit::Millis, Some(on_expiry), true)
        .unwrap();
    mux.activate(handle.id());

    // Two alarm interrupts, each followed by a main-loop pass.
    mux.alarm_mut().fire_ticks(1);
    assert!(mux.dispatch_once());
    assert_eq!(CALLS.load(Ordering::SeqCst), 0);

    mux.alarm_mut().fire_ticks(1);
    assert!(mux.dispatch_once());
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    assert!(mux.handle(handle.id()).unwrap().fired());
    assert!(!mux.is_active(handle.id()));

    // Further ticks must not re-invoke the callback.
    mux.alarm_mut().fire_ticks(1);
    mux.dispatch_once();
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Bounded Waiting
// ============================================================================

#[test]
fn test_dispatch_waits_exactly_the_configured_bound() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::new(), &tick, noop_isr);
    mux.initialize().unwrap();

    assert!(!mux.dispatch_once());
    // Busy-waited the full 10 ms bound, in poll steps, then gave up.
    assert_eq!(mux.alarm_mut().delayed_us, 10_000);
}

#[test]
fn test_pending_tick_is_consumed_without_waiting() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::new(), &tick, noop_isr);
    mux.initialize().unwrap();

    tick.tick_isr();
    assert!(mux.dispatch_once());
    assert_eq!(mux.alarm_mut().delayed_us, 0);
}

// ============================================================================
// Uptime and Delay
// ============================================================================

#[test]
fn test_uptime_counts_every_interrupt() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::new(), &tick, noop_isr);
    mux.initialize().unwrap();

    for _ in 0..5 {
        tick.tick_isr();
    }
    mux.dispatch_once();

    // Dispatch passes coalesced, the counter did not.
    assert_eq!(mux.uptime_ticks(), 5);
}

#[test]
fn test_delay_ms_caps_below_one_second() {
    let tick = TickSource::new();
    let mut mux: Mux<'_> = TimerMux::new(MockAlarm::new(), &tick, noop_isr);
    mux.initialize().unwrap();

    mux.delay_ms(500);
    assert_eq!(mux.alarm_mut().delayed_us, 500_000);

    // A second or more is refused outright.
    mux.delay_ms(1000);
    assert_eq!(mux.alarm_mut().delayed_us, 500_000);

    mux.alarm_mut().clear_delay();
    mux.delay_ms(999);
    assert_eq!(mux.alarm_mut().delayed_us, 999_000);
}
