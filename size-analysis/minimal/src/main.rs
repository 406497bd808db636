#![no_std]
#![no_main]

use panic_halt as _;
use tick_mux::{DefaultConfig, TickAlarm, TickSource, TimeUnit, TimerMux};

// Minimal TickAlarm implementation - measures only struct size
pub struct MinimalAlarm;

impl TickAlarm for MinimalAlarm {
    type Error = ();

    fn start(&mut self, _period_us: u32, _isr: fn()) -> Result<(), Self::Error> {
        Ok(())
    }

    fn delay_us(&mut self, _us: u32) {}
}

// Tick source and ISR wiring
static TICK: TickSource = TickSource::new();

fn on_tick() {
    TICK.tick_isr();
}

fn on_expiry() {
    core::hint::black_box(());
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let mut mux: TimerMux<'_, MinimalAlarm, DefaultConfig, 8> =
        TimerMux::new(MinimalAlarm, &TICK, on_tick);

    // Initialize to ensure the alarm setup path is included
    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(mux.initialize());

    // Exercise one allocation and one dispatch pass so the pool and
    // dispatcher code paths are included
    let handle = core::hint::black_box(mux.allocate(1, TimeUnit::Seconds, Some(on_expiry), false));
    if let Some(handle) = handle {
        mux.activate(handle.id());
    }
    let _ = core::hint::black_box(mux.dispatch_once());

    // Keep the mux alive to prevent optimization
    loop {
        core::hint::black_box(&mux);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
