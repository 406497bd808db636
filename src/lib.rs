//! # tick-mux
//!
//! Cooperative software timer multiplexing for embedded systems.
//!
//! A fixed-capacity pool of logical timers - periodic or one-shot, with
//! millisecond/second/minute granularity - driven by a single hardware
//! periodic interrupt. The interrupt handler does nothing but count ticks
//! and raise a binary signal; expiry callbacks run later, from a dispatcher
//! pumped by the cooperative main loop.
//!
//! **Key features:**
//! - **Static allocation** - fixed-capacity slot arena, zero heap usage
//! - **Single tick source** - one periodic alarm drives every logical timer
//! - **Deferred dispatch** - callbacks run in main-loop context, never in the ISR
//! - **Platform-agnostic** - alarm hardware behind a two-method trait
//! - **Bounded blocking** - the dispatcher's wait for a tick is capped by config
//!
//! Typical wiring: place a [`TickSource`] in a `static`, hand a `fn()` that
//! calls its [`TickSource::tick_isr`] to [`TimerMux::new`] together with the
//! platform's [`TickAlarm`] implementation, call [`TimerMux::initialize`]
//! once at boot, then call [`TimerMux::dispatch_once`] every loop iteration.
//!
//! ## Optional Features
//!
//! - `defmt` - derives `defmt::Format` on the public value types
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod mux;
pub mod tick;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{DefaultConfig, FastTickConfig, TimerConfig};

// Error types
pub use error::TimerError;

// Hardware boundary
pub use hal::TickAlarm;

// Tick source and ISR handoff
pub use tick::{TickSignal, TickSource};

// Multiplexer and pool types
pub use mux::{TimeUnit, TimerCallback, TimerHandle, TimerId, TimerMux, TimerPool};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
