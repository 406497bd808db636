//! Error types for timer operations.
//!
//! The error surface is deliberately narrow: pool exhaustion is reported as
//! `None` from `allocate`, invalid handles are silent no-ops, and only the
//! hardware boundary can fail in a way the caller must handle.

use core::fmt;

/// Timer subsystem error type.
///
/// `E` is the platform alarm's error type ([`crate::TickAlarm::Error`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError<E> {
    /// Periodic alarm configuration failed.
    ///
    /// Fatal to the subsystem: no timers can be serviced and the module
    /// remains uninitialized. Retry policy is the caller's.
    Hardware(E),
}

impl<E> fmt::Display for TimerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::Hardware(_) => write!(f, "hardware alarm configuration failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        let err: TimerError<()> = TimerError::Hardware(());
        assert_eq!(format!("{}", err), "hardware alarm configuration failed");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TimerError::Hardware(7), TimerError::Hardware(7));
        assert_ne!(TimerError::Hardware(7), TimerError::Hardware(8));
    }
}
