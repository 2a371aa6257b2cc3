//! Time abstraction traits for platform-agnostic timing.
//!
//! The core never reads a clock. The host samples its own monotonic time
//! source and passes the resulting instant into every poll, so all temporal
//! comparisons happen against injected values and every state transition is
//! reproducible in tests without hardware or wall-clock waits.
//!
//! Only elapsed-time measurement is needed here: debounce windows, the
//! long-press threshold and the post-transition settle window are all
//! millisecond comparisons against an earlier instant.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
///
/// Instants must come from a non-decreasing clock; elapsed time is always
/// measured with `duration_since` against an earlier instant.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
