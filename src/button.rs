//! Push-button debouncing and short/long press classification.

use crate::time::{TimeDuration, TimeInstant};

/// Milliseconds a raw level must hold before it is accepted as stable.
pub const DEBOUNCE_MS: u64 = 25;

/// Milliseconds a press must be held before it classifies as long.
pub const LONG_PRESS_MS: u64 = 450;

/// Classified button event.
///
/// Derived fresh on every poll and consumed in the same poll; events are
/// never queued or merged across polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BtnEvent {
    /// No event this poll.
    #[default]
    None,
    /// Press released before the long threshold.
    Short,
    /// Press held to the long threshold. Fires while the button is still
    /// held; the eventual release emits nothing further.
    Long,
}

impl BtnEvent {
    /// True for either press classification.
    #[inline]
    pub fn is_press(self) -> bool {
        self != BtnEvent::None
    }
}

/// Debounce and press-classification state for a single push-button.
///
/// Each instance exclusively owns the state of one physical button; all
/// fields mutate only inside [`update`](ButtonDebouncer::update).
#[derive(Debug, Clone, Copy)]
pub struct ButtonDebouncer<I: TimeInstant> {
    last_raw: bool,
    stable: bool,
    last_change: Option<I>,
    down_since: Option<I>,
    long_fired: bool,
}

impl<I: TimeInstant> ButtonDebouncer<I> {
    /// Creates a debouncer with the button assumed released.
    pub fn new() -> Self {
        Self {
            last_raw: false,
            stable: false,
            last_change: None,
            down_since: None,
            long_fired: false,
        }
    }

    /// Feeds one raw sample and returns at most one event.
    ///
    /// `pressed` is the polarity-normalized level (true while the button is
    /// physically held); the host maps active-low wiring before calling.
    /// A raw flip restarts the debounce window without touching the stable
    /// level, so any sequence of flips spaced closer than [`DEBOUNCE_MS`]
    /// produces no event at all. The long threshold is inclusive: a press
    /// held for exactly [`LONG_PRESS_MS`] fires [`BtnEvent::Long`].
    pub fn update(&mut self, pressed: bool, now: I) -> BtnEvent {
        let mut event = BtnEvent::None;

        if pressed != self.last_raw {
            self.last_raw = pressed;
            self.last_change = Some(now);
        }

        // Signal still settling.
        if self
            .last_change
            .is_some_and(|changed| now.duration_since(changed).as_millis() < DEBOUNCE_MS)
        {
            return BtnEvent::None;
        }

        if self.stable != pressed {
            self.stable = pressed;

            if pressed {
                self.down_since = Some(now);
                self.long_fired = false;
            } else if self.down_since.take().is_some() && !self.long_fired {
                event = BtnEvent::Short;
            }
        }

        // Long fires without waiting for release, once per press cycle.
        if !self.long_fired {
            if let Some(start) = self.down_since {
                if now.duration_since(start).as_millis() >= LONG_PRESS_MS {
                    self.long_fired = true;
                    event = BtnEvent::Long;
                }
            }
        }

        event
    }

    /// Returns true while the debounced level is "pressed".
    pub fn is_down(&self) -> bool {
        self.down_since.is_some()
    }
}

impl<I: TimeInstant> Default for ButtonDebouncer<I> {
    fn default() -> Self {
        Self::new()
    }
}
