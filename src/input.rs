//! Input sampling: hardware input traits, analog dead-band filtering and
//! the per-poll input snapshot.

use crate::button::{BtnEvent, ButtonDebouncer};
use crate::console::ConfigError;
use crate::time::TimeInstant;

/// Trait for abstracting a single digital input line.
///
/// Implement this for each button pin. Implementations return the
/// polarity-normalized level: `true` while the button is physically held,
/// regardless of active-low or active-high wiring.
pub trait DigitalInput {
    /// Reads the current level.
    fn is_pressed(&mut self) -> bool;
}

/// Trait for abstracting a single analog input channel.
///
/// Implement this for each potentiometer channel. Values are raw ADC
/// counts; the full-scale range is whatever the converter produces and is
/// declared to consumers that need it (e.g. [`PongGame::new`]).
///
/// [`PongGame::new`]: crate::PongGame::new
pub trait AnalogInput {
    /// Reads the current conversion result.
    fn read(&mut self) -> u16;
}

/// Dead-band filter for one noisy analog channel.
///
/// The very first sample passes through and seeds the cache; afterwards a
/// new reading is reported only when it differs from the cached value by at
/// least the threshold.
#[derive(Debug, Clone, Copy)]
pub struct DeadBand {
    threshold: u16,
    last: Option<u16>,
}

impl DeadBand {
    /// Creates a filter with the given minimum change magnitude.
    ///
    /// # Errors
    /// * `ZeroDeadBand` - the threshold is zero, which would let every jitter
    ///   sample through
    pub fn new(threshold: u16) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroDeadBand);
        }
        Ok(Self {
            threshold,
            last: None,
        })
    }

    /// Filters one raw sample, returning the value to report.
    pub fn apply(&mut self, raw: u16) -> u16 {
        match self.last {
            Some(cached) if raw.abs_diff(cached) < self.threshold => cached,
            _ => {
                self.last = Some(raw);
                raw
            }
        }
    }
}

/// One immutable snapshot of all inputs, produced per poll.
///
/// Built fresh by [`InputSampler::read`], consumed in the same poll and
/// discarded; nothing is buffered across polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inputs {
    /// Filtered left potentiometer value.
    pub pot_left: u16,
    /// Filtered right potentiometer value.
    pub pot_right: u16,
    /// Event from the cycle button (menu navigation / backing out).
    pub cycle: BtnEvent,
    /// Event from the confirm button (activation; flap control in-game).
    pub confirm: BtnEvent,
}

impl Inputs {
    /// Snapshot with no button events and both pots at zero.
    pub const fn idle() -> Self {
        Self {
            pot_left: 0,
            pot_right: 0,
            cycle: BtnEvent::None,
            confirm: BtnEvent::None,
        }
    }

    /// Copy of this snapshot with both button events blanked.
    pub(crate) fn without_events(self) -> Self {
        Self {
            cycle: BtnEvent::None,
            confirm: BtnEvent::None,
            ..self
        }
    }
}

/// Samples two buttons and two analog channels into one snapshot per poll.
///
/// Owns one [`ButtonDebouncer`] per button and one [`DeadBand`] filter per
/// analog channel, together with the hardware handles behind them.
pub struct InputSampler<I: TimeInstant, D: DigitalInput, A: AnalogInput> {
    cycle_pin: D,
    confirm_pin: D,
    left_pot: A,
    right_pot: A,
    cycle_btn: ButtonDebouncer<I>,
    confirm_btn: ButtonDebouncer<I>,
    left_filter: DeadBand,
    right_filter: DeadBand,
}

impl<I: TimeInstant, D: DigitalInput, A: AnalogInput> InputSampler<I, D, A> {
    /// Creates a sampler over the given pins and channels.
    ///
    /// `dead_band` is the minimum ADC-count change an analog channel must
    /// move before its reported value updates.
    ///
    /// # Errors
    /// * `ZeroDeadBand` - `dead_band` is zero
    pub fn new(
        cycle_pin: D,
        confirm_pin: D,
        left_pot: A,
        right_pot: A,
        dead_band: u16,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            cycle_pin,
            confirm_pin,
            left_pot,
            right_pot,
            cycle_btn: ButtonDebouncer::new(),
            confirm_btn: ButtonDebouncer::new(),
            left_filter: DeadBand::new(dead_band)?,
            right_filter: DeadBand::new(dead_band)?,
        })
    }

    /// Samples every input once and returns the combined snapshot.
    pub fn read(&mut self, now: I) -> Inputs {
        let cycle = self.cycle_btn.update(self.cycle_pin.is_pressed(), now);
        let confirm = self.confirm_btn.update(self.confirm_pin.is_pressed(), now);

        Inputs {
            pot_left: self.left_filter.apply(self.left_pot.read()),
            pot_right: self.right_filter.apply(self.right_pot.read()),
            cycle,
            confirm,
        }
    }
}
