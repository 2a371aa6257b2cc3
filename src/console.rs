//! Top-level screen state machine: menu navigation, settle windows, game
//! dispatch and frame pacing.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::button::BtnEvent;
use crate::entropy::EntropySource;
use crate::game::{AnyGame, Game};
use crate::input::{AnalogInput, DigitalInput, InputSampler, Inputs};
use crate::surface::DrawSurface;
use crate::time::{TimeDuration, TimeInstant};

/// The current screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenState {
    /// Game picker. Cycle steps the selection, confirm opens it.
    MainMenu,
    /// Per-game menu. Confirm starts the game, cycle backs out.
    GameMenu,
    /// Active simulation. Cycle exits (short to the game menu, long all the
    /// way to the main menu); everything else belongs to the game.
    InGame,
}

/// Errors that reject a misconfigured console before its first poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No games were provided.
    EmptyGameList,

    /// Analog dead-band threshold of zero would pass every jitter sample.
    ZeroDeadBand,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyGameList => {
                write!(f, "game list must contain at least one game")
            }
            ConfigError::ZeroDeadBand => {
                write!(f, "dead-band threshold must be greater than zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Tunable console behavior.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    /// Milliseconds after a menu/game transition during which button events
    /// are ignored, so one physical press cannot trigger twice.
    pub settle_ms: u64,

    /// Desired milliseconds between polls while a menu is showing.
    pub menu_frame_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            settle_ms: 80,
            menu_frame_ms: 20,
        }
    }
}

/// The console core: input sampling, screen state machine and rendering.
///
/// Owns the input sampler, the fixed game set, the drawing surface and the
/// entropy source. The host calls [`poll`](Console::poll) once per loop
/// iteration with a fresh monotonic instant, then sleeps for
/// [`desired_interval_ms`](Console::desired_interval_ms).
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `D` - Digital input (button pin) implementation type
/// * `A` - Analog input (pot channel) implementation type
/// * `S` - Drawing surface implementation type
/// * `E` - Entropy source implementation type
/// * `N` - Maximum number of games the console can hold
pub struct Console<I, D, A, S, E, const N: usize>
where
    I: TimeInstant,
    D: DigitalInput,
    A: AnalogInput,
    S: DrawSurface,
    E: EntropySource,
{
    sampler: InputSampler<I, D, A>,
    games: Vec<AnyGame, N>,
    surface: S,
    entropy: E,
    config: ConsoleConfig,
    state: ScreenState,
    // Both indices stay within 0..games.len() for the console's lifetime.
    selected: usize,
    active: usize,
    settle_since: Option<I>,
}

impl<I, D, A, S, E, const N: usize> Console<I, D, A, S, E, N>
where
    I: TimeInstant,
    D: DigitalInput,
    A: AnalogInput,
    S: DrawSurface,
    E: EntropySource,
{
    /// Creates a console showing the main menu.
    ///
    /// # Errors
    /// * `EmptyGameList` - `games` is empty
    pub fn new(
        sampler: InputSampler<I, D, A>,
        games: Vec<AnyGame, N>,
        surface: S,
        entropy: E,
        config: ConsoleConfig,
    ) -> Result<Self, ConfigError> {
        if games.is_empty() {
            return Err(ConfigError::EmptyGameList);
        }

        Ok(Self {
            sampler,
            games,
            surface,
            entropy,
            config,
            state: ScreenState::MainMenu,
            selected: 0,
            active: 0,
            settle_since: None,
        })
    }

    /// Performs one sampling + state-advance + render cycle.
    pub fn poll(&mut self, now: I) {
        let mut inputs = self.sampler.read(now);
        if self.in_settle(now) {
            inputs = inputs.without_events();
        }

        self.step(&inputs, now);
        self.render();
    }

    /// Advisory delay before the next poll: the active game's frame
    /// interval while in-game, the menu refresh interval otherwise.
    pub fn desired_interval_ms(&self) -> u32 {
        match self.state {
            ScreenState::InGame => self.games[self.active].frame_ms(),
            _ => self.config.menu_frame_ms,
        }
    }

    /// Returns the current screen.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Returns the menu cursor position.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the index of the chosen game.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Advances the state machine by one snapshot. Pure state transition;
    /// all drawing happens in `render`.
    fn step(&mut self, inputs: &Inputs, now: I) {
        match self.state {
            ScreenState::MainMenu => {
                if inputs.cycle == BtnEvent::Short {
                    self.selected = (self.selected + 1) % self.games.len();
                }
                if inputs.confirm.is_press() {
                    self.active = self.selected;
                    self.state = ScreenState::GameMenu;
                }
            }
            ScreenState::GameMenu => {
                if inputs.confirm.is_press() {
                    self.games[self.active].reset(&mut self.entropy);
                    self.state = ScreenState::InGame;
                    self.begin_settle(now);
                } else if inputs.cycle.is_press() {
                    self.state = ScreenState::MainMenu;
                    self.begin_settle(now);
                }
            }
            ScreenState::InGame => match inputs.cycle {
                BtnEvent::Long => {
                    self.state = ScreenState::MainMenu;
                    self.begin_settle(now);
                }
                BtnEvent::Short => {
                    self.state = ScreenState::GameMenu;
                    self.begin_settle(now);
                }
                BtnEvent::None => {
                    self.games[self.active].update(inputs, &mut self.entropy);
                }
            },
        }
    }

    /// Full redraw of whatever screen is current.
    fn render(&mut self) {
        match self.state {
            ScreenState::MainMenu => self.render_main_menu(),
            ScreenState::GameMenu => self.render_game_menu(),
            ScreenState::InGame => self.games[self.active].render(&mut self.surface),
        }
    }

    fn render_main_menu(&mut self) {
        self.surface.clear();

        self.surface.text(18, 6, "GAMES");

        let mut line: String<32> = String::new();
        let _ = write!(line, "Selected: {}", self.games[self.selected].name());
        self.surface.text(10, 30, &line);

        self.surface.text(10, 44, "CYCLE  : next");
        self.surface.text(10, 54, "CONFIRM: open");

        self.surface.present();
    }

    fn render_game_menu(&mut self) {
        self.surface.clear();

        self.surface.text(10, 6, self.games[self.active].name());

        self.surface.text(10, 30, "CONFIRM: start");
        self.surface.text(10, 44, "CYCLE  : main");
        self.surface.text(10, 56, self.games[self.active].hint());

        self.surface.present();
    }

    fn begin_settle(&mut self, now: I) {
        self.settle_since = Some(now);
    }

    fn in_settle(&self, now: I) -> bool {
        self.settle_since
            .is_some_and(|since| now.duration_since(since).as_millis() < self.config.settle_ms)
    }
}
