#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonDebouncer`**: classifies a noisy button signal into short/long press events
//! - **`InputSampler`**: samples both buttons and both pots into one `Inputs` snapshot per poll
//! - **`Game`**: the contract every game simulation implements
//! - **`AnyGame`**: the closed set of built-in game variants
//! - **`FlappyGame`** / **`PongGame`**: the built-in simulations
//! - **`Console`**: the top-level screen state machine and frame pacer
//! - **`DigitalInput`**, **`AnalogInput`**, **`DrawSurface`**, **`EntropySource`**: traits to
//!   implement for your hardware
//! - **`TimeInstant`** / **`TimeDuration`**: time abstractions; the host injects "now" into
//!   every poll
//!
//! The core is single-threaded and poll-driven: nothing blocks, spawns or
//! reads a clock, so every state transition can be reproduced in tests by
//! feeding synthetic instants and input levels.

pub mod button;
pub mod console;
pub mod entropy;
pub mod flappy;
pub mod game;
pub mod input;
pub mod pong;
pub mod surface;
pub mod time;

pub use button::{BtnEvent, ButtonDebouncer, DEBOUNCE_MS, LONG_PRESS_MS};
pub use console::{ConfigError, Console, ConsoleConfig, ScreenState};
pub use entropy::EntropySource;
pub use flappy::FlappyGame;
pub use game::{AnyGame, Game};
pub use input::{AnalogInput, DeadBand, DigitalInput, InputSampler, Inputs};
pub use pong::PongGame;
pub use surface::DrawSurface;
pub use time::{TimeDuration, TimeInstant};

/// Display width in pixels.
pub const DISPLAY_WIDTH: i32 = 128;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: i32 = 64;
