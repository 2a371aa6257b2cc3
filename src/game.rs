//! The game simulation contract and the closed set of built-in games.

use crate::entropy::EntropySource;
use crate::flappy::FlappyGame;
use crate::input::Inputs;
use crate::pong::PongGame;
use crate::surface::DrawSurface;

/// Capability set every game simulation implements.
///
/// A simulation owns its entire state for the lifetime of the process;
/// `reset` reinitializes that state in place rather than recreating the
/// instance. `update` advances exactly one fixed step and may call `reset`
/// on itself when a terminal condition is reached - losing is a silent
/// restart, never an error and never a separate "game over" state.
///
/// `update` mutates only the simulation's own state; `render` is the only
/// place with drawing side effects and issues a full redraw from current
/// state, assuming nothing from prior frames. Keeping the two separable
/// lets tests step a simulation deterministically without a surface.
pub trait Game {
    /// Static display name, shown in the menus.
    fn name(&self) -> &'static str;

    /// Static one-line control hint, shown in the per-game menu.
    fn hint(&self) -> &'static str;

    /// Advisory pacing hint: desired milliseconds between updates.
    fn frame_ms(&self) -> u32;

    /// Reinitializes all state to a valid starting configuration.
    fn reset<E: EntropySource>(&mut self, entropy: &mut E);

    /// Advances one fixed simulation step from the given snapshot.
    fn update<E: EntropySource>(&mut self, inputs: &Inputs, entropy: &mut E);

    /// Redraws the full frame (clear, primitives, present).
    fn render<S: DrawSurface>(&self, surface: &mut S);
}

/// The closed set of game variants a console can host.
///
/// Games are tagged variants rather than trait objects: the set is fixed at
/// compile time, dispatch is a match, and no allocation or vtable is
/// involved.
pub enum AnyGame {
    /// One-button gravity game. Confirm flaps.
    Flappy(FlappyGame),
    /// Two-paddle ball game. Pots move the paddles.
    Pong(PongGame),
}

impl Game for AnyGame {
    fn name(&self) -> &'static str {
        match self {
            AnyGame::Flappy(game) => game.name(),
            AnyGame::Pong(game) => game.name(),
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            AnyGame::Flappy(game) => game.hint(),
            AnyGame::Pong(game) => game.hint(),
        }
    }

    fn frame_ms(&self) -> u32 {
        match self {
            AnyGame::Flappy(game) => game.frame_ms(),
            AnyGame::Pong(game) => game.frame_ms(),
        }
    }

    fn reset<E: EntropySource>(&mut self, entropy: &mut E) {
        match self {
            AnyGame::Flappy(game) => game.reset(entropy),
            AnyGame::Pong(game) => game.reset(entropy),
        }
    }

    fn update<E: EntropySource>(&mut self, inputs: &Inputs, entropy: &mut E) {
        match self {
            AnyGame::Flappy(game) => game.update(inputs, entropy),
            AnyGame::Pong(game) => game.update(inputs, entropy),
        }
    }

    fn render<S: DrawSurface>(&self, surface: &mut S) {
        match self {
            AnyGame::Flappy(game) => game.render(surface),
            AnyGame::Pong(game) => game.render(surface),
        }
    }
}
