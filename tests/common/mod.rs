//! Shared test infrastructure for pocket-arcade integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use pocket_arcade::{
    AnalogInput, AnyGame, Console, ConsoleConfig, DigitalInput, DrawSurface, EntropySource,
    FlappyGame, InputSampler, PongGame, TimeDuration, TimeInstant, LONG_PRESS_MS,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Advancing test clock handing out instants
pub struct Clock(pub u64);

impl Clock {
    pub fn new() -> Self {
        Clock(0)
    }

    /// Advance by `ms` and return the new instant
    pub fn tick(&mut self, ms: u64) -> TestInstant {
        self.0 += ms;
        TestInstant(self.0)
    }
}

// ============================================================================
// Mock Inputs
// ============================================================================

/// Button pin stub reading a shared cell so tests can flip levels mid-run
pub struct PinStub<'a>(pub &'a Cell<bool>);

impl DigitalInput for PinStub<'_> {
    fn is_pressed(&mut self) -> bool {
        self.0.get()
    }
}

/// Pot channel stub reading a shared cell
pub struct PotStub<'a>(pub &'a Cell<u16>);

impl AnalogInput for PotStub<'_> {
    fn read(&mut self) -> u16 {
        self.0.get()
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    FillRect { x: i32, y: i32, w: u32, h: u32 },
    HLine { x: i32, y: i32, w: u32 },
    VLine { x: i32, y: i32, h: u32 },
    Text { x: i32, y: i32, text: String },
    Present,
}

/// Surface that records every drawing call into a shared op log
pub struct RecordingSurface<'a> {
    pub ops: &'a RefCell<Vec<DrawOp>>,
}

impl DrawSurface for RecordingSurface<'_> {
    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.ops.borrow_mut().push(DrawOp::FillRect {
            x,
            y,
            w: width,
            h: height,
        });
    }

    fn hline(&mut self, x: i32, y: i32, width: u32) {
        self.ops.borrow_mut().push(DrawOp::HLine { x, y, w: width });
    }

    fn vline(&mut self, x: i32, y: i32, height: u32) {
        self.ops.borrow_mut().push(DrawOp::VLine { x, y, h: height });
    }

    fn text(&mut self, x: i32, y: i32, text: &str) {
        self.ops.borrow_mut().push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Present);
    }
}

// ============================================================================
// Mock Entropy
// ============================================================================

/// Entropy stub returning a fixed value clamped into the requested range
pub struct FixedEntropy(pub i32);

impl EntropySource for FixedEntropy {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}

// ============================================================================
// Console Harness
// ============================================================================

pub type TestConsole<'a> =
    Console<TestInstant, PinStub<'a>, PotStub<'a>, RecordingSurface<'a>, FixedEntropy, 4>;

/// Shared cells backing a console's inputs, plus the drawing op log.
///
/// Lives on the test's stack; the console built by [`Harness::console`]
/// borrows it, so levels can be flipped and ops inspected mid-run.
pub struct Harness {
    pub cycle: Cell<bool>,
    pub confirm: Cell<bool>,
    pub pot_left: Cell<u16>,
    pub pot_right: Cell<u16>,
    pub ops: RefCell<Vec<DrawOp>>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            cycle: Cell::new(false),
            confirm: Cell::new(false),
            pot_left: Cell::new(512),
            pot_right: Cell::new(512),
            ops: RefCell::new(Vec::new()),
        }
    }

    /// Builds a console with the default config over this harness
    pub fn console(&self, games: heapless::Vec<AnyGame, 4>) -> TestConsole<'_> {
        let sampler = InputSampler::new(
            PinStub(&self.cycle),
            PinStub(&self.confirm),
            PotStub(&self.pot_left),
            PotStub(&self.pot_right),
            8,
        )
        .unwrap();

        Console::new(
            sampler,
            games,
            RecordingSurface { ops: &self.ops },
            FixedEntropy(0),
            ConsoleConfig::default(),
        )
        .unwrap()
    }

    /// The standard two-game lineup: Flappy then Pong
    pub fn both_games() -> heapless::Vec<AnyGame, 4> {
        let mut games = heapless::Vec::new();
        let _ = games.push(AnyGame::Flappy(FlappyGame::new()));
        let _ = games.push(AnyGame::Pong(PongGame::new(1023)));
        games
    }

    /// Drops the recorded draw ops
    pub fn clear_ops(&self) {
        self.ops.borrow_mut().clear();
    }

    /// True if any recorded op is a text containing `needle`
    pub fn drew_text(&self, needle: &str) -> bool {
        self.ops
            .borrow()
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.contains(needle)))
    }
}

// ============================================================================
// Press Helpers
// ============================================================================

/// Walks a full short press (press, debounce, release, debounce) through the
/// console. The classified event reaches the state machine on the last poll.
pub fn press_short(console: &mut TestConsole<'_>, pin: &Cell<bool>, clock: &mut Clock) {
    pin.set(true);
    console.poll(clock.tick(1));
    console.poll(clock.tick(30));
    pin.set(false);
    console.poll(clock.tick(5));
    console.poll(clock.tick(30));
}

/// Walks a held press across the long threshold. The Long event reaches the
/// state machine while the button is still down.
pub fn press_long(console: &mut TestConsole<'_>, pin: &Cell<bool>, clock: &mut Clock) {
    pin.set(true);
    console.poll(clock.tick(1));
    console.poll(clock.tick(30));
    console.poll(clock.tick(LONG_PRESS_MS));
    pin.set(false);
    console.poll(clock.tick(5));
    console.poll(clock.tick(30));
}

/// Idles past the post-transition settle window
pub fn settle_out(console: &mut TestConsole<'_>, clock: &mut Clock) {
    console.poll(clock.tick(120));
}
