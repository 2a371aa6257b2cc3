//! Pong: two-paddle ball game driven by the analog channels.

use core::fmt::Write;

use heapless::String;

use crate::entropy::EntropySource;
use crate::game::Game;
use crate::input::Inputs;
use crate::surface::DrawSurface;
use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const PADDLE_W: i32 = 3;
const PADDLE_H: i32 = 16;
const LEFT_X: i32 = 2;
const RIGHT_X: i32 = DISPLAY_WIDTH - 2 - PADDLE_W;
const BALL_SIZE: i32 = 3;

// Pixels past the horizontal bound before a point is awarded.
const OUT_MARGIN: i32 = 10;

const BASE_SPEED_X: f32 = 1.9;
const BASE_SPEED_Y: f32 = 1.2;

// Vertical velocity scale for the normalized paddle-center offset.
const SPIN: f32 = 2.2;
// Horizontal speed multiplier applied on every paddle bounce.
const RALLY_SPEEDUP: f32 = 1.01;

/// Two-paddle ball game.
///
/// Each potentiometer maps linearly onto one paddle's vertical travel. The
/// ball reflects off the top and bottom walls; a paddle hit reflects it
/// horizontally, re-aims it vertically by how far off-center it struck, and
/// speeds the rally up slightly. A ball escaping past either side scores
/// for the opponent and is re-served toward the side that lost the point.
pub struct PongGame {
    adc_max: u16,
    ball_x: f32,
    ball_y: f32,
    vx: f32,
    vy: f32,
    base_speed_x: f32,
    base_speed_y: f32,
    left_y: i32,
    right_y: i32,
    score_left: u32,
    score_right: u32,
}

impl PongGame {
    /// Creates a game for an ADC with the given full-scale reading.
    pub fn new(adc_max: u16) -> Self {
        Self {
            // Full scale must stay nonzero for the paddle mapping.
            adc_max: adc_max.max(1),
            ball_x: (DISPLAY_WIDTH / 2) as f32,
            ball_y: (DISPLAY_HEIGHT / 2) as f32,
            vx: BASE_SPEED_X,
            vy: BASE_SPEED_Y,
            base_speed_x: BASE_SPEED_X,
            base_speed_y: BASE_SPEED_Y,
            left_y: (DISPLAY_HEIGHT - PADDLE_H) / 2,
            right_y: (DISPLAY_HEIGHT - PADDLE_H) / 2,
            score_left: 0,
            score_right: 0,
        }
    }

    /// Current (left, right) scores.
    pub fn scores(&self) -> (u32, u32) {
        (self.score_left, self.score_right)
    }

    /// Overrides the serve speed. Takes effect on the next serve.
    pub fn set_ball_speed(&mut self, speed_x: f32, speed_y: f32) {
        self.base_speed_x = speed_x;
        self.base_speed_y = speed_y;
    }

    /// Maps a pot reading onto the paddle's vertical travel, clamped.
    fn pot_to_paddle(&self, value: u16) -> i32 {
        let clamped = value.min(self.adc_max) as i32;
        let travel = DISPLAY_HEIGHT - PADDLE_H;
        (clamped * travel / self.adc_max as i32).clamp(0, travel)
    }

    /// Centers the ball and serves toward the given side.
    fn serve<E: EntropySource>(&mut self, to_right: bool, entropy: &mut E) {
        self.ball_x = (DISPLAY_WIDTH / 2) as f32;
        self.ball_y = (DISPLAY_HEIGHT / 2) as f32;

        self.vx = if to_right {
            self.base_speed_x
        } else {
            -self.base_speed_x
        };
        self.vy = if entropy.next_int(0, 1) == 0 {
            self.base_speed_y
        } else {
            -self.base_speed_y
        };
    }

    /// Reflects the ball off a paddle face.
    fn bounce(&mut self, paddle_y: i32, off_right_paddle: bool) {
        let paddle_center = paddle_y as f32 + (PADDLE_H as f32) / 2.0;
        let ball_center = self.ball_y + (BALL_SIZE as f32) / 2.0;
        let offset = ((ball_center - paddle_center) / ((PADDLE_H as f32) / 2.0)).clamp(-1.0, 1.0);

        self.vx = -self.vx * RALLY_SPEEDUP;
        self.vy = offset * SPIN;

        // Step clear of the paddle so the same face cannot re-trigger.
        self.ball_x = if off_right_paddle {
            (RIGHT_X - BALL_SIZE - 1) as f32
        } else {
            (LEFT_X + PADDLE_W + 1) as f32
        };
    }
}

impl Game for PongGame {
    fn name(&self) -> &'static str {
        "PONG"
    }

    fn hint(&self) -> &'static str {
        "Pots = paddles"
    }

    fn frame_ms(&self) -> u32 {
        16
    }

    fn reset<E: EntropySource>(&mut self, entropy: &mut E) {
        self.score_left = 0;
        self.score_right = 0;
        self.left_y = (DISPLAY_HEIGHT - PADDLE_H) / 2;
        self.right_y = (DISPLAY_HEIGHT - PADDLE_H) / 2;
        self.serve(true, entropy);
    }

    fn update<E: EntropySource>(&mut self, inputs: &Inputs, entropy: &mut E) {
        self.left_y = self.pot_to_paddle(inputs.pot_left);
        self.right_y = self.pot_to_paddle(inputs.pot_right);

        self.ball_x += self.vx;
        self.ball_y += self.vy;

        // Wall reflection, with the ball pinned back inside the field.
        if self.ball_y <= 0.0 {
            self.ball_y = 0.0;
            self.vy = -self.vy;
        }
        let floor = (DISPLAY_HEIGHT - BALL_SIZE) as f32;
        if self.ball_y >= floor {
            self.ball_y = floor;
            self.vy = -self.vy;
        }

        // Paddle hits only count while the ball moves toward that paddle.
        if self.vx < 0.0
            && self.ball_x <= (LEFT_X + PADDLE_W) as f32
            && self.ball_y + BALL_SIZE as f32 >= self.left_y as f32
            && self.ball_y <= (self.left_y + PADDLE_H) as f32
        {
            self.bounce(self.left_y, false);
        }
        if self.vx > 0.0
            && self.ball_x + BALL_SIZE as f32 >= RIGHT_X as f32
            && self.ball_y + BALL_SIZE as f32 >= self.right_y as f32
            && self.ball_y <= (self.right_y + PADDLE_H) as f32
        {
            self.bounce(self.right_y, true);
        }

        // A point for the opponent; the loser receives the serve.
        if self.ball_x < -(OUT_MARGIN as f32) {
            self.score_right += 1;
            self.serve(false, entropy);
        }
        if self.ball_x > (DISPLAY_WIDTH + OUT_MARGIN) as f32 {
            self.score_left += 1;
            self.serve(true, entropy);
        }
    }

    fn render<S: DrawSurface>(&self, surface: &mut S) {
        surface.clear();

        let mut left: String<8> = String::new();
        let _ = write!(left, "{}", self.score_left);
        surface.text(40, 0, &left);

        let mut right: String<8> = String::new();
        let _ = write!(right, "{}", self.score_right);
        surface.text(82, 0, &right);

        // Dashed center line.
        let mut y = 0;
        while y < DISPLAY_HEIGHT {
            surface.vline(DISPLAY_WIDTH / 2, y, 3);
            y += 6;
        }

        surface.fill_rect(LEFT_X, self.left_y, PADDLE_W as u32, PADDLE_H as u32);
        surface.fill_rect(RIGHT_X, self.right_y, PADDLE_W as u32, PADDLE_H as u32);
        surface.fill_rect(
            self.ball_x as i32,
            self.ball_y as i32,
            BALL_SIZE as u32,
            BALL_SIZE as u32,
        );

        surface.present();
    }
}
