//! Per-frame simulation step

use super::collision::deflect;
use super::input::KeyState;
use super::state::{Ball, Control, Field, Game, Paddle};

impl Game {
    /// Advance the game by one frame.
    ///
    /// Order: every ball moves, is pushed off the paddles and is re-served
    /// if it left the field; then the paddles move.
    pub fn update(&mut self) {
        let field = self.field;

        for (index, ball) in self.balls.iter_mut().enumerate() {
            ball.advance(field);
            deflect(ball, &self.left);
            deflect(ball, &self.right);

            if ball.has_left_field(field) {
                ball.reset(field);
                log::debug!("Ball {} re-served, vx now {}", index, ball.vel.x);
            }
        }

        let Game {
            left, right, balls, keys, ..
        } = self;
        for paddle in [left, right] {
            steer(paddle, balls, keys, field);
        }
    }
}

/// Apply one frame of movement according to the paddle's control mode
fn steer(paddle: &mut Paddle, balls: &[Ball], keys: &KeyState, field: Field) {
    match paddle.control {
        Control::Player => {
            if let Some(direction) = keys.direction() {
                paddle.shift(direction, field);
            }
        }
        Control::Autonomous { target } => {
            if let Some(ball) = balls.get(target) {
                paddle.auto_move(ball, field);
            }
        }
    }
}
