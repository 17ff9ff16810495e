//! Game state and core simulation types
//!
//! Positions are in canvas pixels, origin top-left, y pointing down.
//! Velocities and paddle speed are per frame.

use glam::Vec2;

use super::input::KeyState;
use crate::colors::{self, Rgba};
use crate::consts::*;

/// Size of the play field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    /// Build from canvas pixel dimensions, falling back to the defaults for
    /// a zero-sized canvas.
    pub fn from_canvas(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance one frame, bouncing off the top and bottom of the field.
    ///
    /// Touching either wall negates the vertical velocity. The position is
    /// not corrected, so the ball may sit past the wall by up to one frame of
    /// vertical travel, and a ball landing exactly on the wall after an
    /// overshoot is negated again.
    pub fn advance(&mut self, field: Field) {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= field.height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Re-serve from the center, heading back the way it came.
    pub fn reset(&mut self, field: Field) {
        self.pos = field.center();
        self.vel.x = -self.vel.x;
    }

    /// True once the ball is entirely outside the field horizontally
    pub fn has_left_field(&self, field: Field) -> bool {
        self.pos.x + self.radius < 0.0 || self.pos.x - self.radius > field.width
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// How a paddle decides where to go each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Follows the arrow keys
    Player,
    /// Chases the ball at `target` in the game's ball list
    Autonomous { target: usize },
}

/// Vertical movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A paddle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Rgba,
    pub side: Side,
    pub control: Control,
}

impl Paddle {
    /// Create a paddle vertically centered on its side of the field
    pub fn new(side: Side, control: Control, color: Rgba, field: Field) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => field.width - PADDLE_INSET - PADDLE_WIDTH,
        };
        Self {
            pos: Vec2::new(x, field.height / 2.0 - PADDLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            color,
            side,
            control,
        }
    }

    /// Lowest allowed `pos.y`
    pub fn max_y(&self, field: Field) -> f32 {
        (field.height - self.size.y).max(0.0)
    }

    /// Move by `speed` in `direction`, clamped to the field.
    ///
    /// Does nothing when the paddle already rests on that limit.
    pub fn shift(&mut self, direction: Direction, field: Field) {
        let max_y = self.max_y(field);
        match direction {
            Direction::Up if self.pos.y > 0.0 => {
                self.pos.y = (self.pos.y - self.speed).max(0.0);
            }
            Direction::Down if self.pos.y < max_y => {
                self.pos.y = (self.pos.y + self.speed).min(max_y);
            }
            _ => {}
        }
    }

    /// Step toward the ball's current height. Purely reactive: a ball
    /// moving faster than `speed` will outrun it.
    pub fn auto_move(&mut self, target: &Ball, field: Field) {
        let center = self.center_y();
        if target.pos.y < center {
            self.shift(Direction::Up, field);
        } else if target.pos.y > center {
            self.shift(Direction::Down, field);
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Inclusive vertical span check
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.pos.y && y <= self.pos.y + self.size.y
    }
}

/// Everything the frame loop owns
#[derive(Debug, Clone)]
pub struct Game {
    pub field: Field,
    /// Fixed pool, in creation order
    pub balls: Vec<Ball>,
    /// Player paddle
    pub left: Paddle,
    /// CPU paddle
    pub right: Paddle,
    pub keys: KeyState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Field::default())
    }
}

impl Game {
    /// Set up the opening layout for a field of the given size
    pub fn new(field: Field) -> Self {
        let (w, h) = (field.width, field.height);
        let balls = vec![
            Ball::new(
                Vec2::new(w / 2.0, h / 2.0),
                6.0,
                Vec2::new(4.0, -3.0),
                colors::ORANGE,
            ),
            Ball::new(
                Vec2::new(w / 2.0 + 150.0, h / 3.0),
                10.0,
                Vec2::new(-3.0, 2.0),
                colors::BLUE,
            ),
            Ball::new(
                Vec2::new(w / 3.0, h - 80.0),
                14.0,
                Vec2::new(3.0, -2.0),
                colors::CYAN,
            ),
            Ball::new(
                Vec2::new(w - 200.0, h - 40.0),
                18.0,
                Vec2::new(-2.0, -2.0),
                colors::GRAY,
            ),
            Ball::new(
                Vec2::new(w / 2.0, h - 10.0),
                3.0,
                Vec2::new(5.0, -4.0),
                colors::WHITE,
            ),
        ];

        Self {
            field,
            balls,
            left: Paddle::new(Side::Left, Control::Player, colors::LIME_GREEN, field),
            right: Paddle::new(
                Side::Right,
                Control::Autonomous { target: 0 },
                colors::RED,
                field,
            ),
            keys: KeyState::default(),
        }
    }

    /// Both paddles, left first
    pub fn paddles(&self) -> [&Paddle; 2] {
        [&self.left, &self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_layout() {
        let game = Game::new(Field {
            width: 800.0,
            height: 500.0,
        });
        assert_eq!(game.balls.len(), 5);
        assert_eq!(game.balls[0].pos, Vec2::new(400.0, 250.0));
        assert_eq!(game.balls[3].pos, Vec2::new(600.0, 460.0));
        assert_eq!(game.balls[4].radius, 3.0);

        assert_eq!(game.left.pos, Vec2::new(40.0, 190.0));
        assert_eq!(game.right.pos, Vec2::new(748.0, 190.0));
        assert_eq!(game.left.control, Control::Player);
        assert_eq!(game.right.control, Control::Autonomous { target: 0 });
    }

    #[test]
    fn test_field_from_empty_canvas() {
        assert_eq!(Field::from_canvas(0, 300), Field::default());
        assert_eq!(
            Field::from_canvas(640, 480),
            Field {
                width: 640.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn test_ball_flips_at_top_boundary() {
        let field = Field::default();
        let mut ball = Ball::new(Vec2::new(100.0, 5.0), 5.0, Vec2::new(1.0, -3.0), colors::WHITE);
        ball.advance(field);
        assert_eq!(ball.vel.y, 3.0);
        assert_eq!(ball.pos, Vec2::new(101.0, 2.0));
    }

    #[test]
    fn test_ball_flips_at_bottom_boundary() {
        let field = Field::default();
        let mut ball = Ball::new(
            Vec2::new(100.0, field.height - 8.0),
            6.0,
            Vec2::new(0.0, 4.0),
            colors::WHITE,
        );
        ball.advance(field);
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_ball_negates_on_consecutive_wall_contacts() {
        let field = Field::default();
        let mut ball = Ball::new(
            Vec2::new(100.0, 6.0),
            6.0,
            Vec2::new(0.0, -3.0),
            colors::WHITE,
        );
        ball.advance(field);
        assert_eq!(ball.pos.y, 3.0);
        assert_eq!(ball.vel.y, 3.0);

        // Back on the wall line: still touching, so negated again
        ball.advance(field);
        assert_eq!(ball.pos.y, 6.0);
        assert_eq!(ball.vel.y, -3.0);
    }

    #[test]
    fn test_ball_reset_recenters_and_reverses() {
        let field = Field::default();
        let mut ball = Ball::new(Vec2::new(-30.0, 42.0), 6.0, Vec2::new(-2.0, 1.5), colors::ORANGE);
        ball.reset(field);
        assert_eq!(ball.pos, field.center());
        assert_eq!(ball.vel, Vec2::new(2.0, 1.5));
    }

    #[test]
    fn test_ball_left_field() {
        let field = Field::default();
        let mut ball = Ball::new(Vec2::new(-6.0, 100.0), 6.0, Vec2::ZERO, colors::WHITE);
        assert!(!ball.has_left_field(field));
        ball.pos.x = -6.5;
        assert!(ball.has_left_field(field));
        ball.pos.x = field.width + 6.5;
        assert!(ball.has_left_field(field));
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let field = Field::default();
        let mut paddle = Paddle::new(Side::Left, Control::Player, colors::LIME_GREEN, field);

        paddle.pos.y = 3.0;
        paddle.shift(Direction::Up, field);
        assert_eq!(paddle.pos.y, 0.0);
        paddle.shift(Direction::Up, field);
        assert_eq!(paddle.pos.y, 0.0);

        let max_y = paddle.max_y(field);
        paddle.pos.y = max_y - 2.0;
        paddle.shift(Direction::Down, field);
        assert_eq!(paddle.pos.y, max_y);
        paddle.shift(Direction::Down, field);
        assert_eq!(paddle.pos.y, max_y);
    }

    #[test]
    fn test_auto_move_tracks_ball_above() {
        let field = Field::default();
        let mut paddle = Paddle::new(
            Side::Right,
            Control::Autonomous { target: 0 },
            colors::RED,
            field,
        );
        paddle.pos.y = 200.0;
        let ball = Ball::new(Vec2::new(400.0, 50.0), 6.0, Vec2::ZERO, colors::ORANGE);

        paddle.auto_move(&ball, field);
        assert_eq!(paddle.pos.y, 193.0);

        paddle.pos.y = 4.0;
        let ball = Ball::new(Vec2::new(400.0, 1.0), 6.0, Vec2::ZERO, colors::ORANGE);
        paddle.auto_move(&ball, field);
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_auto_move_holds_when_level() {
        let field = Field::default();
        let mut paddle = Paddle::new(
            Side::Right,
            Control::Autonomous { target: 0 },
            colors::RED,
            field,
        );
        let ball = Ball::new(Vec2::new(400.0, paddle.center_y()), 6.0, Vec2::ZERO, colors::ORANGE);
        let before = paddle.pos;
        paddle.auto_move(&ball, field);
        assert_eq!(paddle.pos, before);
    }
}
