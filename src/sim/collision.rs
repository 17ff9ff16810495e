//! Ball vs paddle contact
//!
//! Contact is tested against the paddle's inner face only and answered by
//! forcing the horizontal velocity to point away from the paddle. There is
//! no reflection and no position correction: a ball that stays in contact
//! is forced again on every frame until it clears.

use super::state::{Ball, Paddle, Side};

/// Whether the ball touches or has passed the paddle's inner face while its
/// center is within the paddle's vertical span.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let past_face = match paddle.side {
        Side::Left => ball.left_edge() <= paddle.right_edge(),
        Side::Right => ball.right_edge() >= paddle.pos.x,
    };
    past_face && paddle.spans_y(ball.pos.y)
}

/// Force the ball's horizontal velocity away from the paddle on contact.
///
/// Returns true when contact was detected.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !paddle_contact(ball, paddle) {
        return false;
    }
    ball.vel.x = match paddle.side {
        Side::Left => ball.vel.x.abs(),
        Side::Right => -ball.vel.x.abs(),
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::sim::state::{Control, Field};
    use glam::Vec2;

    fn paddles() -> (Paddle, Paddle) {
        let field = Field::default();
        let mut left = Paddle::new(Side::Left, Control::Player, colors::LIME_GREEN, field);
        let mut right = Paddle::new(
            Side::Right,
            Control::Autonomous { target: 0 },
            colors::RED,
            field,
        );
        left.pos.y = 100.0;
        right.pos.y = 100.0;
        (left, right)
    }

    #[test]
    fn test_left_contact_at_face() {
        let (left, _) = paddles();
        let ball = Ball::new(
            Vec2::new(left.right_edge() + 6.0, 150.0),
            6.0,
            Vec2::new(-3.0, 0.0),
            colors::ORANGE,
        );
        assert!(paddle_contact(&ball, &left));
    }

    #[test]
    fn test_left_contact_requires_vertical_span() {
        let (left, _) = paddles();
        let mut ball = Ball::new(
            Vec2::new(left.right_edge(), 99.0),
            6.0,
            Vec2::new(-3.0, 0.0),
            colors::ORANGE,
        );
        assert!(!paddle_contact(&ball, &left));
        ball.pos.y = 100.0;
        assert!(paddle_contact(&ball, &left));
        ball.pos.y = 220.0;
        assert!(paddle_contact(&ball, &left));
        ball.pos.y = 220.5;
        assert!(!paddle_contact(&ball, &left));
    }

    #[test]
    fn test_deflect_forces_direction_regardless_of_sign() {
        let (left, right) = paddles();

        let mut ball = Ball::new(
            Vec2::new(left.right_edge(), 150.0),
            6.0,
            Vec2::new(3.0, 1.0),
            colors::ORANGE,
        );
        assert!(deflect(&mut ball, &left));
        assert_eq!(ball.vel.x, 3.0);

        let mut ball = Ball::new(
            Vec2::new(right.pos.x, 150.0),
            6.0,
            Vec2::new(4.0, 1.0),
            colors::ORANGE,
        );
        assert!(deflect(&mut ball, &right));
        assert_eq!(ball.vel.x, -4.0);

        ball.vel.x = -4.0;
        assert!(deflect(&mut ball, &right));
        assert_eq!(ball.vel.x, -4.0);
    }

    #[test]
    fn test_no_deflect_in_open_field() {
        let (left, right) = paddles();
        let mut ball = Ball::new(
            Vec2::new(400.0, 150.0),
            6.0,
            Vec2::new(-3.0, 1.0),
            colors::ORANGE,
        );
        assert!(!deflect(&mut ball, &left));
        assert!(!deflect(&mut ball, &right));
        assert_eq!(ball.vel, Vec2::new(-3.0, 1.0));
    }
}
