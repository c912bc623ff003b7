//! Pong demo
//!
//! Player one owns the top paddle, the bottom paddle chases the ball on its
//! own. The ball bounces off the side walls and the paddles, speeding up a
//! little on every paddle hit. A ball that leaves through the top or bottom
//! scores for the opposite player and is served again from the centre.

use macroquad::math::Vec2;
use crate::asset::{SpriteId, Sprites};
use crate::config::PongConfig;
use crate::game::{will_hit, Entity, MomentumEntity, Rect};
use crate::input::{Action, FrameInput};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub one: u32,
    pub two: u32,
}

pub struct PongDemo {
    config: PongConfig,
    screen: Rect,
    pub player_one: Entity,
    pub player_two: Entity,
    pub ball: MomentumEntity,
    pub score: Score,
}

/// Is the ball moving vertically toward the paddle?
fn heading_toward(ball: &MomentumEntity, paddle: &Entity) -> bool {
    let ball_y = ball.base.rect().center().y;
    let paddle_y = paddle.rect().center().y;
    if paddle_y < ball_y {
        ball.dir.y < 0.0
    } else {
        ball.dir.y > 0.0
    }
}

impl PongDemo {
    pub fn new(config: &PongConfig, screen: Vec2) -> Self {
        let screen = Rect::screen(screen.x, screen.y);
        let (player_one, player_two, ball) = Self::initial_entities(config, &screen);
        Self {
            config: config.clone(),
            screen,
            player_one,
            player_two,
            ball,
            score: Score::default(),
        }
    }

    fn initial_entities(config: &PongConfig, screen: &Rect) -> (Entity, Entity, MomentumEntity) {
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let center = Vec2::new(screen.w * 0.5, screen.h * 0.5);

        let player_one = Entity::new(
            SpriteId::Paddle,
            Vec2::new(center.x, config.paddle_margin),
            paddle_size,
            config.paddle_speed,
        );
        let player_two = Entity::new(
            SpriteId::Paddle,
            Vec2::new(center.x, screen.h - config.paddle_margin - config.paddle_height),
            paddle_size,
            config.paddle_speed,
        );
        let ball = MomentumEntity::new(
            Entity::new(
                SpriteId::Ball,
                center,
                Vec2::splat(config.ball_size),
                config.ball_speed,
            ),
            Vec2::new(1.0, 1.0),
        );
        (player_one, player_two, ball)
    }

    /// Back to the opening serve with a clean score
    pub fn reset(&mut self) {
        let (one, two, ball) = Self::initial_entities(&self.config, &self.screen);
        self.player_one = one;
        self.player_two = two;
        self.ball = ball;
        self.score = Score::default();
    }

    /// One tick
    pub fn update(&mut self, input: &FrameInput) {
        let mut p1_dir = 0.0;
        if input.held(Action::MoveLeft) {
            p1_dir -= 1.0;
        }
        if input.held(Action::MoveRight) {
            p1_dir += 1.0;
        }

        let p2_dir = if self.ball.base.pos.x > self.player_two.pos.x { 1.0 } else { -1.0 };

        // Side walls, only while moving into them
        let ball_rect = self.ball.base.rect();
        let hits_left = ball_rect.x <= self.screen.x && self.ball.dir.x < 0.0;
        let hits_right = ball_rect.right() >= self.screen.right() && self.ball.dir.x > 0.0;
        if hits_left || hits_right {
            self.ball.bounce_x();
        }

        for paddle in [&self.player_one, &self.player_two] {
            if will_hit(paddle, &self.ball) && heading_toward(&self.ball, paddle) {
                self.ball.bounce_y();
                self.ball.base.speed *= self.config.speedup;
            }
        }

        self.player_one.move_by(Vec2::new(p1_dir, 0.0));
        self.player_two.move_by(Vec2::new(p2_dir, 0.0));
        self.player_one.clamp_to(&self.screen);
        self.player_two.clamp_to(&self.screen);
        self.ball.move_by(Vec2::ZERO);

        let ball_pos = self.ball.base.pos;
        let scored = if ball_pos.y > self.screen.bottom() {
            self.score.one += 1;
            true
        } else if ball_pos.y < self.screen.y - self.ball.base.size.x {
            self.score.two += 1;
            true
        } else {
            false
        };
        if scored {
            log::debug!("Point scored, now {}:{}", self.score.one, self.score.two);
            self.ball.base.pos = self.screen.center();
        }
    }

    pub fn draw(&self, sprites: &Sprites) {
        sprites.draw(
            SpriteId::Background,
            Vec2::ZERO,
            Some(Vec2::new(self.screen.w, self.screen.h)),
        );
        self.player_one.draw(sprites);
        self.player_two.draw(sprites);
        self.ball.base.draw(sprites);
    }

    pub fn status(&self) -> String {
        format!(
            "Score {} : {}   ball speed {:.2}",
            self.score.one, self.score.two, self.ball.base.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(640.0, 480.0);

    fn demo() -> PongDemo {
        PongDemo::new(&PongConfig::default(), SCREEN)
    }

    #[test]
    fn test_initial_layout() {
        let pong = demo();
        assert_eq!(pong.player_one.pos, Vec2::new(320.0, 16.0));
        assert_eq!(pong.player_two.pos, Vec2::new(320.0, 448.0));
        assert_eq!(pong.ball.base.pos, Vec2::new(320.0, 240.0));
        assert_eq!(pong.ball.dir, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_player_and_ai_paddles_move() {
        let mut pong = demo();
        pong.ball.base.pos.x = 500.0;
        pong.update(&FrameInput::default().with_held(Action::MoveLeft));
        assert_eq!(pong.player_one.pos.x, 316.0);
        // Ball is right of the AI paddle
        assert_eq!(pong.player_two.pos.x, 324.0);

        pong.ball.base.pos.x = 10.0;
        pong.update(&FrameInput::default());
        assert_eq!(pong.player_one.pos.x, 316.0);
        assert_eq!(pong.player_two.pos.x, 320.0);
    }

    #[test]
    fn test_paddles_stay_on_screen() {
        let mut pong = demo();
        let right = FrameInput::default().with_held(Action::MoveRight);
        for _ in 0..200 {
            pong.update(&right);
        }
        assert_eq!(pong.player_one.pos.x, 640.0 - 64.0);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut pong = demo();
        pong.ball.base.pos = Vec2::new(-1.0, 200.0);
        pong.ball.dir = Vec2::new(-1.0, 1.0);
        pong.update(&FrameInput::default());
        assert_eq!(pong.ball.dir.x, 1.0);
        assert_eq!(pong.ball.base.pos.x, 3.0);

        // Already leaving the wall: no second flip
        pong.ball.base.pos.x = -1.0;
        pong.update(&FrameInput::default());
        assert_eq!(pong.ball.dir.x, 1.0);
    }

    #[test]
    fn test_paddle_hit_bounces_and_speeds_up() {
        let mut pong = demo();
        pong.ball.base.pos = Vec2::new(330.0, 34.0);
        pong.ball.dir = Vec2::new(1.0, -1.0);
        pong.update(&FrameInput::default());

        assert_eq!(pong.ball.dir.y, 1.0);
        assert!((pong.ball.base.speed - 4.04).abs() < 0.0001);
        assert!(pong.ball.base.pos.y > 34.0);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut pong = demo();
        pong.ball.base.pos = Vec2::new(609.0, 200.0);
        pong.update(&FrameInput::default());
        assert_eq!(pong.ball.dir.x, -1.0);
        assert_eq!(pong.ball.base.pos.x, 605.0);

        // Overlapping the wall but already heading left
        pong.ball.base.pos.x = 609.0;
        pong.update(&FrameInput::default());
        assert_eq!(pong.ball.dir.x, -1.0);
    }

    #[test]
    fn test_bottom_paddle_bounces_ball_up() {
        let mut pong = demo();
        pong.ball.base.pos = Vec2::new(330.0, 414.0);
        pong.ball.dir = Vec2::new(1.0, 1.0);
        pong.update(&FrameInput::default());

        assert_eq!(pong.ball.dir.y, -1.0);
        assert!((pong.ball.base.speed - 4.04).abs() < 0.0001);
        assert!(pong.ball.base.pos.y < 414.0);
    }

    #[test]
    fn test_no_bounce_when_leaving_bottom_paddle() {
        let mut pong = demo();
        // Next hitbox overlaps player two, but the ball is heading up
        pong.ball.base.pos = Vec2::new(330.0, 430.0);
        pong.ball.dir = Vec2::new(1.0, -1.0);
        pong.update(&FrameInput::default());

        assert_eq!(pong.ball.dir.y, -1.0);
        assert_eq!(pong.ball.base.speed, 4.0);
    }

    #[test]
    fn test_no_bounce_when_leaving_paddle() {
        let mut pong = demo();
        // Overlapping player one but already heading down
        pong.ball.base.pos = Vec2::new(330.0, 20.0);
        pong.ball.dir = Vec2::new(1.0, 1.0);
        pong.update(&FrameInput::default());

        assert_eq!(pong.ball.dir.y, 1.0);
        assert_eq!(pong.ball.base.speed, 4.0);
    }

    #[test]
    fn test_ball_past_bottom_scores_for_player_one() {
        let mut pong = demo();
        pong.ball.base.pos = Vec2::new(100.0, 481.0);
        pong.update(&FrameInput::default());

        assert_eq!(pong.score, Score { one: 1, two: 0 });
        assert_eq!(pong.ball.base.pos, Vec2::new(320.0, 240.0));
        // Direction survives the serve
        assert_eq!(pong.ball.dir, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_ball_past_top_scores_for_player_two() {
        let mut pong = demo();
        pong.ball.base.pos = Vec2::new(100.0, -30.0);
        pong.ball.dir = Vec2::new(1.0, -1.0);
        pong.update(&FrameInput::default());

        assert_eq!(pong.score, Score { one: 0, two: 1 });
        assert_eq!(pong.ball.base.pos, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_reset_clears_score_and_speed() {
        let mut pong = demo();
        pong.score = Score { one: 3, two: 5 };
        pong.ball.base.speed = 9.0;
        pong.reset();
        assert_eq!(pong.score, Score::default());
        assert_eq!(pong.ball.base.speed, 4.0);
    }
}
