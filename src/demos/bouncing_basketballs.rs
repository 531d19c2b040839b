//! A single elastic ball bouncing down a sloped static segment.

use rapier2d::prelude::*;
use tracing::info;

use crate::common::Material;
use crate::config::DemoConfig;
use crate::demos::{Demo, DemoStats};
use crate::draw::{Drawable, Rgb};
use crate::objects::{Ball, BallBuilder, Floor};
use crate::world::PhysicsWorld;

const BALL_RADIUS: f32 = 10.0;
const BALL_COLOR: Rgb = Rgb::RED;
const SEGMENT_THICKNESS: f32 = 5.0;
const SEGMENT_COLOR: Rgb = Rgb::BLACK;

pub struct BouncingBasketballs {
    config: DemoConfig,
    world: PhysicsWorld,
    ball: Ball,
    segment: Floor,
    ticks: u64,
}

impl BouncingBasketballs {
    pub fn new(config: DemoConfig) -> Self {
        let mut world = PhysicsWorld::from_config(&config);

        // Both shapes need elasticity, otherwise the ball rolls off instead of bouncing.
        let ball = BallBuilder::new(400.0, 400.0, BALL_RADIUS)
            .density(1.0)
            .material(Material::new(1.0, 0.0))
            .build(&mut world);
        let segment = Floor::new(
            &mut world,
            point![0.0, 500.0],
            point![800.0, 700.0],
            SEGMENT_THICKNESS,
            Material::new(1.0, 0.0),
            SEGMENT_COLOR,
        );

        info!(title = %config.title, "built bouncing ball scene");
        Self {
            config,
            world,
            ball,
            segment,
            ticks: 0,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }
}

impl Demo for BouncingBasketballs {
    fn config(&self) -> &DemoConfig {
        &self.config
    }

    fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    fn tick(&mut self) {
        self.world.step();
        self.ticks += 1;
    }

    fn drawables(&self) -> Vec<Drawable> {
        let mut shapes = Vec::with_capacity(2);
        shapes.extend(self.ball.drawable(&self.world, BALL_COLOR));
        shapes.push(self.segment.drawable());
        shapes
    }

    fn stats(&self) -> DemoStats {
        DemoStats {
            ticks: self.ticks,
            bodies: self.world.body_count(),
            ..DemoStats::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_bounces_off_segment() {
        let mut demo = BouncingBasketballs::new(DemoConfig::bouncing_basketballs());
        let handle = demo.ball().body;

        let mut bounced = false;
        for _ in 0..120 {
            demo.tick();
            let vel = demo.world().body_velocity(handle).unwrap();
            if vel.y < 0.0 {
                bounced = true;
                break;
            }
        }
        assert!(bounced, "ball never moved back up");
    }

    #[test]
    fn test_ball_drifts_down_the_slope() {
        let mut demo = BouncingBasketballs::new(DemoConfig::bouncing_basketballs());
        for _ in 0..120 {
            demo.tick();
        }
        let pos = demo.ball().position(demo.world()).unwrap();
        // The segment falls to the right, so bounces push the ball rightward.
        assert!(pos.x > 400.0, "ball at {:?}", pos);
    }

    #[test]
    fn test_drawables() {
        let demo = BouncingBasketballs::new(DemoConfig::bouncing_basketballs());
        let shapes = demo.drawables();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].color(), BALL_COLOR);
        assert_eq!(
            shapes[1],
            Drawable::Line {
                a: [0.0, 500.0],
                b: [800.0, 700.0],
                width: 5.0,
                color: SEGMENT_COLOR,
            }
        );
    }
}
