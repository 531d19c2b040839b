//! Two balls with random velocities bouncing around a walled box, with a
//! handler that reports every time a type 0 and a type 1 shape separate.

use std::cell::Cell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::common::Material;
use crate::config::DemoConfig;
use crate::demos::{Demo, DemoStats};
use crate::draw::{Drawable, Rgb};
use crate::objects::{Ball, BallBuilder, Floor};
use crate::world::{CollisionType, PhysicsWorld};

const BALL_COUNT: u32 = 2;
const BALL_RADIUS: f32 = 30.0;
const BALL_COLOR: Rgb = Rgb(163, 201, 166);
const MAX_SPEED: f32 = 800.0;
const WALL_THICKNESS: f32 = 20.0;
const WALL_ELASTICITY: f32 = 0.8;
const WALL_COLOR: Rgb = Rgb(255, 223, 211);

pub struct CollidingBalls {
    config: DemoConfig,
    world: PhysicsWorld,
    balls: Vec<Ball>,
    walls: Vec<Floor>,
    separations: Rc<Cell<u64>>,
    ticks: u64,
}

impl CollidingBalls {
    pub fn new(config: DemoConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut world = PhysicsWorld::from_config(&config);

        let balls = (0..BALL_COUNT)
            .map(|i| {
                let x = rng.gen_range(0..=config.width as i32) as f32;
                let y = rng.gen_range(0..=config.height as i32) as f32;
                let vx = rng.gen_range(-MAX_SPEED..MAX_SPEED);
                let vy = rng.gen_range(-MAX_SPEED..MAX_SPEED);
                BallBuilder::new(x, y, BALL_RADIUS)
                    .velocity(vx, vy)
                    .density(1.0)
                    .material(Material::new(1.0, 0.0))
                    .collision_type(CollisionType(i))
                    .build(&mut world)
            })
            .collect();

        // Walls keep the default collision type 0.
        let walls = Floor::walls(
            &mut world,
            config.width,
            config.height,
            WALL_THICKNESS,
            Material::new(WALL_ELASTICITY, 0.0),
            WALL_COLOR,
        );

        let separations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&separations);
        world
            .add_collision_handler(CollisionType(0), CollisionType(1))
            .on_separate(move |_| {
                counter.set(counter.get() + 1);
                info!("collision detected between balls");
            });

        info!(title = %config.title, "built colliding balls scene");
        Self {
            config,
            world,
            balls,
            walls,
            separations,
            ticks: 0,
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn walls(&self) -> &[Floor] {
        &self.walls
    }

    pub fn separations(&self) -> u64 {
        self.separations.get()
    }
}

impl Demo for CollidingBalls {
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
        let balls = self
            .balls
            .iter()
            .filter_map(|ball| ball.drawable(&self.world, BALL_COLOR));
        let walls = self.walls.iter().map(Floor::drawable);
        balls.chain(walls).collect()
    }

    fn stats(&self) -> DemoStats {
        DemoStats {
            ticks: self.ticks,
            bodies: self.world.body_count(),
            separations: self.separations(),
            ..DemoStats::default()
        }
    }
}
