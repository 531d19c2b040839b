//! Balls rain onto an L-shaped lever that pivots on a pin joint and is held
//! back by a slide joint.

use tracing::info;

use crate::config::DemoConfig;
use crate::demos::{Demo, DemoStats};
use crate::draw::Drawable;
use crate::objects::{LeverConfig, RotatingLever};
use crate::spawner::{BallSpawner, SpawnerConfig};
use crate::world::PhysicsWorld;

pub struct SlideAndJoint {
    config: DemoConfig,
    world: PhysicsWorld,
    lever: RotatingLever,
    spawner: BallSpawner,
    ticks: u64,
}

impl SlideAndJoint {
    pub fn new(config: DemoConfig) -> Self {
        let mut world = PhysicsWorld::from_config(&config);
        let lever = RotatingLever::new(&mut world, &LeverConfig::default());
        let spawner = BallSpawner::new(SpawnerConfig::default(), config.seed);
        info!(title = %config.title, "built slide and joint scene");
        Self {
            config,
            world,
            lever,
            spawner,
            ticks: 0,
        }
    }

    pub fn lever(&self) -> &RotatingLever {
        &self.lever
    }

    pub fn spawner(&self) -> &BallSpawner {
        &self.spawner
    }
}

impl Demo for SlideAndJoint {
    fn config(&self) -> &DemoConfig {
        &self.config
    }

    fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    fn tick(&mut self) {
        self.spawner.tick(&mut self.world);
        self.spawner.cull(&mut self.world);
        self.world.step();
        self.ticks += 1;
    }

    fn drawables(&self) -> Vec<Drawable> {
        self.world.debug_shapes()
    }

    fn stats(&self) -> DemoStats {
        DemoStats {
            ticks: self.ticks,
            bodies: self.world.body_count(),
            spawned: self.spawner.spawned(),
            removed: self.spawner.removed(),
            separations: 0,
        }
    }
}
