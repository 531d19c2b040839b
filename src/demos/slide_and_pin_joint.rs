//! Empty starting point for the joint scene: a world with gravity and
//! nothing in it, stepped at the loop rate.

use tracing::info;

use crate::config::DemoConfig;
use crate::demos::{Demo, DemoStats};
use crate::draw::Drawable;
use crate::world::PhysicsWorld;

pub struct SlideAndPinJoint {
    config: DemoConfig,
    world: PhysicsWorld,
    ticks: u64,
}

impl SlideAndPinJoint {
    pub fn new(config: DemoConfig) -> Self {
        let world = PhysicsWorld::from_config(&config);
        info!(title = %config.title, "built empty joint scene");
        Self {
            config,
            world,
            ticks: 0,
        }
    }
}

impl Demo for SlideAndPinJoint {
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
        Vec::new()
    }

    fn stats(&self) -> DemoStats {
        DemoStats {
            ticks: self.ticks,
            bodies: self.world.body_count(),
            ..DemoStats::default()
        }
    }
}
