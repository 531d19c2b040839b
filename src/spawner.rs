//! Periodic ball spawning and removal of balls that fell off screen.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::common::Material;
use crate::objects::{Ball, BallBuilder};
use crate::world::PhysicsWorld;

/// Counts loop ticks down and fires every `interval` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    interval: u32,
    remaining: u32,
}

impl SpawnTimer {
    /// An interval of 0 is treated as 1.
    pub fn new(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            remaining: interval,
        }
    }

    /// Advances one tick. Returns true when a spawn is due.
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Ticks left until the next spawn.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// True once a body has dropped strictly below `threshold` (y grows downward).
pub fn fallen_below(y: f32, threshold: f32) -> bool {
    y > threshold
}

/// Spawn and cull parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    pub interval: u32,
    /// Spawn x is drawn uniformly from this range (whole pixels).
    pub x_range: RangeInclusive<i32>,
    pub spawn_y: f32,
    /// Balls whose y exceeds this are removed.
    pub cull_y: f32,
    pub radius: f32,
    pub mass: f32,
    pub material: Material,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval: 10,
            x_range: 120..=350,
            spawn_y: 50.0,
            cull_y: 550.0,
            radius: 25.0,
            mass: 3.0,
            material: Material::new(0.0, 1.0),
        }
    }
}

/// Drops a ball every few ticks and forgets the ones that fell out of view.
#[derive(Debug)]
pub struct BallSpawner {
    config: SpawnerConfig,
    timer: SpawnTimer,
    rng: StdRng,
    balls: Vec<Ball>,
    spawned: u64,
    removed: u64,
}

impl BallSpawner {
    pub fn new(config: SpawnerConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            timer: SpawnTimer::new(config.interval),
            config,
            rng,
            balls: Vec::new(),
            spawned: 0,
            removed: 0,
        }
    }

    /// Advances the timer and spawns a ball if it fired.
    pub fn tick(&mut self, world: &mut PhysicsWorld) -> Option<Ball> {
        if !self.timer.tick() {
            return None;
        }
        Some(self.spawn(world))
    }

    /// Adds one ball at a random x along the spawn line.
    pub fn spawn(&mut self, world: &mut PhysicsWorld) -> Ball {
        let x = self.rng.gen_range(self.config.x_range.clone());
        let ball = BallBuilder::new(x as f32, self.config.spawn_y, self.config.radius)
            .mass(self.config.mass)
            .material(self.config.material)
            .build(world);
        self.balls.push(ball);
        self.spawned += 1;
        debug!(x, live = self.balls.len(), "spawned ball");
        ball
    }

    /// Removes every tracked ball below the cull line from the world.
    /// Returns how many were removed.
    pub fn cull(&mut self, world: &mut PhysicsWorld) -> usize {
        let cull_y = self.config.cull_y;
        let before = self.balls.len();
        self.balls.retain(|ball| {
            let fallen = match ball.position(world) {
                Some(pos) => fallen_below(pos.y, cull_y),
                // Removed elsewhere; stop tracking it.
                None => true,
            };
            if fallen {
                world.remove_body(ball.body);
            }
            !fallen
        });
        let removed = before - self.balls.len();
        if removed > 0 {
            self.removed += removed as u64;
            debug!(removed, live = self.balls.len(), "culled balls");
        }
        removed
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn removed(&self) -> u64 {
        self.removed
    }

    pub fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }
}
