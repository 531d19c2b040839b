//! Small rigid-body teaching scenes: balls, static segments and a pivoting
//! lever, simulated with `rapier2d` in window pixel coordinates (y down).

pub mod common;
pub mod config;
pub mod demos;
pub mod draw;
pub mod error;
pub mod objects;
pub mod spawner;
pub mod world;

// Re-export key types for easier use
pub use common::Material;
pub use config::DemoConfig;
pub use demos::{Demo, DemoKind, DemoStats};
pub use draw::{Drawable, Rgb};
pub use error::DemoError;
pub use objects::{Ball, BallBuilder, Floor, LeverConfig, RotatingLever};
pub use spawner::{BallSpawner, SpawnTimer, SpawnerConfig};
pub use world::{CollisionType, PhysicsWorld};

pub use rapier2d;
