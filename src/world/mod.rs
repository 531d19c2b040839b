pub mod collision;
pub mod physics_world;

pub use collision::{Arbiter, CollisionCallback, CollisionHandler, CollisionType};
pub use physics_world::PhysicsWorld;
