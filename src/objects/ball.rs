use rapier2d::prelude::*;

use crate::common::Material;
use crate::draw::{Drawable, Rgb};
use crate::world::{CollisionType, PhysicsWorld};

/// How a ball gets its mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallMass {
    /// Total mass; inertia follows from the radius.
    Mass(f32),
    /// Mass per unit area.
    Density(f32),
}

/// Builder for a dynamic body carrying one circle shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BallBuilder {
    pub position: Vector<Real>,
    pub radius: f32,
    pub velocity: Vector<Real>,
    pub mass: BallMass,
    pub material: Material,
    pub collision_type: CollisionType,
}

impl BallBuilder {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            position: vector![x, y],
            radius,
            velocity: vector![0.0, 0.0],
            mass: BallMass::Density(1.0),
            material: Material::default(),
            collision_type: CollisionType::default(),
        }
    }

    pub fn velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = vector![vx, vy];
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = BallMass::Mass(mass);
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.mass = BallMass::Density(density);
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn collision_type(mut self, collision_type: CollisionType) -> Self {
        self.collision_type = collision_type;
        self
    }

    /// Adds the body and its shape to `world`.
    pub fn build(self, world: &mut PhysicsWorld) -> Ball {
        let body = RigidBodyBuilder::dynamic()
            .translation(self.position)
            .linvel(self.velocity);

        let collider = ColliderBuilder::ball(self.radius)
            .user_data(self.collision_type.to_user_data())
            .active_events(ActiveEvents::COLLISION_EVENTS);
        let collider = match self.mass {
            BallMass::Mass(mass) => collider.mass(mass),
            BallMass::Density(density) => collider.density(density),
        };
        let collider = self.material.apply(collider).build();

        let handle = world.add_body(body, [collider]);
        Ball {
            body: handle,
            radius: self.radius,
        }
    }
}

/// A ball that lives in a [`PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: RigidBodyHandle,
    pub radius: f32,
}

impl Ball {
    /// Current center, or `None` once the body has been removed.
    pub fn position(&self, world: &PhysicsWorld) -> Option<Vector<Real>> {
        world.body_position(self.body)
    }

    pub fn drawable(&self, world: &PhysicsWorld, color: Rgb) -> Option<Drawable> {
        let pos = self.position(world)?;
        Some(Drawable::Circle {
            center: [pos.x, pos.y],
            radius: self.radius,
            color,
            angle: None,
        })
    }
}
