use rapier2d::prelude::*;

use crate::common::Material;
use crate::world::PhysicsWorld;

/// Geometry and joint parameters of the rotating L.
#[derive(Debug, Clone, PartialEq)]
pub struct LeverConfig {
    /// Body position and pivot point.
    pub position: Vector<Real>,
    /// Long arm, in body coordinates.
    pub arm: (Point<Real>, Point<Real>),
    /// Short upright at the far end of the arm, in body coordinates.
    pub upright: (Point<Real>, Point<Real>),
    pub thickness: f32,
    pub arm_mass: f32,
    pub upright_mass: f32,
    pub material: Material,
    /// Where the limit joint attaches to the lever, in body coordinates.
    pub limit_anchor: Point<Real>,
    /// Static end of the limit joint, in world coordinates.
    pub limit_position: Vector<Real>,
    /// Longest allowed distance between the two limit anchors.
    pub limit_length: f32,
}

impl Default for LeverConfig {
    fn default() -> Self {
        Self {
            position: vector![300.0, 300.0],
            arm: (point![-150.0, 0.0], point![250.0, 0.0]),
            upright: (point![-150.0, 0.0], point![-150.0, -50.0]),
            thickness: 5.0,
            arm_mass: 8.0,
            upright_mass: 1.0,
            material: Material::new(0.0, 1.0),
            limit_anchor: point![-100.0, 0.0],
            limit_position: vector![200.0, 300.0],
            limit_length: 25.0,
        }
    }
}

/// An L-shaped body pinned at its center, free to tip until the slide
/// joint between its limit anchor and a fixed point goes taut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingLever {
    pub body: RigidBodyHandle,
    pub pivot: RigidBodyHandle,
    pub limit: RigidBodyHandle,
    pub pin_joint: ImpulseJointHandle,
    pub slide_joint: ImpulseJointHandle,
}

impl RotatingLever {
    pub fn new(world: &mut PhysicsWorld, config: &LeverConfig) -> Self {
        let segment = |(a, b): (Point<Real>, Point<Real>), mass: f32| {
            config
                .material
                .apply(ColliderBuilder::new(SharedShape::capsule(
                    a,
                    b,
                    config.thickness,
                )))
                .mass(mass)
                .build()
        };
        let body = world.add_body(
            RigidBodyBuilder::dynamic().translation(config.position),
            [
                segment(config.arm, config.arm_mass),
                segment(config.upright, config.upright_mass),
            ],
        );

        let pivot = world.add_static_body(config.position);
        let limit = world.add_static_body(config.limit_position);

        let pin_joint = world.add_joint(
            body,
            pivot,
            RevoluteJointBuilder::new()
                .local_anchor1(point![0.0, 0.0])
                .local_anchor2(point![0.0, 0.0]),
        );
        let slide_joint = world.add_joint(
            body,
            limit,
            RopeJointBuilder::new(config.limit_length)
                .local_anchor1(config.limit_anchor)
                .local_anchor2(point![0.0, 0.0]),
        );

        Self {
            body,
            pivot,
            limit,
            pin_joint,
            slide_joint,
        }
    }

    pub fn angle(&self, world: &PhysicsWorld) -> Option<Real> {
        world.body_angle(self.body)
    }

    /// World position of the lever's end of the slide joint.
    pub fn limit_anchor_position(&self, world: &PhysicsWorld, config: &LeverConfig) -> Option<Point<Real>> {
        world
            .bodies
            .get(self.body)
            .map(|body| body.position() * config.limit_anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::BallBuilder;

    #[test]
    fn test_lever_bodies_and_joints() {
        let mut world = PhysicsWorld::new();
        let lever = RotatingLever::new(&mut world, &LeverConfig::default());
        assert_eq!(world.body_count(), 3);
        assert_eq!(world.collider_count(), 2);
        assert_eq!(world.impulse_joints.len(), 2);
        assert!(world.bodies[lever.body].is_dynamic());
        assert!(world.bodies[lever.pivot].is_fixed());
        assert!(world.bodies[lever.limit].is_fixed());
    }

    #[test]
    fn test_lever_mass_from_segments() {
        let mut world = PhysicsWorld::new();
        let lever = RotatingLever::new(&mut world, &LeverConfig::default());
        world.step();
        let mass = world.bodies[lever.body].mass();
        assert!((mass - 9.0).abs() < 1e-3, "mass was {}", mass);
    }

    #[test]
    fn test_lever_tips_but_stays_pinned_and_limited() {
        let config = LeverConfig::default();
        let mut world = PhysicsWorld::new();
        world.gravity = vector![0.0, 900.0];
        world.set_timestep(1.0 / 50.0);
        let lever = RotatingLever::new(&mut world, &config);

        // A heavy ball landing on the long right arm tips it clockwise.
        BallBuilder::new(500.0, 200.0, 25.0)
            .mass(30.0)
            .material(Material::new(0.0, 1.0))
            .build(&mut world);

        for _ in 0..150 {
            world.step();
        }

        let pos = world.body_position(lever.body).unwrap();
        assert!((pos - config.position).norm() < 2.0, "pivot drifted to {:?}", pos);

        let anchor = lever.limit_anchor_position(&world, &config).unwrap();
        let stretch = (anchor.coords - config.limit_position).norm();
        assert!(stretch <= config.limit_length + 3.0, "limit stretched to {}", stretch);

        let angle = lever.angle(&world).unwrap();
        assert!(angle > 0.05, "lever did not tip, angle {}", angle);
    }
}
