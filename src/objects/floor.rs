use rapier2d::prelude::*;

use crate::common::Material;
use crate::draw::{Drawable, Rgb};
use crate::world::PhysicsWorld;

/// A static line segment with rounded ends, used for floors and walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub body: RigidBodyHandle,
    pub a: Point<Real>,
    pub b: Point<Real>,
    /// Segment radius. The shape extends this far on either side of `a`–`b`.
    pub thickness: f32,
    pub color: Rgb,
}

impl Floor {
    /// Adds a fixed body with one segment from `a` to `b` to `world`.
    pub fn new(
        world: &mut PhysicsWorld,
        a: Point<Real>,
        b: Point<Real>,
        thickness: f32,
        material: Material,
        color: Rgb,
    ) -> Self {
        let collider = material
            .apply(ColliderBuilder::new(SharedShape::capsule(a, b, thickness)))
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        let body = world.add_body(RigidBodyBuilder::fixed(), [collider]);
        Self {
            body,
            a,
            b,
            thickness,
            color,
        }
    }

    /// Four walls running along the edges of a `width` x `height` window.
    pub fn walls(
        world: &mut PhysicsWorld,
        width: f32,
        height: f32,
        thickness: f32,
        material: Material,
        color: Rgb,
    ) -> Vec<Floor> {
        let corners = [
            (point![0.0, height], point![width, height]),
            (point![0.0, 0.0], point![width, 0.0]),
            (point![0.0, 0.0], point![0.0, height]),
            (point![width, 0.0], point![width, height]),
        ];
        corners
            .into_iter()
            .map(|(a, b)| Floor::new(world, a, b, thickness, material, color))
            .collect()
    }

    /// Drawn as a line as wide as the thickness value, not the full collision width.
    pub fn drawable(&self) -> Drawable {
        Drawable::Line {
            a: [self.a.x, self.a.y],
            b: [self.b.x, self.b.y],
            width: self.thickness,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::BallBuilder;

    #[test]
    fn test_floor_is_static() {
        let mut world = PhysicsWorld::new();
        world.gravity = vector![0.0, 1000.0];
        let floor = Floor::new(
            &mut world,
            point![0.0, 500.0],
            point![800.0, 700.0],
            5.0,
            Material::new(1.0, 0.0),
            Rgb::BLACK,
        );
        for _ in 0..30 {
            world.step();
        }
        assert!(world.bodies[floor.body].is_fixed());
        assert_eq!(world.body_position(floor.body), Some(vector![0.0, 0.0]));
    }

    #[test]
    fn test_walls_enclose_window() {
        let mut world = PhysicsWorld::new();
        let walls = Floor::walls(&mut world, 500.0, 500.0, 20.0, Material::new(0.8, 0.0), Rgb::BLACK);
        assert_eq!(walls.len(), 4);
        assert_eq!(world.collider_count(), 4);
        assert_eq!(walls[0].a, point![0.0, 500.0]);
        assert_eq!(walls[3].b, point![500.0, 500.0]);
    }

    #[test]
    fn test_ball_rests_on_floor() {
        let mut world = PhysicsWorld::new();
        world.gravity = vector![0.0, 900.0];
        Floor::new(
            &mut world,
            point![0.0, 300.0],
            point![600.0, 300.0],
            5.0,
            Material::new(0.0, 1.0),
            Rgb::BLACK,
        );
        let ball = BallBuilder::new(300.0, 200.0, 10.0)
            .material(Material::new(0.0, 1.0))
            .build(&mut world);
        for _ in 0..180 {
            world.step();
        }
        let pos = ball.position(&world).unwrap();
        // Resting height: floor line minus segment radius minus ball radius.
        assert!((pos.y - 285.0).abs() < 1.0, "ball at {}", pos.y);
    }

    #[test]
    fn test_drawable_uses_thickness_as_width() {
        let mut world = PhysicsWorld::new();
        let floor = Floor::new(
            &mut world,
            point![1.0, 2.0],
            point![3.0, 4.0],
            5.0,
            Material::default(),
            Rgb(1, 2, 3),
        );
        assert_eq!(
            floor.drawable(),
            Drawable::Line {
                a: [1.0, 2.0],
                b: [3.0, 4.0],
                width: 5.0,
                color: Rgb(1, 2, 3),
            }
        );
    }
}
