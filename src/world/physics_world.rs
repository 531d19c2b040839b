use rapier2d::prelude::*;
use tracing::trace;

use crate::config::DemoConfig;
use crate::draw::{Drawable, Rgb};
use crate::world::collision::{Arbiter, CollisionHandler, CollisionType, EventQueue};

/// Debug draw colors for shapes that carry no color of their own.
const DYNAMIC_COLOR: Rgb = Rgb(52, 152, 219);
const STATIC_COLOR: Rgb = Rgb(149, 165, 166);
const SLEEPING_COLOR: Rgb = Rgb(114, 148, 168);
const JOINT_COLOR: Rgb = Rgb(142, 68, 173);

/// A simulation space: bodies, their colliders and the joints between them,
/// stepped by a fixed timestep.
pub struct PhysicsWorld {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    events: EventQueue,
    handlers: Vec<CollisionHandler>,
}

impl PhysicsWorld {
    /// Creates an empty world with no gravity and a 1/60 s timestep.
    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = 1.0 / 60.0;
        Self {
            gravity: vector![0.0, 0.0],
            integration_parameters,
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            events: EventQueue::default(),
            handlers: Vec::new(),
        }
    }

    /// Creates an empty world with gravity and timestep taken from `config`.
    pub fn from_config(config: &DemoConfig) -> Self {
        let mut world = Self::new();
        world.gravity = vector![config.gravity[0], config.gravity[1]];
        world.set_timestep(config.timestep);
        world
    }

    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }

    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }

    /// Inserts a body and attaches `colliders` to it. Returns the body handle.
    pub fn add_body(
        &mut self,
        body: impl Into<RigidBody>,
        colliders: impl IntoIterator<Item = Collider>,
    ) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        for collider in colliders {
            self.colliders
                .insert_with_parent(collider, handle, &mut self.bodies);
        }
        handle
    }

    /// Convenience method for a fixed body with no colliders, used as a joint anchor.
    pub fn add_static_body(&mut self, position: Vector<Real>) -> RigidBodyHandle {
        self.add_body(RigidBodyBuilder::fixed().translation(position), [])
    }

    /// Connects two bodies with a joint.
    pub fn add_joint(
        &mut self,
        body_a: RigidBodyHandle,
        body_b: RigidBodyHandle,
        joint: impl Into<GenericJoint>,
    ) -> ImpulseJointHandle {
        self.impulse_joints.insert(body_a, body_b, joint, true)
    }

    /// Removes a body together with its colliders and joints.
    /// Returns false if the handle was already gone.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vector<Real>> {
        self.bodies.get(handle).map(|body| *body.translation())
    }

    pub fn body_angle(&self, handle: RigidBodyHandle) -> Option<Real> {
        self.bodies.get(handle).map(|body| body.rotation().angle())
    }

    pub fn body_velocity(&self, handle: RigidBodyHandle) -> Option<Vector<Real>> {
        self.bodies.get(handle).map(|body| *body.linvel())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Returns the handler for the pair `(type_a, type_b)`, creating it if needed.
    /// A pair registered as `(a, b)` also fires for `(b, a)`.
    pub fn add_collision_handler(
        &mut self,
        type_a: CollisionType,
        type_b: CollisionType,
    ) -> &mut CollisionHandler {
        let index = match self
            .handlers
            .iter()
            .position(|handler| handler.matches(type_a, type_b))
        {
            Some(index) => index,
            None => {
                self.handlers.push(CollisionHandler::new(type_a, type_b));
                self.handlers.len() - 1
            }
        };
        &mut self.handlers[index]
    }

    /// Advances the simulation by one timestep and runs collision callbacks.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &self.events,
        );
        self.dispatch_collisions();
    }

    fn dispatch_collisions(&mut self) {
        for event in self.events.drain() {
            if self.handlers.is_empty() {
                continue;
            }
            let (Some(c1), Some(c2)) = (
                self.colliders.get(event.collider1()),
                self.colliders.get(event.collider2()),
            ) else {
                // One side was removed before the event could be reported.
                trace!(?event, "dropping event for removed collider");
                continue;
            };
            let arbiter = Arbiter {
                colliders: (event.collider1(), event.collider2()),
                bodies: (c1.parent(), c2.parent()),
                types: (CollisionType::of(c1), CollisionType::of(c2)),
            };
            for handler in self
                .handlers
                .iter_mut()
                .filter(|handler| handler.matches(arbiter.types.0, arbiter.types.1))
            {
                handler.dispatch(&arbiter, event.started());
            }
        }
    }

    /// Every collider as a draw primitive, colored by body state, followed by
    /// one line per joint.
    pub fn debug_shapes(&self) -> Vec<Drawable> {
        let mut shapes = Vec::with_capacity(self.colliders.len());
        for (_, collider) in self.colliders.iter() {
            let color = match collider.parent().and_then(|h| self.bodies.get(h)) {
                Some(body) if !body.is_dynamic() => STATIC_COLOR,
                Some(body) if body.is_sleeping() => SLEEPING_COLOR,
                Some(_) => DYNAMIC_COLOR,
                None => STATIC_COLOR,
            };
            let iso = collider.position();
            let shape = collider.shape();

            if let Some(ball) = shape.as_ball() {
                shapes.push(Drawable::Circle {
                    center: [iso.translation.vector.x, iso.translation.vector.y],
                    radius: ball.radius,
                    color,
                    angle: Some(iso.rotation.angle()),
                });
            } else if let Some(capsule) = shape.as_capsule() {
                let a = iso * capsule.segment.a;
                let b = iso * capsule.segment.b;
                shapes.push(Drawable::Line {
                    a: [a.x, a.y],
                    b: [b.x, b.y],
                    width: capsule.radius * 2.0,
                    color,
                });
            }
        }

        // Joints go on top, as a thin line between their two world anchors.
        for (_, joint) in self.impulse_joints.iter() {
            let (Some(body1), Some(body2)) =
                (self.bodies.get(joint.body1), self.bodies.get(joint.body2))
            else {
                continue;
            };
            let a = body1.position() * joint.data.local_anchor1();
            let b = body2.position() * joint.data.local_anchor2();
            shapes.push(Drawable::Line {
                a: [a.x, a.y],
                b: [b.x, b.y],
                width: 1.0,
                color: JOINT_COLOR,
            });
        }
        shapes
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
