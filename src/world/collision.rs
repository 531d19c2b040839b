//! Collision types and begin/separate callbacks.
//!
//! Every collider carries a small integer collision type in its user data
//! (default 0). A [`CollisionHandler`] registered for a pair of types is
//! called when two colliders of those types start or stop touching.

use std::sync::Mutex;

use rapier2d::prelude::*;

/// Integer tag used to select collision handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionType(pub u32);

impl CollisionType {
    /// Reads the type stored in a collider's user data.
    pub fn of(collider: &Collider) -> Self {
        CollisionType(collider.user_data as u32)
    }

    pub(crate) fn to_user_data(self) -> u128 {
        self.0 as u128
    }
}

/// The pair of colliders passed to a handler callback, ordered to match the
/// types the handler was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arbiter {
    pub colliders: (ColliderHandle, ColliderHandle),
    pub bodies: (Option<RigidBodyHandle>, Option<RigidBodyHandle>),
    pub types: (CollisionType, CollisionType),
}

pub type CollisionCallback = Box<dyn FnMut(&Arbiter)>;

/// Callbacks for one pair of collision types.
pub struct CollisionHandler {
    type_a: CollisionType,
    type_b: CollisionType,
    begin: Option<CollisionCallback>,
    separate: Option<CollisionCallback>,
}

impl CollisionHandler {
    pub(crate) fn new(type_a: CollisionType, type_b: CollisionType) -> Self {
        Self {
            type_a,
            type_b,
            begin: None,
            separate: None,
        }
    }

    /// Called on the first step two shapes touch.
    pub fn on_begin(&mut self, callback: impl FnMut(&Arbiter) + 'static) -> &mut Self {
        self.begin = Some(Box::new(callback));
        self
    }

    /// Called on the first step two shapes stop touching.
    pub fn on_separate(&mut self, callback: impl FnMut(&Arbiter) + 'static) -> &mut Self {
        self.separate = Some(Box::new(callback));
        self
    }

    pub fn types(&self) -> (CollisionType, CollisionType) {
        (self.type_a, self.type_b)
    }

    pub(crate) fn matches(&self, a: CollisionType, b: CollisionType) -> bool {
        (self.type_a == a && self.type_b == b) || (self.type_a == b && self.type_b == a)
    }

    /// Runs the matching callback. Returns true if one was registered.
    pub(crate) fn dispatch(&mut self, arbiter: &Arbiter, started: bool) -> bool {
        let arbiter = self.orient(arbiter);
        let callback = if started {
            self.begin.as_mut()
        } else {
            self.separate.as_mut()
        };
        match callback {
            Some(callback) => {
                callback(&arbiter);
                true
            }
            None => false,
        }
    }

    fn orient(&self, arbiter: &Arbiter) -> Arbiter {
        if arbiter.types.0 == self.type_a {
            *arbiter
        } else {
            Arbiter {
                colliders: (arbiter.colliders.1, arbiter.colliders.0),
                bodies: (arbiter.bodies.1, arbiter.bodies.0),
                types: (arbiter.types.1, arbiter.types.0),
            }
        }
    }
}

/// Collects collision events raised by the pipeline during a step.
#[derive(Default)]
pub(crate) struct EventQueue {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl EventQueue {
    pub(crate) fn drain(&self) -> Vec<CollisionEvent> {
        let mut events = match self.collisions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }
}

impl EventHandler for EventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        let mut events = match self.collisions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn arbiter(types: (u32, u32)) -> Arbiter {
        Arbiter {
            colliders: (
                ColliderHandle::from_raw_parts(1, 0),
                ColliderHandle::from_raw_parts(2, 0),
            ),
            bodies: (None, None),
            types: (CollisionType(types.0), CollisionType(types.1)),
        }
    }

    #[test]
    fn test_handler_matches_either_order() {
        let handler = CollisionHandler::new(CollisionType(0), CollisionType(1));
        assert!(handler.matches(CollisionType(0), CollisionType(1)));
        assert!(handler.matches(CollisionType(1), CollisionType(0)));
        assert!(!handler.matches(CollisionType(0), CollisionType(0)));
        assert!(!handler.matches(CollisionType(1), CollisionType(2)));
    }

    #[test]
    fn test_dispatch_orients_arbiter_to_handler_types() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut handler = CollisionHandler::new(CollisionType(0), CollisionType(1));
        let sink = Rc::clone(&seen);
        handler.on_separate(move |arb| sink.borrow_mut().push(*arb));

        assert!(handler.dispatch(&arbiter((1, 0)), false));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].types, (CollisionType(0), CollisionType(1)));
        assert_eq!(seen[0].colliders.0, ColliderHandle::from_raw_parts(2, 0));
    }

    #[test]
    fn test_dispatch_without_callback() {
        let mut handler = CollisionHandler::new(CollisionType(0), CollisionType(1));
        handler.on_separate(|_| {});
        assert!(!handler.dispatch(&arbiter((0, 1)), true));
        assert!(handler.dispatch(&arbiter((0, 1)), false));
    }

    #[test]
    fn test_collision_type_user_data_round_trip() {
        let collider = ColliderBuilder::ball(1.0)
            .user_data(CollisionType(3).to_user_data())
            .build();
        assert_eq!(CollisionType::of(&collider), CollisionType(3));
        assert_eq!(CollisionType::of(&ColliderBuilder::ball(1.0).build()), CollisionType(0));
    }
}
