//! Defines surface properties of a collider.

use rapier2d::prelude::*;

/// Elasticity and friction of a shape.
///
/// When two shapes touch, the contact uses the product of both shapes'
/// coefficients. A shape left at the default bounces and grips nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Coefficient of restitution. 0 = no bounce, 1 = perfectly elastic.
    /// Values above 1 add energy and are allowed.
    pub elasticity: f32,
    /// Coulomb friction coefficient. 0 = frictionless.
    pub friction: f32,
}

impl Material {
    /// Creates a new material with the given elasticity and friction.
    pub fn new(elasticity: f32, friction: f32) -> Self {
        Material {
            elasticity: elasticity.max(0.0),
            friction: friction.max(0.0),
        }
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity.max(0.0);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(0.0);
        self
    }

    /// Sets restitution and friction on a collider builder, combining by product.
    pub fn apply(self, builder: ColliderBuilder) -> ColliderBuilder {
        builder
            .restitution(self.elasticity)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .friction(self.friction)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            elasticity: 0.0,
            friction: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inert() {
        let material = Material::default();
        assert_eq!(material.elasticity, 0.0);
        assert_eq!(material.friction, 0.0);
    }

    #[test]
    fn test_negative_values_clamped() {
        let material = Material::new(-1.0, -0.5);
        assert_eq!(material, Material::default());
        assert_eq!(Material::default().with_friction(-2.0).friction, 0.0);
    }

    #[test]
    fn test_apply_sets_collider_coefficients() {
        let collider = Material::new(0.8, 1.0)
            .apply(ColliderBuilder::ball(5.0))
            .build();
        assert_eq!(collider.restitution(), 0.8);
        assert_eq!(collider.friction(), 1.0);
        assert_eq!(
            collider.restitution_combine_rule(),
            CoefficientCombineRule::Multiply
        );
    }
}
