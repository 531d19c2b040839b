//! The four scenes. Each one owns its world and decides what happens on a
//! tick and what gets drawn; the runners only call through [`Demo`].

use std::fmt;
use std::str::FromStr;

use crate::config::DemoConfig;
use crate::draw::Drawable;
use crate::error::DemoError;
use crate::world::PhysicsWorld;

pub mod bouncing_basketballs;
pub mod colliding_balls;
pub mod slide_and_joint;
pub mod slide_and_pin_joint;

pub use bouncing_basketballs::BouncingBasketballs;
pub use colliding_balls::CollidingBalls;
pub use slide_and_joint::SlideAndJoint;
pub use slide_and_pin_joint::SlideAndPinJoint;

/// A runnable scene.
pub trait Demo {
    fn config(&self) -> &DemoConfig;

    fn world(&self) -> &PhysicsWorld;

    /// One loop iteration: scene bookkeeping, then one physics step.
    fn tick(&mut self);

    /// What to draw this frame, back to front.
    fn drawables(&self) -> Vec<Drawable>;

    fn stats(&self) -> DemoStats;
}

/// Counters reported by the headless runner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoStats {
    pub ticks: u64,
    pub bodies: usize,
    pub spawned: u64,
    pub removed: u64,
    pub separations: u64,
}

impl fmt::Display for DemoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: {} bodies, {} spawned, {} removed, {} separations",
            self.ticks, self.bodies, self.spawned, self.removed, self.separations
        )
    }
}

/// Scene selector, parsed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    SlideAndJoint,
    SlideAndPinJoint,
    BouncingBasketballs,
    CollidingBalls,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::SlideAndJoint,
        DemoKind::SlideAndPinJoint,
        DemoKind::BouncingBasketballs,
        DemoKind::CollidingBalls,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::SlideAndJoint => "slide_and_joint",
            DemoKind::SlideAndPinJoint => "slide_and_pin_joint",
            DemoKind::BouncingBasketballs => "bouncing_basketballs",
            DemoKind::CollidingBalls => "colliding_balls",
        }
    }

    pub fn default_config(self) -> DemoConfig {
        match self {
            DemoKind::SlideAndJoint => DemoConfig::slide_and_joint(),
            DemoKind::SlideAndPinJoint => DemoConfig::slide_and_pin_joint(),
            DemoKind::BouncingBasketballs => DemoConfig::bouncing_basketballs(),
            DemoKind::CollidingBalls => DemoConfig::colliding_balls(),
        }
    }

    /// Builds the scene after validating `config`.
    pub fn build(self, config: DemoConfig) -> Result<Box<dyn Demo>, DemoError> {
        config.validate()?;
        let demo: Box<dyn Demo> = match self {
            DemoKind::SlideAndJoint => Box::new(SlideAndJoint::new(config)),
            DemoKind::SlideAndPinJoint => Box::new(SlideAndPinJoint::new(config)),
            DemoKind::BouncingBasketballs => Box::new(BouncingBasketballs::new(config)),
            DemoKind::CollidingBalls => Box::new(CollidingBalls::new(config)),
        };
        Ok(demo)
    }
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the numbered directory names too, e.g. "game-3-colliding-balls".
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let normalized = normalized
            .strip_prefix("game_")
            .and_then(|rest| rest.split_once('_'))
            .map(|(_, name)| name.to_string())
            .unwrap_or(normalized);

        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| DemoError::UnknownDemo(s.to_string()))
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.name().parse::<DemoKind>().unwrap(), kind);
        }
        assert_eq!(
            "game-3-colliding-balls".parse::<DemoKind>().unwrap(),
            DemoKind::CollidingBalls
        );
        assert_eq!(
            "Game-1-Slide-And-Pin-Joint".parse::<DemoKind>().unwrap(),
            DemoKind::SlideAndPinJoint
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "ragdoll".parse::<DemoKind>().unwrap_err();
        assert!(matches!(err, DemoError::UnknownDemo(name) if name == "ragdoll"));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut config = DemoKind::CollidingBalls.default_config();
        config.width = 0.0;
        assert!(matches!(
            DemoKind::CollidingBalls.build(config),
            Err(DemoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_stats_display() {
        let stats = DemoStats {
            ticks: 50,
            bodies: 4,
            spawned: 5,
            removed: 1,
            separations: 0,
        };
        assert_eq!(
            stats.to_string(),
            "tick 50: 4 bodies, 5 spawned, 1 removed, 0 separations"
        );
    }
}
