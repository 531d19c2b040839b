pub mod ball;
pub mod floor;
pub mod lever;

pub use ball::{Ball, BallBuilder, BallMass};
pub use floor::Floor;
pub use lever::{LeverConfig, RotatingLever};
