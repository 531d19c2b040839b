//! Backend-agnostic draw list produced by the scenes.
//!
//! Coordinates are window pixels with y growing downward. The window runner
//! turns each [`Drawable`] into a mesh; nothing here knows about the renderer.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    /// Rotation marker drawn over debug-drawn balls.
    pub const MARKER: Rgb = Rgb(44, 62, 80);

    /// Returns the color as floats in `[0, 1]`.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// One primitive to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// A filled circle. When `angle` is set, a radius line is drawn at that
    /// angle so rotation stays visible.
    Circle {
        center: [f32; 2],
        radius: f32,
        color: Rgb,
        angle: Option<f32>,
    },
    /// A straight line of the given width.
    Line {
        a: [f32; 2],
        b: [f32; 2],
        width: f32,
        color: Rgb,
    },
}

impl Drawable {
    pub fn color(&self) -> Rgb {
        match self {
            Drawable::Circle { color, .. } | Drawable::Line { color, .. } => *color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_unit() {
        assert_eq!(Rgb::WHITE.to_unit(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::BLACK.to_unit(), [0.0, 0.0, 0.0]);
        let [r, g, b] = Rgb(255, 0, 51).to_unit();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_serializes_as_array() {
        let json = serde_json::to_string(&Rgb(163, 201, 166)).unwrap();
        assert_eq!(json, "[163,201,166]");
        let back: Rgb = serde_json::from_str("[255,223,211]").unwrap();
        assert_eq!(back, Rgb(255, 223, 211));
    }
}
