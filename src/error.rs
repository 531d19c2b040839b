//! Error types for loading and building demo scenes.

use std::path::PathBuf;

/// Errors that can occur while configuring or constructing a scene.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown demo '{0}' (available: slide_and_joint, slide_and_pin_joint, bouncing_basketballs, colliding_balls)")]
    UnknownDemo(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
