pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod types;

// Re-export the camera surface most callers need
pub use camera::{Camera, LookMode, MoveDirection, Pose};
pub use config::CameraConfig;
pub use types::CameraUniform;
