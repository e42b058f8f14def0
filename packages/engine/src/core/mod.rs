//! Core building blocks shared by every system

pub mod vec3;

#[path = "utils/logging.rs"]
pub mod logging;

pub use vec3::Vec3;
