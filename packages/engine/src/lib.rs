//! Galaxy Engine - 2D body physics sandbox in WASM
//!
//! Architecture:
//! - core/        - Vec3, console logging
//! - domain/      - Shapes and materials
//! - systems/     - Bodies, springs, forces, integration, boundaries,
//!                  collisions, energy, audio cues
//! - simulation/  - WorldCore orchestration, scenarios, frame loop and the
//!                  wasm-bindgen `World` facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger();
    log::info!("Galaxy engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec3;
pub use domain::materials::{Material, MaterialRegistry};
pub use domain::shapes::{Shape, ShapeKind};
pub use simulation::{Scenario, StepStats, World, WorldCore};
pub use systems::audio::{AudioCue, CueKind};
pub use systems::body::{Body, BodyParams, Spring};
pub use systems::step_config::StepConfig;

// Export shape codes for JS (second float of each body record)
#[wasm_bindgen]
pub fn shape_sphere() -> u8 { domain::shapes::SHAPE_SPHERE }
#[wasm_bindgen]
pub fn shape_cube() -> u8 { domain::shapes::SHAPE_CUBE }
#[wasm_bindgen]
pub fn shape_cylinder() -> u8 { domain::shapes::SHAPE_CYLINDER }
