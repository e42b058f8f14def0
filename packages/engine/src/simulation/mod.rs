//! World - 2D body simulation
//!
//! `WorldCore` owns the body arena, the springs and the settings store, and
//! only orchestrates. Each concern lives in its own helper module:
//! settings, commands, body commands, the step, render extraction and the
//! scenario presets. `World` (facade.rs) is the wasm-bindgen wrapper.

use std::sync::Arc;

use crate::domain::materials::MaterialRegistry;
use crate::systems::audio::AudioCue;
use crate::systems::body::{Body, BodyParams, Spring};
use crate::systems::energy::{measure_energy, EnergyTotals};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "bodies/bodies.rs"]
mod bodies;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "scenarios/scenarios.rs"]
mod scenarios;
#[path = "driver/frame_loop.rs"]
pub mod frame_loop;
mod facade;

pub use bodies::BodyInfo;
pub use facade::World;
pub use frame_loop::{Clock, FpsCounter, FrameLoop, FrameReport, FrameTimer, ManualClock, PerfClock, ShutdownSignal};
pub use perf_stats::StepStats;
pub use render_extract::{BODY_STRIDE, TRAIL_STRIDE};
pub use scenarios::Scenario;
pub use settings::{Bounds, CreateSettings, Parameter, PhysicsSettings, TIME_STEP};

use perf_timer::PerfTimer;

/// Packed buffers read by JS through raw pointers
pub(crate) struct RenderBuffers {
    pub(crate) bodies: Vec<f32>,
    pub(crate) trails: Vec<f32>,
}

/// The simulation world
pub struct WorldCore {
    materials: Arc<MaterialRegistry>,
    bodies: Vec<Body>,
    springs: Vec<Spring>,

    // Settings
    settings: PhysicsSettings,
    bounds: Bounds,
    create: CreateSettings,

    // State
    running: bool,
    next_id: u32,
    frame: u64,
    cues: Vec<AudioCue>,
    stats: StepStats,

    // Perf metrics
    perf_enabled: bool,

    render: RenderBuffers,
}

impl WorldCore {
    /// Create an empty, paused world with the built-in materials
    pub fn new() -> Self {
        init::create_world_core(MaterialRegistry::builtin())
    }

    pub fn with_materials(materials: MaterialRegistry) -> Self {
        init::create_world_core(materials)
    }

    /// Replace the material table. Existing bodies keep their values.
    pub fn load_material_bundle(&mut self, json: &str) -> Result<(), String> {
        init::load_material_bundle(self, json)
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn materials_json(&self) -> String {
        self.materials.manifest_json()
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn is_running(&self) -> bool { self.running }

    // === SETTINGS ===

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Set a named parameter (`gravity`, `friction`, `restitution`,
    /// `airResistance`, `speed`)
    pub fn set_parameter(&mut self, name: &str, value: f32) -> Result<(), String> {
        settings::set_parameter(self, name, value)
    }

    pub fn get_parameter(&self, name: &str) -> Result<f32, String> {
        settings::get_parameter(self, name)
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), String> {
        self.settings.set(Parameter::Gravity, gravity)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), String> {
        self.settings.set(Parameter::Friction, friction)
    }

    pub fn set_restitution(&mut self, restitution: f32) -> Result<(), String> {
        self.settings.set(Parameter::Restitution, restitution)
    }

    pub fn set_air_resistance(&mut self, air_resistance: f32) -> Result<(), String> {
        self.settings.set(Parameter::AirResistance, air_resistance)
    }

    pub fn set_simulation_speed(&mut self, speed: f32) -> Result<(), String> {
        self.settings.set(Parameter::Speed, speed)
    }

    pub fn set_trails_enabled(&mut self, enabled: bool) {
        settings::set_trails_enabled(self, enabled);
    }

    pub fn set_boundary(&mut self, width: f32, height: f32, depth: f32) -> Result<(), String> {
        settings::set_boundary(self, width, height, depth)
    }

    pub fn create_settings(&self) -> &CreateSettings {
        &self.create
    }

    /// Replace the click-spawn defaults after checking the material exists
    pub fn set_create_settings(&mut self, create: CreateSettings) -> Result<(), String> {
        settings::set_create_settings(self, create)
    }

    /// Enable or disable step timing (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Statistics of the last step
    pub fn stats(&self) -> StepStats {
        settings::get_stats(self)
    }

    /// Energy of the current state, independent of the last step
    pub fn energy(&self) -> EnergyTotals {
        measure_energy(&self.bodies, self.settings.gravity, self.bounds.height)
    }

    // === RUN CONTROL ===

    pub fn set_running(&mut self, running: bool) {
        commands::set_running(self, running);
    }

    pub fn start(&mut self) {
        commands::set_running(self, true);
    }

    pub fn pause(&mut self) {
        commands::set_running(self, false);
    }

    pub fn toggle_running(&mut self) -> bool {
        commands::toggle_running(self)
    }

    /// Remove every body and spring and pause. Ids keep counting.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Zero motion and trails, keep positions, pause
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === BODIES ===

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        bodies::body_index(self, id).map(|i| &self.bodies[i])
    }

    /// Validate and insert a body. Returns its id.
    pub fn create_body(&mut self, params: BodyParams) -> Result<u32, String> {
        bodies::create_body(self, params)
    }

    /// Spawn a body of a named shape and material. `mass <= 0` derives the
    /// mass from the material density.
    pub fn spawn_body(
        &mut self,
        shape: &str,
        x: f32,
        y: f32,
        size: f32,
        material: &str,
        mass: f32,
    ) -> Result<u32, String> {
        bodies::spawn_body(self, shape, x, y, size, material, mass)
    }

    /// Spawn at (x, y) using the current create settings
    pub fn spawn_default(&mut self, x: f32, y: f32) -> Result<u32, String> {
        bodies::spawn_default(self, x, y)
    }

    /// Connect two bodies (by id) with a damped spring
    pub fn create_spring(
        &mut self,
        a_id: u32,
        b_id: u32,
        rest_length: f32,
        stiffness: f32,
        damping: f32,
    ) -> Result<(), String> {
        bodies::create_spring(self, a_id, b_id, rest_length, stiffness, damping)
    }

    /// Instantaneous push: `velocity += (fx, fy) / mass`
    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> Result<(), String> {
        bodies::apply_force(self, id, fx, fy)
    }

    /// Topmost body whose center is within its size of (x, y)
    pub fn body_at(&self, x: f32, y: f32) -> Option<u32> {
        bodies::body_at(self, x, y)
    }

    pub fn body_info(&self, id: u32) -> Option<BodyInfo> {
        bodies::body_info(self, id)
    }

    pub fn body_info_json(&self, id: u32) -> Option<String> {
        bodies::body_info(self, id).and_then(|info| serde_json::to_string(&info).ok())
    }

    // === SCENARIOS ===

    pub fn load_scenario(&mut self, name: &str) -> Result<(), String> {
        let scenario: Scenario = name.parse()?;
        scenarios::load_scenario(self, scenario)
    }

    pub fn load_scenario_preset(&mut self, scenario: Scenario) -> Result<(), String> {
        scenarios::load_scenario(self, scenario)
    }

    // === AUDIO ===

    /// Take every cue emitted since the last drain
    pub fn drain_audio_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn pending_audio_cues(&self) -> &[AudioCue] {
        &self.cues
    }

    /// Drain cues as a JSON array of `{"kind", "frequency"}`
    pub fn take_audio_cues_json(&mut self) -> String {
        let cues = self.drain_audio_cues();
        serde_json::to_string(&cues).unwrap_or_else(|_| "[]".to_string())
    }

    // === STEP ===

    /// Advance by `elapsed_seconds` of wall time. Returns false when paused.
    pub fn step(&mut self, elapsed_seconds: f32) -> bool {
        step::step(self, elapsed_seconds)
    }

    // === RENDER ===

    /// Repack the body and trail buffers. Returns the body count.
    pub fn collect_render_data(&mut self) -> usize {
        render_extract::collect_render_data(self)
    }

    pub fn body_buffer(&self) -> &[f32] {
        &self.render.bodies
    }

    pub fn trail_buffer(&self) -> &[f32] {
        &self.render.trails
    }

    pub fn body_buffer_ptr(&self) -> *const f32 {
        self.render.bodies.as_ptr()
    }

    pub fn body_buffer_len(&self) -> usize {
        self.render.bodies.len()
    }

    pub fn trail_buffer_ptr(&self) -> *const f32 {
        self.render.trails.as_ptr()
    }

    pub fn trail_buffer_len(&self) -> usize {
        self.render.trails.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
