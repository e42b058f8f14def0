use wasm_bindgen::prelude::*;

use crate::core::Vec3;
use crate::domain::shapes::ShapeKind;
use crate::systems::body::BodyParams;

use super::frame_loop::FrameTimer;
use super::perf_stats::StepStats;
use super::render_extract::BODY_STRIDE;
use super::settings::CreateSettings;
use super::WorldCore;

fn js_err(e: String) -> JsValue {
    JsValue::from_str(&e)
}

/// The simulation world as seen from JavaScript
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    timer: FrameTimer,
}

#[wasm_bindgen]
impl World {
    /// Empty, paused world with the built-in materials
    #[wasm_bindgen(constructor)]
    pub fn new() -> World {
        World {
            core: WorldCore::new(),
            timer: FrameTimer::new(),
        }
    }

    // === MATERIALS ===

    pub fn load_material_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_material_bundle(&json).map_err(js_err)
    }

    pub fn materials_json(&self) -> String {
        self.core.materials_json()
    }

    // === SETTINGS ===

    pub fn set_parameter(&mut self, name: String, value: f32) -> Result<(), JsValue> {
        self.core.set_parameter(&name, value).map_err(js_err)
    }

    pub fn get_parameter(&self, name: String) -> Result<f32, JsValue> {
        self.core.get_parameter(&name).map_err(js_err)
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(js_err)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), JsValue> {
        self.core.set_friction(friction).map_err(js_err)
    }

    pub fn set_restitution(&mut self, restitution: f32) -> Result<(), JsValue> {
        self.core.set_restitution(restitution).map_err(js_err)
    }

    pub fn set_air_resistance(&mut self, air_resistance: f32) -> Result<(), JsValue> {
        self.core.set_air_resistance(air_resistance).map_err(js_err)
    }

    pub fn set_simulation_speed(&mut self, speed: f32) -> Result<(), JsValue> {
        self.core.set_simulation_speed(speed).map_err(js_err)
    }

    pub fn set_trails_enabled(&mut self, enabled: bool) {
        self.core.set_trails_enabled(enabled);
    }

    pub fn set_boundary(&mut self, width: f32, height: f32, depth: f32) -> Result<(), JsValue> {
        self.core.set_boundary(width, height, depth).map_err(js_err)
    }

    /// Defaults used by `spawn_default` (the click-to-create tool)
    pub fn set_create_settings(
        &mut self,
        shape: String,
        size: f32,
        mass: f32,
        material: String,
    ) -> Result<(), JsValue> {
        let shape: ShapeKind = shape.parse().map_err(js_err)?;
        self.core
            .set_create_settings(CreateSettings { shape, size, mass, material })
            .map_err(js_err)
    }

    /// Enable/disable step timing
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last step statistics
    pub fn get_stats(&self) -> StepStats {
        self.core.stats()
    }

    // === RUN CONTROL ===

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.core.is_running()
    }

    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn toggle_running(&mut self) -> bool {
        self.core.toggle_running()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === BODIES ===

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn spring_count(&self) -> usize {
        self.core.spring_count()
    }

    /// Create a body from raw values. Color is 0xRRGGBB.
    #[allow(clippy::too_many_arguments)]
    pub fn create_body(
        &mut self,
        shape: String,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        size: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
        color: u32,
        fixed: bool,
    ) -> Result<u32, JsValue> {
        let shape: ShapeKind = shape.parse().map_err(js_err)?;
        let params = BodyParams {
            shape,
            position: Vec3::xy(x, y),
            velocity: Vec3::xy(vx, vy),
            size,
            mass,
            friction,
            restitution,
            color,
            material: None,
            fixed,
        };
        self.core.create_body(params).map_err(js_err)
    }

    /// Create a body from a material. `mass <= 0` uses size × density.
    pub fn spawn_body(
        &mut self,
        shape: String,
        x: f32,
        y: f32,
        size: f32,
        material: String,
        mass: f32,
    ) -> Result<u32, JsValue> {
        self.core
            .spawn_body(&shape, x, y, size, &material, mass)
            .map_err(js_err)
    }

    pub fn spawn_default(&mut self, x: f32, y: f32) -> Result<u32, JsValue> {
        self.core.spawn_default(x, y).map_err(js_err)
    }

    pub fn create_spring(
        &mut self,
        a_id: u32,
        b_id: u32,
        rest_length: f32,
        stiffness: f32,
        damping: f32,
    ) -> Result<(), JsValue> {
        self.core
            .create_spring(a_id, b_id, rest_length, stiffness, damping)
            .map_err(js_err)
    }

    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> Result<(), JsValue> {
        self.core.apply_force(id, fx, fy).map_err(js_err)
    }

    /// Id of the topmost body under the world point, if any
    pub fn body_at(&self, x: f32, y: f32) -> Option<u32> {
        self.core.body_at(x, y)
    }

    pub fn body_info_json(&self, id: u32) -> Option<String> {
        self.core.body_info_json(id)
    }

    pub fn load_scenario(&mut self, name: String) -> Result<(), JsValue> {
        self.core.load_scenario(&name).map_err(js_err)
    }

    // === AUDIO ===

    /// JSON array of cues emitted since the last call
    pub fn take_audio_cues_json(&mut self) -> String {
        self.core.take_audio_cues_json()
    }

    // === STEP ===

    /// Step by an explicit elapsed time in seconds
    pub fn step(&mut self, elapsed_seconds: f32) -> bool {
        self.core.step(elapsed_seconds)
    }

    /// Step from a `requestAnimationFrame` timestamp
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let elapsed = self.timer.tick(now_ms);
        self.core.step(elapsed)
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 {
        self.timer.fps()
    }

    pub fn frame_count(&self) -> u64 {
        self.core.frame()
    }

    // === RENDER ===

    /// Repack the render buffers; returns the body count
    pub fn collect_render_data(&mut self) -> usize {
        self.core.collect_render_data()
    }

    pub fn body_stride(&self) -> usize {
        BODY_STRIDE
    }

    pub fn body_buffer_ptr(&self) -> *const f32 {
        self.core.body_buffer_ptr()
    }

    pub fn body_buffer_len(&self) -> usize {
        self.core.body_buffer_len()
    }

    pub fn trail_buffer_ptr(&self) -> *const f32 {
        self.core.trail_buffer_ptr()
    }

    pub fn trail_buffer_len(&self) -> usize {
        self.core.trail_buffer_len()
    }
}

impl World {
    /// Read access for native hosts and tests
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
