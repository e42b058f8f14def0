use wasm_bindgen::prelude::*;

/// Counters and energy of the last step. Timings stay zero unless perf
/// metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) dt: f32,
    pub(super) body_count: u32,
    pub(super) spring_count: u32,
    pub(super) collisions: u32,
    pub(super) floor_contacts: u32,
    pub(super) kinetic_energy: f32,
    pub(super) potential_energy: f32,
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn spring_count(&self) -> u32 { self.spring_count }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn kinetic_energy(&self) -> f32 { self.kinetic_energy }
    #[wasm_bindgen(getter)]
    pub fn potential_energy(&self) -> f32 { self.potential_energy }
    /// Kinetic plus potential, the figure shown in the stats panel
    #[wasm_bindgen(getter)]
    pub fn total_energy(&self) -> f32 { self.kinetic_energy + self.potential_energy }
}
