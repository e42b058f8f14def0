use std::str::FromStr;

use crate::domain::shapes::ShapeKind;
use crate::systems::step_config::StepConfig;

use super::perf_stats::StepStats;
use super::WorldCore;

/// Reference timestep of the host display (60 Hz)
pub const TIME_STEP: f32 = 1.0 / 60.0;

/// Mutable settings store. Read once per step into a `StepConfig`.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub friction: f32,
    pub restitution: f32,
    pub air_resistance: f32,
    pub simulation_speed: f32,
    pub time_step: f32,
    pub record_trails: bool,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            friction: 0.3,
            restitution: 0.8,
            air_resistance: 0.01,
            simulation_speed: 1.0,
            time_step: TIME_STEP,
            record_trails: true,
        }
    }
}

impl PhysicsSettings {
    /// Freeze the current values for one step of `elapsed_seconds`
    pub fn snapshot(&self, bounds: &Bounds, elapsed_seconds: f32) -> StepConfig {
        StepConfig {
            dt: elapsed_seconds * self.simulation_speed,
            gravity: self.gravity,
            friction: self.friction,
            restitution: self.restitution,
            air_resistance: self.air_resistance,
            half_width: bounds.width / 2.0,
            half_height: bounds.height / 2.0,
            half_depth: bounds.depth / 2.0,
            record_trails: self.record_trails,
        }
    }

    pub fn get(&self, param: Parameter) -> f32 {
        match param {
            Parameter::Gravity => self.gravity,
            Parameter::Friction => self.friction,
            Parameter::Restitution => self.restitution,
            Parameter::AirResistance => self.air_resistance,
            Parameter::Speed => self.simulation_speed,
        }
    }

    pub fn set(&mut self, param: Parameter, value: f32) -> Result<(), String> {
        param.validate(value)?;
        match param {
            Parameter::Gravity => self.gravity = value,
            Parameter::Friction => self.friction = value,
            Parameter::Restitution => self.restitution = value,
            Parameter::AirResistance => self.air_resistance = value,
            Parameter::Speed => self.simulation_speed = value,
        }
        Ok(())
    }
}

/// Axis-aligned containment box centered at the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { width: 20.0, height: 15.0, depth: 20.0 }
    }
}

/// Defaults for bodies spawned by clicking
#[derive(Clone, Debug, PartialEq)]
pub struct CreateSettings {
    pub shape: ShapeKind,
    pub size: f32,
    pub mass: f32,
    pub material: String,
}

impl Default for CreateSettings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Sphere,
            size: 1.0,
            mass: 1.0,
            material: "metal".to_string(),
        }
    }
}

/// Tunable global parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    Gravity,
    Friction,
    Restitution,
    AirResistance,
    Speed,
}

impl Parameter {
    fn validate(self, value: f32) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{:?} must be finite, got {}", self, value));
        }
        let ok = match self {
            Parameter::Gravity => true,
            Parameter::Friction | Parameter::Restitution => (0.0..=1.0).contains(&value),
            Parameter::AirResistance | Parameter::Speed => value >= 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(format!("{:?} out of range: {}", self, value))
        }
    }
}

impl FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gravity" => Ok(Parameter::Gravity),
            "friction" => Ok(Parameter::Friction),
            "restitution" => Ok(Parameter::Restitution),
            "airResistance" | "air_resistance" => Ok(Parameter::AirResistance),
            "speed" | "simulationSpeed" => Ok(Parameter::Speed),
            _ => Err(format!("unknown parameter: {}", s)),
        }
    }
}

pub(super) fn set_parameter(world: &mut WorldCore, name: &str, value: f32) -> Result<(), String> {
    let param: Parameter = name.parse()?;
    world.settings.set(param, value).map_err(|e| {
        log::warn!("rejected parameter update: {}", e);
        e
    })
}

pub(super) fn get_parameter(world: &WorldCore, name: &str) -> Result<f32, String> {
    let param: Parameter = name.parse()?;
    Ok(world.settings.get(param))
}

pub(super) fn set_trails_enabled(world: &mut WorldCore, enabled: bool) {
    world.settings.record_trails = enabled;
}

pub(super) fn set_boundary(world: &mut WorldCore, width: f32, height: f32, depth: f32) -> Result<(), String> {
    for v in [width, height, depth] {
        if !v.is_finite() || v <= 0.0 {
            return Err(format!("boundary extents must be positive, got {}x{}x{}", width, height, depth));
        }
    }
    world.bounds = Bounds { width, height, depth };
    Ok(())
}

pub(super) fn set_create_settings(world: &mut WorldCore, create: CreateSettings) -> Result<(), String> {
    if !create.size.is_finite() || create.size <= 0.0 {
        return Err(format!("create size must be positive, got {}", create.size));
    }
    if !create.mass.is_finite() || create.mass <= 0.0 {
        return Err(format!("create mass must be positive, got {}", create.mass));
    }
    if world.materials.get(&create.material).is_none() {
        return Err(format!("unknown material: {}", create.material));
    }
    world.create = create;
    Ok(())
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_stats(world: &WorldCore) -> StepStats {
    world.stats.clone()
}
