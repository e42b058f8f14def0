/// Immutable parameter snapshot handed to every system for one step.
///
/// Built from the settings store right before the step; setters called
/// between frames only show up in the next snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepConfig {
    /// Seconds to advance (elapsed × simulation speed)
    pub dt: f32,
    pub gravity: f32,
    /// Global floor friction
    pub friction: f32,
    /// Global wall/floor/ceiling restitution
    pub restitution: f32,
    pub air_resistance: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub half_depth: f32,
    pub record_trails: bool,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            gravity: 9.8,
            friction: 0.3,
            restitution: 0.8,
            air_resistance: 0.01,
            half_width: 10.0,
            half_height: 7.5,
            half_depth: 10.0,
            record_trails: true,
        }
    }
}
