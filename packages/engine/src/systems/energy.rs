//! Aggregate energy of the free bodies
//!
//! Potential energy is measured from the floor of the boundary box, so a
//! body resting on the floor sits near zero. Fixed bodies are excluded.

use crate::systems::body::Body;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnergyTotals {
    pub kinetic: f32,
    pub potential: f32,
}

impl EnergyTotals {
    pub fn total(&self) -> f32 {
        self.kinetic + self.potential
    }
}

pub fn measure_energy(bodies: &[Body], gravity: f32, box_height: f32) -> EnergyTotals {
    bodies
        .iter()
        .filter(|b| !b.fixed)
        .fold(EnergyTotals::default(), |mut acc, b| {
            acc.kinetic += b.kinetic_energy();
            acc.potential += b.potential_energy(gravity, box_height);
            acc
        })
}
