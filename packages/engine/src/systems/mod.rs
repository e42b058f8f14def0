//! Physics systems run by the step, leaves first

pub mod audio;
pub mod body;
pub mod boundary;
pub mod collision;
pub mod energy;
pub mod forces;
pub mod integrator;
pub mod step_config;
