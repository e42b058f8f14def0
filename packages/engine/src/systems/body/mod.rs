//! Bodies, springs and trails - the data the step mutates
//!
//! A body is a circle for every physical purpose; its shape only matters for
//! the moment of inertia and for drawing. Springs point at bodies by index.

mod body;
mod spring;
mod trail;

pub use body::{Body, BodyParams};
pub use spring::{pair_mut, Spring};
pub use trail::{Trail, TRAIL_CAPACITY};
