//! Domain data: what bodies are shaped like and what they are made of

pub mod materials;
pub mod shapes;
