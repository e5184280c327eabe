//! Virtual camera: pose type, target solver and per-frame smoothing.

pub(crate) mod integrator;
pub(crate) mod pose;
pub(crate) mod solver;
