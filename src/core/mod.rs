//! Core building blocks: run parameters, grid geometry and cell cropping.
//! These are internal primitives consumed by the high-level `api` module.
pub mod grid;
pub mod params;
pub mod slicing;
