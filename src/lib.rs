//! Gridhunt - deterministic robot-vs-monster hunt simulation on a 3D grid

pub mod agent;
pub mod core;
pub mod export;
pub mod render;
pub mod simulation;
pub mod spatial;
pub mod world;
