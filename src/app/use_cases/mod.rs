//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod dataset;
pub mod quiz;
pub mod regions;
pub mod viewport;
