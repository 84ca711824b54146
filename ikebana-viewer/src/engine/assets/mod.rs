//! Flower-type catalog and model loading.
//!
//! Models are glTF binaries flattened into `FlowerModel` parts on the IO
//! task pool, then turned into Bevy meshes by the scene composer.

/// Read-only mapping from flower type to model asset and colour choices.
pub mod catalog;

/// Parsed model geometry and the ground-aligned placement transform.
pub mod flower_model;

/// Directory and HTTP model sources plus the task-spawning `ModelLoader`.
pub mod model_source;
