//! Viewer engine: app setup, model loading, scene composition and camera.

/// Flower catalog, glTF model parsing and model sources.
pub mod assets;

/// Orbit camera controller.
pub mod camera;

/// App construction, configuration and window settings.
pub mod core;

/// Load batches for the base and extension phases, plus the loading indicator.
pub mod loading;

/// Export group, branch registry, composer, vase and lighting.
pub mod scene;
