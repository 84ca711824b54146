//! Tunable render, camera and panel constants. Domain data (slots, catalog,
//! ranges, endpoints) lives in the `constants` crate.

pub mod render_settings;
