//! Core application setup.
//!
//! Builds the Bevy app from the startup configuration: default plugins,
//! logging filter, model source, optimizer transport and the viewer plugins.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// `ViewerConfig` resource and model source selection.
pub mod config;

/// Primary window settings.
pub mod window_config;
