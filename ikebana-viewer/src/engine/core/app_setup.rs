use super::config::ViewerConfig;
use super::window_config::create_window_config;
use crate::ArrangementPlugin;
use crate::engine::assets::catalog::FlowerCatalog;
use crate::engine::camera::OrbitCameraPlugin;
use crate::engine::scene::lighting::spawn_lighting;
use crate::optimizer::http::HttpOptimizer;
use crate::optimizer::transport::Optimizer;
use crate::tools::control_panel::ControlPanelUiPlugin;
use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;

const BASE_LOG_FILTER: &str = "wgpu=error,naga=warn";

pub fn create_app(config: ViewerConfig, verbose: bool) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(verbose))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config.model_loader())
        .insert_resource(Optimizer::new(HttpOptimizer::new(
            &config.server_url,
            config.request_timeout,
        )))
        .insert_resource(FlowerCatalog::builtin())
        .insert_resource(config);

    app.add_plugins(ArrangementPlugin)
        .add_plugins(ControlPanelUiPlugin)
        .add_plugins(OrbitCameraPlugin);

    app.add_systems(Startup, spawn_lighting);

    app
}

fn create_default_plugins(verbose: bool) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let filter = if verbose {
        format!("{BASE_LOG_FILTER},ikebana_viewer=debug")
    } else {
        BASE_LOG_FILTER.to_string()
    };
    let log_config = LogPlugin {
        filter,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
