use crate::engine::assets::flower_model::FlowerModel;
use crate::engine::assets::model_source::ModelLoader;
use crate::engine::core::config::ViewerConfig;
use crate::error::LoadError;
use bevy::prelude::*;
use bevy::tasks::{Task, block_on, futures_lite::future};
use constants::vases::find_vase;

#[derive(Component)]
pub struct Vase;

/// In-flight vase load, if a vase was selected.
#[derive(Resource, Default)]
pub struct VaseLoad {
    task: Option<Task<Result<FlowerModel, LoadError>>>,
    scale: Vec3,
}

pub fn start_vase_load(
    config: Res<ViewerConfig>,
    loader: Res<ModelLoader>,
    mut vase_load: ResMut<VaseLoad>,
) {
    if config.vase.is_empty() {
        return;
    }
    let Some(vase) = find_vase(&config.vase) else {
        warn!("Unknown vase '{}'; continuing without one", config.vase);
        return;
    };

    info!("Loading vase {} from {}", vase.name, vase.asset_path);
    vase_load.scale = Vec3::from_array(vase.scale);
    vase_load.task = Some(loader.spawn(vase.asset_path.to_string()));
}

/// Spawns the vase at the origin once loaded. It lives outside the export
/// group, so it is never cleared or exported.
pub fn spawn_vase_when_ready(
    mut commands: Commands,
    mut vase_load: ResMut<VaseLoad>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(task) = vase_load.task.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(task)) else {
        return;
    };
    vase_load.task = None;

    let model = match result {
        Ok(model) => model,
        Err(err) => {
            error!("Vase failed to load: {}", err);
            return;
        }
    };

    commands
        .spawn((
            Name::new("Vase"),
            Vase,
            Transform::from_scale(vase_load.scale),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for part in &model.parts {
                parent.spawn((
                    Name::new(part.name.clone()),
                    Mesh3d(meshes.add(part.to_mesh())),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: part.base_color(),
                        ..default()
                    })),
                ));
            }
        });
    info!("Vase ready ({} parts)", model.parts.len());
}
