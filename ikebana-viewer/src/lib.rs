//! Ikebana arrangement viewer.
//!
//! Composes a multi-branch flower arrangement from optimizer results, keeps
//! the control panel bound to the branch pivots, and exports the composed
//! geometry as a point cloud.

pub mod engine;
pub mod error;
pub mod export;
pub mod optimizer;
pub mod settings;
pub mod tools;

use bevy::prelude::*;

use engine::core::config::ViewerConfig;
use engine::loading::overlay::LoadingIndicator;
use engine::scene::branches::{BranchEdit, BranchRegistry, apply_branch_edits};
use engine::scene::composer::spawn_export_group;
use engine::scene::vase::{VaseLoad, spawn_vase_when_ready, start_vase_load};
use export::upload::{PendingUploads, export_point_cloud_on_request, poll_uploads};
use optimizer::run::{
    ExportRequested, OptimizationRun, RunFinished, StartOptimization, dismiss_indicator_on_finish,
    poll_optimization_run, request_initial_run, start_optimization_runs,
};
use tools::control_panel::state::ControlPanel;

/// Arrangement core: branch registry, optimization run, export and panel
/// state. Expects `ModelLoader` and `Optimizer` resources to be inserted by
/// the caller.
pub struct ArrangementPlugin;

impl Plugin for ArrangementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerConfig>()
            .init_resource::<engine::assets::catalog::FlowerCatalog>()
            .init_resource::<BranchRegistry>()
            .init_resource::<ControlPanel>()
            .init_resource::<OptimizationRun>()
            .init_resource::<LoadingIndicator>()
            .init_resource::<PendingUploads>()
            .init_resource::<VaseLoad>()
            .add_event::<BranchEdit>()
            .add_event::<StartOptimization>()
            .add_event::<RunFinished>()
            .add_event::<ExportRequested>()
            .add_systems(
                Startup,
                (spawn_export_group, start_vase_load, request_initial_run),
            )
            .add_systems(
                Update,
                (
                    start_optimization_runs,
                    poll_optimization_run,
                    dismiss_indicator_on_finish,
                    apply_branch_edits,
                    export_point_cloud_on_request,
                    poll_uploads,
                )
                    .chain(),
            )
            .add_systems(Update, spawn_vase_when_ready);
    }
}
