use super::ply::serialize_ascii_ply;
use super::point_cloud::{HierarchyQuery, collect_export_points};
use crate::engine::scene::branches::BranchPart;
use crate::error::RunError;
use crate::optimizer::protocol::{ArrangementId, UploadAck};
use crate::optimizer::run::ExportRequested;
use crate::optimizer::transport::Optimizer;
use bevy::prelude::*;
use bevy::tasks::{Task, block_on, futures_lite::future};

/// Uploads in flight, keyed by arrangement.
#[derive(Resource, Default)]
pub struct PendingUploads {
    tasks: Vec<(ArrangementId, Task<Result<UploadAck, RunError>>)>,
}

impl PendingUploads {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Serializes the export group and starts the upload for each request.
pub fn export_point_cloud_on_request(
    mut requests: EventReader<ExportRequested>,
    parts: Query<(Entity, &BranchPart, &Mesh3d)>,
    hierarchy: HierarchyQuery,
    meshes: Res<Assets<Mesh>>,
    optimizer: Res<Optimizer>,
    mut uploads: ResMut<PendingUploads>,
) {
    for request in requests.read() {
        let points = collect_export_points(&parts, &hierarchy, &meshes);
        let ply = serialize_ascii_ply(&points);
        info!(
            "Exporting {} points ({} bytes) for arr_id {}",
            points.len(),
            ply.len(),
            request.arrangement_id
        );
        let task = optimizer.spawn_upload(request.arrangement_id.clone(), ply);
        uploads.tasks.push((request.arrangement_id.clone(), task));
    }
}

/// Logs upload outcomes. Failures never touch the scene.
pub fn poll_uploads(mut uploads: ResMut<PendingUploads>) {
    uploads.tasks.retain_mut(|(arrangement_id, task)| {
        match block_on(future::poll_once(task)) {
            None => true,
            Some(Ok(ack)) => {
                info!(
                    "Point cloud for arr_id {} uploaded (status: {})",
                    arrangement_id,
                    ack.status.as_deref().unwrap_or("unknown")
                );
                false
            }
            Some(Err(err)) => {
                error!("Point cloud upload for arr_id {} failed: {}", arrangement_id, err);
                false
            }
        }
    });
}
