use crate::engine::scene::branches::{BranchPart, ExportGroup};
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

/// Local transform, parent link and export-root flag of every scene node.
pub type HierarchyQuery<'w, 's> =
    Query<'w, 's, (&'static Transform, Option<&'static ChildOf>, Has<ExportGroup>)>;

/// Compose the transform of `entity` relative to the scene root, walking up
/// to the export group. `None` if the entity is not under the export group.
///
/// Built from local transforms so it is valid in the same frame the
/// hierarchy was spawned, before transform propagation runs.
pub fn export_space_transform(entity: Entity, hierarchy: &HierarchyQuery) -> Option<Mat4> {
    let mut matrix = Mat4::IDENTITY;
    let mut current = entity;
    loop {
        let (transform, parent, is_root) = hierarchy.get(current).ok()?;
        matrix = transform.compute_matrix() * matrix;
        if is_root {
            return Some(matrix);
        }
        current = parent?.parent();
    }
}

/// Every vertex of every branch mesh under the export group, in slot and
/// part order.
pub fn collect_export_points(
    parts: &Query<(Entity, &BranchPart, &Mesh3d)>,
    hierarchy: &HierarchyQuery,
    meshes: &Assets<Mesh>,
) -> Vec<Vec3> {
    let mut ordered: Vec<_> = parts.iter().collect();
    ordered.sort_by_key(|(_, part, _)| (part.slot, part.index));

    let mut points = Vec::new();
    for (entity, part, mesh) in ordered {
        let Some(matrix) = export_space_transform(entity, hierarchy) else {
            continue;
        };
        let Some(mesh) = meshes.get(&mesh.0) else {
            warn!("Mesh for {} part {} is not available", part.slot, part.index);
            continue;
        };
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            continue;
        };
        points.extend(
            positions
                .iter()
                .map(|p| matrix.transform_point3(Vec3::from_array(*p))),
        );
    }
    points
}
