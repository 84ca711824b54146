use crate::error::LoadError;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use constants::COLORABLE_PART_NAME;

/// One named mesh primitive of a model, with geometry baked into model space.
#[derive(Debug, Clone)]
pub struct ModelPart {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub indices: Option<Vec<u32>>,
    /// Linear RGBA base colour authored in the asset.
    pub base_color: [f32; 4],
}

impl ModelPart {
    pub fn is_colorable(&self) -> bool {
        self.name == COLORABLE_PART_NAME
    }

    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions.clone());

        if let Some(normals) = self.normals.as_ref().filter(|n| n.len() == self.positions.len()) {
            mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals.clone());
        }
        if let Some(indices) = &self.indices {
            mesh.insert_indices(Indices::U32(indices.clone()));
        }
        mesh
    }

    pub fn base_color(&self) -> Color {
        let [r, g, b, a] = self.base_color;
        Color::linear_rgba(r, g, b, a)
    }
}

/// A loaded flower (or vase) model, flattened into its mesh parts.
#[derive(Debug, Clone)]
pub struct FlowerModel {
    pub source: String,
    pub parts: Vec<ModelPart>,
}

impl FlowerModel {
    /// Parse a glTF binary (or self-contained glTF JSON) payload.
    pub fn from_gltf_slice(path: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let (document, buffers, _images) =
            gltf::import_slice(bytes).map_err(|source| LoadError::Parse {
                path: path.to_string(),
                source,
            })?;

        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| LoadError::Empty(path.to_string()))?;

        let mut parts = Vec::new();
        for node in scene.nodes() {
            collect_parts(&node, Mat4::IDENTITY, &buffers, &mut parts);
        }

        if parts.is_empty() {
            return Err(LoadError::Empty(path.to_string()));
        }

        Ok(Self {
            source: path.to_string(),
            parts,
        })
    }

    /// Lowest model-space Y coordinate across all parts.
    pub fn min_y(&self) -> Option<f32> {
        self.parts
            .iter()
            .flat_map(|part| part.positions.iter().map(|p| p[1]))
            .reduce(f32::min)
    }

    pub fn colorable_part_names(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .filter(|part| part.is_colorable())
            .map(|part| part.name.as_str())
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|part| part.positions.len()).sum()
    }
}

fn collect_parts(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    parts: &mut Vec<ModelPart>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let name = node.name().or(mesh.name()).unwrap_or_default().to_string();
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = primitive
                .reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                continue;
            };

            let positions = positions
                .map(|p| world.transform_point3(Vec3::from(p)).to_array())
                .collect();
            let normals = reader.read_normals().map(|normals| {
                normals
                    .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero().to_array())
                    .collect()
            });
            let indices = reader.read_indices().map(|i| i.into_u32().collect());

            parts.push(ModelPart {
                name: name.clone(),
                positions,
                normals,
                indices,
                base_color: primitive.material().pbr_metallic_roughness().base_color_factor(),
            });
        }
    }

    for child in node.children() {
        collect_parts(&child, world, buffers, parts);
    }
}

/// Local transform of a branch model under its pivot: uniform scale, then
/// ground alignment so the lowest point sits on y = 0, then the horizontal
/// offset.
pub fn grounded_transform(model: &FlowerModel, scale: f32, offset: (f32, f32)) -> Transform {
    let lift = -model.min_y().unwrap_or(0.0) * scale;
    Transform {
        translation: Vec3::new(offset.0, lift, offset.1),
        scale: Vec3::splat(scale),
        ..default()
    }
}

#[cfg(test)]
pub(crate) mod test_models {
    use super::*;

    /// Two-part model: a stem spanning y in [-2, 3] and a "flower" head.
    pub fn stem_and_flower(source: &str) -> FlowerModel {
        FlowerModel {
            source: source.to_string(),
            parts: vec![
                ModelPart {
                    name: "stem".to_string(),
                    positions: vec![[0.0, -2.0, 0.0], [0.1, 3.0, 0.0], [0.0, 3.0, 0.1]],
                    normals: None,
                    indices: Some(vec![0, 1, 2]),
                    base_color: [0.1, 0.5, 0.1, 1.0],
                },
                ModelPart {
                    name: COLORABLE_PART_NAME.to_string(),
                    positions: vec![[0.0, 3.0, 0.0], [0.5, 3.5, 0.0], [0.0, 3.5, 0.5]],
                    normals: Some(vec![[0.0, 1.0, 0.0]; 3]),
                    indices: Some(vec![0, 1, 2]),
                    base_color: [1.0, 1.0, 1.0, 1.0],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_models::stem_and_flower;
    use super::*;

    #[test]
    fn grounded_transform_lifts_lowest_point_to_origin() {
        let model = stem_and_flower("rose.glb");
        let transform = grounded_transform(&model, 2.0, (0.1, 0.0));

        assert_eq!(transform.scale, Vec3::splat(2.0));
        assert!((transform.translation.y - 4.0).abs() < 1e-6);
        assert_eq!(transform.translation.x, 0.1);

        let lowest = transform.transform_point(Vec3::new(0.0, -2.0, 0.0));
        assert!(lowest.y.abs() < 1e-6);
    }

    #[test]
    fn only_flower_parts_are_colorable() {
        let model = stem_and_flower("rose.glb");
        let names: Vec<_> = model.colorable_part_names().collect();
        assert_eq!(names, vec!["flower"]);
        assert_eq!(model.vertex_count(), 6);
    }

    #[test]
    fn mesh_skips_mismatched_normals() {
        let mut part = stem_and_flower("rose.glb").parts.remove(1);
        part.normals = Some(vec![[0.0, 1.0, 0.0]]);
        let mesh = part.to_mesh();
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_none());
        assert_eq!(mesh.count_vertices(), 3);
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = FlowerModel::from_gltf_slice("broken.glb", b"not a gltf").unwrap_err();
        assert!(matches!(err, LoadError::Parse { path, .. } if path == "broken.glb"));
    }
}
