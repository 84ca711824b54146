use super::branches::{
    BranchAngle, BranchModel, BranchPart, BranchPivot, BranchRegistry, ExportGroup,
};
use crate::engine::assets::catalog::FlowerCatalog;
use crate::engine::assets::flower_model::{FlowerModel, grounded_transform};
use crate::error::LoadError;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use constants::BranchSlot;
use constants::slot_layout::horizontal_offset;

/// Everything needed to place one branch from an optimizer result.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchPlacement {
    pub slot: BranchSlot,
    pub flower_type: String,
    pub asset_path: String,
    /// Uniform model scale.
    pub length: f32,
    pub angle: BranchAngle,
    pub offset: (f32, f32),
}

impl BranchPlacement {
    /// Resolve the asset for `flower_type` and apply the slot's fixed offset.
    pub fn resolve(
        slot: BranchSlot,
        flower_type: &str,
        length: f32,
        angle: BranchAngle,
        catalog: &FlowerCatalog,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            slot,
            flower_type: flower_type.to_string(),
            asset_path: catalog.asset_path(flower_type)?.to_string(),
            length,
            angle,
            offset: horizontal_offset(slot),
        })
    }
}

/// Spawns the permanent export group at startup.
pub fn spawn_export_group(mut commands: Commands) {
    commands.spawn((
        Name::new("ExportGroup"),
        ExportGroup,
        Transform::default(),
        Visibility::default(),
    ));
}

/// Builds and tears down branch hierarchies under the export group.
#[derive(SystemParam)]
pub struct SceneComposer<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    registry: ResMut<'w, BranchRegistry>,
    groups: Query<'w, 's, Entity, With<ExportGroup>>,
    pivots: Query<'w, 's, Entity, With<BranchPivot>>,
}

impl SceneComposer<'_, '_> {
    /// Drop every branch pivot, leaving the export group empty.
    pub fn clear(&mut self) {
        for pivot in self.pivots.iter() {
            self.commands.entity(pivot).despawn();
        }
        self.registry.clear();
    }

    /// Attach a loaded model as `placement.slot`, replacing any branch
    /// already in that slot.
    pub fn attach(&mut self, placement: &BranchPlacement, model: &FlowerModel) -> Option<Entity> {
        let slot = placement.slot;
        let Ok(group) = self.groups.single() else {
            error!("Export group missing; cannot attach {}", slot);
            return None;
        };

        if let Some(previous) = self.registry.pivot(slot) {
            self.commands.entity(previous).despawn();
        }

        let pivot = self
            .commands
            .spawn((
                Name::new(format!("{}Pivot", slot.key())),
                BranchPivot { slot },
                Transform::from_rotation(placement.angle.to_rotation()),
                Visibility::default(),
                ChildOf(group),
            ))
            .id();

        let model_root = self
            .commands
            .spawn((
                Name::new(model.source.clone()),
                BranchModel,
                grounded_transform(model, placement.length, placement.offset),
                Visibility::default(),
                ChildOf(pivot),
            ))
            .id();

        let mut colorable = Vec::new();
        for (index, part) in model.parts.iter().enumerate() {
            // Each part owns its material so colouring stays per branch.
            let material = self.materials.add(StandardMaterial {
                base_color: part.base_color(),
                ..default()
            });
            let mesh = self.meshes.add(part.to_mesh());
            self.commands.spawn((
                Name::new(part.name.clone()),
                BranchPart { slot, index },
                Mesh3d(mesh),
                MeshMaterial3d(material.clone()),
                Transform::default(),
                ChildOf(model_root),
            ));
            if part.is_colorable() {
                colorable.push(material);
            }
        }

        for name in model.colorable_part_names() {
            debug!("{} colourable part: {}", slot, name);
        }
        info!(
            "Attached {} ({}) with {} parts, {} vertices",
            slot,
            placement.flower_type,
            model.parts.len(),
            model.vertex_count()
        );
        self.registry.register(
            slot,
            pivot,
            placement.flower_type.clone(),
            placement.angle,
            colorable,
        );
        Some(pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::flower_model::test_models::stem_and_flower;

    #[test]
    fn placement_uses_catalog_asset_and_slot_offset() {
        let catalog = FlowerCatalog::builtin();
        let placement = BranchPlacement::resolve(
            BranchSlot::Middle2,
            "ディル",
            1.5,
            BranchAngle::new(-40.0, 20.0),
            &catalog,
        )
        .unwrap();
        assert_eq!(placement.asset_path, "/static/3d/digu.glb");
        assert_eq!(placement.offset, (0.0, 0.1));
    }

    #[test]
    fn unknown_flower_type_cannot_be_placed() {
        let catalog = FlowerCatalog::builtin();
        let result = BranchPlacement::resolve(
            BranchSlot::Main,
            "ひまわり",
            1.0,
            BranchAngle::default(),
            &catalog,
        );
        assert!(matches!(result, Err(LoadError::UnknownFlowerType(_))));
    }

    #[derive(Resource, Default)]
    struct Pending(Vec<BranchPlacement>);

    fn attach_pending(mut pending: ResMut<Pending>, mut composer: SceneComposer) {
        for placement in pending.0.drain(..) {
            composer.attach(&placement, &stem_and_flower(&placement.asset_path));
        }
    }

    #[test]
    fn reattaching_a_slot_replaces_its_pivot() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_resource::<BranchRegistry>()
            .init_resource::<Pending>()
            .add_systems(Startup, spawn_export_group)
            .add_systems(Update, attach_pending);

        let catalog = FlowerCatalog::builtin();
        let placement = |flower: &str| {
            BranchPlacement::resolve(
                BranchSlot::Middle3,
                flower,
                1.0,
                BranchAngle::new(10.0, 0.0),
                &catalog,
            )
            .unwrap()
        };

        app.world_mut().resource_mut::<Pending>().0.push(placement("バラ"));
        app.update();
        app.world_mut().resource_mut::<Pending>().0.push(placement("ユリ"));
        app.update();

        let world = app.world_mut();
        let pivots: Vec<_> = world
            .query::<&BranchPivot>()
            .iter(world)
            .map(|pivot| pivot.slot)
            .collect();
        assert_eq!(pivots, vec![BranchSlot::Middle3]);

        let registry = world.resource::<BranchRegistry>();
        let state = registry.state(BranchSlot::Middle3);
        assert_eq!(state.assigned_type.as_deref(), Some("ユリ"));
        assert_eq!(state.colorable_materials.len(), 1);
    }
}
