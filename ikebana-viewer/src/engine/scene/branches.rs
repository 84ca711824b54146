use bevy::prelude::*;
use constants::{AngleAxis, BranchSlot};

/// Root of the export graph. Holds exactly the branch pivots.
#[derive(Component)]
pub struct ExportGroup;

/// Anchor whose rotation encodes a branch's azimuth and elevation.
#[derive(Component, Debug, Clone, Copy)]
pub struct BranchPivot {
    pub slot: BranchSlot,
}

/// Scaled, ground-aligned model root under a pivot.
#[derive(Component)]
pub struct BranchModel;

/// One mesh part of a branch model, in model part order.
#[derive(Component, Debug, Clone, Copy)]
pub struct BranchPart {
    pub slot: BranchSlot,
    pub index: usize,
}

/// Azimuth and elevation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BranchAngle {
    pub azimuth: f32,
    pub elevation: f32,
}

impl BranchAngle {
    pub fn new(azimuth: f32, elevation: f32) -> Self {
        Self { azimuth, elevation }
    }

    pub fn get(&self, axis: AngleAxis) -> f32 {
        match axis {
            AngleAxis::Azimuth => self.azimuth,
            AngleAxis::Elevation => self.elevation,
        }
    }

    pub fn set(&mut self, axis: AngleAxis, degrees: f32) {
        match axis {
            AngleAxis::Azimuth => self.azimuth = degrees,
            AngleAxis::Elevation => self.elevation = degrees,
        }
    }

    /// Pivot rotation: azimuth about Y, elevation about Z, intrinsic X-Y-Z
    /// order with no X rotation.
    pub fn to_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            0.0,
            self.azimuth.to_radians(),
            self.elevation.to_radians(),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct BranchState {
    pub pivot: Option<Entity>,
    /// Materials of the `flower` parts, owned by this branch alone.
    pub colorable_materials: Vec<Handle<StandardMaterial>>,
    pub assigned_type: Option<String>,
    pub angle: BranchAngle,
    pub color: Option<String>,
}

/// Per-slot branch state. Written by the scene composer and by branch edits.
#[derive(Resource, Debug, Default)]
pub struct BranchRegistry {
    slots: [BranchState; BranchSlot::COUNT],
}

impl BranchRegistry {
    /// Replace everything known about `slot`.
    pub fn register(
        &mut self,
        slot: BranchSlot,
        pivot: Entity,
        assigned_type: String,
        angle: BranchAngle,
        colorable_materials: Vec<Handle<StandardMaterial>>,
    ) {
        self.slots[slot.index()] = BranchState {
            pivot: Some(pivot),
            colorable_materials,
            assigned_type: Some(assigned_type),
            angle,
            color: None,
        };
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn state(&self, slot: BranchSlot) -> &BranchState {
        &self.slots[slot.index()]
    }

    pub fn pivot(&self, slot: BranchSlot) -> Option<Entity> {
        self.slots[slot.index()].pivot
    }

    pub fn pivots(&self) -> impl Iterator<Item = (BranchSlot, Entity)> + '_ {
        BranchSlot::ALL
            .iter()
            .filter_map(|&slot| self.pivot(slot).map(|pivot| (slot, pivot)))
    }

    /// Record a new angle and return the pivot with its new rotation.
    /// `None` when the slot has nothing loaded.
    pub fn set_angle(
        &mut self,
        slot: BranchSlot,
        axis: AngleAxis,
        degrees: f32,
    ) -> Option<(Entity, Quat)> {
        let state = &mut self.slots[slot.index()];
        let pivot = state.pivot?;
        state.angle.set(axis, degrees);
        Some((pivot, state.angle.to_rotation()))
    }

    /// Record a colour and return the materials it applies to.
    /// `None` when the slot has nothing loaded.
    pub fn set_color(
        &mut self,
        slot: BranchSlot,
        hex: &str,
    ) -> Option<&[Handle<StandardMaterial>]> {
        let state = &mut self.slots[slot.index()];
        state.pivot?;
        state.color = Some(hex.to_string());
        Some(&state.colorable_materials)
    }
}

/// Operator or programmatic edit of a loaded branch.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum BranchEdit {
    SetAngle {
        slot: BranchSlot,
        axis: AngleAxis,
        degrees: f32,
    },
    SetColor {
        slot: BranchSlot,
        hex: String,
    },
}

pub fn apply_branch_edits(
    mut edits: EventReader<BranchEdit>,
    mut registry: ResMut<BranchRegistry>,
    mut pivots: Query<&mut Transform, With<BranchPivot>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for edit in edits.read() {
        match edit {
            BranchEdit::SetAngle {
                slot,
                axis,
                degrees,
            } => {
                let Some((pivot, rotation)) = registry.set_angle(*slot, *axis, *degrees) else {
                    continue;
                };
                if let Ok(mut transform) = pivots.get_mut(pivot) {
                    transform.rotation = rotation;
                }
            }
            BranchEdit::SetColor { slot, hex } => {
                if registry.pivot(*slot).is_none() {
                    continue;
                }
                let color = match Srgba::hex(hex) {
                    Ok(color) => color,
                    Err(err) => {
                        warn!("Ignoring colour '{}' for {}: {:?}", hex, slot, err);
                        continue;
                    }
                };
                let Some(handles) = registry.set_color(*slot, hex) else {
                    continue;
                };
                for handle in handles {
                    if let Some(material) = materials.get_mut(handle) {
                        material.base_color = Color::Srgba(color);
                    }
                }
            }
        }
    }
}
