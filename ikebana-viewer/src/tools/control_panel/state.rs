use crate::engine::assets::catalog::{ColorChoice, FlowerCatalog};
use crate::engine::scene::branches::BranchAngle;
use bevy::prelude::*;
use constants::slot_layout::{AngleRange, angle_range, default_color_hex};
use constants::{AngleAxis, BranchSlot};

/// Colour selector for one slot, derived from its assigned flower type.
/// Only exists when the type has at least one colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorControl {
    pub flower_type: String,
    pub choices: Vec<ColorChoice>,
    pub selected: usize,
}

impl ColorControl {
    pub fn for_flower(flower_type: &str, catalog: &FlowerCatalog) -> Option<Self> {
        let choices = catalog.color_choices(flower_type);
        if choices.is_empty() {
            return None;
        }
        Some(Self {
            flower_type: flower_type.to_string(),
            choices: choices.to_vec(),
            selected: 0,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.name.as_str())
    }

    pub fn selected_choice(&self) -> Option<&ColorChoice> {
        self.choices.get(self.selected)
    }
}

/// Static description of one angle slider.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleControl {
    pub slot: BranchSlot,
    pub axis: AngleAxis,
    pub range: AngleRange,
    pub label: String,
}

/// The twelve always-present angle controls, slot-major.
pub fn angle_controls() -> Vec<AngleControl> {
    BranchSlot::ALL
        .iter()
        .flat_map(|&slot| {
            AngleAxis::ALL.iter().map(move |&axis| AngleControl {
                slot,
                axis,
                range: angle_range(slot, axis),
                label: format!("{} {}", slot.display_name(), axis.display_name()),
            })
        })
        .collect()
}

pub fn color_control_label(slot: BranchSlot) -> String {
    format!("{} の色", slot.key())
}

/// Live parameters behind the control panel.
#[derive(Resource, Debug)]
pub struct ControlPanel {
    angles: [BranchAngle; BranchSlot::COUNT],
    color_values: [String; BranchSlot::COUNT],
    color_controls: [Option<ColorControl>; BranchSlot::COUNT],
    /// Bumped whenever the set of colour controls changes.
    generation: u64,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            angles: Default::default(),
            color_values: BranchSlot::ALL.map(|slot| default_color_hex(slot).to_string()),
            color_controls: Default::default(),
            generation: 0,
        }
    }
}

impl ControlPanel {
    /// Bring the slot's colour control in line with `flower_type`. Returns
    /// whether the control set changed.
    pub fn rebuild_color_control(
        &mut self,
        slot: BranchSlot,
        flower_type: &str,
        catalog: &FlowerCatalog,
    ) -> bool {
        let desired = ColorControl::for_flower(flower_type, catalog);
        let index = slot.index();
        if self.color_controls[index] == desired {
            return false;
        }

        if let Some(choice) = desired.as_ref().and_then(|c| c.selected_choice()) {
            self.color_values[index] = choice.hex.clone();
        }
        debug!(
            "Colour control for {} rebuilt for {} ({} choices)",
            slot,
            flower_type,
            desired.as_ref().map_or(0, |c| c.choices.len())
        );
        self.color_controls[index] = desired;
        self.generation += 1;
        true
    }

    /// Advance to the next colour choice, wrapping. Returns its hex.
    pub fn select_next_color(&mut self, slot: BranchSlot) -> Option<String> {
        let index = slot.index();
        let control = self.color_controls[index].as_mut()?;
        control.selected = (control.selected + 1) % control.choices.len();
        let hex = control.selected_choice()?.hex.clone();
        self.color_values[index] = hex.clone();
        Some(hex)
    }

    /// Forget every branch: no colour controls, zeroed angle displays and
    /// the per-slot default colours. Mirrors a cleared export group.
    pub fn reset(&mut self) {
        let had_controls = self.color_controls.iter().any(Option::is_some);
        let generation = self.generation;
        *self = Self {
            generation: if had_controls { generation + 1 } else { generation },
            ..Self::default()
        };
    }

    pub fn color_control(&self, slot: BranchSlot) -> Option<&ColorControl> {
        self.color_controls[slot.index()].as_ref()
    }

    pub fn color_value(&self, slot: BranchSlot) -> &str {
        &self.color_values[slot.index()]
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn angle(&self, slot: BranchSlot) -> BranchAngle {
        self.angles[slot.index()]
    }

    /// Mirror a programmatic angle change. Values are not clamped.
    pub fn set_angle_display(&mut self, slot: BranchSlot, angle: BranchAngle) {
        self.angles[slot.index()] = angle;
    }

    pub fn set_angle_value(&mut self, slot: BranchSlot, axis: AngleAxis, degrees: f32) {
        self.angles[slot.index()].set(axis, degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_angle_controls_with_locked_ranges() {
        let controls = angle_controls();
        assert_eq!(controls.len(), 12);
        assert_eq!(controls[0].label, "主枝 方位");
        assert!(controls[0].range.is_locked());
        let locked = controls.iter().filter(|c| c.range.is_locked()).count();
        assert_eq!(locked, 3);
    }

    #[test]
    fn rebuilding_with_same_type_is_idempotent() {
        let catalog = FlowerCatalog::builtin();
        let mut panel = ControlPanel::default();

        assert!(panel.rebuild_color_control(BranchSlot::Main, "バラ", &catalog));
        let first: Vec<String> = panel
            .color_control(BranchSlot::Main)
            .unwrap()
            .names()
            .map(String::from)
            .collect();
        let generation = panel.generation();

        assert!(!panel.rebuild_color_control(BranchSlot::Main, "バラ", &catalog));
        let second: Vec<String> = panel
            .color_control(BranchSlot::Main)
            .unwrap()
            .names()
            .map(String::from)
            .collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
        assert_eq!(panel.generation(), generation);
        assert_eq!(panel.color_value(BranchSlot::Main), "#ff0000");
    }

    #[test]
    fn rebuild_resets_a_changed_selection_to_first_choice() {
        let catalog = FlowerCatalog::builtin();
        let mut panel = ControlPanel::default();
        panel.rebuild_color_control(BranchSlot::Guest, "ユリ", &catalog);
        assert_eq!(panel.select_next_color(BranchSlot::Guest).as_deref(), Some("#ffb6c1"));

        assert!(panel.rebuild_color_control(BranchSlot::Guest, "ユリ", &catalog));
        let control = panel.color_control(BranchSlot::Guest).unwrap();
        assert_eq!(control.selected, 0);
        assert_eq!(panel.color_value(BranchSlot::Guest), "#ffffff");
    }

    #[test]
    fn colourless_type_removes_control_without_error() {
        let catalog = FlowerCatalog::builtin();
        let mut panel = ControlPanel::default();
        panel.rebuild_color_control(BranchSlot::Middle1, "ディル", &catalog);

        assert!(panel.rebuild_color_control(BranchSlot::Middle1, "啓扇桜", &catalog));
        assert!(panel.color_control(BranchSlot::Middle1).is_none());
        assert!(panel.select_next_color(BranchSlot::Middle1).is_none());
        assert_eq!(panel.color_value(BranchSlot::Middle1), "#9acd32");
    }

    #[test]
    fn cycling_wraps_and_defaults_are_per_slot() {
        let catalog = FlowerCatalog::builtin();
        let mut panel = ControlPanel::default();
        assert_eq!(panel.color_value(BranchSlot::Middle4), "#add8e6");

        panel.rebuild_color_control(BranchSlot::Middle2, "リアトリス", &catalog);
        assert_eq!(panel.select_next_color(BranchSlot::Middle2).as_deref(), Some("#4b0082"));
        assert_eq!(panel.select_next_color(BranchSlot::Middle2).as_deref(), Some("#800080"));
    }

    #[test]
    fn reset_drops_controls_and_restores_defaults() {
        let catalog = FlowerCatalog::builtin();
        let mut panel = ControlPanel::default();
        panel.rebuild_color_control(BranchSlot::Main, "バラ", &catalog);
        panel.select_next_color(BranchSlot::Main);
        panel.set_angle_display(BranchSlot::Middle1, BranchAngle::new(-60.0, 20.0));
        let generation = panel.generation();

        panel.reset();

        assert!(BranchSlot::ALL.iter().all(|&slot| panel.color_control(slot).is_none()));
        assert_eq!(panel.color_value(BranchSlot::Main), "#ff69b4");
        assert_eq!(panel.angle(BranchSlot::Middle1), BranchAngle::default());
        assert_eq!(panel.generation(), generation + 1);

        // Nothing left to drop, so the UI rows are not rebuilt again.
        panel.reset();
        assert_eq!(panel.generation(), generation + 1);
    }
}
