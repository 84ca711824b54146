//! Branch control panel.
//!
//! Holds the live angle and colour parameters (`ControlPanel`) and the Bevy
//! UI side panel bound to them.
//!
//! ## Binding
//!
//! ```text
//! Angle rows (12, fixed)   ──┐
//! Colour rows (per slot)   ──┼─> BranchEdit ─> BranchRegistry ─> pivot / materials
//!                            │
//! Optimization run ──> ControlPanel (angles, colour controls, generation)
//!                            └─> UI rows rebuilt when the generation moves
//! ```
//!
//! Colour controls are derived from the slot's assigned flower type and only
//! replaced when the derived control differs from the current one.

/// Button systems: angle steps, colour cycling and the complete button.
pub mod interactions;

/// `ControlPanel` resource, colour controls and angle control descriptions.
pub mod state;

/// Panel and loading overlay spawning, plus display refresh systems.
pub mod ui;

use bevy::prelude::*;

use interactions::{
    angle_step_button_interaction, color_cycle_button_interaction, complete_button_interaction,
};
use ui::{
    reflect_loading_overlay, reflect_panel_values, spawn_control_panel, spawn_loading_overlay,
    sync_color_rows,
};

// Registers the control panel UI. The panel state itself is owned by
// `ArrangementPlugin` so headless apps can run without any UI.
pub struct ControlPanelUiPlugin;

impl Plugin for ControlPanelUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_control_panel, spawn_loading_overlay))
            .add_systems(
                Update,
                (
                    angle_step_button_interaction,
                    color_cycle_button_interaction,
                    complete_button_interaction,
                    sync_color_rows,
                    reflect_panel_values,
                    reflect_loading_overlay,
                ),
            );
    }
}
