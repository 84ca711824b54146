use super::state::ControlPanel;
use super::ui::{AngleStepButton, ColorCycleButton, CompleteButton, CompleteLabel, LockedControl};
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::scene::branches::BranchEdit;
use crate::settings::render_settings::{
    ANGLE_STEP_DEGREES, BUTTON_DISABLED, BUTTON_HOVER, BUTTON_IDLE, BUTTON_PRESSED,
};
use bevy::prelude::*;
use constants::slot_layout::angle_range;

// -/+ buttons step the angle by one degree inside the slider range
pub fn angle_step_button_interaction(
    mut q: Query<
        (&Interaction, &AngleStepButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, Without<LockedControl>),
    >,
    mut panel: ResMut<ControlPanel>,
    mut edits: EventWriter<BranchEdit>,
) {
    for (interaction, step, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED);
                let range = angle_range(step.slot, step.axis);
                let current = panel.angle(step.slot).get(step.axis);
                let degrees = range.clamp(current + step.delta * ANGLE_STEP_DEGREES);
                panel.set_angle_value(step.slot, step.axis, degrees);
                edits.write(BranchEdit::SetAngle {
                    slot: step.slot,
                    axis: step.axis,
                    degrees,
                });
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

// Colour button cycles through the flower type's colour names
pub fn color_cycle_button_interaction(
    mut q: Query<
        (&Interaction, &ColorCycleButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut panel: ResMut<ControlPanel>,
    mut edits: EventWriter<BranchEdit>,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED);
                if let Some(hex) = panel.select_next_color(button.slot) {
                    edits.write(BranchEdit::SetColor {
                        slot: button.slot,
                        hex,
                    });
                }
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

// Complete button starts auto-rotation once and then stays disabled
pub fn complete_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<CompleteButton>)>,
    mut labels: Query<&mut Text, With<CompleteLabel>>,
    mut orbit: ResMut<OrbitCamera>,
) {
    for (interaction, mut bg) in &mut q {
        if orbit.auto_rotate {
            *bg = BackgroundColor(BUTTON_DISABLED);
            continue;
        }
        match *interaction {
            Interaction::Pressed => {
                orbit.auto_rotate = true;
                *bg = BackgroundColor(BUTTON_DISABLED);
                for mut label in &mut labels {
                    label.0 = "自動回転中…".to_string();
                }
                info!("Arrangement complete; auto-rotation enabled");
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}
