use super::state::{ControlPanel, angle_controls, color_control_label};
use crate::engine::loading::overlay::LoadingIndicator;
use crate::settings::render_settings::{
    BUTTON_DISABLED, BUTTON_IDLE, OVERLAY_BACKGROUND, PANEL_BACKGROUND, PANEL_WIDTH,
    ROW_BACKGROUND, TEXT_COLOR, TEXT_DISABLED,
};
use bevy::prelude::*;
use constants::{AngleAxis, BranchSlot};

// Components
#[derive(Component)]
pub struct ControlPanelRoot;
#[derive(Component)]
pub struct ColorControlList;
#[derive(Component)]
pub struct ColorRow;
#[derive(Component)]
pub struct CompleteButton;
#[derive(Component)]
pub struct CompleteLabel;
#[derive(Component)]
pub struct LoadingOverlay;

#[derive(Component, Debug, Clone, Copy)]
pub struct AngleStepButton {
    pub slot: BranchSlot,
    pub axis: AngleAxis,
    pub delta: f32,
}

/// Step buttons of a zero-width range.
#[derive(Component)]
pub struct LockedControl;

#[derive(Component, Debug, Clone, Copy)]
pub struct AngleValueText {
    pub slot: BranchSlot,
    pub axis: AngleAxis,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ColorCycleButton {
    pub slot: BranchSlot,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ColorNameText {
    pub slot: BranchSlot,
}

fn text(value: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn button_node(width: Val) -> Node {
    Node {
        width,
        height: Val::Px(24.0),
        display: Display::Flex,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        border: UiRect::all(Val::Px(1.0)),
        ..default()
    }
}

fn row_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(6.0),
        ..default()
    }
}

// Spawns the side panel: angle rows, colour list and the complete button
pub fn spawn_control_panel(mut commands: Commands) {
    commands
        .spawn((
            ControlPanelRoot,
            Name::new("ControlPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                width: Val::Px(PANEL_WIDTH),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::clip_y(),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn(text("枝ごとの角度調整", 18.0, TEXT_COLOR));

            for control in angle_controls() {
                let locked = control.range.is_locked();
                let (bg, fg) = if locked {
                    (BUTTON_DISABLED, TEXT_DISABLED)
                } else {
                    (BUTTON_IDLE, TEXT_COLOR)
                };

                panel
                    .spawn((row_node(), BackgroundColor(ROW_BACKGROUND)))
                    .with_children(|row| {
                        row.spawn((
                            text(control.label.clone(), 14.0, fg),
                            Node {
                                width: Val::Px(110.0),
                                ..default()
                            },
                        ));

                        for (label, delta) in [("-", -1.0), ("+", 1.0)] {
                            let mut button = row.spawn((
                                Button,
                                AngleStepButton {
                                    slot: control.slot,
                                    axis: control.axis,
                                    delta,
                                },
                                button_node(Val::Px(28.0)),
                                BackgroundColor(bg),
                                BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            ));
                            if locked {
                                button.insert(LockedControl);
                            }
                            button.with_children(|b| {
                                b.spawn(text(label, 14.0, fg));
                            });
                        }

                        row.spawn((
                            AngleValueText {
                                slot: control.slot,
                                axis: control.axis,
                            },
                            text("0.0", 14.0, fg),
                        ));
                    });
            }

            panel.spawn(text("色", 18.0, TEXT_COLOR));
            panel.spawn((
                ColorControlList,
                Name::new("ColorControls"),
                Node {
                    width: Val::Percent(100.0),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
            ));

            panel
                .spawn((
                    CompleteButton,
                    Button,
                    Name::new("CompleteButton"),
                    Node {
                        height: Val::Px(36.0),
                        ..button_node(Val::Percent(100.0))
                    },
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                ))
                .with_children(|b| {
                    b.spawn((CompleteLabel, text("完成", 16.0, TEXT_COLOR)));
                });
        });
}

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((
            LoadingOverlay,
            Name::new("LoadingOverlay"),
            BackgroundColor(OVERLAY_BACKGROUND),
            GlobalZIndex(10),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::None,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|overlay| {
            overlay.spawn(text("配置を最適化中…", 24.0, TEXT_COLOR));
        });
}

pub fn reflect_loading_overlay(
    indicator: Res<LoadingIndicator>,
    mut overlays: Query<&mut Node, With<LoadingOverlay>>,
) {
    if !indicator.is_changed() {
        return;
    }
    for mut node in &mut overlays {
        node.display = if indicator.visible {
            Display::Flex
        } else {
            Display::None
        };
    }
}

/// Rebuilds the colour rows whenever the set of colour controls changes.
pub fn sync_color_rows(
    mut commands: Commands,
    panel: Res<ControlPanel>,
    mut synced_generation: Local<Option<u64>>,
    lists: Query<Entity, With<ColorControlList>>,
    rows: Query<Entity, With<ColorRow>>,
) {
    if *synced_generation == Some(panel.generation()) {
        return;
    }
    let Ok(list) = lists.single() else {
        return;
    };
    *synced_generation = Some(panel.generation());

    for row in &rows {
        commands.entity(row).despawn();
    }

    for slot in BranchSlot::ALL {
        let Some(control) = panel.color_control(slot) else {
            continue;
        };
        let selected = control
            .selected_choice()
            .map(|c| c.name.clone())
            .unwrap_or_default();

        commands
            .spawn((ColorRow, row_node(), ChildOf(list)))
            .with_children(|row| {
                row.spawn((
                    text(color_control_label(slot), 14.0, TEXT_COLOR),
                    Node {
                        width: Val::Px(110.0),
                        ..default()
                    },
                ));
                row.spawn((
                    Button,
                    ColorCycleButton { slot },
                    button_node(Val::Px(140.0)),
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                ))
                .with_children(|b| {
                    b.spawn((ColorNameText { slot }, text(selected, 14.0, TEXT_COLOR)));
                });
            });
    }
}

pub fn reflect_panel_values(
    panel: Res<ControlPanel>,
    mut angle_texts: Query<(&AngleValueText, &mut Text), Without<ColorNameText>>,
    mut color_texts: Query<(&ColorNameText, &mut Text), Without<AngleValueText>>,
) {
    if !panel.is_changed() {
        return;
    }
    for (value, mut text) in &mut angle_texts {
        text.0 = format!("{:.1}", panel.angle(value.slot).get(value.axis));
    }
    for (name, mut text) in &mut color_texts {
        if let Some(choice) = panel
            .color_control(name.slot)
            .and_then(|control| control.selected_choice())
        {
            text.0 = choice.name.clone();
        }
    }
}
