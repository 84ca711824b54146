use bevy::prelude::*;

pub const CAMERA_START: Vec3 = Vec3::new(80.0, 40.0, 80.0);
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const AUTO_ROTATE_SPEED: f32 = 2.0;
pub const ORBIT_DAMPING: f32 = 0.1;
pub const ORBIT_ROTATE_SPEED: f32 = 0.8;
pub const ORBIT_ZOOM_SPEED: f32 = 1.2;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 800.0;

pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 12_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 20.0, 10.0);

// Hemisphere fill: white from the sky, dark grey bounced up from the ground.
pub const HEMISPHERE_HEIGHT: f32 = 20.0;
pub const HEMISPHERE_ILLUMINANCE: f32 = 2_000.0;
pub const HEMISPHERE_SKY_COLOR: Color = Color::WHITE;
pub const HEMISPHERE_GROUND_COLOR: Color = Color::srgb(0.267, 0.267, 0.267);

pub const ANGLE_STEP_DEGREES: f32 = 1.0;

pub const PANEL_WIDTH: f32 = 300.0;
pub const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.11, 0.13);
pub const ROW_BACKGROUND: Color = Color::srgb(0.12, 0.13, 0.15);
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVER: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_DISABLED: Color = Color::srgb(0.15, 0.15, 0.16);
pub const TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_DISABLED: Color = Color::srgb(0.45, 0.45, 0.48);
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
