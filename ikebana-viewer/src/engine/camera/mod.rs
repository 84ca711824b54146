//! Orbit camera with damping and optional auto-rotation.

pub mod orbit_camera;

use bevy::prelude::*;
use orbit_camera::{OrbitCamera, orbit_camera_controller, spawn_orbit_camera};

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, spawn_orbit_camera)
            .add_systems(Update, orbit_camera_controller);
    }
}
