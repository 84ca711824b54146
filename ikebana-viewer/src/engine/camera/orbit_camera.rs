use crate::settings::render_settings::{
    AUTO_ROTATE_SPEED, CAMERA_FOV_DEGREES, CAMERA_START, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::f32::consts::{PI, TAU};

const POLAR_EPSILON: f32 = 1e-3;

/// Damped orbit around a target point, in spherical coordinates.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Azimuth around +Y, measured from +Z towards +X.
    pub theta: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    theta_delta: f32,
    phi_delta: f32,
    zoom_scale: f32,
}

impl OrbitCamera {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(ORBIT_MIN_DISTANCE);
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            auto_rotate: false,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            theta_delta: 0.0,
            phi_delta: 0.0,
            zoom_scale: 1.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    /// Queue a drag rotation; `viewport_height` normalizes pixel deltas.
    pub fn rotate_by_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.theta_delta -= TAU * delta.x / height * self.rotate_speed;
        self.phi_delta -= TAU * delta.y / height * self.rotate_speed;
    }

    /// Queue a zoom; positive steps move closer.
    pub fn zoom_by_steps(&mut self, steps: f32) {
        self.zoom_scale *= 0.95_f32.powf(self.zoom_speed * steps);
    }

    /// Advance one frame: apply auto-rotation and a damped share of the
    /// queued deltas.
    pub fn step(&mut self, dt: f32) {
        if self.auto_rotate {
            self.theta_delta -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }

        self.theta += self.theta_delta * self.damping;
        self.phi = (self.phi + self.phi_delta * self.damping).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.radius = (self.radius * self.zoom_scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);

        self.theta_delta *= 1.0 - self.damping;
        self.phi_delta *= 1.0 - self.damping;
        self.zoom_scale = 1.0;
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(CAMERA_START, Vec3::ZERO)
    }
}

pub fn spawn_orbit_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Name::new("OrbitCamera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.5,
            far: 1500.0,
            ..default()
        }),
        Transform::from_translation(orbit.eye()).looking_at(orbit.target, Vec3::Y),
    ));
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    ui_interactions: Query<&Interaction>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let over_ui = ui_interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None);
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && !over_ui && mouse_delta != Vec2::ZERO {
        let height = windows
            .single()
            .map(|window| window.height())
            .unwrap_or(720.0);
        orbit.rotate_by_pixels(mouse_delta, height);
    }

    for event in scroll_events.read() {
        let steps = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        };
        orbit.zoom_by_steps(steps);
    }

    orbit.step(time.delta_secs());
    *camera_transform = Transform::from_translation(orbit.eye()).looking_at(orbit.target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_configured_position() {
        let orbit = OrbitCamera::default();
        assert!(orbit.eye().distance(CAMERA_START) < 1e-3);
        assert!(!orbit.auto_rotate);
    }

    #[test]
    fn auto_rotate_orbits_without_changing_distance() {
        let mut orbit = OrbitCamera::default();
        orbit.auto_rotate = true;
        let start = orbit.eye();
        for _ in 0..60 {
            orbit.step(1.0 / 60.0);
        }
        assert!(orbit.eye().distance(start) > 1.0);
        assert!((orbit.eye().length() - start.length()).abs() < 1e-2);
        assert!((orbit.eye().y - start.y).abs() < 1e-3);
    }

    #[test]
    fn damping_decays_queued_rotation() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate_by_pixels(Vec2::new(100.0, 0.0), 720.0);
        let theta = orbit.theta;
        orbit.step(0.016);
        let first = (orbit.theta - theta).abs();
        let before = orbit.theta;
        orbit.step(0.016);
        let second = (orbit.theta - before).abs();
        assert!(second < first);
        assert!((second / first - (1.0 - ORBIT_DAMPING)).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom_by_steps(10_000.0);
        orbit.step(0.016);
        assert_eq!(orbit.radius, ORBIT_MIN_DISTANCE);
    }
}
