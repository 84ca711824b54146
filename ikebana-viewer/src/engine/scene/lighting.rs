use crate::settings::render_settings::{
    AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION, HEMISPHERE_GROUND_COLOR,
    HEMISPHERE_HEIGHT, HEMISPHERE_ILLUMINANCE, HEMISPHERE_SKY_COLOR,
};
use bevy::prelude::*;

pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // No hemisphere light in Bevy; two opposing unshadowed fills stand in.
    for (name, color, height) in [
        ("SkyFill", HEMISPHERE_SKY_COLOR, HEMISPHERE_HEIGHT),
        ("GroundFill", HEMISPHERE_GROUND_COLOR, -HEMISPHERE_HEIGHT),
    ] {
        commands.spawn((
            Name::new(name),
            DirectionalLight {
                color,
                illuminance: HEMISPHERE_ILLUMINANCE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_xyz(0.0, height, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_light_casts_shadows_and_fills_do_not() {
        let mut app = App::new();
        app.add_systems(Startup, spawn_lighting);
        app.update();

        let world = app.world_mut();
        let mut lights: Vec<(String, bool, f32)> = world
            .query::<(&Name, &DirectionalLight, &Transform)>()
            .iter(world)
            .map(|(name, light, transform)| {
                (name.to_string(), light.shadows_enabled, transform.forward().y)
            })
            .collect();
        lights.sort_by(|a, b| a.0.cmp(&b.0));

        let names: Vec<_> = lights.iter().map(|(name, ..)| name.as_str()).collect();
        assert_eq!(names, ["GroundFill", "KeyLight", "SkyFill"]);
        assert!(!lights[0].1 && lights[1].1 && !lights[2].1);
        // Ground fill shines upward, sky fill downward.
        assert!(lights[0].2 > 0.99);
        assert!(lights[2].2 < -0.99);
        assert!(app.world().get_resource::<AmbientLight>().is_some());
    }
}
