//! Per-tick update of navigation light billboards.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::components::nav_light::NavLight;
use crate::resources::ambient_light::AmbientLightLevel;
use crate::resources::lights_config::LightSpec;
use crate::resources::nav_light_material::{LightLevelTarget, NavLightAssets, NavLightMaterial};
use crate::resources::scenario_clock::ScenarioClock;
use crate::utils::angles;

/// Billboard edge length per unit of viewing distance at the 90 degree
/// reference field of view.
const APPARENT_SIZE_FACTOR: f32 = 0.01;

/// Spawns a navigation light billboard as a child of `parent` and returns
/// its entity. Each light gets its own material instance so brightness is a
/// per-instance uniform.
pub fn spawn_nav_light(
    commands: &mut Commands,
    assets: &NavLightAssets,
    materials: &mut Assets<NavLightMaterial>,
    parent: Entity,
    spec: &LightSpec,
    rng: &mut impl Rng,
) -> Entity {
    let light = NavLight::new(
        spec.start_angle,
        spec.end_angle,
        spec.range,
        spec.sequence.clone(),
        spec.phase(),
        rng,
    );
    let material = materials.add(NavLightMaterial {
        colour: spec.colour().to_linear(),
        light_level: 0.0,
        glow_texture: assets.glow_texture.clone(),
    });
    commands
        .spawn((
            Name::new(spec.name.clone()),
            light,
            Mesh3d(assets.quad.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(spec.position())
                .with_scale(Vec3::new(spec.size, spec.size, 1.0)),
            Visibility::default(),
        ))
        .set_parent(parent)
        .id()
}

/// Recomputes every light's apparent size, visibility and brightness.
///
/// Gates run in order and only ever restrict. Without an active 3D camera
/// the whole update is skipped and the previous state persists; that is the
/// sole early-exit path.
pub fn update_nav_lights(
    clock: Res<ScenarioClock>,
    ambient: Res<AmbientLightLevel>,
    mut materials: ResMut<Assets<NavLightMaterial>>,
    camera_query: Query<(&GlobalTransform, &Projection), With<Camera3d>>,
    parent_query: Query<&GlobalTransform>,
    mut light_query: Query<(
        &mut NavLight,
        &Parent,
        &GlobalTransform,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial3d<NavLightMaterial>,
    )>,
) {
    let Ok((camera_transform, projection)) = camera_query.get_single() else {
        return;
    };
    let view_position = camera_transform.translation();
    let zoom = zoom_factor(projection);
    let level = ambient.normalized();

    for (mut light, parent, global, mut transform, mut visibility, material) in &mut light_query {
        let light_position = global.translation();
        let distance = light_position.distance(view_position);

        // Constant apparent size on screen, whatever the distance and FOV.
        let edge = distance * APPARENT_SIZE_FACTOR * zoom;
        transform.scale = Vec3::new(edge, edge, 1.0);

        let heading = parent_query
            .get(parent.get())
            .map(|p| angles::heading_deg(p.to_scale_rotation_translation().1))
            .unwrap_or(0.0);
        let bearing = angles::horizontal_bearing(light_position, view_position);
        let local_bearing = bearing - heading;

        *visibility = if light.visible_from(distance, local_bearing, clock.elapsed) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        // Push the brightness uniform only when it changed; rewriting the
        // asset every frame would re-extract it needlessly.
        if light.pushed_level != Some(level) {
            if let Some(mat) = materials.get_mut(&material.0) {
                mat.set_light_level(level);
                light.pushed_level = Some(level);
            }
        }
    }
}

/// Turns every light quad towards the active camera. The quad's normal is
/// its local +Z; the rotation is expressed in the parent's frame so the
/// child transform stays local.
pub fn face_nav_light_billboards(
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    parent_query: Query<&GlobalTransform>,
    mut light_query: Query<(&Parent, &GlobalTransform, &mut Transform), With<NavLight>>,
) {
    let Ok(camera_transform) = camera_query.get_single() else {
        return;
    };
    let view_position = camera_transform.translation();

    for (parent, global, mut transform) in &mut light_query {
        let Some(to_camera) = (view_position - global.translation()).try_normalize() else {
            continue;
        };
        let facing = Quat::from_rotation_arc(Vec3::Z, to_camera);
        let parent_rotation = parent_query
            .get(parent.get())
            .map(|p| p.to_scale_rotation_translation().1)
            .unwrap_or(Quat::IDENTITY);
        transform.rotation = parent_rotation.inverse() * facing;
    }
}

/// Horizontal field of view relative to the 90 degree reference, derived
/// from the camera's vertical FOV and aspect ratio. Orthographic views keep
/// the reference zoom.
fn zoom_factor(projection: &Projection) -> f32 {
    match projection {
        Projection::Perspective(p) => {
            let hfov = 2.0 * ((p.fov / 2.0).tan() * p.aspect_ratio).atan();
            hfov / FRAC_PI_2
        }
        _ => 1.0,
    }
}

/// Replaces a light's local offset from its parent outright.
pub fn set_light_position(transform: &mut Transform, position: Vec3) {
    transform.translation = position;
}

/// Nudges a light's local offset by independent per-axis deltas.
pub fn move_light(transform: &mut Transform, delta: Vec3) {
    transform.translation += delta;
}

/// The light's world-space position as of the last transform propagation.
pub fn light_world_position(global: &GlobalTransform) -> Vec3 {
    global.translation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_at_reference_fov() {
        let projection = Projection::Perspective(PerspectiveProjection {
            fov: FRAC_PI_2,
            aspect_ratio: 1.0,
            ..default()
        });
        assert!((zoom_factor(&projection) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_widens_with_aspect_ratio() {
        let projection = Projection::Perspective(PerspectiveProjection {
            fov: FRAC_PI_2,
            aspect_ratio: 2.0,
            ..default()
        });
        // hfov = 2 * atan(2) ~ 126.87 degrees.
        let expected = 2.0 * 2.0_f32.atan() / FRAC_PI_2;
        assert!((zoom_factor(&projection) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_orthographic_fallback() {
        let projection = Projection::Orthographic(OrthographicProjection::default_3d());
        assert_eq!(zoom_factor(&projection), 1.0);
    }

    #[test]
    fn test_position_helpers() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        move_light(&mut transform, Vec3::new(0.5, -1.0, 0.0));
        assert_eq!(transform.translation, Vec3::new(1.5, 1.0, 3.0));
        set_light_position(&mut transform, Vec3::splat(4.0));
        assert_eq!(transform.translation, Vec3::splat(4.0));
    }

    #[test]
    fn test_world_position_accessor() {
        let global = GlobalTransform::from(Transform::from_xyz(7.0, 8.0, 9.0));
        assert_eq!(light_world_position(&global), Vec3::new(7.0, 8.0, 9.0));
    }
}
