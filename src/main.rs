use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use rand::thread_rng;

use shiplights::components::ship::Vessel;
use shiplights::plugins::debug_ui::DebugUiPlugin;
use shiplights::plugins::nav_lights::NavLightsPlugin;
use shiplights::resources::lights_config::{LightSpec, ShipLightsSpec};
use shiplights::resources::nav_light_material::{NavLightAssets, NavLightMaterial};
use shiplights::systems::nav_light::spawn_nav_light;

/// COLREGS-style light set for the demo coaster.
const COASTER_LIGHTS: &str = include_str!("../assets/ships/coaster.lights.json");

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(NavLightsPlugin)
        .add_plugins(DebugUiPlugin)
        .add_systems(Startup, setup_scene)
        .add_systems(PostStartup, spawn_demo_lights)
        .add_systems(Update, (orbit_camera, turn_coaster))
        .run();
}

/// Marker for the vessel that slowly turns to exercise the sector gates.
#[derive(Component)]
struct Turning;

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 18.0, 120.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Night sea.
    commands.spawn((
        Name::new("Sea"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(2000.0, 2000.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.02, 0.05, 0.1),
            ..default()
        })),
    ));

    // Faint moonlight so hulls stay barely visible.
    commands.spawn((
        DirectionalLight {
            illuminance: 300.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-0.9)),
    ));

    commands.spawn((
        Name::new("Coaster"),
        Vessel,
        Turning,
        Mesh3d(meshes.add(Cuboid::new(8.0, 6.0, 40.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.15, 0.12, 0.1),
            ..default()
        })),
        Transform::from_xyz(0.0, 3.0, 0.0),
    ));

    commands.spawn((
        Name::new("Buoy"),
        Vessel,
        Mesh3d(meshes.add(Sphere::new(1.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.1, 0.1),
            ..default()
        })),
        Transform::from_xyz(80.0, 1.0, -40.0),
    ));
}

fn spawn_demo_lights(
    mut commands: Commands,
    assets: Option<Res<NavLightAssets>>,
    mut materials: ResMut<Assets<NavLightMaterial>>,
    vessels: Query<(Entity, &Name), With<Vessel>>,
) {
    let Some(assets) = assets else {
        warn!("Nav light assets missing; demo lights not spawned");
        return;
    };
    let coaster_lights = match ShipLightsSpec::from_json(COASTER_LIGHTS) {
        Ok(spec) => spec,
        Err(err) => {
            warn!("Bad demo light set: {err}");
            return;
        }
    };

    // Quick-flashing red buoy light: half a second on, half a second off,
    // visible all round.
    let buoy_light = LightSpec {
        name: "Buoy Fl R".to_string(),
        position: [0.0, 2.5, 0.0],
        colour: [1.0, 0.15, 0.1, 1.0],
        start_angle: 0.0,
        end_angle: 360.0,
        range: 500.0,
        sequence: "LLDD".to_string(),
        phase_start: 0,
        size: 1.0,
    };

    let mut rng = thread_rng();
    for (entity, name) in &vessels {
        if name.as_str() == "Coaster" {
            for light in &coaster_lights.lights {
                spawn_nav_light(&mut commands, &assets, &mut materials, entity, light, &mut rng);
            }
        } else {
            spawn_nav_light(
                &mut commands,
                &assets,
                &mut materials,
                entity,
                &buoy_light,
                &mut rng,
            );
        }
    }
    info!("Spawned demo light sets");
}

fn orbit_camera(time: Res<Time>, mut query: Query<&mut Transform, With<Camera3d>>) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    let angle = time.elapsed_secs() * 0.08;
    transform.translation = Vec3::new(angle.sin() * 120.0, 18.0, angle.cos() * 120.0);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

fn turn_coaster(
    time: Res<Time>,
    mut query: Query<&mut Transform, (With<Turning>, Without<Camera3d>)>,
) {
    for mut transform in &mut query {
        transform.rotate_y(0.03 * time.delta_secs());
    }
}
