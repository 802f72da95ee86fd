//! Plugin wiring for navigation lights.

use bevy::prelude::*;

use crate::resources::ambient_light::AmbientLightLevel;
use crate::resources::nav_light_material::{setup_nav_light_assets, NavLightMaterial};
use crate::resources::scenario_clock::{advance_scenario_clock, ScenarioClock};
use crate::systems::nav_light::{face_nav_light_billboards, update_nav_lights};

/// Adds navigation light support: the billboard material, the scenario
/// clock, the ambient brightness input and the per-tick update systems.
pub struct NavLightsPlugin;

impl Plugin for NavLightsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<NavLightMaterial>::default())
            .init_resource::<ScenarioClock>()
            .init_resource::<AmbientLightLevel>()
            .add_systems(Startup, setup_nav_light_assets)
            .add_systems(
                Update,
                (
                    advance_scenario_clock,
                    update_nav_lights,
                    face_nav_light_billboards,
                )
                    .chain(),
            );
    }
}
