use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::components::nav_light::NavLight;
use crate::resources::ambient_light::AmbientLightLevel;
use crate::resources::scenario_clock::ScenarioClock;

pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Update, debug_panel);
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    mut clock: ResMut<ScenarioClock>,
    mut ambient: ResMut<AmbientLightLevel>,
    diagnostics: Res<DiagnosticsStore>,
    lights: Query<(&Name, &NavLight, &Visibility)>,
) {
    egui::Window::new("Nav Lights").show(contexts.ctx_mut(), |ui| {
        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }
        ui.label(format!("Scenario time: {}", clock.formatted()));

        ui.separator();
        let mut paused = clock.paused;
        ui.checkbox(&mut paused, "Paused");
        if paused != clock.paused {
            clock.paused = paused;
        }
        let mut acceleration = clock.acceleration;
        ui.add(egui::Slider::new(&mut acceleration, 0.0..=60.0).text("Time acceleration"));
        if acceleration != clock.acceleration {
            clock.acceleration = acceleration;
        }
        let mut level = ambient.0;
        ui.add(egui::Slider::new(&mut level, 0..=255).text("Ambient light level"));
        if level != ambient.0 {
            ambient.0 = level;
        }

        ui.separator();
        ui.heading("Lights");
        for (name, light, visibility) in &lights {
            let state = if *visibility == Visibility::Hidden {
                "dark"
            } else {
                "lit"
            };
            let sequence = if light.sequence.is_empty() {
                "fixed"
            } else {
                light.sequence.as_str()
            };
            ui.label(format!(
                "{name}: {state} | sector {:.1}..{:.1} | range {:.0} | {sequence}",
                light.start_angle, light.end_angle, light.range
            ));
        }
    });
}
