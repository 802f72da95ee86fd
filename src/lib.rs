//! Navigation lights for ship simulators built on Bevy.
//!
//! A navigation light is a billboard glow attached to a vessel. Each tick
//! its visibility is recomputed from three independent gates (viewing range,
//! angular sector relative to the vessel's heading, and a timed blink
//! sequence) and its brightness is forwarded to a per-instance shader
//! uniform. Add [`plugins::nav_lights::NavLightsPlugin`] and spawn lights
//! with [`systems::nav_light::spawn_nav_light`].

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
