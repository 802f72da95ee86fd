//! Per-vessel light set definitions.
//!
//! A vessel's navigation lights are described by a small JSON document
//! (position, colour, sector, range, sequence and phase per light),
//! mirroring the per-ship light entries of classic bridge simulators.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::components::nav_light::BlinkPhase;

/// Failure to read or parse a light-set file.
#[derive(Debug, Error)]
pub enum LightsSpecError {
    #[error("failed to read light set: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse light set: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One light entry of a vessel's light set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightSpec {
    /// Display name, shown in the debug overlay.
    #[serde(default = "default_name")]
    pub name: String,
    /// Local offset from the vessel origin.
    pub position: [f32; 3],
    /// RGBA tint, each channel 0.0..=1.0.
    pub colour: [f32; 4],
    /// Sector start in degrees; may be negative as written.
    pub start_angle: f32,
    /// Sector end in degrees.
    pub end_angle: f32,
    /// Maximum viewing distance in world units.
    pub range: f32,
    /// Blink sequence; empty for a fixed light.
    #[serde(default)]
    pub sequence: String,
    /// 1-based phase start into the sequence; 0 requests a random phase.
    #[serde(default)]
    pub phase_start: u32,
    /// Billboard edge length before the first update rescales it.
    #[serde(default = "default_size")]
    pub size: f32,
}

fn default_name() -> String {
    "NavLight".to_string()
}

fn default_size() -> f32 {
    1.0
}

impl LightSpec {
    /// Blink phase encoded by `phase_start` (0 means randomized).
    pub fn phase(&self) -> BlinkPhase {
        if self.phase_start == 0 {
            BlinkPhase::Random
        } else {
            BlinkPhase::AtChar(self.phase_start)
        }
    }

    pub fn colour(&self) -> Color {
        let [r, g, b, a] = self.colour;
        Color::srgba(r, g, b, a)
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// A vessel's complete set of navigation lights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipLightsSpec {
    pub lights: Vec<LightSpec>,
}

impl ShipLightsSpec {
    /// Parses a light set from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LightsSpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a light set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LightsSpecError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
