use bevy::prelude::*;

/// Externally supplied scene brightness, 0 (darkness) to 255 (full
/// daylight). The simulator writes it each tick; the light update reads it
/// and forwards the normalized value to the shaders.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientLightLevel(pub u8);

impl AmbientLightLevel {
    /// Brightness as the normalized scalar handed to shaders.
    pub fn normalized(self) -> f32 {
        self.0 as f32 / 256.0
    }
}
