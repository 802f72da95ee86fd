use bevy::prelude::*;

/// Marker component for entities that carry navigation lights: ships, buoys
/// and other lit structures. The entity's yaw is the heading that light
/// sectors are measured against.
#[derive(Component, Debug, Default)]
pub struct Vessel;
