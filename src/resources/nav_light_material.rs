//! Billboard material for navigation lights.
//!
//! A small alpha-blended material exposing the light's fixed tint and a
//! scalar brightness uniform to `shaders/nav_light.wgsl`.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{
    AsBindGroup, Extent3d, ShaderRef, TextureDimension, TextureFormat,
};

/// Render-side target that accepts a scalar brightness value.
///
/// The update system talks to this capability rather than to a concrete
/// material type, so the uniform push stays independent of the backend.
pub trait LightLevelTarget {
    fn set_light_level(&mut self, level: f32);
}

/// Material for a navigation light billboard.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct NavLightMaterial {
    /// Fixed tint applied at construction.
    #[uniform(0)]
    pub colour: LinearRgba,
    /// Normalized ambient brightness, updated per tick.
    #[uniform(0)]
    pub light_level: f32,
    /// Radial glow texture shared by all lights.
    #[texture(1)]
    #[sampler(2)]
    pub glow_texture: Handle<Image>,
}

impl Material for NavLightMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/nav_light.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}

impl Default for NavLightMaterial {
    fn default() -> Self {
        Self {
            colour: LinearRgba::WHITE,
            light_level: 0.0,
            glow_texture: Handle::default(),
        }
    }
}

impl LightLevelTarget for NavLightMaterial {
    fn set_light_level(&mut self, level: f32) {
        self.light_level = level;
    }
}

/// Shared handles for spawning light billboards.
#[derive(Resource)]
pub struct NavLightAssets {
    /// Unit quad, rescaled per light every tick.
    pub quad: Handle<Mesh>,
    /// Procedural radial glow standing in for a particle texture asset.
    pub glow_texture: Handle<Image>,
}

const GLOW_TEXTURE_SIZE: u32 = 64;

/// Creates the shared quad mesh and glow texture at startup.
pub fn setup_nav_light_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut images: ResMut<Assets<Image>>,
) {
    let quad = meshes.add(Rectangle::new(1.0, 1.0));
    let glow_texture = images.add(glow_image(GLOW_TEXTURE_SIZE));
    commands.insert_resource(NavLightAssets { quad, glow_texture });
    info!("Navigation light assets ready");
}

/// Builds the radial glow texture: opaque white at the centre, falling off
/// smoothly to fully transparent at the edge.
pub fn glow_image(size: u32) -> Image {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let centre = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - centre;
            let dy = y as f32 - centre;
            let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0);
            let alpha = (falloff * falloff * 255.0) as u8;
            data.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_image_dimensions() {
        let image = glow_image(32);
        assert_eq!(image.data.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_glow_image_falloff() {
        let size = 64u32;
        let image = glow_image(size);
        let alpha_at = |x: u32, y: u32| image.data[((y * size + x) * 4 + 3) as usize];
        // Bright in the centre, fully transparent in the corners.
        assert!(alpha_at(size / 2, size / 2) > 200);
        assert_eq!(alpha_at(0, 0), 0);
        assert_eq!(alpha_at(size - 1, size - 1), 0);
    }

    #[test]
    fn test_light_level_target() {
        let mut material = NavLightMaterial::default();
        material.set_light_level(0.5);
        assert_eq!(material.light_level, 0.5);
    }
}
