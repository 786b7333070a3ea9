// Sprite scene node

use crate::engine::assets::SubTexture;
use glam::Vec2;

/// A textured quad attached to a parent node
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Offset from the parent node (pixels)
    pub position: Vec2,
    /// Opacity (0.0 = invisible, 1.0 = opaque)
    pub alpha: f32,
    /// Texture handle (None = nothing drawn)
    texture: Option<SubTexture>,
}

impl Sprite {
    /// Create an empty sprite
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            alpha: 1.0,
            texture: None,
        }
    }

    /// Create a sprite with a texture
    pub fn with_texture(position: Vec2, texture: SubTexture) -> Self {
        Self {
            position,
            alpha: 1.0,
            texture: Some(texture),
        }
    }

    pub fn texture(&self) -> Option<SubTexture> {
        self.texture
    }

    /// Swap the texture
    pub fn set_texture(&mut self, texture: SubTexture) {
        self.texture = Some(texture);
    }

    /// Whether the sprite contributes anything to the frame
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0 && self.texture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetHandle, AssetId, TileSheet};

    #[test]
    fn test_sprite_visibility() {
        let sheet = TileSheet::new(AssetHandle::new(AssetId::from_path("s.png")), 32, 64, 64);
        let mut sprite = Sprite::new(Vec2::new(-4.0, -8.0));
        assert!(!sprite.is_visible());

        sprite.set_texture(sheet.tile(0, 0).unwrap());
        assert!(sprite.is_visible());

        sprite.alpha = 0.0;
        assert!(!sprite.is_visible());
    }
}
