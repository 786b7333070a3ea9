// Retained-mode scene nodes
//
// Entities own their child nodes and flatten them into world-space draw
// commands; compositing the commands is left to the display backend.

mod graphics;
mod sprite;

pub use graphics::{FillRect, Graphics};
pub use sprite::Sprite;

use crate::engine::assets::SubTexture;
use glam::Vec2;

/// A single world-space draw operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Sprite {
        texture: SubTexture,
        position: Vec2,
        alpha: f32,
    },
    Fill {
        position: Vec2,
        size: Vec2,
        color: u32,
    },
}

/// Emit a sprite child of a node placed at `origin`
pub fn draw_sprite(origin: Vec2, sprite: &Sprite, out: &mut Vec<DrawCommand>) {
    if !sprite.is_visible() {
        return;
    }
    if let Some(texture) = sprite.texture() {
        out.push(DrawCommand::Sprite {
            texture,
            position: origin + sprite.position,
            alpha: sprite.alpha,
        });
    }
}

/// Emit every shape of a graphics child of a node placed at `origin`
pub fn draw_graphics(origin: Vec2, graphics: &Graphics, out: &mut Vec<DrawCommand>) {
    let base = origin + graphics.position;
    out.extend(graphics.shapes().iter().map(|shape| DrawCommand::Fill {
        position: base + Vec2::new(shape.x, shape.y),
        size: Vec2::new(shape.width, shape.height),
        color: shape.color,
    }));
}
