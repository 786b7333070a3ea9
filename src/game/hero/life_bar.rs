// Life bar drawn beside each hero

use crate::core::math::{clamp, smoothstep};
use crate::engine::scene::Graphics;

/// Pack channels into 0xRRGGBB, truncating each toward zero
pub fn rgb(r: f32, g: f32, b: f32) -> u32 {
    let channel = |c: f32| clamp(c, 0.0, 255.0) as u32;
    channel(r) << 16 | channel(g) << 8 | channel(b)
}

/// Bar height in pixels for a cell of `tile_size`
pub fn bar_height(tile_size: f32, life: f32) -> f32 {
    (tile_size * clamp(life, 0.0, 100.0) / 100.0).round()
}

/// Bar colour: red below 60 life (full at 30), green above 0 (full at 90)
pub fn bar_color(life: f32, blue: f32) -> u32 {
    let life = clamp(life, 0.0, 100.0);
    rgb(
        255.0 * smoothstep(60.0, 30.0, life),
        255.0 * smoothstep(0.0, 90.0, life),
        blue,
    )
}

/// Redraw the bar, bottom-anchored in the cell
pub fn draw(graphics: &mut Graphics, tile_size: f32, width: f32, blue: f32, life: f32) {
    let height = bar_height(tile_size, life);
    graphics.clear();
    graphics.begin_fill(bar_color(life, blue));
    graphics.draw_rect(0.0, tile_size - height, width, height);
}
