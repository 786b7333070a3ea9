// Hero presentation settings

use glam::Vec2;
use std::time::Duration;

/// Layout and timing used to draw heroes
#[derive(Debug, Clone)]
pub struct HeroStyle {
    /// Pixels per grid cell
    pub tile_size: f32,
    /// Offset of the hero and blink sprites from the cell origin
    pub sprite_offset: Vec2,
    /// Offset of the life bar from the cell origin
    pub life_bar_offset: Vec2,
    /// Life bar width in pixels
    pub life_bar_width: f32,
    /// Constant blue channel of the life bar colour
    pub life_bar_blue: f32,
    /// How long the blink overlay shows after a hit or a mine
    pub blink_duration: Duration,
}

/// Style matching the 32px hero sheet
pub const DEFAULT_STYLE: HeroStyle = HeroStyle {
    tile_size: 32.0,
    // Hero tiles are drawn up and left so they overlap the cell above
    sprite_offset: Vec2::new(-4.0, -8.0),
    life_bar_offset: Vec2::new(-5.0, 0.0),
    life_bar_width: 3.0,
    life_bar_blue: 50.0,
    blink_duration: Duration::from_millis(80),
};

impl Default for HeroStyle {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

impl HeroStyle {
    /// Default style scaled to another cell size
    pub fn with_tile_size(tile_size: f32) -> Self {
        Self {
            tile_size,
            ..DEFAULT_STYLE
        }
    }
}
