// Vector graphics scene node

use glam::Vec2;

/// A filled rectangle in node-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
}

/// Retained list of vector shapes, redrawn by clearing and refilling
#[derive(Debug, Clone, Default)]
pub struct Graphics {
    /// Offset from the parent node (pixels)
    pub position: Vec2,
    fill_color: Option<u32>,
    shapes: Vec<FillRect>,
}

impl Graphics {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Drop every shape and the current fill
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.fill_color = None;
    }

    /// Set the fill used by subsequent shapes
    pub fn begin_fill(&mut self, color: u32) {
        self.fill_color = Some(color);
    }

    /// Add a rectangle; ignored when no fill is active
    pub fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if let Some(color) = self.fill_color {
            self.shapes.push(FillRect {
                x,
                y,
                width,
                height,
                color,
            });
        }
    }

    pub fn shapes(&self) -> &[FillRect] {
        &self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_needs_fill() {
        let mut graphics = Graphics::new(Vec2::ZERO);
        graphics.draw_rect(0.0, 0.0, 3.0, 10.0);
        assert!(graphics.shapes().is_empty());

        graphics.begin_fill(0xff0032);
        graphics.draw_rect(0.0, 22.0, 3.0, 10.0);
        assert_eq!(graphics.shapes().len(), 1);
        assert_eq!(graphics.shapes()[0].color, 0xff0032);
    }

    #[test]
    fn test_clear_resets_fill() {
        let mut graphics = Graphics::new(Vec2::ZERO);
        graphics.begin_fill(0x00ff32);
        graphics.draw_rect(0.0, 0.0, 3.0, 32.0);
        graphics.clear();
        graphics.draw_rect(0.0, 0.0, 3.0, 32.0);
        assert!(graphics.shapes().is_empty());
    }
}
