// Tile atlas slicing
//
// A tile sheet is a single image cut into a grid of square tiles. Slicing a
// tile yields a `SubTexture`: the sheet handle plus the tile's region.

use super::{AssetError, AssetHandle, AssetId, TextureHandle};
use glam::Vec2;
use image::GenericImageView;

/// A region within a texture atlas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Position in the atlas (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl AtlasRegion {
    /// Create a new atlas region with calculated UV coordinates
    pub fn new(x: u32, y: u32, width: u32, height: u32, atlas_width: u32, atlas_height: u32) -> Self {
        let uv_min = Vec2::new(
            x as f32 / atlas_width as f32,
            y as f32 / atlas_height as f32,
        );
        let uv_max = Vec2::new(
            (x + width) as f32 / atlas_width as f32,
            (y + height) as f32 / atlas_height as f32,
        );

        Self {
            x,
            y,
            width,
            height,
            uv_min,
            uv_max,
        }
    }
}

/// Handle to a tile cut out of a sheet
///
/// Two sub-textures are equal when they point at the same region of the same sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubTexture {
    pub sheet: TextureHandle,
    pub region: AtlasRegion,
}

/// An image sliced into square tiles
#[derive(Debug, Clone)]
pub struct TileSheet {
    handle: TextureHandle,
    tile_size: u32,
    width: u32,
    height: u32,
}

impl TileSheet {
    /// Describe an already loaded sheet
    pub fn new(handle: TextureHandle, tile_size: u32, width: u32, height: u32) -> Self {
        Self {
            handle,
            tile_size,
            width,
            height,
        }
    }

    /// Decode an encoded image (PNG/JPEG) and describe it as a tile sheet
    pub fn from_image_bytes(name: &str, bytes: &[u8], tile_size: u32) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadError(format!("Failed to decode {}: {}", name, e)))?;
        let (width, height) = img.dimensions();

        Ok(Self::new(
            AssetHandle::new(AssetId::from_path(name)),
            tile_size,
            width,
            height,
        ))
    }

    /// Number of whole tiles per row
    pub fn columns(&self) -> u32 {
        self.width / self.tile_size.max(1)
    }

    /// Number of whole tiles per column
    pub fn rows(&self) -> u32 {
        self.height / self.tile_size.max(1)
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    /// Cut the tile at grid coordinates (column, row)
    pub fn tile(&self, column: u32, row: u32) -> Result<SubTexture, AssetError> {
        if column >= self.columns() || row >= self.rows() {
            return Err(AssetError::TileOutOfBounds {
                column,
                row,
                columns: self.columns(),
                rows: self.rows(),
            });
        }

        let region = AtlasRegion::new(
            column * self.tile_size,
            row * self.tile_size,
            self.tile_size,
            self.tile_size,
            self.width,
            self.height,
        );

        Ok(SubTexture {
            sheet: self.handle,
            region,
        })
    }
}
