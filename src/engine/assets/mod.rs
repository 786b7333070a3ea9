// Asset management system
//
// Locates image files on disk and slices tile sheets into sub-textures.

mod atlas;
mod handle;
mod loader;

pub use atlas::{AtlasRegion, SubTexture, TileSheet};
pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use loader::{AssetLoader, TEXTURE_DIRECTORY};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Tile ({column}, {row}) outside sheet of {columns}x{rows} tiles")]
    TileOutOfBounds {
        column: u32,
        row: u32,
        columns: u32,
        rows: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a tile sheet from the texture directory
pub fn load_tile_sheet(
    loader: &AssetLoader,
    name: &str,
    tile_size: u32,
) -> Result<TileSheet, AssetError> {
    let bytes = loader.load_texture_bytes(name)?;
    let sheet = TileSheet::from_image_bytes(name, &bytes, tile_size)?;
    log::info!(
        "Loaded tile sheet {} ({}x{} tiles of {}px)",
        name,
        sheet.columns(),
        sheet.rows(),
        tile_size
    );
    Ok(sheet)
}
