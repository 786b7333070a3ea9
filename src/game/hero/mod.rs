// Hero presentation
//
// Everything needed to show the heroes of a match on the tile grid:
// - Snapshots describing each turn (meta)
// - Texture tables sliced from the hero sheet
// - The animated hero entity and the roster owning them
// - Life bar drawing and layout settings

pub mod entity;
pub mod life_bar;
pub mod meta;
pub mod roster;
pub mod style;
pub mod textures;

// Re-export commonly used types
pub use entity::Hero;
pub use meta::{HeroState, Meta, MetaError, Orientation};
pub use roster::HeroRoster;
pub use style::{HeroStyle, DEFAULT_STYLE};
pub use textures::{HeroTextures, PlayerSlot, TextureSet};

/// 1-based hero identifier; also selects the hero's colour
pub type HeroId = u32;

/// Hero construction and update errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeroError {
    #[error("Hero id {id} outside 1..={max}")]
    InvalidId { id: HeroId, max: usize },

    #[error("Hero {0} already spawned")]
    DuplicateId(HeroId),

    #[error("Hero {0} not found")]
    NotFound(HeroId),

    #[error("Tile size must be positive, got {0}")]
    InvalidTileSize(f32),

    #[error("Invalid snapshot: {0}")]
    InvalidMeta(#[from] MetaError),
}
