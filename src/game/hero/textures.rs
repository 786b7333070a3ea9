// Hero texture tables
//
// The hero sheet holds one row per player colour and one column per facing.
// Crowned variants sit five columns to the right; row 4 holds the white
// silhouettes used for the blink overlay.

use super::meta::Orientation;
use super::HeroId;
use crate::engine::assets::{load_tile_sheet, AssetError, AssetLoader, SubTexture, TileSheet};

/// Image holding every hero tile
pub const HERO_SHEET: &str = "heroes.png";

/// Pixel size of one hero tile in the sheet
pub const HERO_TILE_SIZE: u32 = 32;

/// Sheet rows for hero ids 1, 2, 3, ...
pub const PLAYER_RANKS: [u32; 4] = [3, 2, 1, 0];

/// Column shift from a normal tile to its crowned variant
pub const CROWN_COLUMN_OFFSET: u32 = 5;

/// Row holding the blink silhouettes
pub const BLINK_ROW: u32 = 4;

/// One texture per orientation, indexed by [`Orientation::index`]
pub type OrientedTextures = [SubTexture; 4];

/// Which table a hero draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSet {
    Normal,
    /// Worn by the hero currently winning
    Crowned,
}

impl TextureSet {
    pub fn for_winning(winning: bool) -> Self {
        if winning {
            Self::Crowned
        } else {
            Self::Normal
        }
    }
}

/// Validated column of the texture tables
///
/// Only obtainable through [`HeroTextures::slot`], so lookups never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSlot(usize);

impl PlayerSlot {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Immutable texture lookup shared by every hero
#[derive(Debug, Clone)]
pub struct HeroTextures {
    normal: Vec<OrientedTextures>,
    crowned: Vec<OrientedTextures>,
    blink: OrientedTextures,
}

impl HeroTextures {
    /// Slice every table out of the hero sheet
    pub fn build(sheet: &TileSheet) -> Result<Self, AssetError> {
        let normal = PLAYER_RANKS
            .iter()
            .map(|&row| oriented(sheet, row, 0))
            .collect::<Result<Vec<_>, _>>()?;
        let crowned = PLAYER_RANKS
            .iter()
            .map(|&row| oriented(sheet, row, CROWN_COLUMN_OFFSET))
            .collect::<Result<Vec<_>, _>>()?;
        let blink = oriented(sheet, BLINK_ROW, 0)?;

        Ok(Self {
            normal,
            crowned,
            blink,
        })
    }

    /// Load the hero sheet from disk and build the tables
    pub fn load(loader: &AssetLoader) -> Result<Self, AssetError> {
        let sheet = load_tile_sheet(loader, HERO_SHEET, HERO_TILE_SIZE)?;
        Self::build(&sheet)
    }

    /// Number of player colours available
    pub fn player_count(&self) -> usize {
        self.normal.len()
    }

    /// Resolve a 1-based hero id to its table column
    pub fn slot(&self, id: HeroId) -> Option<PlayerSlot> {
        let index = (id as usize).checked_sub(1)?;
        (index < self.player_count()).then_some(PlayerSlot(index))
    }

    pub fn hero(&self, set: TextureSet, slot: PlayerSlot, orientation: Orientation) -> SubTexture {
        let table = match set {
            TextureSet::Normal => &self.normal,
            TextureSet::Crowned => &self.crowned,
        };
        table[slot.0][orientation.index()]
    }

    pub fn blink(&self, orientation: Orientation) -> SubTexture {
        self.blink[orientation.index()]
    }

    /// The whole blink table
    pub fn blink_textures(&self) -> &OrientedTextures {
        &self.blink
    }
}

fn oriented(sheet: &TileSheet, row: u32, column_offset: u32) -> Result<OrientedTextures, AssetError> {
    let tile = |o: Orientation| sheet.tile(o.atlas_column() + column_offset, row);
    Ok([
        tile(Orientation::North)?,
        tile(Orientation::East)?,
        tile(Orientation::South)?,
        tile(Orientation::West)?,
    ])
}
