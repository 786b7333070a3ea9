// Animated heroes for a tile-based 2D arena
//
// Heroes are drawn from authoritative game-state snapshots and interpolated
// between turns; the game rules themselves live elsewhere.

pub mod core;
pub mod engine;
pub mod game;
