// Engine modules: assets, scene nodes, timing

pub mod assets;
pub mod clock;
pub mod game_loop;
pub mod scene;
