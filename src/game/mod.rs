// Game-side presentation: entities that turn game state into scene nodes

pub mod hero;
