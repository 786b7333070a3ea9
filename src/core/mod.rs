// Core utilities shared by the engine and game layers

pub mod easing;
pub mod math;
