// Engine modules: timing, input, physics, assets

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
