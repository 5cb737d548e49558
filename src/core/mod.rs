pub mod definitions;
pub mod engine;
pub mod game;
pub mod history;
pub mod rules;
pub mod utils;
