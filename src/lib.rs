pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod presenter;
pub mod renderer;
pub mod score;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
pub mod worm;
