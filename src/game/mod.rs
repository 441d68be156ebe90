//! The game engine: construction, transitions, replay, undo.

pub mod engine;

pub use engine::GameEngine;
