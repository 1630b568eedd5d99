//! Deterministic simulation core for a grid-based snake game, plus the
//! terminal collaborators (clock loop, keyboard input, ratatui renderer)
//! that drive it.
//!
//! The engine in [`engine`] owns all mutable game state and advances it one
//! discrete step at a time; everything else only sends direction requests or
//! pulls read-only snapshots.

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
