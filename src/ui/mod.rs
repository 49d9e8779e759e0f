//! Terminal front end.
//!
//! `App` owns the only mutable state and routes input through the game
//! reducer; everything under `render` is a pure projection of it.

pub mod app;
pub mod board;
pub mod events;
pub mod footer;
pub mod game;
pub mod header;
pub mod info;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
