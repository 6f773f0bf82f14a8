pub mod cli;
pub mod config;
pub mod events;
pub mod inputs;
pub mod keys;
pub mod state;

pub use state::*;
use std::time::Instant;

/// Top-level pages 🗂️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Home,
    #[default]
    Playlists,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}
