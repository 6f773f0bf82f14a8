pub mod app;
pub mod artwork;
pub mod library;
pub mod player;
pub mod ui;
