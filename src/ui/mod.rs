pub mod app;
pub mod components;
pub mod hook;
pub mod tui;
