pub mod input;
pub mod logging;
pub mod player;
pub mod ui;
