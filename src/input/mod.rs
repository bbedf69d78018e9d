pub mod keymap;
pub mod press;
pub mod shortcuts;
pub mod target;
