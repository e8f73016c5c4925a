// UI module for the loyalty card minting TUI
// This module handles all the terminal UI rendering logic

mod draw;
mod main_view;
mod utils;

// Re-export the public functions
pub use draw::draw;
