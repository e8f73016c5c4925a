use ratatui::Frame;
use crate::app::App;
use super::main_view;

/// Main entry point for UI rendering
pub fn draw(f: &mut Frame, app: &mut App) {
    main_view::draw_main(f, app);
}
