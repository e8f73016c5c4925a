use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render a single-line text input with a blinking cursor when focused
pub fn render_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    base_color: Color,
    highlight_color: Color,
    time: u64,
) {
    let border_color = if focused { highlight_color } else { base_color };
    let input_block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let blink_cursor = time % 2 == 0;
    let cursor = if focused && blink_cursor { "█" } else { "" };

    let input = Paragraph::new(format!("{}{}", value, cursor))
        .style(Style::default().fg(Color::White))
        .block(input_block);
    f.render_widget(input, area);
}
