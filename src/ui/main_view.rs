use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};
use crate::app::{App, FocusField, MessageType, MintStatus};
use crate::constants::MESSAGE_AREA_MARGIN;
use crate::utils::format_sui_amount;
use super::utils::render_input;
use textwrap;

const LOYALTY_BANNER: &str = r#"
╦  ╔═╗╦ ╦╔═╗╦  ╔╦╗╦ ╦  ╔═╗╔═╗╦═╗╔╦╗
║  ║ ║╚╦╝╠═╣║   ║ ╚╦╝  ║  ╠═╣╠╦╝ ║║
╩═╝╚═╝ ╩ ╩ ╩╩═╝ ╩  ╩   ╚═╝╩ ╩╩╚══╩╝
"#;

/// Render the main application UI
pub fn draw_main(f: &mut Frame, app: &mut App) {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // Setup color theme
    let connected = app.wallet.is_some();
    let base_color = if connected { Color::Cyan } else { Color::Magenta };
    let highlight_color = if connected { Color::LightBlue } else { Color::LightRed };
    let dim_color = Color::DarkGray;

    // Full screen border
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(base_color));
    f.render_widget(main_block, f.size());

    // Main layout structure
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4),   // Banner
            Constraint::Length(1),   // Status indicators
            Constraint::Length(3),   // Package ID input
            Constraint::Length(3),   // Recipient input
            Constraint::Length(1),   // Customer balance line
            Constraint::Length(3),   // Image URL input
            Constraint::Min(6),      // Outcome area
            Constraint::Length(3),   // Control information
        ])
        .split(f.size());

    // Banner
    let banner = Paragraph::new(LOYALTY_BANNER.trim_matches('\n'))
        .style(Style::default().fg(highlight_color))
        .alignment(Alignment::Center);
    f.render_widget(banner, main_layout[0]);

    // System status indicators
    let status_indicators = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(main_layout[1]);

    // Display current network
    let network_status = format!("NETWORK: {}", app.network_state.get_current_network().to_uppercase());
    let network_info = Paragraph::new(network_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(network_info, status_indicators[0]);

    // Build on Sui
    let build_on_sui = Paragraph::new("╡ BUILD ON SUI ╞")
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(build_on_sui, status_indicators[1]);

    // Display wallet address and balance
    let wallet_status = match app.sui_balance {
        Some(balance) => format!("WALLET: {} ({})", app.wallet_address, format_sui_amount(balance)),
        None => format!("WALLET: {}", app.wallet_address),
    };
    let wallet_info = Paragraph::new(wallet_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(wallet_info, status_indicators[2]);

    // Input fields
    render_input(
        f, main_layout[2], "PACKAGE ID", &app.package_id,
        app.focus == FocusField::PackageId, base_color, highlight_color, time,
    );
    render_input(
        f, main_layout[3], "RECIPIENT ADDRESS", &app.mint_form.recipient,
        app.focus == FocusField::Recipient, base_color, highlight_color, time,
    );

    // Customer balance appears only while a reading exists
    if let Some(balance) = app.customer_balance {
        let customer_line = Paragraph::new(Line::from(vec![
            Span::styled("  Customer Balance: ", Style::default().fg(highlight_color)),
            Span::styled(format_sui_amount(balance), Style::default().fg(Color::Yellow)),
        ]));
        f.render_widget(customer_line, main_layout[4]);
    }

    render_input(
        f, main_layout[5], "IMAGE URL", &app.mint_form.image_url,
        app.focus == FocusField::ImageUrl, base_color, highlight_color, time,
    );

    render_outcome(f, app, main_layout[6], base_color, highlight_color);

    // Control items
    let help_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim_color));

    let help_text = if app.is_switching_network {
        vec![
            Line::from(vec![
                Span::styled("1", Style::default().fg(Color::Yellow)),
                Span::raw(": DEVNET"),
                Span::raw("  |  "),
                Span::styled("2", Style::default().fg(Color::Yellow)),
                Span::raw(": TESTNET"),
                Span::raw("  |  "),
                Span::styled("3", Style::default().fg(Color::Yellow)),
                Span::raw(": MAINNET"),
                Span::raw("  |  "),
                Span::styled("ESC", Style::default().fg(Color::Yellow)),
                Span::raw(": Cancel"),
            ]),
        ]
    } else {
        vec![
            Line::from(vec![
                Span::styled("ESC", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" QUIT"),
                Span::raw("   "),
                Span::styled("TAB", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" NEXT FIELD"),
                Span::raw("   "),
                Span::styled("ENTER", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" MINT"),
                Span::raw("   "),
                Span::styled("^N", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::raw(" NETWORK"),
            ]),
        ]
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(dim_color))
        .alignment(Alignment::Center)
        .block(help_block);
    f.render_widget(help, main_layout[7]);
}

/// Renders the mint status, success banner and message area
fn render_outcome(
    f: &mut Frame,
    app: &App,
    area: ratatui::layout::Rect,
    base_color: Color,
    highlight_color: Color,
) {
    let outcome_block = Block::default()
        .title(" << MINT STATUS >> ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let mut lines: Vec<Line> = Vec::new();

    match &app.mint_status {
        MintStatus::Idle => {
            if app.mint_form.is_submittable() {
                lines.push(Line::from(vec![
                    Span::styled(">> ", Style::default().fg(highlight_color)),
                    Span::raw("Press ENTER to mint your NFT"),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::styled(">> ", Style::default().fg(highlight_color)),
                    Span::styled(
                        "Enter a recipient address and an image URL to enable minting",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }
        MintStatus::Submitting => {
            lines.push(Line::from(vec![
                Span::styled("STATUS: ", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
                Span::styled("⟳ ", Style::default().fg(Color::Yellow)),
                Span::raw("Minting... sending transaction to network"),
            ]));
        }
        MintStatus::Succeeded(digest) => {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::styled(
                    "Success! Your loyalty card NFT has been minted.",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Transaction: ", Style::default().fg(highlight_color)),
                Span::raw(digest.as_str()),
            ]));
            if let Some(gas) = app.gas_used {
                lines.push(Line::from(vec![
                    Span::styled("Gas used: ", Style::default().fg(highlight_color)),
                    Span::raw(format_sui_amount(gas)),
                ]));
            }
            if let Some(balance) = app.sui_balance {
                lines.push(Line::from(vec![
                    Span::styled("Remaining balance: ", Style::default().fg(highlight_color)),
                    Span::raw(format_sui_amount(balance)),
                ]));
            }
        }
        MintStatus::Failed(_) => {
            lines.push(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(Color::Red)),
                Span::styled("Minting failed", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            ]));
        }
    }

    // Display pending message, wrapped to the available width
    if let Some(message) = app.error_message.as_ref().or(app.success_message.as_ref()) {
        let message_color = match app.message_type {
            MessageType::Error => Color::Red,
            MessageType::Success => Color::Green,
            MessageType::Info => Color::Yellow,
        };
        let available_width = area.width.saturating_sub(MESSAGE_AREA_MARGIN) as usize;
        lines.push(Line::from(""));
        for wrapped in textwrap::wrap(message, available_width.max(16)) {
            lines.push(Line::from(Span::styled(
                wrapped.to_string(),
                Style::default().fg(message_color),
            )));
        }
    }

    let outcome = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(outcome_block);
    f.render_widget(outcome, area);
}
