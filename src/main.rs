use anyhow::Result;
use crossterm::{
    event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{io, time::Duration};

mod app;
mod constants;
mod utils;
mod wallet;
mod ui;
mod transactions;

use app::{App, MessageType, MintStatus};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application state
    let app = App::new().await?;

    // Run the app
    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if crossterm_event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = crossterm_event::read()? {
                if app.is_switching_network {
                    // only handle selection keys while the switcher is open
                    match key.code {
                        KeyCode::Char('1') | KeyCode::Char('2') | KeyCode::Char('3') => {
                            let network_index = match key.code {
                                KeyCode::Char('1') => 0,  // DEVNET
                                KeyCode::Char('2') => 1,  // TESTNET
                                KeyCode::Char('3') => 2,  // MAINNET
                                _ => unreachable!(),
                            };
                            app.switch_to_network(network_index);
                            app.update_network().await?;
                        }
                        KeyCode::Esc | KeyCode::Char('n') => {
                            app.cancel_network_switch();
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if app.mint_status != MintStatus::Submitting {
                            app.start_network_switch();
                        }
                    }
                    KeyCode::Tab => {
                        app.focus_next();
                    }
                    KeyCode::BackTab => {
                        app.focus_previous();
                    }
                    KeyCode::Enter => {
                        // The mint action is disabled until both fields
                        // are filled; the workflow re-checks as well.
                        if app.mint_form.is_submittable() {
                            if let Err(e) = app.mint_loyalty().await {
                                app.set_message(MessageType::Error, format!("Error: {}", e));
                            }
                        }
                    }
                    KeyCode::Backspace => {
                        app.handle_backspace().await;
                    }
                    KeyCode::Char(c) => {
                        app.handle_input_char(c).await;
                    }
                    _ => {}
                }
            }
        }
    }
}
