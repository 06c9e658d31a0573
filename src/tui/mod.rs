pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Stage;
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        // Handle events
        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    ratatui::restore();

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation
                KeyCode::Char('j') | KeyCode::Down => app.move_cursor(true),
                KeyCode::Char('k') | KeyCode::Up => app.move_cursor(false),

                // Panel focus (preferences screen only)
                KeyCode::Tab => {
                    if matches!(app.session.stage(), Stage::Preferences) {
                        app.cycle_panel();
                    }
                }

                // Toggle a subject/interest, or pick a quiz option
                KeyCode::Char(' ') => app.toggle_current(),

                // Forward through the wizard
                KeyCode::Enter => app.advance(),

                // Back one stage
                KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_back(),

                // Start over (once results are on screen)
                KeyCode::Char('r') => {
                    if matches!(app.session.stage(), Stage::Results | Stage::Institutes) {
                        app.restart();
                    }
                }

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
