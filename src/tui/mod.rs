// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod form;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config;
use crate::context::{AppContext, StandardContext};
use crate::scope::BoardScope;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

pub fn run() -> Result<()> {
    // --- 1. PREAMBLE & CONFIG ---
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("flowboard_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let ctx = StandardContext::new(None);

    if let Some(log_path) = ctx.get_log_file_path()
        && let Ok(file) = std::fs::File::create(&log_path)
    {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        );
    }
    log::info!("flowboard v{} starting", env!("CARGO_PKG_VERSION"));

    let cfg = match config::Config::load(&ctx) {
        Ok(c) => c,
        Err(e) => {
            // If the error is NOT a missing config file, it's a syntax/permission
            // error. Report it and exit instead of shadowing the user's settings
            // with defaults.
            if !config::Config::is_missing_config_error(&e) {
                eprintln!("Error loading configuration:\n{}", e);
                std::process::exit(1);
            }

            let new_config = config::Config::default();
            if let Err(e) = new_config.save(&ctx) {
                eprintln!("Warning: Could not save config file: {}", e);
            } else if let Ok(path) = config::Config::get_path_string(&ctx) {
                log::info!("Wrote default configuration to {}", path);
            }
            new_config
        }
    };

    // --- 2. STATE INIT ---
    // The scope owns the board for the whole session. Everything else reaches
    // it through handles minted here, so this is the only place a board is
    // ever constructed.
    let scope = BoardScope::mount();
    let mut app_state = AppState::new(scope.handle(), &cfg)?;

    // --- 3. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 4. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            match event {
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    if let Some(action) = handlers::handle_key_event(key, &mut app_state) {
                        if matches!(action, action::Action::Quit) {
                            break;
                        }
                        app_state.apply(action)?;
                    }
                }
                _ => {}
            }
        }
    }

    // --- 5. CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
