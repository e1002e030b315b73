use std::time::Duration;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use crossterm::event::KeyCode;
use guide_reader::ui::{
    App, AppMode, Event, EventHandler, TerminalGuard, init_panic_hook, init_tui,
};
use guide_reader::{export, launch, logging};
use log::info;
use ratatui::Terminal;
use ratatui::backend::Backend as RatatuiBackend;

/// Tick rate of the event pump; doubles as the scroll animation frame
/// rate.
const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<()>
{
    // Parse command line arguments
    let matches = Command::new("guide_reader")
        .about("A terminal viewer for the Ezmedtech sales-team training guide")
        .after_help(format!(
            "Logs are written to the following file: {}",
            logging::log_file_path().display()
        ))
        .arg(
            Arg::new("dump")
                .long("dump")
                .help("Write the guide to stdout and exit (pipe it to lpr to print)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear-log")
                .long("clear-log")
                .help("Remove the log file and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Dump is the print path: no terminal setup, just the text.
    if matches.get_flag("dump")
    {
        print!("{}", export::render_export());
        return Ok(());
    }

    if matches.get_flag("clear-log")
    {
        logging::clear_log_file()?;
        println!("Log file removed");
        return Ok(());
    }

    logging::init_logging()?;
    init_panic_hook();

    // Use RAII to ensure terminal cleanup happens
    let _terminal_guard = TerminalGuard::new()?;
    let mut terminal = init_tui()?;

    let app = App::new();
    info!("Opened the training guide");

    let event_handler = EventHandler::new(TICK_RATE);

    // Terminal is cleaned up automatically when _terminal_guard is dropped
    run_app(&mut terminal, app, &event_handler)
}

/// Run the main loop: draw, wait for an event, dispatch on the current
/// mode.
///
/// # Errors
///
/// Returns an error if the terminal fails to draw to the screen or the
/// event channel disconnects.
fn run_app<T: RatatuiBackend>(
    terminal: &mut Terminal<T>,
    mut app: App,
    event_handler: &EventHandler,
) -> Result<()>
where
    T::Error: Send + Sync + 'static,
{
    loop
    {
        terminal.draw(|frame| app.render(frame))?;

        match event_handler.next()?
        {
            Event::Tick => app.tick(),

            Event::Key(key) =>
            {
                match (app.mode, key.code)
                {
                    // Quit with 'q' in normal mode
                    (AppMode::Normal, KeyCode::Char('q')) =>
                    {
                        app.should_quit = true;
                    }

                    // Help toggle with '?'
                    (AppMode::Normal | AppMode::Help, KeyCode::Char('?')) |
                    (AppMode::Help, KeyCode::Esc) =>
                    {
                        app.toggle_help();
                    }

                    // Sidebar toggle with 't'
                    (AppMode::Normal, KeyCode::Char('t')) =>
                    {
                        app.toggle_sidebar();
                    }

                    // Content scrolling in normal mode
                    (AppMode::Normal, KeyCode::Char('j') | KeyCode::Down) =>
                    {
                        app.scroll_down(1);
                    }
                    (AppMode::Normal, KeyCode::Char('k') | KeyCode::Up) =>
                    {
                        app.scroll_up(1);
                    }
                    // 2 for borders
                    (AppMode::Normal, KeyCode::Char('f') | KeyCode::PageDown) =>
                    {
                        app.scroll_down(
                            terminal
                                .size()?
                                .height
                                .saturating_sub(2)
                                .into(),
                        );
                    }
                    (AppMode::Normal, KeyCode::Char('b') | KeyCode::PageUp) =>
                    {
                        app.scroll_up(
                            terminal
                                .size()?
                                .height
                                .saturating_sub(2)
                                .into(),
                        );
                    }
                    (AppMode::Normal, KeyCode::Char('g')) =>
                    {
                        app.scroll_to_start();
                    }
                    (AppMode::Normal, KeyCode::Char('G')) =>
                    {
                        app.scroll_to_end();
                    }

                    // Sidebar navigation
                    (AppMode::Normal, KeyCode::Tab) =>
                    {
                        app.cursor_next();
                    }
                    (AppMode::Normal, KeyCode::BackTab) =>
                    {
                        app.cursor_previous();
                    }
                    (AppMode::Normal, KeyCode::Enter) =>
                    {
                        app.select_under_cursor();
                    }

                    // Section filter handling
                    (AppMode::Normal, KeyCode::Char('/')) =>
                    {
                        app.enter_search_mode();
                    }
                    (AppMode::Search, KeyCode::Enter) =>
                    {
                        app.exit_search_mode(true);
                    }
                    (AppMode::Search, KeyCode::Esc) =>
                    {
                        app.exit_search_mode(false);
                    }
                    (AppMode::Search, KeyCode::Backspace) =>
                    {
                        app.pop_search_char();
                    }
                    (AppMode::Search, KeyCode::Char(character)) =>
                    {
                        app.push_search_char(character);
                    }

                    // Export and the marketing link
                    (AppMode::Normal, KeyCode::Char('p')) =>
                    {
                        app.export_guide();
                    }
                    (AppMode::Normal, KeyCode::Char('o')) =>
                    {
                        launch::open_marketing_site();
                    }

                    _ =>
                    {} // Ignore other key combinations
                }
            }

            // The next draw picks up the new size
            Event::Resize(..) =>
            {}
        }

        if app.should_quit
        {
            break;
        }
    }

    Ok(())
}
