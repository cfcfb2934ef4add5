//! Viewer main function that can be called from main.rs
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io;
use std::time::Instant;
use tracing::debug;

use answer_render::answer::config::AnswerConfig;
use answer_render::answer::message::MessageView;

use super::app::App;
use super::ui;

/// Run the viewer for one message
pub fn run_viewer(view: MessageView, config: AnswerConfig) -> io::Result<()> {
    let title = if view.message().id.is_empty() {
        "message".to_string()
    } else {
        view.message().id.clone()
    };
    let mut app = App::new(view, &config);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &title);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    title: &str,
) -> io::Result<()> {
    let tick_interval = app.tick_interval;
    let mut last_tick = Instant::now();

    loop {
        app.clamp_scroll(ui::body_lines(app).len());
        terminal.draw(|frame| {
            ui::render(frame, app, title);
        })?;

        // Wait for input no longer than the time left until the next reveal tick
        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
                if app.should_quit {
                    debug!("viewer closed");
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
