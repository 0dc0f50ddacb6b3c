use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Apply one event to the app. A disconnected channel means the input
/// thread has stopped, so no further input can arrive.
fn dispatch(app: &mut App, event: Result<AppEvent, RecvTimeoutError>) -> io::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Paste(text)) => app.on_paste(&text),
        Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
        Ok(AppEvent::Resize(..)) => app.on_resize(),
        Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
        Err(RecvTimeoutError::Disconnected) => {
            tracing::error!("Terminal input stopped");
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal input stopped unexpectedly",
            ));
        }
    }
    Ok(())
}

/// Run the terminal UI until the user quits.
pub fn run(config: &Config, initial_items: Vec<String>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(&config.ui);
    app.add_initial_items(initial_items);
    let events = EventHandler::new(tick_rate)?;
    tracing::info!(items = app.store().len(), "UI started");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        dispatch(&mut app, events.next(tick_rate))?;
    }

    drop(guard);
    tracing::info!(items = app.store().len(), "UI stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    #[test]
    fn disconnected_input_is_an_error() {
        let mut app = App::new(&UiConfig::default());
        let err = dispatch(&mut app, Err(RecvTimeoutError::Disconnected)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(!app.should_quit());
    }

    #[test]
    fn timeout_counts_as_tick() {
        let mut app = App::new(&UiConfig::default());
        assert!(dispatch(&mut app, Err(RecvTimeoutError::Timeout)).is_ok());
    }

    #[test]
    fn paste_reaches_new_item_field() {
        let mut app = App::new(&UiConfig::default());
        dispatch(&mut app, Ok(AppEvent::Paste("Buy milk".to_string()))).unwrap();
        assert_eq!(app.new_item_input().value(), "Buy milk");
    }
}
