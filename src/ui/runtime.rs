use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    let mut app = App::new(config.catalog(), config.defaults.currency_symbol.clone());
    tracing::info!(products = app.catalog().len(), "Catalog loaded");

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the event thread
    shutdown.signal();
    tracing::info!(
        revision = app.revision(),
        cart = app.shop().cart_len(),
        wishlist = app.shop().wishlist_len(),
        "UI loop finished"
    );
    drop(guard);
    Ok(())
}
