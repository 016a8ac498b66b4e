use crate::clipboard::ClipboardHandler;
use crate::summarizer::Summarizer;
use crate::ui::app::{App, AppSettings};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Run the UI loop on the current thread until the user quits.
///
/// Summarization calls are spawned on `runtime`; their results come back
/// through the event channel.
pub fn run(
    settings: AppSettings,
    tick_rate: Duration,
    summarizer: Arc<dyn Summarizer>,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(settings, summarizer, runtime, events.sender());

    match ClipboardHandler::new() {
        Ok(clipboard) => app.set_clipboard(Box::new(clipboard)),
        Err(err) => tracing::warn!(error = %err, "Clipboard unavailable, copy disabled"),
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            // Layout is recomputed on every draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SummaryReady(result)) => app.on_summary_ready(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
