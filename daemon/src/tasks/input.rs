use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::{actors::ui::UiHandle, prelude::*};

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Up,
    Down,
    Confirm,
    Focus,
    Quit,
}

fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
            KeyCode::Enter => Some(Input::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => Some(Input::Quit),
            // raw mode swallows SIGINT
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
            _ => None,
        },
        Event::FocusGained => Some(Input::Focus),
        _ => None,
    }
}

/// Reads terminal events and turns them into ui actor events until the user
/// quits or the terminal stream ends.
pub fn start_input_listener(ui: UiHandle, shutdown: CancellationToken) -> DaemonTask {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    error!("Error reading terminal input: {e}");
                    continue;
                }
            };
            match translate(&event) {
                Some(Input::Up) => ui.cursor_up().await?,
                Some(Input::Down) => ui.cursor_down().await?,
                Some(Input::Confirm) => ui.confirm().await?,
                Some(Input::Focus) => ui.menu_opened().await?,
                Some(Input::Quit) => {
                    debug!("quit requested from terminal");
                    shutdown.cancel();
                    break;
                }
                None => {}
            }
        }
        Ok::<(), Error>(())
    })
}
