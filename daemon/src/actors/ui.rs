use termfocus_core::{
    constants::REFRESH_INTERVAL,
    events::WindowId,
    menu::Menu,
    refresh::RefreshWatcher,
    store::SessionStore,
};
use tokio::{
    sync::mpsc,
    time::{MissedTickBehavior, interval},
};
use tracing::Instrument;

use crate::{activation::WindowActivator, presenters::Presenter, prelude::*};

#[derive(Debug)]
pub enum UiEvent {
    // user picked a session (menu item clicked)
    Select { window_id: WindowId },
    // menu shown to the user, everything counts as seen
    MenuOpened,

    // interactive presenter navigation
    CursorUp,
    CursorDown,
    Confirm,

    Kill,
}
use UiEvent::*;

/// The single rendering task. Owns the presenter and the consumer side of the
/// refresh signal; nothing else ever draws.
pub struct Ui<P, A> {
    handle: UiHandle,
    rx: mpsc::Receiver<UiEvent>,
    store: SessionStore,
    refresh: RefreshWatcher,
    presenter: P,
    activator: A,
    menu: Menu,
    cursor: usize,
}

impl<P, A> Ui<P, A>
where
    P: Presenter + Send + 'static,
    A: WindowActivator + Send + Sync + 'static,
{
    #[instrument(skip_all)]
    pub fn spawn(store: SessionStore, refresh: RefreshWatcher, presenter: P, activator: A) -> (UiHandle, DaemonTask) {
        Self::new(store, refresh, presenter, activator).run()
    }

    fn new(store: SessionStore, refresh: RefreshWatcher, presenter: P, activator: A) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let handle = UiHandle { tx };
        Self {
            handle,
            rx,
            store,
            refresh,
            presenter,
            activator,
            menu: Menu::build(&[], false),
            cursor: 0,
        }
    }

    #[instrument(skip(self), name = "Ui")]
    fn run(mut self) -> (UiHandle, DaemonTask) {
        let span = tracing::Span::current();
        let handle_clone = self.handle.clone();
        let task = tokio::spawn({
            async move {
                let mut ticker = interval(REFRESH_INTERVAL);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                self.rebuild();
                loop {
                    tokio::select! {
                        Some(event) = self.rx.recv() => {
                            match event {
                                Select { window_id } => {
                                    debug!(%window_id, "Ui: Select");
                                    self.select(window_id).await;
                                }
                                MenuOpened => {
                                    debug!("Ui: MenuOpened");
                                    self.store.mark_all_seen();
                                    self.rebuild();
                                }
                                CursorUp => {
                                    trace!("Ui: CursorUp");
                                    self.cursor = self.cursor.saturating_sub(1);
                                    self.render();
                                }
                                CursorDown => {
                                    trace!("Ui: CursorDown");
                                    self.cursor = (self.cursor + 1).min(self.menu.items.len().saturating_sub(1));
                                    self.render();
                                }
                                Confirm => {
                                    debug!("Ui: Confirm");
                                    if let Some(item) = self.menu.item(self.cursor) {
                                        let window_id = item.window_id.clone();
                                        self.select(window_id).await;
                                    }
                                }
                                Kill => {
                                    debug!("Ui: Kill");
                                    break;
                                }
                            }
                        }
                        _ = ticker.tick() => {
                            if self.refresh.take() {
                                self.rebuild();
                            }
                        }
                    }
                }
                self.presenter.restore();
                debug!("ui stopped");
                Ok::<(), Error>(())
            }
            .instrument(span)
        });

        (handle_clone, task)
    }

    // activation failures are absorbed by the activator, so the seen sweep and
    // rebuild always happen
    async fn select(&mut self, window_id: WindowId) {
        self.activator.activate(&window_id).await;
        self.store.mark_all_seen();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let sessions = self.store.get_all();
        let has_unseen = self.store.has_unseen();
        self.menu = Menu::build(&sessions, has_unseen);
        self.cursor = self.cursor.min(self.menu.items.len().saturating_sub(1));
        self.render();
    }

    fn render(&mut self) {
        if let Err(e) = self.presenter.render(&self.menu, self.cursor) {
            error!("Error rendering menu: {e}");
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: mpsc::Sender<UiEvent>,
}
#[allow(unused)]
impl UiHandle {
    handle_method!(UiEvent, select, Select { window_id: WindowId });
    handle_method!(UiEvent, menu_opened, MenuOpened);
    handle_method!(UiEvent, cursor_up, CursorUp);
    handle_method!(UiEvent, cursor_down, CursorDown);
    handle_method!(UiEvent, confirm, Confirm);
    handle_method!(UiEvent, kill, Kill);
}
