use termfocus_core::{constants::EMPTY_PLACEHOLDER, menu::Menu};

use crate::{presenters::Presenter, prelude::*};

/// Headless presenter: every rebuild is written to the log.
#[derive(Debug, Default)]
pub struct LogPresenter {
    last: Option<Menu>,
}

impl Presenter for LogPresenter {
    fn render(&mut self, menu: &Menu, _cursor: usize) -> Result<()> {
        if self.last.as_ref() == Some(menu) {
            return Ok(());
        }
        info!(title = %menu.title, "Menu rebuilt");
        if menu.is_empty() {
            info!("  {EMPTY_PLACEHOLDER}");
        }
        for item in &menu.items {
            info!(window_id = %item.window_id, "  {}", item.label);
        }
        self.last = Some(menu.clone());
        Ok(())
    }
}
