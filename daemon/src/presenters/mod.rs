pub mod log;
pub mod terminal;

pub use self::{log::LogPresenter, terminal::TerminalPresenter};
use termfocus_core::menu::Menu;

use crate::prelude::*;

/// Draws the menu. Only ever called from the ui actor's task.
pub trait Presenter {
    fn render(&mut self, menu: &Menu, cursor: usize) -> Result<()>;

    /// Gives back whatever the presenter took over (e.g. the terminal).
    fn restore(&mut self) {}
}
