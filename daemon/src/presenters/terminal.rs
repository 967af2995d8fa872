use std::io::stdout;

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use ratatui::{
    DefaultTerminal,
    style::{Modifier, Style},
    widgets::{Block, List, ListItem, ListState},
};
use termfocus_core::{constants::EMPTY_PLACEHOLDER, menu::Menu};

use crate::{presenters::Presenter, prelude::*};

/// Full screen session list drawn with ratatui in the alternate screen.
pub struct TerminalPresenter {
    term: DefaultTerminal,
}

impl TerminalPresenter {
    pub fn init() -> Result<Self> {
        let term = ratatui::try_init()?;
        // focus events stand in for "menu opened"
        execute!(stdout(), EnableFocusChange)?;
        Ok(Self { term })
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, menu: &Menu, cursor: usize) -> Result<()> {
        let list_items: Vec<ListItem> = if menu.is_empty() {
            vec![ListItem::new(EMPTY_PLACEHOLDER).style(Style::default().add_modifier(Modifier::DIM))]
        } else {
            menu.items
                .iter()
                .map(|item| {
                    let style = if item.unseen {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(item.label.clone()).style(style)
                })
                .collect()
        };
        let mut state = ListState::default().with_selected((!menu.is_empty()).then_some(cursor));

        self.term.draw(|f| {
            let list = List::new(list_items.clone())
                .block(Block::bordered().title(format!(" {} ", menu.title)))
                .highlight_symbol(">> ")
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            f.render_stateful_widget(list, f.area(), &mut state);
        })?;
        Ok(())
    }

    fn restore(&mut self) {
        if let Err(e) = execute!(stdout(), DisableFocusChange) {
            warn!("Error disabling focus events: {e}");
        }
        ratatui::restore();
    }
}
