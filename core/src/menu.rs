use crate::{
    constants::{ICON_NORMAL, ICON_UNSEEN, UNSEEN_MARKER},
    events::WindowId,
    states::SessionInfo,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub window_id: WindowId,
    pub label: String,
    pub unseen: bool,
}

/// What a presenter draws: a header with the session count and one
/// selectable line per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// `has_unseen` comes from a separate store call than `sessions` and may be
    /// a moment newer or older. The next rebuild reconciles it.
    pub fn build(sessions: &[SessionInfo], has_unseen: bool) -> Self {
        let icon = if has_unseen { ICON_UNSEEN } else { ICON_NORMAL };
        Self {
            title: format!("{icon}{}", sessions.len()),
            items: sessions.iter().map(MenuItem::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }
}

impl From<&SessionInfo> for MenuItem {
    fn from(session: &SessionInfo) -> Self {
        let mut label = session.title.clone();
        if !session.message.is_empty() {
            label.push_str(" — ");
            label.push_str(&session.message);
        }
        if session.unseen {
            label.insert_str(0, UNSEEN_MARKER);
        }
        Self {
            window_id: session.window_id.clone(),
            label,
            unseen: session.unseen,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn session(id: &str, title: &str, message: &str, unseen: bool) -> SessionInfo {
        SessionInfo {
            window_id: WindowId::parse(id).unwrap(),
            title: title.into(),
            message: message.into(),
            unseen,
        }
    }

    #[test]
    fn test_empty_menu() {
        let menu = Menu::build(&[], false);
        assert_eq!(menu.title, "🖥0");
        assert!(menu.is_empty());
        assert!(menu.item(0).is_none());
    }

    #[test]
    fn test_labels() {
        let sessions = [
            session("1", "build", "started", true),
            session("2", "deploy", "", false),
        ];
        let menu = Menu::build(&sessions, true);

        assert_eq!(menu.title, "⚡2");
        assert_eq!(menu.items[0].label, "● build — started");
        assert_eq!(menu.items[1].label, "deploy");
        assert_eq!(menu.item(1).unwrap().window_id.as_str(), "2");
    }

    #[test]
    fn test_header_follows_has_unseen() {
        let sessions = [session("1", "build", "", true)];
        assert_eq!(Menu::build(&sessions, false).title, "🖥1");
    }
}
