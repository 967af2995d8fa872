use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{events::WindowId, prelude::*, states::SessionInfo};

#[derive(Debug)]
struct Entry {
    // registration ordinal, kept across updates so listings stay stable
    order: u64,
    title: String,
    message: String,
    unseen: bool,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<WindowId, Entry>,
    next_order: u64,
}

/// Thread-safe map of window id to the latest reported session state.
///
/// Every operation takes the lock for the duration of a single map operation
/// and never across an await point, so a call always observes the complete
/// result of any other call. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Sessions>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the session for `window_id` and flags it unseen.
    pub fn upsert(&self, window_id: WindowId, title: impl Into<String>, message: impl Into<String>) {
        let title = title.into();
        let message = message.into();
        let mut guard = self.lock();
        let sessions = &mut *guard;
        let order = match sessions.entries.get(&window_id).map(|existing| existing.order) {
            Some(order) => order,
            None => {
                let order = sessions.next_order;
                sessions.next_order += 1;
                order
            }
        };
        trace!(%window_id, %title, "upsert session");
        sessions.entries.insert(
            window_id,
            Entry {
                order,
                title,
                message,
                unseen: true,
            },
        );
    }

    /// Removes the session if present. Returns whether anything was removed.
    pub fn remove(&self, window_id: &WindowId) -> bool {
        let removed = self.lock().entries.remove(window_id).is_some();
        trace!(%window_id, removed, "remove session");
        removed
    }

    pub fn mark_all_seen(&self) {
        for entry in self.lock().entries.values_mut() {
            entry.unseen = false;
        }
    }

    /// Independent copy of every session in registration order.
    pub fn get_all(&self) -> Vec<SessionInfo> {
        let sessions = self.lock();
        let mut entries: Vec<_> = sessions.entries.iter().collect();
        entries.sort_by_key(|(_, entry)| entry.order);
        entries
            .into_iter()
            .map(|(window_id, entry)| SessionInfo {
                window_id: window_id.clone(),
                title: entry.title.clone(),
                message: entry.message.clone(),
                unseen: entry.unseen,
            })
            .collect()
    }

    pub fn has_unseen(&self) -> bool {
        self.lock().entries.values().any(|entry| entry.unseen)
    }

    pub fn count(&self) -> usize {
        self.lock().entries.len()
    }

    // a writer that panicked mid-operation cannot leave a half written entry
    // behind (entries are replaced whole), so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
