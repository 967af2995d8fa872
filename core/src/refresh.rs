//! Coalescing "something changed" signal between the ingestion side and the
//! single rendering task.
//!
//! Any number of [`RefreshNotifier`] clones may raise the flag concurrently and
//! never block. The lone [`RefreshWatcher`] clears it when it checks, so a burst
//! of notifications between two checks results in exactly one rebuild. No event
//! content travels through here.
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

pub fn channel() -> (RefreshNotifier, RefreshWatcher) {
    let dirty = Arc::new(AtomicBool::new(false));
    (
        RefreshNotifier {
            dirty: dirty.clone(),
        },
        RefreshWatcher { dirty },
    )
}

#[derive(Debug, Clone)]
pub struct RefreshNotifier {
    dirty: Arc<AtomicBool>,
}

impl RefreshNotifier {
    pub fn notify(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}

/// Consumer side of the signal. Deliberately not `Clone`.
#[derive(Debug)]
pub struct RefreshWatcher {
    dirty: Arc<AtomicBool>,
}

impl RefreshWatcher {
    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod test {
    use std::thread;

    use super::*;

    #[test]
    fn test_take_clears() {
        let (notifier, watcher) = channel();
        assert!(!watcher.take());
        notifier.notify();
        assert!(watcher.take());
        assert!(!watcher.take());
    }

    #[test]
    fn test_bursts_coalesce() {
        let (notifier, watcher) = channel();
        let notifiers: Vec<_> = (0..8)
            .map(|_| {
                let notifier = notifier.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        notifier.notify();
                    }
                })
            })
            .collect();
        for handle in notifiers {
            handle.join().unwrap();
        }

        assert!(watcher.take());
        assert!(!watcher.take());
    }

    #[test]
    fn test_notify_after_take_is_seen() {
        let (notifier, watcher) = channel();
        notifier.notify();
        assert!(watcher.take());
        notifier.notify();
        assert!(watcher.take());
    }
}
