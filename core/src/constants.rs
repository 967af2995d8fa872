use std::time::Duration;

pub const DEFAULT_PORT: u16 = 9876;

/// cadence of the ui refresh check
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(500);
/// hard upper bound on a single window activation
pub const ACTIVATION_TIMEOUT: Duration = Duration::from_secs(5);

/// reserved event title that removes a session (compared case-insensitively)
pub const TERMINATE_TITLE: &str = "terminate";

pub const ICON_NORMAL: &str = "🖥";
pub const ICON_UNSEEN: &str = "⚡";
pub const UNSEEN_MARKER: &str = "● ";
pub const EMPTY_PLACEHOLDER: &str = "No active terminals";
