use serde::{Deserialize, Serialize};

use crate::events::WindowId;

/// point-in-time copy of a tracked session, as handed out by the store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub window_id: WindowId,
    pub title: String,
    pub message: String,
    pub unseen: bool,
}
