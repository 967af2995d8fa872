use serde::{Deserialize, Serialize};

use crate::events::WindowId;

// --------- body posted by producers ---------  //

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EventRequest {
    pub window_id: WindowId,
    pub event_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event_msg: String,
}

impl EventRequest {
    pub fn new(window_id: WindowId, event_title: impl Into<String>, event_msg: impl Into<String>) -> Self {
        Self {
            window_id,
            event_title: event_title.into(),
            event_msg: event_msg.into(),
        }
    }

    pub fn terminate(window_id: WindowId) -> Self {
        Self::new(window_id, crate::constants::TERMINATE_TITLE, "")
    }
}
