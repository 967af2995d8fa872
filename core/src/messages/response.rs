use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{events::WindowId, states::SessionInfo};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[display("registered")]
    Registered,
    #[display("removed")]
    Removed,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EventResponse {
    pub status: EventStatus,
    pub window_id: WindowId,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SessionsResponse {
    pub count: usize,
    pub has_unseen: bool,
    pub sessions: Vec<SessionInfo>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_event_response_wire_format() {
        let res = EventResponse {
            status: EventStatus::Removed,
            window_id: WindowId::parse("12345").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"status": "removed", "window_id": "12345"})
        );
        assert_eq!(EventStatus::Registered.to_string(), "registered");
    }
}
