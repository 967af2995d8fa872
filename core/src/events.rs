use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{constants::TERMINATE_TITLE, prelude::*};

/// Identifier of a terminal window as reported by a producer.
///
/// Only ever holds a non-empty run of ASCII digits. The id is pasted into an
/// AppleScript source string when the window is activated, so this type is the
/// only gate between producer input and that script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WindowId(String);

impl WindowId {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(IngestError::MissingField);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IngestError::InvalidIdentifier);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WindowId {
    type Error = IngestError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<WindowId> for String {
    fn from(id: WindowId) -> Self {
        id.0
    }
}

/// A validated producer event, ready to be applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestEvent {
    Register {
        window_id: WindowId,
        title: String,
        message: String,
    },
    Terminate {
        window_id: WindowId,
    },
}

impl IngestEvent {
    /// Decodes and validates a raw request body.
    ///
    /// Checks run in a fixed order and the first failure wins: the body must be
    /// a JSON object, `window_id` and `event_title` must be non-blank, and
    /// `window_id` must be all digits. `event_msg` is optional.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let fields: Map<String, Value> =
            serde_json::from_slice(body).map_err(|e| IngestError::MalformedPayload(e.to_string()))?;

        let window_id = field_text(&fields, "window_id");
        let title = field_text(&fields, "event_title");
        let message = field_text(&fields, "event_msg");

        if window_id.is_empty() || title.is_empty() {
            return Err(IngestError::MissingField);
        }
        let window_id = WindowId::parse(&window_id)?;

        if title.eq_ignore_ascii_case(TERMINATE_TITLE) {
            Ok(Self::Terminate { window_id })
        } else {
            Ok(Self::Register {
                window_id,
                title,
                message,
            })
        }
    }
}

// producers send ids as numbers about as often as strings; numbers keep
// their exact source text, however long
fn field_text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(body: &str) -> Result<IngestEvent> {
        IngestEvent::from_slice(body.as_bytes())
    }

    #[test]
    fn test_window_id_accepts_digits() {
        let id = WindowId::parse(" 12345 ").unwrap();
        assert_eq!(id.as_str(), "12345");
        assert_eq!(id.to_string(), "12345");
    }

    #[test]
    fn test_window_id_rejects_script_injection() {
        for raw in ["abc", "12 34", "1;do shell script \"rm\"", "-1", "1.5", "١٢٣"] {
            assert_eq!(WindowId::parse(raw), Err(IngestError::InvalidIdentifier), "{raw}");
        }
        assert_eq!(WindowId::parse("   "), Err(IngestError::MissingField));
    }

    #[test]
    fn test_window_id_deserialize_validates() {
        let id: WindowId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
        assert!(serde_json::from_str::<WindowId>("\"4a\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_register_event() {
        let event = decode(r#"{"window_id": "12345", "event_title": " build ", "event_msg": "started "}"#).unwrap();
        assert_eq!(
            event,
            IngestEvent::Register {
                window_id: WindowId::parse("12345").unwrap(),
                title: "build".into(),
                message: "started".into(),
            }
        );
    }

    #[test]
    fn test_numeric_window_id_and_missing_message() {
        let event = decode(r#"{"window_id": 12345, "event_title": "build"}"#).unwrap();
        match event {
            IngestEvent::Register { window_id, message, .. } => {
                assert_eq!(window_id.as_str(), "12345");
                assert_eq!(message, "");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_oversized_numeric_window_id_keeps_its_digits() {
        let event = decode(r#"{"window_id": 123456789012345678901234567890, "event_title": "build"}"#).unwrap();
        assert_eq!(
            event,
            IngestEvent::Register {
                window_id: WindowId::parse("123456789012345678901234567890").unwrap(),
                title: "build".into(),
                message: "".into(),
            }
        );
    }

    #[test]
    fn test_terminate_is_case_insensitive() {
        for title in ["terminate", "Terminate", "TERMINATE"] {
            let body = format!(r#"{{"window_id": "7", "event_title": "{title}"}}"#);
            assert_eq!(
                decode(&body).unwrap(),
                IngestEvent::Terminate {
                    window_id: WindowId::parse("7").unwrap()
                }
            );
        }
    }

    #[test]
    fn test_malformed_payloads() {
        for body in ["not json at all", "", "[1, 2, 3]", "\"12345\"", "42"] {
            assert!(
                matches!(decode(body), Err(IngestError::MalformedPayload(_))),
                "{body:?}"
            );
        }
        let err = decode("{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(decode(r#"{"event_title": "build"}"#), Err(IngestError::MissingField));
        assert_eq!(decode(r#"{"window_id": "1"}"#), Err(IngestError::MissingField));
        assert_eq!(
            decode(r#"{"window_id": "1", "event_title": "   "}"#),
            Err(IngestError::MissingField)
        );
        assert_eq!(
            decode(r#"{"window_id": null, "event_title": "build"}"#),
            Err(IngestError::MissingField)
        );
    }

    #[test]
    fn test_missing_field_wins_over_invalid_identifier() {
        assert_eq!(decode(r#"{"window_id": "abc"}"#), Err(IngestError::MissingField));
    }

    #[test]
    fn test_non_string_identifiers_are_rejected() {
        for id in ["true", "[1]", "{\"a\": 1}", "1.5", "-3"] {
            let body = format!(r#"{{"window_id": {id}, "event_title": "build"}}"#);
            assert_eq!(decode(&body), Err(IngestError::InvalidIdentifier), "{id}");
        }
    }
}
