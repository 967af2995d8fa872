pub mod request;
pub mod response;

pub use request::EventRequest;
pub use response::{ErrorResponse, EventResponse, EventStatus, SessionsResponse};
