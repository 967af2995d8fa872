pub mod constants;
pub mod error;
pub mod events;
pub mod menu;
pub mod messages;
pub mod refresh;
pub mod states;
pub mod store;
mod prelude;
