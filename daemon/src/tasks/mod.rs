pub mod input;
pub mod shutdown;
