use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc::error::SendError;

use crate::actors::ui::UiEvent;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Cannot listen on 127.0.0.1:{port}: {source}")]
    Bind { port: u16, source: std::io::Error },

    #[error("Error initializing logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),

    #[error("Error joining tokio tasks: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("UI event send error: {0}")]
    UiEventSend(#[from] SendError<UiEvent>),

    #[error("Window activation timed out after {0:?}")]
    ActivationTimeout(Duration),

    #[error("Window activation exited with {status}: {stderr}")]
    ActivationFailed { status: std::process::ExitStatus, stderr: String },
}
