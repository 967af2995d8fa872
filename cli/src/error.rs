use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error initializing logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),

    #[error("Error connecting to termfocus at {url}: {source}")]
    Connecting { url: String, source: reqwest::Error },

    #[error("termfocus rejected the request ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    #[error("Unexpected response from termfocus: {0}")]
    Response(#[from] reqwest::Error),
}
