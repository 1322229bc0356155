use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything here is terminal for the process: one notification attempt,
/// no retries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("reading config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding Slack payload")]
    Serialization(#[source] serde_json::Error),

    #[error("sending Slack webhook")]
    Transmit(#[source] reqwest::Error),

    #[error("Slack rejected delivery with status {0}")]
    DeliveryRejected(StatusCode),
}
