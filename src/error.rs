//! Errors that can stop the service before or while it serves requests.
//!
//! Request handlers are infallible, so everything here is fatal: the binary
//! logs the error and exits with a non-zero status.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    /// An environment value could not be turned into configuration.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// The logging settings were invalid or a subscriber was already installed.
    #[error("logging error: {0}")]
    Logging(String),

    /// The listener could not be bound.
    #[error("could not bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
