use std::net::SocketAddr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not load the Leptos configuration: {0}")]
    Configuration(String),

    #[error("Invalid value `{value}' for {name}: {error}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        error: String,
    },

    #[error("Could not listen on `{addr}': {error}")]
    Bind {
        error: std::io::Error,
        addr: SocketAddr,
    },

    #[error("Server stopped: {0}")]
    Serve(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
