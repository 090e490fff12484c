use thiserror::Error;

/// Why a calculation request did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
    /// The request never got an answer (network, DNS, CORS, browser abort).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status and no error message.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The body could not be decoded into the expected response.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The backend rejected the input and said why.
    #[error("{0}")]
    Backend(String),
}

impl InvokeError {
    /// The in-band backend message, if this error carries one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            InvokeError::Backend(msg) => Some(msg),
            _ => None,
        }
    }
}
