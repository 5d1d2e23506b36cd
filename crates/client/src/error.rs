/// Errors from the project resource layer.
///
/// Cloneable so that state managers can keep the last failure around for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request produced no response (connect, DNS, TLS, timeout).
    #[error("Network failure: {0}")]
    Network(String),

    /// The remote returned a non-2xx status code.
    #[error("Remote error ({status}): {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response whose body is not the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build a 404 in the same shape the remote uses.
    pub fn not_found(body: impl Into<String>) -> Self {
        ClientError::Remote {
            status: 404,
            body: body.into(),
        }
    }

    /// Whether the remote reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Remote { status: 404, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
