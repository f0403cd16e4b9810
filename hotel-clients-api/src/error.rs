use thiserror::Error;

/// Unified error type for every operation against the hotel API.
///
/// The variants follow the failure classes a form can end up in:
/// transport problems, a status code outside the operation's success
/// criterion, and a response body that could not be decoded. None of them
/// is retried; the caller renders the message inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, body read failure.
    #[error("could not reach the server: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The request did not complete in time.
    #[error("the server did not answer in time: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a status outside the success criterion.
    #[error("server error: {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("could not process the response: {detail}")]
    Decode {
        /// Details about the parse failure.
        detail: String,
    },

    /// The request body could not be encoded.
    #[error("could not prepare the request: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// 是否为传输层错误（连接、超时），用于日志分级。
    ///
    /// 传输层错误使用 `warn` 级别，其余使用 `error` 级别。
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
