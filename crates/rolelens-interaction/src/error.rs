//! Generation-service failure taxonomy.

use thiserror::Error;

/// A failure while calling the chat-completion service.
///
/// Every variant is terminal for the one request that produced it: the
/// caller converts it to user-visible text and never retries. There is
/// deliberately no retryable/fatal distinction.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to parse completion response: {0}")]
    MalformedResponse(String),

    /// The response decoded cleanly but carried no completion text.
    #[error("completion response contained no content")]
    EmptyCompletion,
}
