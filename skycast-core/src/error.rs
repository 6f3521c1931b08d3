use thiserror::Error;

/// Everything that can go wrong between "build the request" and "hold a
/// decoded [`Weather`](crate::Weather)".
///
/// The menu loop treats all variants alike (report, then ask for another
/// city); the split exists so each stage of the pipeline fails with its own
/// message and cause.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP call itself failed: DNS, connect, TLS, ...
    #[error("HTTP request error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with something other than 200 OK (unknown city,
    /// bad key, quota).
    #[error("API returned non-200 status code: {0}")]
    Status(u16),

    /// The connection dropped while streaming the response body.
    #[error("read response body error: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The body is not JSON, or not the shape we expect.
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
}
