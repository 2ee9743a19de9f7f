use reqwest::StatusCode;
use thiserror::Error;

/// Alias for results that fail with our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Things that can go wrong while talking to the registration service.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't make a usable URL out of the base URL plus the endpoint
    /// path, for example because the base URL was missing its scheme.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The HTTP round trip itself failed, for example because nothing was
    /// listening at the base URL or the connection timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server turned the registration down (a 4xx status.) We don't
    /// assume anything about the service's error schema, so this carries
    /// whatever body it sent, as text.
    #[error("the server rejected the request: {0}")]
    Client(String),

    /// The server reported an internal problem (a 5xx status.)
    #[error("the server had an internal error")]
    Server,

    /// The server answered with a status class we have no mapping for. It's
    /// not supposed to issue redirects or informational responses.
    #[error("unexpected status from the server: {0}")]
    Unexpected(StatusCode),

    /// The server said everything went fine, but the body wasn't the JSON
    /// it promised.
    #[error("could not decode the response body: {0}")]
    Decode(#[from] serde_json::Error),
}
