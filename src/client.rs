use crate::error::{self, Error};
use crate::register;
use serde::de::DeserializeOwned;
use url::Url;

/// The address the development server listens on. [`Client::default`] points
/// here so the common local setup needs no configuration at all.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Client for the registration API.
#[derive(Debug, Clone)]
pub struct Client {
    /// The server registrations go to. Should only be the scheme and
    /// address, e.g. `http://127.0.0.1:8000/`.
    pub base_url: String,
}

impl Client {
    /// Construct a client that talks to the given server.
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Register a new account with the server.
    ///
    /// ## Errors
    ///
    /// `Error::UrlParse` if the base URL doesn't parse; otherwise the same
    /// as `handle_response`.
    pub async fn register(
        &self,
        http: &reqwest::Client,
        req: &register::Req,
    ) -> error::Result<register::Resp> {
        let url = Url::parse(&self.base_url)?.join(register::PATH)?;

        Self::handle_response(http.post(url).json(req)).await
    }

    /// Send a request and turn the response into a result, interpreting
    /// status classes in a standard way.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` if the server returned a success (2xx) and the body
    ///   decoded as JSON
    /// - `Error::Decode` if the server returned a success but the body
    ///   didn't decode
    /// - `Error::Client` if the server returned a client error (4xx)
    /// - `Error::Server` if the server returned a server error (5xx)
    /// - `Error::Unexpected` for anything else (the server is not supposed
    ///   to issue redirects or informational responses)
    async fn handle_response<T>(req: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await?;

        let status = resp.status();

        if status.is_success() {
            let body = resp.bytes().await?;

            Ok(serde_json::from_slice(&body)?)
        } else if status.is_client_error() {
            Err(Error::Client(resp.text().await?))
        } else if status.is_server_error() {
            Err(Error::Server)
        } else {
            Err(Error::Unexpected(status))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}
