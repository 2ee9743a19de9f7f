use crate::client::Client;
use serde::{Deserialize, Serialize};

/// The payload for creating a new account.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// Email address the account will live under.
    pub email: String,

    /// Plaintext password for the new account. Hashing is the server's
    /// job; we pass this through untouched.
    pub password: String,
}

/// Whatever the server sent back for a successful registration. The service
/// owns that schema and we don't interpret it, so it stays a raw JSON value.
pub type Resp = serde_json::Value;

/// Where the registration endpoint lives, relative to the base URL. The
/// trailing slash matters: the server routes with it.
pub const PATH: &str = "/api/users/register/";

/// Register with the server, absorbing failures.
///
/// On success you get the decoded response body back. On failure of any
/// kind, the problem goes to the log and you get `None`. Callers that need
/// to branch on *what* went wrong should use [`Client::register`] instead.
pub async fn send(client: &Client, http: &reqwest::Client, req: &Req) -> Option<Resp> {
    match client.register(http, req).await {
        Ok(resp) => Some(resp),
        Err(problem) => {
            tracing::error!(?problem, "problem sending registration");
            None
        }
    }
}
