//! Talk to the Dreams user-registration API: one POST that creates an
//! account, and the machinery to say what went wrong when it didn't.

/// The HTTP client and where it points.
pub mod client;
pub use client::Client;

/// Ways a call to the API can fail.
pub mod error;
pub use error::Error;

/// Creating a new account.
pub mod register;
