//! Error types.

use reqwest::StatusCode;

/// Error enumerates the possible Maildequate error states.
///
/// Errors from the [record providers][crate::records] never reach the Discord user directly;
/// the [command handler][crate::handler] logs them and answers with a canned
/// [`Reply`][crate::handler::Reply].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when the DNS provider could not be reached, or the connection failed while the
    /// request or response was in flight.
    #[error("DNS provider transport error")]
    Transport(#[from] reqwest::Error),

    /// Returned when the DNS provider answers with a non-success HTTP status.
    #[error("DNS provider responded {0}")]
    Provider(StatusCode),

    /// Returned when the DNS provider's response body doesn't have the expected JSON shape.
    #[error("invalid DNS provider response")]
    Decode(#[source] serde_json::Error),

    /// Returned when the configured [`api_base_url`][crate::config::Settings::api_base_url] is
    /// not an absolute URL that can carry a path.
    #[error("invalid DNS provider base URL \"{0}\"")]
    InvalidBaseUrl(String),

    /// Returned when a required setting was not supplied by the config file, the environment or
    /// the command line.
    #[error("missing required setting \"{0}\"")]
    MissingSetting(&'static str),

    /// Returned when the configured domain isn't a dotted domain name that can appear on the
    /// right hand side of an email address.
    #[error("\"{0}\" is not a valid mail domain")]
    InvalidDomain(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load `Settings`][crate::config::Settings::try_from_file] from a
    /// config file with invalid JSON content.
    #[error("invalid JSON config")]
    InvalidConfigJSON(#[source] serde_json::Error),

    /// Returned when the Discord session can't be built or started.
    #[error("Discord error")]
    Discord(#[from] serenity::Error),
}
