//! Errors from executing a request.

use crate::resource::DecodeError;

/// Failure of a request, as reported by [`Client::execute`](crate::client::Client::execute).
#[derive(Debug)]
pub enum Error {
    /// The resource was not found (HTTP 404).
    ///
    /// A repository without releases, a tag without a release and an unknown
    /// tag all end up here. The API gives no way to tell them apart.
    DoesNotExist(String),
    /// Any other non-success response
    Api { status: u16, message: String },
    /// The response body did not match the expected resource
    Decode(DecodeError),
    /// The request could not be sent or the response could not be read
    Transport(anyhow::Error),
}

impl Error {
    pub fn is_does_not_exist(&self) -> bool {
        matches!(self, Error::DoesNotExist(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DoesNotExist(url) => write!(f, "Does not exist: {}", url),
            Error::Api { status, message } => {
                write!(f, "API error (HTTP {}): {}", status, message)
            }
            Error::Decode(e) => write!(f, "{}", e),
            Error::Transport(e) => write!(f, "Request failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(e) => Some(e),
            Error::Transport(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
