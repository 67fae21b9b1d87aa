//! Error taxonomy shared by every Battle.net call
//!
//! Every layer (request building, transport, decoding, OAuth) reports failures
//! as an [`HttpError`] so callers always receive exactly one typed failure.

use std::fmt;

/// Kind of failure experienced while making a web service call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request could not be made (bad URL or header)
    MalformedRequest,
    /// The request body or caller input was invalid
    MalformedBody,
    /// The web service returned an unexpected status, like a 500
    ServerError,
    /// The response was valid JSON with the wrong structure
    UnexpectedResponseShape,
    /// The response could not be parsed into the expected model
    DeserializationFailure,
    /// HTTP 401, or a call that needs a token that was never acquired
    Unauthorized,
    /// HTTP 403
    Forbidden,
    /// A network connection could not be established
    NoNetwork,
}

impl ErrorKind {
    /// User-facing default message
    pub fn description(self) -> &'static str {
        match self {
            Self::MalformedRequest => {
                "There was a problem making the request. Please change and try again."
            }
            Self::MalformedBody => {
                "There was a problem with your input. Please change and try again."
            }
            Self::ServerError => "The web service returned an unknown error.",
            Self::UnexpectedResponseShape => "The web service returned unexpected data.",
            Self::DeserializationFailure => "The web service response could not be parsed.",
            Self::Unauthorized => "Unauthorized, please login again.",
            Self::Forbidden => "You have not granted this app permission to access this data.",
            Self::NoNetwork => {
                "A network connection could not be established. Please try again when you have a sufficient internet connection."
            }
        }
    }

    /// Verbose description naming the kind, meant for debug builds
    pub fn debug_description(self) -> &'static str {
        match self {
            Self::MalformedRequest => {
                "DEBUG (malformedRequest): The request could not be made because of a malformed url or invalid header."
            }
            Self::MalformedBody => {
                "DEBUG (malformedBody): The request body could not be formed. Check for any invalid input."
            }
            Self::ServerError => {
                "DEBUG (serverError): The web service returned an unknown error, like a 500."
            }
            Self::UnexpectedResponseShape => {
                "DEBUG (unexpectedResponseShape): The response data did not have the expected format, value, or type."
            }
            Self::DeserializationFailure => {
                "DEBUG (deserializationFailure): The data could not be read."
            }
            Self::Unauthorized => "DEBUG (unauthorized): Unauthorized, please login again.",
            Self::Forbidden => {
                "DEBUG (forbidden): You have not granted this app permission to access this data."
            }
            Self::NoNetwork => "DEBUG (noNetwork): A network connection could not be established.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MalformedRequest => "malformed request",
            Self::MalformedBody => "malformed body",
            Self::ServerError => "server error",
            Self::UnexpectedResponseShape => "unexpected response shape",
            Self::DeserializationFailure => "deserialization failure",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NoNetwork => "no network",
        };
        f.write_str(name)
    }
}

/// A failed Battle.net call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    kind: ErrorKind,
    code: Option<u16>,
    message: String,
}

impl HttpError {
    /// Creates an error with an explicit status code and message
    pub fn new(kind: ErrorKind, code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
        }
    }

    /// Creates an error carrying the kind's default message
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, None, kind.description())
    }

    /// Maps a non-2xx status code to its error kind
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            _ => ErrorKind::ServerError,
        };

        let message = if body.trim().is_empty() {
            kind.description().to_string()
        } else {
            format!("HTTP {status}: {body}")
        };

        Self::new(kind, Some(status), message)
    }

    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRequest, None, message)
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedBody, None, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, None, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, None, message)
    }

    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedResponseShape, None, message)
    }

    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeserializationFailure, None, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Status code returned by the server, if any
    pub fn code(&self) -> Option<u16> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message for display to a user
    ///
    /// Debug builds append the kind's verbose description.
    pub fn display_message(&self) -> String {
        if cfg!(debug_assertions) {
            format!("{}\n\n{}", self.message, self.kind.debug_description())
        } else {
            self.message.clone()
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let code = err.status().map(|s| s.as_u16());
        // The URL can carry client_secret, token or apikey queries
        let err = err.without_url();

        let kind = if err.is_connect() || err.is_timeout() {
            ErrorKind::NoNetwork
        } else if err.is_builder() {
            ErrorKind::MalformedRequest
        } else if err.is_decode() {
            ErrorKind::UnexpectedResponseShape
        } else {
            ErrorKind::ServerError
        };

        Self::new(kind, code, err.to_string())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::deserialization(format!("Failed to parse response: {err}"))
    }
}
