use std::num::ParseIntError;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    // Errors from external libraries
    ParseInt(ParseIntError),
    Poison(String),

    // Errors from the chat session
    EmptyMessage,

    // Errors from collaborators and configuration
    InvalidArgument(String),
    NotSignedIn,
    NotAdmin,
    NotFound(String),
    AuthFailed(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ParseInt(ref err) => err.fmt(f),
            Error::Poison(ref err) => write!(f, "{}", err),

            Error::EmptyMessage => write!(f, "message is empty"),

            Error::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Error::NotSignedIn => write!(f, "no active session"),
            Error::NotAdmin => write!(f, "admin access required"),
            Error::NotFound(what) => write!(f, "not found: {what}"),
            Error::AuthFailed(message) => write!(f, "authentication failed: {message}"),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::ParseInt(err)
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Error {
        Error::Poison(format!("Mutex poison error: {}", err))
    }
}
