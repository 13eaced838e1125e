use crate::session::TreeKind;
use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

/// Errors raised while turning caller input into requests. The trees themselves never fail.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidValue(ParseIntError),
    Parse(String),
    Unsupported {
        kind: TreeKind,
        operation: &'static str,
    },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::InvalidValue(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::InvalidValue(error) => Some(error),
            Error::Parse(_) | Error::Unsupported { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::InvalidValue(error) => write!(f, "invalid value: {}", error),
            Error::Parse(message) => write!(f, "{}", message),
            Error::Unsupported { kind, operation } => {
                write!(f, "{} does not support {}", kind, operation)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
