use thiserror::Error;

use crate::Location;

/// A failure raised while scanning, located where scanning stopped.
///
/// Renders as `[name:line:column] message`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{location}] {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message without its location prefix.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnknownCharacter { .. } => "UnknownCharacter",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    /// Whether this is one of the lexical errors, as opposed to a failure
    /// of the character source.
    pub fn is_lexical(&self) -> bool {
        !matches!(self.internal_error, ErrorImpl::Io { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("string not terminated")]
    UnterminatedString,
    #[error("unknown character '{}'", show_byte(.byte))]
    UnknownCharacter { byte: u8 },
    #[error("cannot read source: {message}")]
    Io { message: String },
}

/// Printable ASCII as itself, anything else as `\xNN`.
fn show_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() || *byte == b' ' {
        (*byte as char).to_string()
    } else {
        format!("\\x{:02X}", byte)
    }
}

impl ErrorImpl {
    pub fn io(err: &std::io::Error) -> Self {
        ErrorImpl::Io {
            message: err.to_string(),
        }
    }
}
