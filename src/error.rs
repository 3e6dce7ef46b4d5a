//! Error types and utilities.
//!
//! Lookups in this crate never fail: a miss is reported as `None`. The
//! [`Error`] type only shows up when building a [`Registry`](crate::Registry),
//! when registering an association with an
//! [`ExtensionDatabase`](crate::ExtensionDatabase), and when decoding a
//! persisted [`MediaType`](crate::MediaType).
//!
//! # Examples
//!
//! ```rust
//! use media_mime::{Error, MediaType, Scalar};
//!
//! let err = MediaType::from_scalar(Scalar::Integer(42)).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedScalar { found: "integer" }));
//! ```
use crate::MediaType;
use core::fmt::{self, Display};
use core::str::Utf8Error;

/// Error type for registry construction and scalar decoding.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A media type was registered as a default entry twice.
    ///
    /// This always points at a bug in a static table. The panicking
    /// constructors and the global registry treat it as fatal.
    DuplicateRegistration {
        /// The media type that appeared twice.
        media_type: MediaType,
    },
    /// A persisted value was neither text nor a byte sequence.
    UnsupportedScalar {
        /// Name of the representation that was found, e.g. `"integer"`.
        found: &'static str,
    },
    /// A persisted byte sequence was not valid UTF-8.
    InvalidUtf8(Utf8Error),
    /// A string did not have `type/subtype` syntax.
    InvalidMediaType {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// An extension passed to an [`ExtensionDatabase`](crate::ExtensionDatabase)
    /// did not start with `.`.
    InvalidExtension(String),
}

/// A specialized Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_media_type(input: &str, reason: impl Display) -> Self {
        Self::InvalidMediaType {
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRegistration { media_type } => {
                write!(f, "media type {media_type} already registered")
            }
            Self::UnsupportedScalar { found } => {
                write!(f, "unable to convert {found} value to a media type")
            }
            Self::InvalidUtf8(error) => write!(f, "media type is not valid UTF-8: {error}"),
            Self::InvalidMediaType { input, reason } => {
                write!(f, "invalid media type {input:?}: {reason}")
            }
            Self::InvalidExtension(ext) => {
                write!(f, "extension {ext:?} must start with '.'")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(error) => Some(error),
            _ => None,
        }
    }
}

impl From<Utf8Error> for Error {
    fn from(error: Utf8Error) -> Self {
        Self::InvalidUtf8(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::DuplicateRegistration {
            media_type: MediaType::JPEG,
        };
        assert_eq!(err.to_string(), "media type image/jpeg already registered");

        let err = Error::UnsupportedScalar { found: "real" };
        assert_eq!(err.to_string(), "unable to convert real value to a media type");

        let err = Error::InvalidExtension("jpg".to_owned());
        assert_eq!(err.to_string(), "extension \"jpg\" must start with '.'");
    }

    #[test]
    fn utf8_error_is_the_source() {
        use core::error::Error as _;

        let bytes = [0xff, 0xfe];
        let utf8 = core::str::from_utf8(&bytes).unwrap_err();
        let err = Error::from(utf8);
        assert!(err.source().is_some());
        assert!(Error::UnsupportedScalar { found: "null" }.source().is_none());
    }
}
