//! Storing a [`MediaType`] as a database scalar.
//!
//! [`Scalar`] mirrors the value shapes SQL drivers hand back. A media type is
//! always written as text; reading accepts text or a byte sequence holding the
//! same string, since drivers differ on which one they return for a `TEXT`
//! column. Every other shape is an [`Error::UnsupportedScalar`].
//!
//! With the `sqlite` feature, `MediaType` implements `rusqlite`'s `ToSql` and
//! `FromSql` on top of this.
//!
//! ```rust
//! use media_mime::{MediaType, Scalar};
//!
//! let webm = MediaType::WEBM;
//! let scalar = webm.to_scalar();
//! assert_eq!(scalar, Scalar::Text("video/webm"));
//! assert_eq!(MediaType::from_scalar(Scalar::Bytes(b"video/webm")).unwrap(), MediaType::WEBM);
//! assert!(MediaType::from_scalar(Scalar::Null).is_err());
//! ```
use crate::error::{Error, Result};
use crate::MediaType;

/// A borrowed database scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// SQL `NULL`.
    Null,
    /// A 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Real(f64),
    /// A text value.
    Text(&'a str),
    /// A byte sequence.
    Bytes(&'a [u8]),
}

impl Scalar<'_> {
    /// Name of this value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl MediaType {
    /// Encodes this media type as a text scalar.
    pub fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Text(self.as_str())
    }

    /// Decodes a media type from a text or byte-sequence scalar.
    ///
    /// The stored string is taken as-is, without syntax checks. Byte sequences
    /// that are not valid UTF-8 fail with [`Error::InvalidUtf8`].
    pub fn from_scalar(value: Scalar<'_>) -> Result<Self> {
        match value {
            Scalar::Text(text) => Ok(Self::from(text)),
            Scalar::Bytes(bytes) => Ok(Self::from(core::str::from_utf8(bytes)?)),
            other => Err(Error::UnsupportedScalar {
                found: other.kind(),
            }),
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::Scalar;
    use crate::error::Error;
    use crate::MediaType;
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    impl ToSql for MediaType {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(ToSqlOutput::Borrowed(ValueRef::Text(self.as_str().as_bytes())))
        }
    }

    impl FromSql for MediaType {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            let scalar = match value {
                ValueRef::Null => Scalar::Null,
                ValueRef::Integer(int) => Scalar::Integer(int),
                ValueRef::Real(real) => Scalar::Real(real),
                ValueRef::Text(text) => core::str::from_utf8(text)
                    .map(Scalar::Text)
                    .map_err(|err| FromSqlError::Other(Box::new(err)))?,
                ValueRef::Blob(bytes) => Scalar::Bytes(bytes),
            };
            MediaType::from_scalar(scalar).map_err(|err| match err {
                Error::UnsupportedScalar { .. } => FromSqlError::InvalidType,
                other => FromSqlError::Other(Box::new(other)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_text() {
        assert_eq!(MediaType::JPEG.to_scalar(), Scalar::Text("image/jpeg"));
    }

    #[test]
    fn decodes_text_and_bytes() {
        assert_eq!(
            MediaType::from_scalar(Scalar::Text("video/mp4")).unwrap(),
            MediaType::MP4
        );
        assert_eq!(
            MediaType::from_scalar(Scalar::Bytes(b"video/mp4")).unwrap(),
            MediaType::MP4
        );
        let custom = MediaType::from_scalar(Scalar::Text("application/x-custom")).unwrap();
        assert_eq!(custom.as_str(), "application/x-custom");
    }

    #[test]
    fn round_trip() {
        for media_type in [MediaType::PNG, MediaType::RAW_OLYMPUS_ORF, MediaType::from("a/b")] {
            let decoded = MediaType::from_scalar(media_type.to_scalar()).unwrap();
            assert_eq!(decoded, media_type);
        }
    }

    #[test]
    fn rejects_other_shapes() {
        for (value, kind) in [
            (Scalar::Null, "null"),
            (Scalar::Integer(7), "integer"),
            (Scalar::Real(1.5), "real"),
        ] {
            let err = MediaType::from_scalar(value).unwrap_err();
            assert!(matches!(err, Error::UnsupportedScalar { found } if found == kind));
        }
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = MediaType::from_scalar(Scalar::Bytes(&[0x69, 0xff])).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8(_)));
    }
}
