//! `Content-Type` header conversions.
//!
//! ```rust
//! use http::HeaderValue;
//! use media_mime::MediaType;
//!
//! let value = HeaderValue::try_from(&MediaType::MP4).unwrap();
//! assert_eq!(value, "video/mp4");
//! assert_eq!(MediaType::try_from(&value).unwrap(), MediaType::MP4);
//! ```
use crate::error::Error;
use crate::MediaType;
use http::header::{HeaderValue, InvalidHeaderValue};

impl TryFrom<&MediaType> for HeaderValue {
    type Error = InvalidHeaderValue;

    fn try_from(media_type: &MediaType) -> Result<Self, Self::Error> {
        HeaderValue::from_str(media_type.as_str())
    }
}

/// Parameters such as `charset` are rejected, not stripped.
impl TryFrom<&HeaderValue> for MediaType {
    type Error = Error;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        let text = value.to_str().map_err(|err| {
            Error::invalid_media_type(&String::from_utf8_lossy(value.as_bytes()), err)
        })?;
        MediaType::parse(text)
    }
}
