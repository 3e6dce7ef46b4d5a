//! The [`MediaType`] value.
//!
//! A `MediaType` is an immutable `type/subtype` string such as `"image/jpeg"`.
//! Equality is exact string comparison. Every type in the built-in table has
//! an associated constant:
//!
//! ```rust
//! use media_mime::MediaType;
//!
//! assert_eq!(MediaType::JPEG.as_str(), "image/jpeg");
//! assert_eq!(MediaType::JPEG.default_extension(), Some("jpg"));
//! assert!(MediaType::RAW_NIKON_NEF.is_raw_photo());
//! ```
//!
//! Values coming back from storage are taken as they are, while
//! [`MediaType::parse`] checks the syntax first:
//!
//! ```rust
//! use media_mime::MediaType;
//!
//! assert!(MediaType::parse("video/webm").is_ok());
//! assert!(MediaType::parse("webm").is_err());
//! assert_eq!(MediaType::from("whatever").as_str(), "whatever");
//! ```
use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;
use std::borrow::{Borrow, Cow};

/// A MIME media type, e.g. `image/jpeg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaType(Cow<'static, str>);

static RAW_PHOTO_TYPES: [MediaType; 5] = [
    MediaType::RAW_CANON_CR2,
    MediaType::RAW_NIKON_NEF,
    MediaType::RAW_RW2,
    MediaType::RAW_OLYMPUS_ORF,
    MediaType::RAW_SONY_RAW,
];

impl MediaType {
    /// `image/jpeg`
    pub const JPEG: Self = Self::from_static("image/jpeg");
    /// `image/png`
    pub const PNG: Self = Self::from_static("image/png");
    /// `image/gif`
    pub const GIF: Self = Self::from_static("image/gif");
    /// `image/x-ms-bmp`
    pub const BMP: Self = Self::from_static("image/x-ms-bmp");

    /// `image/x-canon-cr2`
    pub const RAW_CANON_CR2: Self = Self::from_static("image/x-canon-cr2");
    /// `image/x-nikon-nef`
    pub const RAW_NIKON_NEF: Self = Self::from_static("image/x-nikon-nef");
    /// `image/x-raw`, used for Panasonic RW2 files.
    pub const RAW_RW2: Self = Self::from_static("image/x-raw");
    /// `image/x-olympus-orf`
    pub const RAW_OLYMPUS_ORF: Self = Self::from_static("image/x-olympus-orf");
    /// `image/x-sony-raw`
    pub const RAW_SONY_RAW: Self = Self::from_static("image/x-sony-raw");

    /// `video/3gpp`
    pub const THREE_GPP: Self = Self::from_static("video/3gpp");
    /// `video/avi`
    pub const AVI: Self = Self::from_static("video/avi");
    /// `video/x-flv`
    pub const FLASH_VIDEO: Self = Self::from_static("video/x-flv");
    /// `video/x-matroska`
    pub const MATROSKA: Self = Self::from_static("video/x-matroska");
    /// `video/mp4`
    pub const MP4: Self = Self::from_static("video/mp4");
    /// `video/mpeg`
    pub const MPEG: Self = Self::from_static("video/mpeg");
    /// `video/mp2t`
    pub const MPEG2_TS: Self = Self::from_static("video/mp2t");
    /// `video/ogg`
    pub const OGG: Self = Self::from_static("video/ogg");
    /// `video/quicktime`
    pub const QUICKTIME: Self = Self::from_static("video/quicktime");
    /// `video/webm`
    pub const WEBM: Self = Self::from_static("video/webm");
    /// `video/x-ms-wmv`
    pub const WINDOWS_MEDIA_VIDEO: Self = Self::from_static("video/x-ms-wmv");

    /// Creates a media type from a static string without checking it.
    pub const fn from_static(media_type: &'static str) -> Self {
        Self(Cow::Borrowed(media_type))
    }

    /// Parses a media type, checking it has `type/subtype` syntax.
    ///
    /// Parameters such as `; charset=utf-8` are rejected rather than parsed.
    pub fn parse(input: &str) -> Result<Self> {
        let parsed: mime::Mime = input
            .parse()
            .map_err(|error| Error::invalid_media_type(input, error))?;
        if parsed.params().next().is_some() {
            return Err(Error::invalid_media_type(input, "parameters are not supported"));
        }
        Ok(Self(Cow::Owned(input.to_owned())))
    }

    /// Returns the media type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical extension for this type, without a leading `.`.
    ///
    /// Answers from the built-in table only. Unknown types yield `None`.
    pub fn default_extension(&self) -> Option<&'static str> {
        crate::registry().default_extension(self)
    }

    /// Converts into a [`mime::Mime`], if the string is well formed.
    pub fn to_mime(&self) -> Option<mime::Mime> {
        self.as_str().parse().ok()
    }

    /// Returns true for any `image/*` type.
    pub fn is_image(&self) -> bool {
        self.as_str().starts_with("image/")
    }

    /// Returns true for any `video/*` type.
    pub fn is_video(&self) -> bool {
        self.as_str().starts_with("video/")
    }

    /// Returns true for the camera raw formats in the built-in table.
    pub fn is_raw_photo(&self) -> bool {
        RAW_PHOTO_TYPES.contains(self)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<String> for MediaType {
    fn from(media_type: String) -> Self {
        Self(Cow::Owned(media_type))
    }
}

impl From<&str> for MediaType {
    fn from(media_type: &str) -> Self {
        Self(Cow::Owned(media_type.to_owned()))
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.0.into_owned()
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for MediaType {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for MediaType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for MediaType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
