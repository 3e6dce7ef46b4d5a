use crate::MediaType;
use core::fmt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct MediaTypeVisitor;

impl Visitor<'_> for MediaTypeVisitor {
    type Value = MediaType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a media type string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<MediaType, E> {
        Ok(MediaType::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<MediaType, E> {
        Ok(MediaType::from(value))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<MediaType, E> {
        core::str::from_utf8(value)
            .map(MediaType::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Bytes(value), &self))
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_string(MediaTypeVisitor)
    }
}
