#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
//! Bidirectional mapping between MIME media types and file extensions for
//! photo, raw-photo and video formats.
//!
//! The crate is built around a fixed table ([`STATIC_TABLE`]) of media types,
//! each with a default extension and optional aliases. On first use the table
//! is loaded into a process-wide [`Registry`] and every association is
//! forwarded to the system-wide [`SystemDatabase`], which backs
//! [`type_by_extension`].
//!
//! # Features
//!
//! - **Case-insensitive lookups** - `"JPG"`, `".jpg"` and `"jpg"` are the same extension
//! - **Canonical extensions** - one default extension per media type, any number of aliases
//! - **System database sync** - the platform table knows the built-in associations too
//! - **Persistence** - store a [`MediaType`] as a database scalar and read it back
//!
//! # Optional Features
//!
//! - `guess` - fall back to `mime_guess` for extensions outside the built-in table (enabled by default)
//! - `serde` - `Serialize`/`Deserialize` for [`MediaType`] (enabled by default)
//! - `sqlite` - `rusqlite` `ToSql`/`FromSql` for [`MediaType`] (enabled by default)
//! - `http` - `Content-Type` header conversions (enabled by default)
//!
//! # Examples
//!
//! ## Extension lookups
//!
//! ```rust
//! use media_mime::{is_known_extension, type_by_extension, MediaType};
//!
//! assert!(is_known_extension("CR2"));
//! assert_eq!(MediaType::JPEG.default_extension(), Some("jpg"));
//! assert_eq!(type_by_extension(".mov"), Some(MediaType::QUICKTIME));
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! # #[cfg(feature = "sqlite")]
//! # {
//! use media_mime::MediaType;
//! use rusqlite::Connection;
//!
//! # fn example() -> rusqlite::Result<()> {
//! let conn = Connection::open_in_memory()?;
//! conn.execute("CREATE TABLE photos (media_type TEXT)", [])?;
//! conn.execute("INSERT INTO photos VALUES (?1)", [&MediaType::PNG])?;
//! let stored: MediaType = conn.query_row("SELECT media_type FROM photos", [], |row| row.get(0))?;
//! assert_eq!(stored, MediaType::PNG);
//! # Ok(())
//! # }
//! # example().unwrap();
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

mod media_type;
pub use media_type::MediaType;

pub mod registry;
#[doc(inline)]
pub use registry::{is_known_extension, registry, type_by_extension, Entry, Registry, STATIC_TABLE};

pub mod system;
#[doc(inline)]
pub use system::{ExtensionDatabase, SystemDatabase};

mod scalar;
pub use scalar::Scalar;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "http")]
pub mod header;
