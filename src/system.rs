//! The system-wide extension database.
//!
//! [`ExtensionDatabase`] is the seam between a [`Registry`](crate::Registry)
//! and whatever platform table it keeps in sync. [`SystemDatabase`] is the
//! process-global implementation: associations added at runtime are consulted
//! first, then the table shipped with `mime_guess` (feature `guess`), which
//! knows far more extensions than the built-in registry.
//!
//! Extensions handed to this module always carry their leading `.`.
//!
//! ```rust
//! use media_mime::{ExtensionDatabase, MediaType, SystemDatabase};
//!
//! let db = SystemDatabase::new();
//! db.add_extension_type(".arw", &MediaType::RAW_SONY_RAW).unwrap();
//! assert_eq!(db.type_by_extension(".ARW"), Some(MediaType::RAW_SONY_RAW));
//! assert_eq!(db.type_by_extension("arw"), None);
//! ```
use crate::error::{Error, Result};
use crate::MediaType;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard};

/// A table associating dotted extensions with media types.
pub trait ExtensionDatabase: Send + Sync {
    /// Associates `ext` (which must start with `.`) with `media_type`.
    ///
    /// A later association for the same extension replaces the earlier one.
    fn add_extension_type(&self, ext: &str, media_type: &MediaType) -> Result<()>;

    /// Returns the media type associated with `ext`, which must start with `.`.
    fn type_by_extension(&self, ext: &str) -> Option<MediaType>;
}

/// Process-global extension database.
#[derive(Debug, Default)]
pub struct SystemDatabase {
    added: RwLock<HashMap<String, MediaType>>,
}

pub(crate) static SYSTEM: LazyLock<SystemDatabase> = LazyLock::new(SystemDatabase::new);

impl SystemDatabase {
    /// Creates an empty database, backed only by the platform table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide instance.
    ///
    /// The built-in registry is built first, so its associations are always
    /// present here.
    pub fn global() -> &'static Self {
        crate::registry();
        &SYSTEM
    }

    /// Returns every extension added for `media_type`, sorted, with leading `.`.
    ///
    /// Only runtime associations are listed, not the platform table.
    pub fn extensions_by_type(&self, media_type: &MediaType) -> Vec<String> {
        let mut extensions: Vec<String> = self
            .read()
            .iter()
            .filter(|(_, registered)| *registered == media_type)
            .map(|(ext, _)| ext.clone())
            .collect();
        extensions.sort();
        extensions
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, MediaType>> {
        self.added.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExtensionDatabase for SystemDatabase {
    fn add_extension_type(&self, ext: &str, media_type: &MediaType) -> Result<()> {
        if !ext.starts_with('.') {
            return Err(Error::InvalidExtension(ext.to_owned()));
        }
        self.added
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ext.to_lowercase(), media_type.clone());
        Ok(())
    }

    fn type_by_extension(&self, ext: &str) -> Option<MediaType> {
        if !ext.starts_with('.') {
            return None;
        }
        let lower = ext.to_lowercase();
        let added = self.read().get(&lower).cloned();
        added.or_else(|| platform_type(&lower[1..]))
    }
}

#[cfg(feature = "guess")]
fn platform_type(ext: &str) -> Option<MediaType> {
    if ext.is_empty() {
        return None;
    }
    mime_guess::from_ext(ext)
        .first_raw()
        .map(MediaType::from_static)
}

#[cfg(not(feature = "guess"))]
fn platform_type(_ext: &str) -> Option<MediaType> {
    None
}
