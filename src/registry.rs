//! The extension registry.
//!
//! A [`Registry`] holds two maps built from an ordered list of [`Entry`]
//! values: extension to media type (several extensions may share one type)
//! and media type to its default extension (the first one registered for it).
//! Every association is also forwarded to an [`ExtensionDatabase`] so the
//! system-wide table agrees with this one.
//!
//! The process-wide registry is built from [`STATIC_TABLE`] on first use and
//! never changes afterwards, so it can be read from any thread without locking.
//!
//! # Examples
//!
//! ```rust
//! use media_mime::{is_known_extension, type_by_extension, MediaType};
//!
//! assert!(is_known_extension("JPG"));
//! assert!(is_known_extension(".jpeg"));
//! assert!(!is_known_extension("xyz"));
//!
//! assert_eq!(type_by_extension(".m2ts"), Some(MediaType::MPEG2_TS));
//! assert_eq!(MediaType::MPEG2_TS.default_extension(), Some("mts"));
//! ```
//!
//! Building a private registry:
//!
//! ```rust
//! use media_mime::{Entry, MediaType, Registry, SystemDatabase};
//!
//! let db = SystemDatabase::new();
//! let registry = Registry::new(&[Entry::new(MediaType::PNG, "PNG", &["apng"])], &db);
//! assert_eq!(registry.default_extension(&MediaType::PNG), Some("png"));
//! assert!(registry.is_known_extension(".apng"));
//! ```
use crate::error::{Error, Result};
use crate::system::{ExtensionDatabase, SystemDatabase, SYSTEM};
use crate::MediaType;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, error, warn};

/// One row of a registry table: a media type, its default extension and any
/// alias extensions.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The media type being registered.
    pub media_type: MediaType,
    /// Extension returned by [`Registry::default_extension`], without `.`.
    pub default_extension: &'static str,
    /// Further extensions mapping to the same type, without `.`.
    pub aliases: &'static [&'static str],
}

impl Entry {
    /// Creates a table entry.
    pub const fn new(
        media_type: MediaType,
        default_extension: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            media_type,
            default_extension,
            aliases,
        }
    }
}

/// The built-in table of photo, raw-photo and video formats.
pub static STATIC_TABLE: [Entry; 20] = [
    Entry::new(MediaType::JPEG, "jpg", &["jpeg"]),
    Entry::new(MediaType::PNG, "png", &[]),
    Entry::new(MediaType::GIF, "gif", &[]),
    Entry::new(MediaType::BMP, "bmp", &[]),
    // raw photos
    Entry::new(MediaType::RAW_CANON_CR2, "cr2", &[]),
    Entry::new(MediaType::RAW_NIKON_NEF, "nef", &[]),
    Entry::new(MediaType::RAW_RW2, "rw2", &[]),
    Entry::new(MediaType::RAW_OLYMPUS_ORF, "orf", &[]),
    Entry::new(MediaType::RAW_SONY_RAW, "raw", &[]),
    // video
    Entry::new(MediaType::THREE_GPP, "3gp", &[]),
    Entry::new(MediaType::AVI, "avi", &[]),
    Entry::new(MediaType::FLASH_VIDEO, "flv", &[]),
    Entry::new(MediaType::MATROSKA, "mkv", &[]),
    Entry::new(MediaType::MP4, "mp4", &["m4v"]),
    Entry::new(MediaType::MPEG, "mpg", &["mpeg"]),
    Entry::new(MediaType::MPEG2_TS, "mts", &["m2ts"]),
    Entry::new(MediaType::OGG, "ogv", &[]),
    Entry::new(MediaType::QUICKTIME, "mov", &[]),
    Entry::new(MediaType::WEBM, "webm", &[]),
    Entry::new(MediaType::WINDOWS_MEDIA_VIDEO, "wmv", &[]),
];

/// Bidirectional map between extensions and media types.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    by_extension: HashMap<String, MediaType>,
    by_type: HashMap<MediaType, String>,
}

static REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| Registry::new(&STATIC_TABLE, &*SYSTEM));

impl Registry {
    /// Builds a registry from `entries`, forwarding every association to
    /// `database`.
    ///
    /// # Panics
    ///
    /// Panics if a media type appears in more than one entry. Tables are
    /// static data, so a duplicate is a bug rather than a runtime condition.
    pub fn new(entries: &[Entry], database: &dyn ExtensionDatabase) -> Self {
        match Self::try_new(entries, database) {
            Ok(registry) => registry,
            Err(err) => {
                error!("Invalid media type table: {err}");
                panic!("{err}");
            }
        }
    }

    /// Like [`Registry::new`], but reports a duplicate media type as
    /// [`Error::DuplicateRegistration`].
    pub fn try_new(entries: &[Entry], database: &dyn ExtensionDatabase) -> Result<Self> {
        let mut registry = Self::default();
        for entry in entries {
            registry.register(entry, database)?;
        }
        Ok(registry)
    }

    fn register(&mut self, entry: &Entry, database: &dyn ExtensionDatabase) -> Result<()> {
        if self.by_type.contains_key(&entry.media_type) {
            return Err(Error::DuplicateRegistration {
                media_type: entry.media_type.clone(),
            });
        }

        let default_extension = entry.default_extension.to_lowercase();
        self.by_type
            .insert(entry.media_type.clone(), default_extension.clone());

        self.register_extension(&entry.media_type, default_extension, database);
        for alias in entry.aliases {
            self.register_extension(&entry.media_type, alias.to_lowercase(), database);
        }
        Ok(())
    }

    fn register_extension(
        &mut self,
        media_type: &MediaType,
        extension: String,
        database: &dyn ExtensionDatabase,
    ) {
        debug!("Registering .{} as {}", extension, media_type);
        if let Err(err) = database.add_extension_type(&format!(".{extension}"), media_type) {
            warn!("System database rejected .{extension}: {err}");
        }
        self.by_extension.insert(extension, media_type.clone());
    }

    /// Returns the default extension for `media_type`, without a leading `.`.
    pub fn default_extension(&self, media_type: &MediaType) -> Option<&str> {
        self.by_type.get(media_type).map(String::as_str)
    }

    /// Returns true if `ext` is in this registry's table.
    ///
    /// One leading `.` is ignored and the comparison is case-insensitive. The
    /// system database is not consulted.
    pub fn is_known_extension(&self, ext: &str) -> bool {
        self.by_extension.contains_key(&normalize(ext))
    }

    /// Looks `ext` up in this registry's table, with the same normalization as
    /// [`Registry::is_known_extension`].
    pub fn media_type(&self, ext: &str) -> Option<&MediaType> {
        self.by_extension.get(&normalize(ext))
    }

    /// Returns every extension mapping to `media_type`, default first.
    pub fn extensions(&self, media_type: &MediaType) -> Vec<&str> {
        let default = self.default_extension(media_type);
        let mut others: Vec<&str> = self
            .by_extension
            .iter()
            .filter(|(ext, registered)| *registered == media_type && Some(ext.as_str()) != default)
            .map(|(ext, _)| ext.as_str())
            .collect();
        others.sort_unstable();
        default.into_iter().chain(others).collect()
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

fn normalize(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

/// Returns the process-wide registry built from [`STATIC_TABLE`].
///
/// The first call also populates [`SystemDatabase::global`].
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Returns true if `ext` is one of the built-in extensions.
///
/// `ext` may start with `.` and is not case-sensitive. The system database is
/// not consulted.
pub fn is_known_extension(ext: &str) -> bool {
    registry().is_known_extension(ext)
}

/// Returns the media type for `ext`, which must start with `.`.
///
/// Answers come from the system database, so extensions outside the built-in
/// table may resolve too.
pub fn type_by_extension(ext: &str) -> Option<MediaType> {
    SystemDatabase::global().type_by_extension(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, MediaType)>>,
        reject: bool,
    }

    impl ExtensionDatabase for Recorder {
        fn add_extension_type(&self, ext: &str, media_type: &MediaType) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((ext.to_owned(), media_type.clone()));
            if self.reject {
                return Err(Error::InvalidExtension(ext.to_owned()));
            }
            Ok(())
        }

        fn type_by_extension(&self, _ext: &str) -> Option<MediaType> {
            None
        }
    }

    #[test]
    fn default_extension_is_first_registered() {
        let registry = Registry::new(&STATIC_TABLE, &SystemDatabase::new());
        assert_eq!(registry.default_extension(&MediaType::JPEG), Some("jpg"));
        assert_eq!(registry.default_extension(&MediaType::MPEG), Some("mpg"));
        assert_eq!(registry.default_extension(&MediaType::MP4), Some("mp4"));
        assert_eq!(
            registry.default_extension(&MediaType::from("image/webp")),
            None
        );
    }

    #[test]
    fn every_table_extension_is_known() {
        let registry = Registry::new(&STATIC_TABLE, &SystemDatabase::new());
        for entry in &STATIC_TABLE {
            for ext in core::iter::once(&entry.default_extension).chain(entry.aliases) {
                assert!(registry.is_known_extension(ext), "{ext}");
                assert!(registry.is_known_extension(&format!(".{ext}")), "{ext}");
                assert!(registry.is_known_extension(&ext.to_uppercase()), "{ext}");
                assert_eq!(registry.media_type(ext), Some(&entry.media_type));
            }
        }
        assert_eq!(registry.len(), 24);
    }

    #[test]
    fn strips_a_single_dot() {
        let registry = Registry::new(&STATIC_TABLE, &SystemDatabase::new());
        assert!(registry.is_known_extension(".jpg"));
        assert!(!registry.is_known_extension("..jpg"));
        assert!(!registry.is_known_extension(""));
        assert!(!registry.is_known_extension("."));
    }

    #[test]
    fn extensions_list_default_first() {
        let registry = Registry::new(&STATIC_TABLE, &SystemDatabase::new());
        assert_eq!(registry.extensions(&MediaType::MPEG2_TS), ["mts", "m2ts"]);
        assert_eq!(registry.extensions(&MediaType::JPEG), ["jpg", "jpeg"]);
        assert_eq!(registry.extensions(&MediaType::GIF), ["gif"]);
        assert!(registry.extensions(&MediaType::from("image/webp")).is_empty());
    }

    #[test]
    fn forwards_every_association() {
        let recorder = Recorder::default();
        Registry::new(
            &[
                Entry::new(MediaType::JPEG, "JPG", &["Jpeg"]),
                Entry::new(MediaType::PNG, "png", &[]),
            ],
            &recorder,
        );
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(
            *calls,
            [
                (".jpg".to_owned(), MediaType::JPEG),
                (".jpeg".to_owned(), MediaType::JPEG),
                (".png".to_owned(), MediaType::PNG),
            ]
        );
    }

    #[test]
    fn rejected_forwarding_keeps_local_table() {
        let recorder = Recorder {
            reject: true,
            ..Recorder::default()
        };
        let registry = Registry::new(&[Entry::new(MediaType::GIF, "gif", &[])], &recorder);
        assert!(registry.is_known_extension("gif"));
    }

    #[test]
    fn colliding_extension_last_wins() {
        let registry = Registry::new(
            &[
                Entry::new(MediaType::RAW_RW2, "raw", &[]),
                Entry::new(MediaType::RAW_SONY_RAW, "arw", &["raw"]),
            ],
            &SystemDatabase::new(),
        );
        assert_eq!(registry.media_type("raw"), Some(&MediaType::RAW_SONY_RAW));
        assert_eq!(registry.default_extension(&MediaType::RAW_RW2), Some("raw"));
    }

    #[test]
    fn duplicate_type_is_an_error() {
        let result = Registry::try_new(
            &[
                Entry::new(MediaType::PNG, "png", &[]),
                Entry::new(MediaType::PNG, "apng", &[]),
            ],
            &SystemDatabase::new(),
        );
        assert!(matches!(
            result,
            Err(Error::DuplicateRegistration { media_type }) if media_type == MediaType::PNG
        ));
    }

    #[test]
    #[should_panic(expected = "media type image/jpeg already registered")]
    fn duplicate_type_panics() {
        Registry::new(
            &[
                Entry::new(MediaType::JPEG, "jpg", &[]),
                Entry::new(MediaType::JPEG, "jpeg", &[]),
            ],
            &SystemDatabase::new(),
        );
    }

    #[test]
    fn global_registry_populates_system_database() {
        assert!(is_known_extension("M4V"));
        assert_eq!(type_by_extension(".m4v"), Some(MediaType::MP4));
        assert_eq!(type_by_extension(".bmp"), Some(MediaType::BMP));
        assert_eq!(type_by_extension("bmp"), None);
        assert_eq!(
            SystemDatabase::global().extensions_by_type(&MediaType::JPEG),
            [".jpeg", ".jpg"]
        );
    }
}
