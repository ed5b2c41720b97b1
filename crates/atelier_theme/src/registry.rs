//! Name-keyed store of normalized theme packs
//!
//! Lookup keys are derived from pack names by lower-casing and joining
//! whitespace-separated words with `-`, so `"Chronicle Dark"`,
//! `"chronicle dark"` and `"chronicle-dark"` all address the same entry.
//! Registering under an existing key replaces the entry in place.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::ThemeError;
use crate::normalize::normalize;
use crate::pack::{ThemePack, ThemePackInput};
use crate::presets::ThemePackPreset;
use crate::source::{is_pack_file, read_pack_file};

/// Derive the registry key for a pack name
pub fn registry_key(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Owned registry of theme packs
///
/// There is no global instance; construct one per pipeline. Mutation needs
/// `&mut self`, so hosts sharing a registry across threads wrap it in a lock.
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    packs: IndexMap<String, Arc<ThemePack>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in preset
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        for preset in ThemePackPreset::all() {
            registry.register(preset.input());
        }
        registry
    }

    /// Normalize and store a pack, returning its key
    pub fn register(&mut self, input: impl Into<ThemePackInput>) -> String {
        let input = input.into();
        let legacy = input.is_legacy();
        let pack = normalize(input);
        let key = registry_key(&pack.name);
        let replaced = self.packs.insert(key.clone(), Arc::new(pack)).is_some();
        debug!(%key, legacy, replaced, "registered theme pack");
        key
    }

    /// Read, normalize and store a pack file (`.toml` or `.json`)
    pub fn register_file(&mut self, path: impl AsRef<Path>) -> Result<String, ThemeError> {
        let input = read_pack_file(path.as_ref())?;
        Ok(self.register(input))
    }

    /// Register every pack file in a directory, in file-name order
    ///
    /// Files with other extensions are skipped. The first unreadable or
    /// malformed pack aborts the scan.
    pub fn register_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<String>, ThemeError> {
        let dir = dir.as_ref();
        let io_err = |source: std::io::Error| ThemeError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && is_pack_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| self.register_file(path))
            .collect()
    }

    /// Look up a pack by name
    ///
    /// A miss is not an error: it logs the available names and returns `None`.
    pub fn load(&self, name: &str) -> Option<Arc<ThemePack>> {
        let key = registry_key(name);
        let found = self.packs.get(&key).cloned();
        if found.is_none() {
            warn!(
                name,
                available = ?self.names(),
                "theme pack not found"
            );
        }
        found
    }

    /// Like [`ThemeRegistry::load`], but a miss is an error
    pub fn try_load(&self, name: &str) -> Result<Arc<ThemePack>, ThemeError> {
        self.packs
            .get(&registry_key(name))
            .cloned()
            .ok_or_else(|| ThemeError::NotFound {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Registry keys in first-registration order
    pub fn names(&self) -> Vec<String> {
        self.packs.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packs.contains_key(&registry_key(name))
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::LegacyThemePack;
    use crate::scheme::ColorScheme;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn legacy(name: &str) -> LegacyThemePack {
        LegacyThemePack {
            name: name.to_string(),
            mode: ColorScheme::Dark,
            tokens: ThemePackPreset::Chronicle.tokens(),
            recipes: Default::default(),
        }
    }

    #[test]
    fn registry_key_lowercases_and_hyphenates() {
        assert_eq!(registry_key("Chronicle Dark"), "chronicle-dark");
        assert_eq!(registry_key("  Atlas \t Light "), "atlas-light");
        assert_eq!(registry_key("already-keyed"), "already-keyed");
    }

    #[test]
    fn load_is_case_and_whitespace_insensitive() {
        let mut registry = ThemeRegistry::new();
        registry.register(legacy("Chronicle Dark"));

        let by_key = registry.load("chronicle-dark").unwrap();
        let by_name = registry.load("CHRONICLE   dark").unwrap();
        assert!(Arc::ptr_eq(&by_key, &by_name));
        assert_eq!(by_key.name, "Chronicle Dark");
    }

    #[test]
    fn reregistration_overwrites_without_duplicating_names() {
        let mut registry = ThemeRegistry::new();
        registry.register(legacy("Alpha"));
        registry.register(legacy("Beta"));
        let mut replacement = legacy("ALPHA");
        replacement.mode = ColorScheme::Light;
        registry.register(replacement);

        assert_eq!(registry.names(), vec!["alpha", "beta"]);
        assert_eq!(registry.load("alpha").unwrap().mode, ColorScheme::Light);
    }

    #[test]
    fn miss_returns_none_and_try_load_lists_available() {
        let mut registry = ThemeRegistry::new();
        registry.register(legacy("Alpha"));

        assert!(registry.load("missing").is_none());
        match registry.try_load("missing") {
            Err(ThemeError::NotFound { name, available }) => {
                assert_eq!(name, "missing");
                assert_eq!(available, vec!["alpha"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    /// Buffer that collects formatted log output
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn miss_logs_a_warning_listing_available_names() {
        let mut registry = ThemeRegistry::new();
        registry.register(legacy("Alpha"));
        registry.register(legacy("Beta Pack"));

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(registry.load("alpha").is_some());
            assert!(registry.load("gamma").is_none());
        });

        let output = logs.contents();
        assert_eq!(output.matches("WARN").count(), 1, "{output}");
        assert!(output.contains("theme pack not found"), "{output}");
        assert!(output.contains("gamma"), "{output}");
        assert!(output.contains("alpha"), "{output}");
        assert!(output.contains("beta-pack"), "{output}");
    }

    #[test]
    fn stored_packs_are_normalized() {
        let mut registry = ThemeRegistry::new();
        registry.register(legacy("Alpha"));
        let pack = registry.load("alpha").unwrap();
        assert!(pack.recipes_by_context.narrative.storyboard.is_some());
    }

    #[test]
    fn with_presets_registers_catalog() {
        let registry = ThemeRegistry::with_presets();
        assert_eq!(registry.len(), ThemePackPreset::all().len());
        for preset in ThemePackPreset::all() {
            assert!(registry.contains(preset.display_name()));
        }
    }
}
