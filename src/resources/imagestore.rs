//! Image asset handles, loading, and the string-keyed store.
//!
//! Images are opaque to the core: a handle carries the name and pixel
//! dimensions, and the paint target knows what to do with it. Loading goes
//! through the [`ImageLoader`] trait so hosts and tests can substitute their
//! own source; the default [`ManifestImageLoader`] resolves names against a
//! JSON manifest in the assets directory.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{StageError, StageResult};

/// Cheap, cloneable reference to a loaded image asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Resolves an image name to a ready-to-draw handle.
///
/// Loading is one-shot and happens during manager registration, before the
/// frame loop starts. A failed load must return `Err`, never block or hang.
pub trait ImageLoader {
    fn load_image(&mut self, name: &str) -> StageResult<ImageHandle>;
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    name: String,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    images: Vec<ManifestEntry>,
}

/// Loader backed by `<assets_dir>/manifest.json`.
///
/// The manifest is read lazily on the first load and kept in memory; unknown
/// names fail with [`StageError::ImageMissing`].
pub struct ManifestImageLoader {
    manifest_path: PathBuf,
    entries: Option<FxHashMap<String, ImageHandle>>,
}

impl ManifestImageLoader {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: assets_dir.into().join("manifest.json"),
            entries: None,
        }
    }

    fn ensure_loaded(&mut self) -> StageResult<()> {
        if self.entries.is_some() {
            return Ok(());
        }
        let text =
            std::fs::read_to_string(&self.manifest_path).map_err(|source| StageError::ManifestIo {
                path: self.manifest_path.clone(),
                source,
            })?;
        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|source| StageError::ManifestParse {
                path: self.manifest_path.clone(),
                source,
            })?;
        let mut entries = FxHashMap::default();
        for entry in manifest.images {
            entries.insert(
                entry.name.clone(),
                ImageHandle {
                    name: entry.name,
                    width: entry.width,
                    height: entry.height,
                },
            );
        }
        log::info!(
            "Loaded asset manifest {} ({} images)",
            self.manifest_path.display(),
            entries.len()
        );
        self.entries = Some(entries);
        Ok(())
    }
}

impl ImageLoader for ManifestImageLoader {
    fn load_image(&mut self, name: &str) -> StageResult<ImageHandle> {
        self.ensure_loaded()?;
        self.entries
            .as_ref()
            .and_then(|entries| entries.get(name))
            .cloned()
            .ok_or_else(|| StageError::ImageMissing(name.to_string()))
    }
}

/// Loaded images keyed by name.
///
/// `load` consults the cache first, then the loader, and caches the result,
/// so repeated loads of one name return the same handle.
pub struct ImageStore {
    loader: Box<dyn ImageLoader>,
    cache: FxHashMap<String, ImageHandle>,
}

impl ImageStore {
    pub fn new(loader: Box<dyn ImageLoader>) -> Self {
        Self {
            loader,
            cache: FxHashMap::default(),
        }
    }

    /// Insert a handle directly, bypassing the loader.
    pub fn insert(&mut self, handle: ImageHandle) {
        self.cache.insert(handle.name.clone(), handle);
    }

    pub fn get(&self, name: &str) -> Option<&ImageHandle> {
        self.cache.get(name)
    }

    pub fn load(&mut self, name: &str) -> StageResult<ImageHandle> {
        if let Some(handle) = self.cache.get(name) {
            return Ok(handle.clone());
        }
        let handle = self.loader.load_image(name)?;
        self.cache.insert(name.to_string(), handle.clone());
        Ok(handle)
    }
}
