//! Cartridge loading: file I/O, fingerprinting, and load observers around
//! the pure resolution pipeline.

use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use cartid_core::ResolveError;
use cartid_nintendo::{CartridgeMetadata, resolve};

use crate::hasher::sha1_fingerprint;

/// Errors that can occur while loading a cartridge image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O error while reading the image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image could not be resolved to any known platform
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

type LoadObserver = Box<dyn Fn(&CartridgeMetadata)>;

/// Loads cartridge images and resolves them into metadata.
///
/// The resolution itself never mutates anything; the loader only adds file
/// reading, SHA-1 fingerprinting, and observer notification on top.
/// Observers registered with [`on_load`](Self::on_load) run in registration
/// order after each successful load.
#[derive(Default)]
pub struct CartridgeLoader {
    observers: Vec<LoadObserver>,
}

impl CartridgeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer called with each successfully loaded cartridge.
    pub fn on_load(&mut self, observer: impl Fn(&CartridgeMetadata) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Load a cartridge image from disk and resolve it.
    ///
    /// The filename doubles as the platform hint, so a recognized extension
    /// decides the platform without probing the contents.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<CartridgeMetadata, LoadError> {
        let path = path.as_ref();
        debug!("loading cartridge image from {}", path.display());
        let image = std::fs::read(path)?;
        let hint = path.file_name().and_then(|name| name.to_str());
        self.load_bytes(&image, hint)
    }

    /// Resolve an in-memory image, fingerprinting it and notifying the
    /// registered observers.
    pub fn load_bytes(
        &self,
        image: &[u8],
        hint: Option<&str>,
    ) -> Result<CartridgeMetadata, LoadError> {
        let fingerprint = sha1_fingerprint(image);
        let metadata = resolve(image, hint, fingerprint)?;
        info!(
            "identified {} cartridge ({} bytes)",
            metadata.platform.short_name(),
            metadata.size
        );
        for observer in &self.observers {
            observer(&metadata);
        }
        Ok(metadata)
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
