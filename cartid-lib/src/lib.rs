//! High-level cartridge identification: loading images from disk,
//! fingerprinting them, and resolving their header metadata.
//!
//! The lower layers stay pure — [`cartid_nintendo::resolve`] maps bytes to
//! metadata with no I/O — and this crate wraps them with file loading,
//! SHA-1 fingerprinting, and load observers for callers that want to react
//! to each identified cartridge.

pub mod hasher;
pub mod loader;

pub use cartid_core::{Fingerprint, Platform, ResolveError};
pub use cartid_nintendo::{CartridgeMetadata, SnesCartridge, resolve};
pub use hasher::{sha1_fingerprint, sha1_fingerprint_reader};
pub use loader::{CartridgeLoader, LoadError};
