//! Nintendo cartridge platform detection and header metadata extraction.
//!
//! Given a raw in-memory cartridge image (and optionally a filename hint),
//! this crate decides which console family the image belongs to, reads the
//! header fields at that platform's fixed offsets, and translates the raw
//! codes into semantic values. Supported platforms:
//!
//! - Nintendo DS
//! - Game Boy Advance
//! - Game Boy / Game Boy Color
//! - SNES (Super Famicom), with LoROM/HiROM disambiguation
//! - Nintendo 64, in all three dump byte orders
//!
//! The public entry point is [`resolve`]. Everything it composes — the
//! detector, the per-platform extractors, the lookup tables — is a pure
//! function over the borrowed image bytes; nothing here performs I/O.

pub mod detect;
pub mod ds;
pub mod gameboy;
pub mod gba;
pub mod header;
pub mod n64;
pub mod resolver;
pub mod snes;
pub mod tables;

pub use cartid_core::{Fingerprint, Platform, ResolveError};
pub use header::HeaderFields;
pub use resolver::{CartridgeMetadata, SnesCartridge, resolve};
pub use snes::MapMode;
