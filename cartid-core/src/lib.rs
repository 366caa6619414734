//! Shared vocabulary for cartridge image identification.
//!
//! This crate holds the types every other crate speaks in: the closed
//! [`Platform`] set, the [`ResolveError`] failure taxonomy, the opaque
//! [`Fingerprint`] carried through resolution, and the bounds-checked
//! field readers used by the per-platform header extractors.

pub mod error;
pub mod fingerprint;
pub mod platform;
pub mod util;

pub use error::ResolveError;
pub use fingerprint::Fingerprint;
pub use platform::{Platform, PlatformParseError};
