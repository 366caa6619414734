//! Platform detection from raw image bytes and filename hints.
//!
//! A filename hint, when present and recognized, is authoritative and skips
//! byte inspection entirely. Otherwise candidate platforms are probed in a
//! fixed priority order — NDS, GBA, GB, N64 — by checking whether the game
//! code region at each platform's fixed offset holds plausible ASCII code
//! characters. SNES is the catch-all: any image large enough to contain a
//! LoROM header is accepted as SNES when no earlier probe matched.

use cartid_core::util::field_bytes;
use cartid_core::{Platform, ResolveError};
use log::debug;

use crate::n64;

/// Game code offsets probed for each code-bearing platform.
const NDS_CODE_OFFSET: usize = 0x0C;
const GBA_CODE_OFFSET: usize = 0xAC;
const GB_CODE_OFFSET: usize = 0x13F;
const CODE_LEN: usize = 4;

/// Smallest image that can contain a LoROM header (the SNES fallback bound).
pub const SNES_MIN_IMAGE: usize = 0x8000;

/// Smallest image any probe can match (the NDS game code ends at 0x10).
const MIN_VIABLE_IMAGE: usize = NDS_CODE_OFFSET + CODE_LEN;

/// Decide which platform an image belongs to.
///
/// The hint may be a bare extension (`"nds"`) or a full filename
/// (`"game.nds"`); unrecognized hints fall through to content probing.
pub fn detect(image: &[u8], hint: Option<&str>) -> Result<Platform, ResolveError> {
    if let Some(hint) = hint
        && let Some(platform) = platform_from_hint(hint)
    {
        debug!("detected {} from filename hint '{}'", platform.short_name(), hint);
        return Ok(platform);
    }
    detect_from_contents(image)
}

/// Map a filename hint to a platform via its extension.
fn platform_from_hint(hint: &str) -> Option<Platform> {
    let ext = hint.rsplit('.').next().unwrap_or(hint);
    Platform::from_extension(ext)
}

/// Probe the image contents in fixed priority order; first hit wins.
fn detect_from_contents(image: &[u8]) -> Result<Platform, ResolveError> {
    if image.len() < MIN_VIABLE_IMAGE {
        return Err(ResolveError::TooSmall {
            expected: MIN_VIABLE_IMAGE as u64,
            actual: image.len() as u64,
        });
    }

    let platform = if code_probe(image, NDS_CODE_OFFSET) {
        Some(Platform::Ds)
    } else if code_probe(image, GBA_CODE_OFFSET) {
        Some(Platform::Gba)
    } else if code_probe(image, GB_CODE_OFFSET) {
        Some(Platform::GameBoy)
    } else if n64::detect_byte_order(image).is_some() {
        Some(Platform::N64)
    } else if image.len() >= SNES_MIN_IMAGE {
        Some(Platform::Snes)
    } else {
        None
    };

    match platform {
        Some(platform) => {
            debug!("detected {} from image contents", platform.short_name());
            Ok(platform)
        }
        None => Err(ResolveError::UnrecognizedFormat {
            size: image.len() as u64,
        }),
    }
}

/// True when the 4 bytes at `offset` all look like game-code characters
/// (ASCII uppercase letters and digits).
fn code_probe(image: &[u8], offset: usize) -> bool {
    field_bytes(image, offset, CODE_LEN)
        .is_some_and(|code| code.iter().all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit()))
}

#[cfg(test)]
#[path = "tests/detect_tests.rs"]
mod tests;
