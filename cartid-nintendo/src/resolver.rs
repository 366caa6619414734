//! Metadata resolver: the public entry point composing detection, header
//! extraction, and the lookup tables into one immutable result.

use cartid_core::{Fingerprint, Platform, ResolveError};
use serde::Serialize;

use crate::header::{self, HeaderFields};
use crate::tables::{self, SnesHardware, SnesMapSpeed};
use crate::{detect, snes};

/// Resolved cartridge metadata.
///
/// Constructed once per resolution call and immutable thereafter. Absent
/// fields mean the header was truncated before them or their raw code is
/// unknown to the lookup tables; either way the resolution itself
/// succeeded. Callers needing the raw code bytes can run
/// [`header::extract`] directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartridgeMetadata {
    pub platform: Platform,
    /// Internal name stored in the header.
    pub internal_name: Option<String>,
    /// Game/product code stored in the header.
    pub game_code: Option<String>,
    /// Serial-style identifier (prefix + game code) for platforms that
    /// define one.
    pub game_id: Option<String>,
    /// Region name resolved from the raw region code.
    pub region: Option<&'static str>,
    /// Target unit resolved from the NDS unit-code byte.
    pub unit: Option<&'static str>,
    /// SNES cartridge capability descriptor.
    pub cartridge: Option<SnesCartridge>,
    /// Image length in bytes.
    pub size: u64,
    /// Externally computed content fingerprint, stored untouched.
    pub fingerprint: Fingerprint,
}

/// SNES on-cartridge capabilities, each part resolved independently: one
/// unknown code leaves only its own descriptor absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnesCartridge {
    pub map_speed: Option<SnesMapSpeed>,
    pub hardware: Option<SnesHardware>,
    pub rom_size: Option<u64>,
    pub ram_size: Option<u64>,
}

/// Resolve a cartridge image into [`CartridgeMetadata`].
///
/// The fingerprint is supplied by the caller — typically a SHA-1 digest of
/// the same bytes — and carried through opaquely. The only failure is an
/// unrecognized format; truncated or unknown header fields resolve to
/// absent values within a successful result.
pub fn resolve(
    image: &[u8],
    hint: Option<&str>,
    fingerprint: Fingerprint,
) -> Result<CartridgeMetadata, ResolveError> {
    let platform = detect::detect(image, hint)?;
    let fields = header::extract(image, platform);
    Ok(resolve_fields(&fields, image.len() as u64, fingerprint))
}

/// Translate extracted header fields into resolved metadata.
pub fn resolve_fields(
    fields: &HeaderFields,
    size: u64,
    fingerprint: Fingerprint,
) -> CartridgeMetadata {
    let mut meta = CartridgeMetadata {
        platform: fields.platform(),
        internal_name: None,
        game_code: None,
        game_id: None,
        region: None,
        unit: None,
        cartridge: None,
        size,
        fingerprint,
    };

    match fields {
        HeaderFields::Ds(h) => {
            meta.internal_name = non_empty(&h.title);
            meta.game_code = non_empty(&h.game_code);
            meta.game_id = game_id(crate::ds::GAME_ID_PREFIX, &h.game_code);
            meta.region = region_char(&h.game_code).and_then(tables::nds_region_name);
            meta.unit = h.unit_code.and_then(tables::nds_unit_name);
        }
        HeaderFields::Gba(h) => {
            meta.internal_name = non_empty(&h.title);
            meta.game_code = non_empty(&h.game_code);
            meta.game_id = game_id(crate::gba::GAME_ID_PREFIX, &h.game_code);
            meta.region = region_char(&h.game_code).and_then(tables::gba_region_name);
        }
        HeaderFields::GameBoy(h) => {
            meta.internal_name = non_empty(&h.title);
            meta.game_code = non_empty(&h.game_code);
            meta.region = h.region_code.and_then(tables::gb_region_name);
        }
        HeaderFields::Snes(h) => {
            meta.internal_name = non_empty(&h.title);
            meta.game_code = non_empty(&h.game_code);
            meta.region = h.region_code.and_then(tables::snes_region_name);
            meta.cartridge = Some(SnesCartridge {
                map_speed: h.map_speed_code.and_then(tables::snes_map_speed),
                hardware: h.hardware_code.and_then(tables::snes_hardware),
                rom_size: h.rom_size_code.and_then(snes::size_from_exponent),
                ram_size: h.ram_size_code.and_then(snes::size_from_exponent),
            });
        }
        HeaderFields::N64(h) => {
            meta.internal_name = non_empty(&h.title);
            meta.game_code = non_empty(&h.game_code);
        }
    }

    meta
}

/// A decoded text field, dropping padding-only (empty) values.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Build a serial-style identifier from a prefix and a complete game code.
/// A missing or short code yields no identifier, never a bare prefix.
fn game_id(prefix: &str, code: &Option<String>) -> Option<String> {
    code.as_ref()
        .filter(|code| code.len() == 4)
        .map(|code| format!("{prefix}-{code}"))
}

/// The region character of a game code: its 4th character, when present.
fn region_char(code: &Option<String>) -> Option<char> {
    code.as_ref().and_then(|code| code.chars().nth(3))
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
