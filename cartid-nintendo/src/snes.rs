//! SNES (Super Famicom) header extractor and map-mode disambiguator.
//!
//! SNES cartridges use one of two incompatible memory-mapping conventions —
//! LoROM and HiROM — that place the header block at different addresses.
//! Every field offset below is relative to the mapping's header base, so the
//! map mode must be decided before anything else can be read.

use cartid_core::util::{field_ascii, field_byte};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Header base for each map mode; all field offsets are relative to this.
const LOW_BASE: usize = 0x7F00;
const HIGH_BASE: usize = 0xFF00;

const GAME_CODE: usize = 0xB2;
const GAME_CODE_LEN: usize = 4;
const TITLE: usize = 0xC0;
const TITLE_LEN: usize = 21;
const MAP_SPEED: usize = 0xD5;
const HARDWARE: usize = 0xD6;
const ROM_SIZE: usize = 0xD7;
const RAM_SIZE: usize = 0xD8;
const REGION: usize = 0xD9;

/// Map/speed byte values that strongly suggest a HiROM-family mapping.
const HIGH_LIKELY: [u8; 5] = [0x21, 0x31, 0x23, 0x32, 0x25];

/// Map/speed byte values that strongly suggest a LoROM mapping.
const LOW_LIKELY: [u8; 2] = [0x20, 0x30];

/// Exponents above this encode sizes no cartridge can carry (16 GiB).
const MAX_SIZE_EXPONENT: u8 = 24;

// ---------------------------------------------------------------------------
// Map-mode disambiguation
// ---------------------------------------------------------------------------

/// The memory-mapping convention a SNES cartridge header was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum MapMode {
    Low,
    High,
}

impl MapMode {
    /// Header base address for this map mode.
    pub fn base(self) -> usize {
        match self {
            Self::Low => LOW_BASE,
            Self::High => HIGH_BASE,
        }
    }
}

/// Decide whether an image uses the LoROM or HiROM header placement.
///
/// Reads the map/speed byte at both candidate addresses and classifies each
/// against the known likely-value sets. High wins only when the high-side
/// byte is plausible and the low-side byte is not; every other outcome —
/// both plausible, neither plausible, either byte unreadable — defaults to
/// Low. The default is a deliberate tie-break, not an error path.
pub fn detect_map_mode(image: &[u8]) -> MapMode {
    let low_byte = field_byte(image, LOW_BASE + MAP_SPEED);
    let high_byte = field_byte(image, HIGH_BASE + MAP_SPEED);

    let high_likely = high_byte.is_some_and(|b| HIGH_LIKELY.contains(&b));
    let low_likely = low_byte.is_some_and(|b| LOW_LIKELY.contains(&b));

    if high_likely && !low_likely {
        MapMode::High
    } else {
        MapMode::Low
    }
}

// ---------------------------------------------------------------------------
// Header extraction
// ---------------------------------------------------------------------------

/// Raw SNES header fields. Each field is absent when the image ends before
/// its byte range; the raw code bytes are kept for the resolver's tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnesHeader {
    pub map_mode: MapMode,
    pub title: Option<String>,
    pub game_code: Option<String>,
    pub map_speed_code: Option<u8>,
    pub hardware_code: Option<u8>,
    pub rom_size_code: Option<u8>,
    pub ram_size_code: Option<u8>,
    pub region_code: Option<u8>,
}

/// Extract the SNES header fields at the offsets selected by `map_mode`.
pub fn extract(image: &[u8], map_mode: MapMode) -> SnesHeader {
    let base = map_mode.base();
    SnesHeader {
        map_mode,
        title: field_ascii(image, base + TITLE, TITLE_LEN),
        game_code: field_ascii(image, base + GAME_CODE, GAME_CODE_LEN),
        map_speed_code: field_byte(image, base + MAP_SPEED),
        hardware_code: field_byte(image, base + HARDWARE),
        rom_size_code: field_byte(image, base + ROM_SIZE),
        ram_size_code: field_byte(image, base + RAM_SIZE),
        region_code: field_byte(image, base + REGION),
    }
}

/// Decode a ROM/RAM size exponent byte: the header stores the power-of-two
/// kibibyte count. Implausible exponents decode as absent.
pub fn size_from_exponent(code: u8) -> Option<u64> {
    if code > MAX_SIZE_EXPONENT {
        return None;
    }
    Some(1024u64 << code)
}

#[cfg(test)]
#[path = "tests/snes_tests.rs"]
mod tests;
