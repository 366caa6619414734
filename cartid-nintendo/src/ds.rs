//! Nintendo DS header extractor.
//!
//! The NDS cartridge header sits at the very start of the image: the
//! internal title, the 4-character game code (whose 4th character encodes
//! the region), the unit-code byte selecting NDS/DSi hardware, and the ROM
//! revision.

use cartid_core::util::{field_ascii, field_byte};

const TITLE: usize = 0x000;
const TITLE_LEN: usize = 11;
const GAME_CODE: usize = 0x00C;
const GAME_CODE_LEN: usize = 4;
const UNIT_CODE: usize = 0x012;
const VERSION: usize = 0x01E;

/// Serial prefix for NDS game identifiers.
pub const GAME_ID_PREFIX: &str = "NTR";

/// Raw NDS header fields; absent when the image is truncated before them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsHeader {
    pub title: Option<String>,
    pub game_code: Option<String>,
    pub unit_code: Option<u8>,
    pub version: Option<u8>,
}

/// Extract the NDS header fields.
pub fn extract(image: &[u8]) -> DsHeader {
    DsHeader {
        title: field_ascii(image, TITLE, TITLE_LEN),
        game_code: field_ascii(image, GAME_CODE, GAME_CODE_LEN),
        unit_code: field_byte(image, UNIT_CODE),
        version: field_byte(image, VERSION),
    }
}

#[cfg(test)]
#[path = "tests/ds_tests.rs"]
mod tests;
