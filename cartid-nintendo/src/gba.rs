//! Game Boy Advance header extractor.
//!
//! The GBA header lives at 0xA0: a 12-character internal title followed by
//! the 4-character game code whose 4th character encodes the region.

use cartid_core::util::field_ascii;

const TITLE: usize = 0xA0;
const TITLE_LEN: usize = 12;
const GAME_CODE: usize = 0xAC;
const GAME_CODE_LEN: usize = 4;

/// Serial prefix for GBA game identifiers.
pub const GAME_ID_PREFIX: &str = "AGB";

/// Raw GBA header fields; absent when the image is truncated before them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GbaHeader {
    pub title: Option<String>,
    pub game_code: Option<String>,
}

/// Extract the GBA header fields.
pub fn extract(image: &[u8]) -> GbaHeader {
    GbaHeader {
        title: field_ascii(image, TITLE, TITLE_LEN),
        game_code: field_ascii(image, GAME_CODE, GAME_CODE_LEN),
    }
}

#[cfg(test)]
#[path = "tests/gba_tests.rs"]
mod tests;
