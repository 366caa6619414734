//! Game Boy / Game Boy Color header extractor.
//!
//! The Game Boy header lives at 0x134: a 9-character internal title, a
//! 4-character manufacturer code (later cartridges only), and the
//! destination byte at 0x14A distinguishing Japanese from overseas releases.

use cartid_core::util::{field_ascii, field_byte};

const TITLE: usize = 0x134;
const TITLE_LEN: usize = 9;
const GAME_CODE: usize = 0x13F;
const GAME_CODE_LEN: usize = 4;
const REGION: usize = 0x14A;

/// Raw Game Boy header fields; absent when the image is truncated before
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoyHeader {
    pub title: Option<String>,
    pub game_code: Option<String>,
    pub region_code: Option<u8>,
}

/// Extract the Game Boy header fields.
pub fn extract(image: &[u8]) -> GameBoyHeader {
    GameBoyHeader {
        title: field_ascii(image, TITLE, TITLE_LEN),
        game_code: field_ascii(image, GAME_CODE, GAME_CODE_LEN),
        region_code: field_byte(image, REGION),
    }
}

#[cfg(test)]
#[path = "tests/gameboy_tests.rs"]
mod tests;
