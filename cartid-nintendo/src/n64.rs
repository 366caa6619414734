//! Nintendo 64 header extractor.
//!
//! N64 dumps circulate in three byte orders — big-endian (.z64),
//! byte-swapped (.v64), and little-endian (.n64) — distinguished by the
//! magic word in the first four bytes. Header text is stored in the image's
//! native order, so each field window is normalized to big-endian before
//! decoding. Images with an unreadable or unknown magic word are treated as
//! byte-swapped.

use cartid_core::util::{field_bytes, read_ascii_fixed};

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

/// Byte order of an N64 dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// .z64 — big-endian, no transformation needed
    BigEndian,
    /// .v64 — adjacent byte pairs swapped
    ByteSwapped,
    /// .n64 — little-endian, 4-byte groups reversed
    LittleEndian,
}

const MAGIC_BIG: [u8; 4] = [0x80, 0x37, 0x12, 0x40];
const MAGIC_SWAPPED: [u8; 4] = [0x37, 0x80, 0x40, 0x12];
const MAGIC_LITTLE: [u8; 4] = [0x40, 0x12, 0x37, 0x80];

/// Detect the dump byte order from the magic word in the first four bytes.
pub fn detect_byte_order(image: &[u8]) -> Option<ByteOrder> {
    let magic = field_bytes(image, 0, 4)?;
    match [magic[0], magic[1], magic[2], magic[3]] {
        MAGIC_BIG => Some(ByteOrder::BigEndian),
        MAGIC_SWAPPED => Some(ByteOrder::ByteSwapped),
        MAGIC_LITTLE => Some(ByteOrder::LittleEndian),
        _ => None,
    }
}

/// Rewrite a 4-byte-aligned window into big-endian order in place.
fn normalize(window: &mut [u8], order: ByteOrder) {
    match order {
        ByteOrder::BigEndian => {}
        ByteOrder::ByteSwapped => {
            for i in (0..window.len().saturating_sub(1)).step_by(2) {
                window.swap(i, i + 1);
            }
        }
        ByteOrder::LittleEndian => {
            for chunk in window.chunks_exact_mut(4) {
                chunk.reverse();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Header extraction
// ---------------------------------------------------------------------------

/// Title field: 14 bytes at 0x20, read through a window padded to the
/// 4-byte normalization granularity.
const TITLE: usize = 0x20;
const TITLE_LEN: usize = 14;
const TITLE_WINDOW: usize = 16;

/// Game code field: category + 2-character id + destination at 0x3B,
/// followed by the version byte, inside the 0x38..0x40 group window.
const CODE_WINDOW: usize = 0x38;
const CODE_WINDOW_LEN: usize = 8;
const GAME_CODE_LEN: usize = 4;

/// Raw N64 header fields; absent when the image is truncated before them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct N64Header {
    pub byte_order: Option<ByteOrder>,
    pub title: Option<String>,
    pub game_code: Option<String>,
    pub version: Option<u8>,
}

/// Extract the N64 header fields, normalizing each window to big-endian.
pub fn extract(image: &[u8]) -> N64Header {
    let byte_order = detect_byte_order(image);
    let order = byte_order.unwrap_or(ByteOrder::ByteSwapped);

    let title = field_bytes(image, TITLE, TITLE_WINDOW).map(|window| {
        let mut window: [u8; TITLE_WINDOW] = window.try_into().unwrap_or([0; TITLE_WINDOW]);
        normalize(&mut window, order);
        read_ascii_fixed(&window[..TITLE_LEN])
    });

    let (game_code, version) = match field_bytes(image, CODE_WINDOW, CODE_WINDOW_LEN) {
        Some(window) => {
            let mut window: [u8; CODE_WINDOW_LEN] =
                window.try_into().unwrap_or([0; CODE_WINDOW_LEN]);
            normalize(&mut window, order);
            let code = read_ascii_fixed(&window[3..3 + GAME_CODE_LEN]);
            (Some(code), Some(window[7]))
        }
        None => (None, None),
    };

    N64Header {
        byte_order,
        title,
        game_code,
        version,
    }
}

#[cfg(test)]
#[path = "tests/n64_tests.rs"]
mod tests;
