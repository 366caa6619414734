//! Platform-tagged header field records and extractor dispatch.

use cartid_core::Platform;

use crate::ds::DsHeader;
use crate::gameboy::GameBoyHeader;
use crate::gba::GbaHeader;
use crate::n64::N64Header;
use crate::snes::SnesHeader;
use crate::{ds, gameboy, gba, n64, snes};

/// Raw header fields for one platform.
///
/// Every field inside a variant is optional: a field is absent when the
/// image is too short to contain its byte range, which is a valid state
/// ("header truncated at this field"), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderFields {
    Ds(DsHeader),
    Gba(GbaHeader),
    GameBoy(GameBoyHeader),
    Snes(SnesHeader),
    N64(N64Header),
}

impl HeaderFields {
    /// The platform this record was extracted for.
    pub fn platform(&self) -> Platform {
        match self {
            Self::Ds(_) => Platform::Ds,
            Self::Gba(_) => Platform::Gba,
            Self::GameBoy(_) => Platform::GameBoy,
            Self::Snes(_) => Platform::Snes,
            Self::N64(_) => Platform::N64,
        }
    }
}

/// Run the extractor for `platform` over the image.
///
/// For SNES this also runs the map-mode disambiguator, since the map mode
/// relocates every SNES field offset.
pub fn extract(image: &[u8], platform: Platform) -> HeaderFields {
    match platform {
        Platform::Ds => HeaderFields::Ds(ds::extract(image)),
        Platform::Gba => HeaderFields::Gba(gba::extract(image)),
        Platform::GameBoy => HeaderFields::GameBoy(gameboy::extract(image)),
        Platform::Snes => {
            let map_mode = snes::detect_map_mode(image);
            HeaderFields::Snes(snes::extract(image, map_mode))
        }
        Platform::N64 => HeaderFields::N64(n64::extract(image)),
    }
}
