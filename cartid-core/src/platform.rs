use serde::{Deserialize, Serialize};

/// Platform/console identifiers for all supported cartridge families.
///
/// This enum centralizes console identity — short names, display names,
/// file extensions, and aliases — in one place, so nothing downstream
/// branches on ad-hoc string tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "nds")]
    Ds,
    #[serde(rename = "gba")]
    Gba,
    #[serde(rename = "gb")]
    GameBoy,
    #[serde(rename = "snes")]
    Snes,
    #[serde(rename = "n64")]
    N64,
}

/// All platform variants in registration order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Ds,
    Platform::Gba,
    Platform::GameBoy,
    Platform::Snes,
    Platform::N64,
];

impl Platform {
    /// Canonical short name used for CLI output and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Ds => "nds",
            Self::Gba => "gba",
            Self::GameBoy => "gb",
            Self::Snes => "snes",
            Self::N64 => "n64",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ds => "Nintendo DS",
            Self::Gba => "Game Boy Advance",
            Self::GameBoy => "Game Boy / Game Boy Color",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::N64 => "Nintendo 64",
        }
    }

    /// File extensions commonly used for dumps of this platform.
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Ds => &["nds", "dsi"],
            Self::Gba => &["gba", "mb"],
            Self::GameBoy => &["gb", "gbc", "sgb"],
            Self::Snes => &["sfc", "smc", "swc", "fig"],
            Self::N64 => &["z64", "v64", "n64"],
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Ds => &["nds", "ds", "nintendo ds"],
            Self::Gba => &["gba", "game boy advance", "gameboy advance"],
            Self::GameBoy => &["gb", "gbc", "gameboy", "game boy"],
            Self::Snes => &["snes", "sfc", "super famicom", "super nintendo"],
            Self::N64 => &["n64", "nintendo 64", "nintendo64"],
        }
    }

    /// Map a file extension (lowercase, no dot) to its platform.
    pub fn from_extension(ext: &str) -> Option<Platform> {
        let lower = ext.to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.file_extensions().contains(&lower.as_str()))
    }

    /// All supported platform variants.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    ///
    /// Matches against `short_name()` and all entries in `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &platform in ALL_PLATFORMS {
            if platform.short_name() == lower {
                return Ok(platform);
            }
            for alias in platform.aliases() {
                if *alias == lower {
                    return Ok(platform);
                }
            }
        }
        Err(PlatformParseError(s.to_string()))
    }
}
