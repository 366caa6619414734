//! Lookup tables translating raw header codes into semantic descriptors.
//!
//! Every table is a pure mapping keyed by the exact raw code stored at the
//! header offset: a single ASCII character for NDS/GBA region codes, a small
//! integer for GB/SNES region codes, a raw byte for the SNES hardware and
//! mapping/speed descriptors. Unknown keys return `None` — new or unlicensed
//! cartridges carry codes these tables have never seen, and that must not
//! abort extraction.

use serde::Serialize;

/// Region name for an NDS game-code region character (the 4th character of
/// the game code).
pub fn nds_region_name(code: char) -> Option<&'static str> {
    match code {
        'A' => Some("asia"),
        'C' => Some("china"),
        'P' => Some("europe"),
        'E' => Some("americas"),
        'J' => Some("japanese"),
        'F' => Some("french"),
        'H' => Some("dutch"),
        'I' => Some("italian"),
        'K' => Some("korean"),
        'L' => Some("usa#2"),
        'M' => Some("swedish"),
        'N' => Some("norwegian"),
        'O' => Some("international"),
        'Q' => Some("danish"),
        'R' => Some("russian"),
        'S' => Some("spanish"),
        'T' => Some("usa+aus"),
        'U' => Some("australia"),
        'V' => Some("eur+aus"),
        'W' => Some("europe#3"),
        'X' => Some("europe#4"),
        'Y' => Some("europe#5"),
        'Z' => Some("europe#5"),
        _ => None,
    }
}

/// Region name for a GBA game-code region character.
pub fn gba_region_name(code: char) -> Option<&'static str> {
    match code {
        'J' => Some("japan"),
        'E' => Some("english"),
        'P' => Some("europe"),
        'D' => Some("german"),
        'F' => Some("french"),
        'I' => Some("italian"),
        'S' => Some("spanish"),
        _ => None,
    }
}

/// Region name for the Game Boy destination byte at 0x14A.
pub fn gb_region_name(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("japan"),
        1 => Some("overseas"),
        _ => None,
    }
}

/// Region name for the SNES destination byte.
pub fn snes_region_name(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("japan"),
        1 => Some("americas"),
        2 => Some("europe"),
        _ => None,
    }
}

/// Target unit for the NDS unit-code byte at 0x012.
pub fn nds_unit_name(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("nds"),
        1 => Some("nds/dsi"),
        2 => Some("dsi"),
        _ => None,
    }
}

/// SNES memory-mapping convention and access speed, decoded from the
/// map/speed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnesMapSpeed {
    pub mapping: &'static str,
    pub speed: Option<&'static str>,
}

/// Mapping/speed descriptor for the SNES map/speed byte.
pub fn snes_map_speed(code: u8) -> Option<SnesMapSpeed> {
    let (mapping, speed) = match code {
        0x20 => ("LoROM", Some("2.68MHz")),
        0x21 => ("HiROM", Some("2.68MHz")),
        0x23 => ("SA-1", None),
        0x25 => ("ExHiROM", Some("2.68MHz")),
        0x30 => ("LoROM", Some("3.58MHz")),
        0x31 => ("HiROM", Some("3.58MHz")),
        0x32 => ("ExHiROM", Some("3.58MHz")),
        _ => return None,
    };
    Some(SnesMapSpeed { mapping, speed })
}

/// On-cartridge hardware decoded from the SNES chipset byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnesHardware {
    pub coprocessor: Option<&'static str>,
    pub has_rom: bool,
    pub has_ram: bool,
    pub has_battery: bool,
}

/// Hardware descriptor for the SNES chipset byte.
///
/// The high nibble selects the coprocessor family, the low nibble the
/// ROM/RAM/battery configuration. Codes outside the known families are
/// unassigned and return `None`.
pub fn snes_hardware(code: u8) -> Option<SnesHardware> {
    // The bare-ROM group starts three codes earlier than every coprocessor
    // group, so it is shifted onto the same config scale.
    let (coprocessor, config) = match code {
        0x00..=0x02 => (None, code + 0x03),
        0x03..=0x06 => (Some("dsp"), code),
        0x13..=0x16 => (Some("gsu/superFX"), code & 0x0F),
        0x23..=0x26 => (Some("obc1"), code & 0x0F),
        0x33..=0x36 => (Some("sa-1"), code & 0x0F),
        0x43..=0x46 => (Some("s-dd1"), code & 0x0F),
        0x53..=0x56 => (Some("s-rtc"), code & 0x0F),
        0xE3..=0xE6 => (Some("other"), code & 0x0F),
        0xF3..=0xF6 => (Some("custom"), code & 0x0F),
        _ => return None,
    };
    let (has_ram, has_battery) = match config {
        0x04 => (true, false),
        0x05 => (true, true),
        0x06 => (false, true),
        _ => (false, false),
    };
    Some(SnesHardware {
        coprocessor,
        has_rom: true,
        has_ram,
        has_battery,
    })
}

#[cfg(test)]
#[path = "tests/tables_tests.rs"]
mod tests;
