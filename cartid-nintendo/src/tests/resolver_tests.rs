use super::*;

fn fp() -> Fingerprint {
    Fingerprint::from("0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33")
}

fn make_ds_rom() -> Vec<u8> {
    let mut image = vec![0u8; 0x200];
    image[0x000..0x008].copy_from_slice(b"TESTGAME");
    image[0x00C..0x010].copy_from_slice(b"ABCE");
    image[0x012] = 0x00;
    image[0x01E] = 0x01;
    image
}

fn make_snes_lorom() -> Vec<u8> {
    let mut image = vec![0u8; 0x8000];
    image[0x7FB2..0x7FB6].copy_from_slice(b"AWVP");
    image[0x7FC0..0x7FCA].copy_from_slice(b"SUPER TEST");
    image[0x7FD5] = 0x20; // LoROM, slow
    image[0x7FD6] = 0x02; // rom + ram + battery
    image[0x7FD7] = 0x0A; // 1 MiB
    image[0x7FD8] = 0x03; // 8 KiB
    image[0x7FD9] = 0x01; // americas
    image
}

#[test]
fn test_minimal_ds_image() {
    // The smallest resolvable image: 0x10 bytes with a game code at 0x0C
    let mut image = vec![0u8; 0x10];
    image[0x0C..0x10].copy_from_slice(b"ABCE");

    let meta = resolve(&image, None, fp()).unwrap();
    assert_eq!(meta.platform, Platform::Ds);
    assert_eq!(meta.internal_name, None);
    assert_eq!(meta.game_code.as_deref(), Some("ABCE"));
    assert_eq!(meta.game_id.as_deref(), Some("NTR-ABCE"));
    assert_eq!(meta.region, Some("americas"));
    assert_eq!(meta.unit, None);
    assert_eq!(meta.cartridge, None);
    assert_eq!(meta.size, 0x10);
    assert_eq!(meta.fingerprint, fp());
}

#[test]
fn test_full_ds_rom() {
    let meta = resolve(&make_ds_rom(), None, fp()).unwrap();
    assert_eq!(meta.internal_name.as_deref(), Some("TESTGAME"));
    assert_eq!(meta.game_id.as_deref(), Some("NTR-ABCE"));
    assert_eq!(meta.unit, Some("nds"));
    assert_eq!(meta.size, 0x200);
}

#[test]
fn test_gba_rom() {
    let mut image = vec![0u8; 0x100];
    image[0xA0..0xAB].copy_from_slice(b"POKEMON RUB");
    image[0xAC..0xB0].copy_from_slice(b"AXVJ");

    let meta = resolve(&image, None, fp()).unwrap();
    assert_eq!(meta.platform, Platform::Gba);
    assert_eq!(meta.internal_name.as_deref(), Some("POKEMON RUB"));
    assert_eq!(meta.game_id.as_deref(), Some("AGB-AXVJ"));
    assert_eq!(meta.region, Some("japan"));
    assert_eq!(meta.unit, None);
}

#[test]
fn test_gameboy_rom() {
    let mut image = vec![0u8; 0x150];
    image[0x134..0x13D].copy_from_slice(b"TESTTITLE");
    image[0x13F..0x143].copy_from_slice(b"BXTE");
    image[0x14A] = 0x00;

    let meta = resolve(&image, None, fp()).unwrap();
    assert_eq!(meta.platform, Platform::GameBoy);
    assert_eq!(meta.internal_name.as_deref(), Some("TESTTITLE"));
    assert_eq!(meta.game_code.as_deref(), Some("BXTE"));
    // Game Boy has no serial prefix convention
    assert_eq!(meta.game_id, None);
    assert_eq!(meta.region, Some("japan"));
}

#[test]
fn test_snes_rom() {
    let meta = resolve(&make_snes_lorom(), None, fp()).unwrap();
    assert_eq!(meta.platform, Platform::Snes);
    assert_eq!(meta.internal_name.as_deref(), Some("SUPER TEST"));
    assert_eq!(meta.game_code.as_deref(), Some("AWVP"));
    assert_eq!(meta.region, Some("americas"));

    let cart = meta.cartridge.unwrap();
    let map_speed = cart.map_speed.unwrap();
    assert_eq!(map_speed.mapping, "LoROM");
    assert_eq!(map_speed.speed, Some("2.68MHz"));
    let hardware = cart.hardware.unwrap();
    assert_eq!(hardware.coprocessor, None);
    assert!(hardware.has_battery);
    assert_eq!(cart.rom_size, Some(1024 * 1024));
    assert_eq!(cart.ram_size, Some(8 * 1024));
}

#[test]
fn test_snes_unknown_codes_resolve_independently() {
    let mut image = make_snes_lorom();
    image[0x7FD6] = 0x07; // unknown hardware code
    image[0x7FD8] = 0xFF; // implausible RAM size exponent

    let cart = resolve(&image, None, fp()).unwrap().cartridge.unwrap();
    assert_eq!(cart.hardware, None);
    assert_eq!(cart.ram_size, None);
    assert!(cart.map_speed.is_some());
    assert_eq!(cart.rom_size, Some(1024 * 1024));
}

#[test]
fn test_n64_rom() {
    let mut image = vec![0u8; 0x1000];
    image[..4].copy_from_slice(&[0x80, 0x37, 0x12, 0x40]);
    image[0x20..0x2E].copy_from_slice(b"SUPER MARIO 64");
    image[0x3B..0x3F].copy_from_slice(b"NSME");

    let meta = resolve(&image, None, fp()).unwrap();
    assert_eq!(meta.platform, Platform::N64);
    assert_eq!(meta.internal_name.as_deref(), Some("SUPER MARIO 64"));
    assert_eq!(meta.game_code.as_deref(), Some("NSME"));
    assert_eq!(meta.game_id, None);
    assert_eq!(meta.region, None);
}

#[test]
fn test_hint_selects_extraction_offsets() {
    // Content would probe as GBA; the hint forces NDS offsets instead
    let mut image = vec![0u8; 0x100];
    image[0xAC..0xB0].copy_from_slice(b"AXVE");

    let meta = resolve(&image, Some("demo.nds"), fp()).unwrap();
    assert_eq!(meta.platform, Platform::Ds);
    assert_eq!(meta.game_code, None);
}

#[test]
fn test_unknown_region_char_is_not_an_error() {
    let mut image = vec![0u8; 0x10];
    image[0x0C..0x10].copy_from_slice(b"ABC9");

    let meta = resolve(&image, None, fp()).unwrap();
    assert_eq!(meta.game_code.as_deref(), Some("ABC9"));
    assert_eq!(meta.game_id.as_deref(), Some("NTR-ABC9"));
    assert_eq!(meta.region, None);
}

#[test]
fn test_padding_only_title_is_absent() {
    let mut image = make_ds_rom();
    image[0x000..0x00B].fill(0);
    let meta = resolve(&image, None, fp()).unwrap();
    assert_eq!(meta.internal_name, None);
}

#[test]
fn test_zero_length_image_fails() {
    let result = resolve(&[], None, fp());
    assert!(matches!(result, Err(ResolveError::TooSmall { .. })));
}

#[test]
fn test_resolution_is_deterministic() {
    let image = make_snes_lorom();
    let first = resolve(&image, None, fp()).unwrap();
    let second = resolve(&image, None, fp()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_metadata_serializes_to_json() {
    let meta = resolve(&make_ds_rom(), None, fp()).unwrap();
    let value = serde_json::to_value(&meta).unwrap();
    assert_eq!(value["platform"], "nds");
    assert_eq!(value["game_id"], "NTR-ABCE");
    assert_eq!(value["region"], "americas");
    assert_eq!(value["size"], 0x200);
}
