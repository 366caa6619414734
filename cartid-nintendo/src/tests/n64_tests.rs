use super::*;

fn make_z64() -> Vec<u8> {
    let mut image = vec![0u8; 0x1000];
    image[..4].copy_from_slice(&MAGIC_BIG);
    image[0x20..0x2E].copy_from_slice(b"SUPER MARIO 64");
    image[0x3B..0x3F].copy_from_slice(b"NSME");
    image[0x3F] = 0x02;
    image
}

fn pair_swap(image: &[u8]) -> Vec<u8> {
    let mut swapped = image.to_vec();
    for i in (0..swapped.len() - 1).step_by(2) {
        swapped.swap(i, i + 1);
    }
    swapped
}

fn word_reverse(image: &[u8]) -> Vec<u8> {
    let mut reversed = image.to_vec();
    for chunk in reversed.chunks_exact_mut(4) {
        chunk.reverse();
    }
    reversed
}

#[test]
fn test_detect_byte_order() {
    let z64 = make_z64();
    assert_eq!(detect_byte_order(&z64), Some(ByteOrder::BigEndian));
    assert_eq!(
        detect_byte_order(&pair_swap(&z64)),
        Some(ByteOrder::ByteSwapped)
    );
    assert_eq!(
        detect_byte_order(&word_reverse(&z64)),
        Some(ByteOrder::LittleEndian)
    );
    assert_eq!(detect_byte_order(&[0u8; 0x40]), None);
    assert_eq!(detect_byte_order(&[]), None);
}

#[test]
fn test_extract_big_endian() {
    let header = extract(&make_z64());
    assert_eq!(header.byte_order, Some(ByteOrder::BigEndian));
    assert_eq!(header.title.as_deref(), Some("SUPER MARIO 64"));
    assert_eq!(header.game_code.as_deref(), Some("NSME"));
    assert_eq!(header.version, Some(0x02));
}

#[test]
fn test_extract_byte_swapped() {
    let header = extract(&pair_swap(&make_z64()));
    assert_eq!(header.byte_order, Some(ByteOrder::ByteSwapped));
    assert_eq!(header.title.as_deref(), Some("SUPER MARIO 64"));
    assert_eq!(header.game_code.as_deref(), Some("NSME"));
    assert_eq!(header.version, Some(0x02));
}

#[test]
fn test_extract_little_endian() {
    let header = extract(&word_reverse(&make_z64()));
    assert_eq!(header.byte_order, Some(ByteOrder::LittleEndian));
    assert_eq!(header.title.as_deref(), Some("SUPER MARIO 64"));
    assert_eq!(header.game_code.as_deref(), Some("NSME"));
    assert_eq!(header.version, Some(0x02));
}

#[test]
fn test_unknown_magic_reads_as_byte_swapped() {
    let mut image = pair_swap(&make_z64());
    image[..4].fill(0);
    let header = extract(&image);
    assert_eq!(header.byte_order, None);
    assert_eq!(header.title.as_deref(), Some("SUPER MARIO 64"));
    assert_eq!(header.game_code.as_deref(), Some("NSME"));
}

#[test]
fn test_truncated_before_code_window() {
    let image = &make_z64()[..0x30];
    let header = extract(image);
    assert_eq!(header.title.as_deref(), Some("SUPER MARIO 64"));
    assert_eq!(header.game_code, None);
    assert_eq!(header.version, None);
}

#[test]
fn test_truncated_mid_title_window() {
    let image = &make_z64()[..0x2E];
    let header = extract(image);
    assert_eq!(header.title, None);
}
