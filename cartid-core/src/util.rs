/// Bounds-checked slice of a header field's byte range.
///
/// Returns `None` when the image ends before the field does — the caller
/// records the field as absent rather than failing the whole extraction.
pub fn field_bytes(image: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    image.get(offset..end)
}

/// Bounds-checked read of a single header byte.
pub fn field_byte(image: &[u8], offset: usize) -> Option<u8> {
    image.get(offset).copied()
}

/// Bounds-checked read of a fixed-length ASCII header field.
///
/// Non-printable bytes are replaced with spaces, then the result is
/// trimmed. Header text fields are padded with 0x00 or 0xFF rather than
/// null-terminated, so the whole range is processed.
pub fn field_ascii(image: &[u8], offset: usize, len: usize) -> Option<String> {
    field_bytes(image, offset, len).map(read_ascii_fixed)
}

/// Decode a fixed-length ASCII buffer, space-filling non-printables and
/// trimming the result.
pub fn read_ascii_fixed(buf: &[u8]) -> String {
    let s: String = buf
        .iter()
        .map(|&b| {
            if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                ' '
            }
        })
        .collect();
    s.trim().to_string()
}
