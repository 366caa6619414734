//! SHA-1 content fingerprinting.

use std::io::Read;

use sha1::{Digest, Sha1};

use cartid_core::Fingerprint;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Compute the SHA-1 fingerprint of an in-memory image.
pub fn sha1_fingerprint(data: &[u8]) -> Fingerprint {
    let mut sha = Sha1::new();
    sha.update(data);
    Fingerprint::new(format!("{:x}", sha.finalize()))
}

/// Compute the SHA-1 fingerprint of a reader in fixed-size chunks, without
/// holding the whole image in memory.
pub fn sha1_fingerprint_reader(reader: &mut dyn Read) -> std::io::Result<Fingerprint> {
    let mut sha = Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        sha.update(&buf[..n]);
    }

    Ok(Fingerprint::new(format!("{:x}", sha.finalize())))
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
