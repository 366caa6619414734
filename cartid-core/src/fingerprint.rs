use serde::{Deserialize, Serialize};

/// Opaque content fingerprint over a whole cartridge image.
///
/// The resolution pipeline never computes this itself — a boundary
/// collaborator digests the bytes and hands the value in, and the resolver
/// stores it untouched for identity/deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fingerprint {
    fn from(digest: String) -> Self {
        Self(digest)
    }
}

impl From<&str> for Fingerprint {
    fn from(digest: &str) -> Self {
        Self(digest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_displays_verbatim() {
        let fp = Fingerprint::new("da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(fp.as_str(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(fp.to_string(), fp.as_str());
    }

    #[test]
    fn from_impls_agree() {
        let a: Fingerprint = "abc123".into();
        let b: Fingerprint = String::from("abc123").into();
        assert_eq!(a, b);
    }
}
