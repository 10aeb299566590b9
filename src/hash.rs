use core::{fmt::Display, str::FromStr};

use hex::encode;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{GravatarError, Result};

/// Length of a SHA-256 digest rendered as hex.
pub const EMAIL_HASH_LEN: usize = 64;

/// The value Gravatar uses to identify an account.
///
/// Uses [`sha2`] crate to compute the SHA-256 of the normalized email
/// address and renders it as lowercase hex without separators.
#[derive(
    Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub struct EmailHash(String);

impl EmailHash {
    /// Hashes an already-normalized email address.
    pub fn from_email(normalized: &str) -> Self {
        Self::from_bytes(normalized.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        log::debug!("Computing SHA-256 hash for {} bytes", bytes.len());

        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let digest = hasher.finalize();
        EmailHash(encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailHash {
    type Err = GravatarError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != EMAIL_HASH_LEN {
            return Err(GravatarError::InvalidHash(format!(
                "expected {} hex characters, got {}",
                EMAIL_HASH_LEN,
                s.len()
            )));
        }
        // Validates the characters, the decoded bytes are not needed
        hex::decode(s)?;
        Ok(EmailHash(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for EmailHash {
    type Error = GravatarError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Display for EmailHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOHN_DOE_HASH: &str =
        "836f82db99121b3481011f16b49dfa5fbc714a0d1b1b9f784a1ebbbf5b39577f";
    const EMPTY_HASH: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn sanity_check() {
        let hash = EmailHash::from_email("john.doe@example.com");
        assert_eq!(hash.as_str(), JOHN_DOE_HASH);
        assert_eq!(hash.to_string().len(), EMAIL_HASH_LEN);

        let hash = EmailHash::from_bytes(b"john.doe@example.com");
        assert_eq!(hash.as_str(), JOHN_DOE_HASH);
    }

    #[test]
    fn empty_input_hashes_to_empty_digest() {
        assert_eq!(EmailHash::from_email("").as_str(), EMPTY_HASH);
    }

    #[test]
    fn parse_accepts_hex_and_lowercases() {
        let parsed: EmailHash = JOHN_DOE_HASH.to_uppercase().parse().unwrap();
        assert_eq!(parsed, EmailHash::from_email("john.doe@example.com"));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            "abc".parse::<EmailHash>(),
            Err(GravatarError::InvalidHash(_))
        ));

        let not_hex = "z".repeat(EMAIL_HASH_LEN);
        assert!(matches!(
            not_hex.parse::<EmailHash>(),
            Err(GravatarError::InvalidHash(_))
        ));
    }
}
