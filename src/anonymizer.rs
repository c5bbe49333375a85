/// Caller address anonymization
///
/// Like deduplication keys are the SHA-256 digest of the caller's address,
/// hex encoded, so the raw address is never stored.
use sha2::{Digest, Sha256};

/// Hash a raw network address into an opaque, stable identifier
pub fn anonymize(raw_address: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_address.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            anonymize("127.0.0.1"),
            "12ca17b49af2289436f303e0166030a21e525d266e209267433801a8fd4071a0"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(anonymize("203.0.113.7"), anonymize("203.0.113.7"));
        assert_ne!(anonymize("203.0.113.7"), anonymize("203.0.113.8"));
    }

    #[test]
    fn test_opaque_format() {
        let id = anonymize("::1");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!id.contains("::1"));
    }

    #[test]
    fn test_empty_input_accepted() {
        assert_eq!(
            anonymize(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
