use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating content hashes (report hash, evidence hashes)
    /// Must be exactly 64 hexadecimal characters, either case
    /// - Valid: "aaaa…" (64 chars), "0F3e…" (64 chars)
    /// - Invalid: "bad", "g" * 64, 63 or 65 hex chars, surrounding whitespace
    pub static ref HASH_REGEX: Regex = Regex::new(r"^[0-9a-fA-F]{64}$").unwrap();
}

/// Returns true when `value` is a well-formed 64-character hex hash
pub fn is_hex_hash(value: &str) -> bool {
    HASH_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_regex_valid() {
        assert!(is_hex_hash(&"a".repeat(64)));
        assert!(is_hex_hash(&"A".repeat(64)));
        assert!(is_hex_hash(&"0123456789abcdefABCDEF".repeat(3)[..64]));
    }

    #[test]
    fn test_hash_regex_invalid() {
        assert!(!is_hex_hash("bad"));
        assert!(!is_hex_hash("")); // empty
        assert!(!is_hex_hash(&"a".repeat(63))); // too short
        assert!(!is_hex_hash(&"a".repeat(65))); // too long
        assert!(!is_hex_hash(&"g".repeat(64))); // not hex
        assert!(!is_hex_hash(&format!(" {}", "a".repeat(63)))); // whitespace
        assert!(!is_hex_hash(&format!("{}\n", "a".repeat(64)))); // trailing newline
    }
}
