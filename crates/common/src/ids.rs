//! Generators for synthetic authorization and transaction codes.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces uppercase alphanumeric codes of a requested length.
///
/// The codes are illustrative only and carry no cryptographic meaning.
pub trait IdGenerator: Send + Sync {
    /// Returns a new code of exactly `len` characters.
    fn next_code(&self, len: usize) -> String;
}

/// Generator backed by random v4 UUIDs.
///
/// Codes longer than a UUID's 32 hex digits are stitched from several UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Creates a new UUID-backed generator.
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_code(&self, len: usize) -> String {
        let mut code = String::with_capacity(len);
        while code.len() < len {
            code.push_str(&Uuid::new_v4().simple().to_string().to_uppercase());
        }
        code.truncate(len);
        code
    }
}

/// Deterministic generator yielding zero-padded sequence numbers.
///
/// The first code is `1` padded to the requested length, then `2`, and so on.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many codes have been handed out.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_code(&self, len: usize) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        let mut code = format!("{n:0len$}");
        // Keep the low digits when the counter outgrows the width.
        if code.len() > len {
            code = code.split_off(code.len() - len);
        }
        code
    }
}

/// Generator that always returns the same code, padded or cut to length.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    code: String,
}

impl FixedIdGenerator {
    /// Creates a generator that repeats `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_code(&self, len: usize) -> String {
        let mut code: String = self.code.chars().take(len).collect();
        while code.chars().count() < len {
            code.push('0');
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_codes_have_requested_length() {
        let ids = UuidIdGenerator::new();
        assert_eq!(ids.next_code(9).len(), 9);
        assert_eq!(ids.next_code(12).len(), 12);
        assert_eq!(ids.next_code(40).len(), 40);
        assert_eq!(ids.next_code(0), "");
    }

    #[test]
    fn test_uuid_codes_are_uppercase_alphanumeric() {
        let code = UuidIdGenerator::new().next_code(32);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_uuid_codes_differ() {
        let ids = UuidIdGenerator::new();
        assert_ne!(ids.next_code(12), ids.next_code(12));
    }

    #[test]
    fn test_sequential_codes() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_code(9), "000000001");
        assert_eq!(ids.next_code(4), "0002");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_sequential_codes_keep_low_digits() {
        let ids = SequentialIdGenerator::new();
        for _ in 0..11 {
            ids.next_code(1);
        }
        assert_eq!(ids.next_code(1), "2");
    }

    #[test]
    fn test_fixed_codes() {
        let ids = FixedIdGenerator::new("ABC123");
        assert_eq!(ids.next_code(3), "ABC");
        assert_eq!(ids.next_code(8), "ABC12300");
        assert_eq!(ids.next_code(6), ids.next_code(6));
    }
}
