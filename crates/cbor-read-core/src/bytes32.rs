//! Fixed 32-byte output slot.

use std::fmt;

use serde::{Serialize, Serializer};

/// A 32-byte word holding a payload left-aligned and zero-padded.
///
/// Payloads longer than 32 bytes are rejected, never truncated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bytes32([u8; 32]);

impl Bytes32 {
    pub const LEN: usize = 32;

    /// Places `payload` at the start of the word, padding the rest with zeros.
    ///
    /// Returns `None` if `payload` is longer than [`Bytes32::LEN`].
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() > Self::LEN {
            return None;
        }
        let mut word = [0u8; 32];
        word[..payload.len()].copy_from_slice(payload);
        Some(Bytes32(word))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The first `len` bytes of the word, clamped to the word size.
    pub fn payload(&self, len: usize) -> &[u8] {
        &self.0[..len.min(Self::LEN)]
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(word: [u8; 32]) -> Self {
        Bytes32(word)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32({})", self.to_hex())
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
