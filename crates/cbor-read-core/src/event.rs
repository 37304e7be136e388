//! Events emitted by successful calls.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::bytes32::Bytes32;

/// A decoded byte string.
///
/// `offset` is the index of the first payload byte in the input, `item`
/// holds the payload left-aligned in a zero-padded word and `length` is the
/// payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedBytes32 {
    pub offset: u64,
    pub item: Bytes32,
    pub length: u64,
}

impl ParsedBytes32 {
    pub const NAME: &'static str = "ParsedBytes32";

    /// Position just past the payload. Equals the input length on success.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.length)
    }

    /// The payload bytes without padding.
    pub fn payload(&self) -> &[u8] {
        // length never exceeds Bytes32::LEN for a decoded event
        self.item.payload(self.length as usize)
    }
}

impl Serialize for ParsedBytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct(Self::NAME, 4)?;
        s.serialize_field("event", Self::NAME)?;
        s.serialize_field("offset", &self.offset)?;
        s.serialize_field("item", &self.item)?;
        s.serialize_field("length", &self.length)?;
        s.end()
    }
}

/// Ordered event log of one successful call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub events: Vec<ParsedBytes32>,
}

impl Receipt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the log.
    pub fn emit(&mut self, event: ParsedBytes32) {
        self.events.push(event);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
