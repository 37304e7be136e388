//! Exact-fit decoding of a single CBOR byte string into a 32-byte slot.

use tracing::debug;

use crate::bytes32::Bytes32;
use crate::cursor::Cursor;
use crate::error::ReadError;
use crate::event::ParsedBytes32;
use crate::header::{Header, MajorType};

/// Decodes `input` as exactly one CBOR byte string of at most 32 bytes.
///
/// Checks run in this order:
///
/// 1. a missing or truncated header is [`ReadError::OutOfBounds`];
/// 2. reserved or indefinite additional information is
///    [`ReadError::Unreasoned`];
/// 3. any major type other than byte string is [`ReadError::Unreasoned`];
/// 4. a declared length above 32 is [`ReadError::Unreasoned`];
/// 5. a payload running past the input is [`ReadError::OutOfBounds`];
/// 6. bytes left after the payload are [`ReadError::TrailingData`].
///
/// ```
/// use cbor_read_core::{decode_bytes32, ReadError};
///
/// let event = decode_bytes32(&[0x42, 0x13, 0x12]).unwrap();
/// assert_eq!((event.offset, event.length), (1, 2));
///
/// assert_eq!(decode_bytes32(&[0x42, 0x13]), Err(ReadError::OutOfBounds));
/// assert_eq!(decode_bytes32(&[0x42, 0x13, 0x12, 0x00]), Err(ReadError::TrailingData));
/// ```
pub fn decode_bytes32(input: &[u8]) -> Result<ParsedBytes32, ReadError> {
    let mut cursor = Cursor::new(input);
    let header = Header::read(&mut cursor)?;
    debug!(
        major = ?header.major,
        additional = header.additional,
        argument = header.argument,
        header_size = header.size,
        input_len = input.len(),
        "decoded cbor header"
    );

    if header.major != MajorType::Bytes {
        return Err(ReadError::Unreasoned);
    }
    if header.argument > Bytes32::LEN as u64 {
        return Err(ReadError::Unreasoned);
    }
    // bounded by Bytes32::LEN above
    let len = header.argument as usize;
    let offset = cursor.position();

    let payload = cursor.buf(len)?;
    if !cursor.is_empty() {
        return Err(ReadError::TrailingData);
    }
    let item = Bytes32::from_payload(payload).ok_or(ReadError::Unreasoned)?;

    Ok(ParsedBytes32 {
        offset: offset as u64,
        item,
        length: len as u64,
    })
}
