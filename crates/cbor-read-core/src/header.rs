//! CBOR initial byte and argument decoding (RFC 8949 §3).

use crate::cursor::Cursor;
use crate::error::ReadError;

/// Additional-information values 0..=23 carry the argument directly.
const MAX_DIRECT: u8 = 23;
const ARG_U8: u8 = 24;
const ARG_U16: u8 = 25;
const ARG_U32: u8 = 26;
const ARG_U64: u8 = 27;

/// The eight CBOR major types (top three bits of the initial byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorType {
    Unsigned,
    Negative,
    Bytes,
    Text,
    Array,
    Map,
    Tag,
    Simple,
}

impl MajorType {
    pub fn from_initial_byte(byte: u8) -> Self {
        match byte >> 5 {
            0 => MajorType::Unsigned,
            1 => MajorType::Negative,
            2 => MajorType::Bytes,
            3 => MajorType::Text,
            4 => MajorType::Array,
            5 => MajorType::Map,
            6 => MajorType::Tag,
            _ => MajorType::Simple,
        }
    }
}

/// A decoded CBOR header: major type plus its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub major: MajorType,
    /// Low five bits of the initial byte.
    pub additional: u8,
    /// The argument; for byte strings this is the payload length.
    pub argument: u64,
    /// Number of bytes the header occupies (1, 2, 3, 5 or 9).
    pub size: usize,
}

impl Header {
    /// Reads one header from `cursor`.
    ///
    /// Missing initial or argument bytes are [`ReadError::OutOfBounds`].
    /// Reserved additional information (28..=30) and indefinite length (31)
    /// are [`ReadError::Unreasoned`]. Overlong argument encodings are
    /// accepted as-is.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self, ReadError> {
        let initial = cursor.u8()?;
        let major = MajorType::from_initial_byte(initial);
        let additional = initial & 0x1f;
        let (argument, size) = match additional {
            0..=MAX_DIRECT => (u64::from(additional), 1),
            ARG_U8 => (u64::from(cursor.u8()?), 2),
            ARG_U16 => (u64::from(cursor.u16()?), 3),
            ARG_U32 => (u64::from(cursor.u32()?), 5),
            ARG_U64 => (cursor.u64()?, 9),
            // 28..=30 reserved, 31 indefinite length.
            _ => return Err(ReadError::Unreasoned),
        };
        Ok(Header {
            major,
            additional,
            argument,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(bytes: &[u8]) -> Result<Header, ReadError> {
        Header::read(&mut Cursor::new(bytes))
    }

    #[test]
    fn major_type_from_every_top_bit_pattern() {
        let expected = [
            MajorType::Unsigned,
            MajorType::Negative,
            MajorType::Bytes,
            MajorType::Text,
            MajorType::Array,
            MajorType::Map,
            MajorType::Tag,
            MajorType::Simple,
        ];
        for (i, major) in expected.iter().enumerate() {
            assert_eq!(MajorType::from_initial_byte((i as u8) << 5), *major);
            assert_eq!(MajorType::from_initial_byte(((i as u8) << 5) | 0x1f), *major);
        }
    }

    #[test]
    fn direct_arguments() {
        for ai in 0..=23u8 {
            let header = read(&[0x40 | ai]).unwrap();
            assert_eq!(header.major, MajorType::Bytes);
            assert_eq!(header.additional, ai);
            assert_eq!(header.argument, u64::from(ai));
            assert_eq!(header.size, 1);
        }
    }

    #[test]
    fn prefixed_arguments() {
        assert_eq!(read(&[0x58, 0x21]).unwrap().argument, 0x21);
        assert_eq!(read(&[0x58, 0x21]).unwrap().size, 2);
        assert_eq!(read(&[0x59, 0x01, 0x00]).unwrap().argument, 256);
        assert_eq!(read(&[0x59, 0x01, 0x00]).unwrap().size, 3);
        let h = read(&[0x5a, 0x00, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!((h.argument, h.size), (65_536, 5));
        let h = read(&[0x5b, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!((h.argument, h.size), (1 << 32, 9));
    }

    #[test]
    fn overlong_argument_is_accepted() {
        let h = read(&[0x58, 0x02]).unwrap();
        assert_eq!((h.argument, h.size), (2, 2));
    }

    #[test]
    fn truncated_argument_is_out_of_bounds() {
        assert_eq!(read(&[]), Err(ReadError::OutOfBounds));
        assert_eq!(read(&[0x58]), Err(ReadError::OutOfBounds));
        assert_eq!(read(&[0x59, 0x01]), Err(ReadError::OutOfBounds));
        assert_eq!(read(&[0x5a, 0, 0, 0]), Err(ReadError::OutOfBounds));
        assert_eq!(read(&[0x5b, 0, 0, 0, 0, 0, 0, 0]), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn reserved_and_indefinite_are_unreasoned() {
        for ai in 28..=31u8 {
            assert_eq!(read(&[0x40 | ai]), Err(ReadError::Unreasoned));
            assert_eq!(read(&[ai, 0xff, 0xff]), Err(ReadError::Unreasoned));
        }
    }

    #[test]
    fn other_major_types_decode_their_argument() {
        let h = read(&[0x63, b'a', b'b', b'c']).unwrap();
        assert_eq!(h.major, MajorType::Text);
        assert_eq!(h.argument, 3);
        let h = read(&[0x18, 0x64]).unwrap();
        assert_eq!(h.major, MajorType::Unsigned);
        assert_eq!(h.argument, 100);
    }
}
