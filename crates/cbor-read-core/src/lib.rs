//! Bounded CBOR byte-string decoder.
//!
//! Parses exactly one CBOR byte string (major type 2) that must occupy the
//! whole input, places its payload in a fixed 32-byte slot and reports the
//! result as a [`ParsedBytes32`] event. Calls go through a
//! [`ByteStringReader`], which only accepts them from the identity that
//! deployed it.
//!
//! # Example
//!
//! ```
//! use cbor_read_core::{Address, ByteStringReader};
//!
//! let owner: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
//! let reader = ByteStringReader::deploy(owner);
//!
//! let receipt = reader.read_this(&owner, &[0x42, 0x13, 0x12]).unwrap();
//! let event = &receipt.events[0];
//! assert_eq!(event.offset, 1);
//! assert_eq!(event.length, 2);
//! assert_eq!(event.payload(), &[0x13, 0x12]);
//! ```

mod address;
mod bytes32;
mod config;
mod cursor;
mod decode;
mod error;
mod event;
mod header;
mod reader;

pub use address::Address;
pub use bytes32::Bytes32;
pub use config::ReaderConfig;
pub use cursor::Cursor;
pub use decode::decode_bytes32;
pub use error::{AddressError, ConfigError, ReadError};
pub use event::{ParsedBytes32, Receipt};
pub use header::{Header, MajorType};
pub use reader::ByteStringReader;
