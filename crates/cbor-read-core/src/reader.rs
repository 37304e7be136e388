//! The single-owner byte-string reader.

use tracing::debug;

use crate::address::Address;
use crate::decode::decode_bytes32;
use crate::error::ReadError;
use crate::event::Receipt;

/// A deployed reader that decodes byte strings on behalf of its owner.
///
/// The owner, the value transferred at deployment and the optional reason
/// label are fixed at construction. `read_this` takes `&self`: calls share
/// no mutable state and each one either returns a full [`Receipt`] or an
/// error with nothing emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteStringReader {
    owner: Address,
    balance: u64,
    label: Option<String>,
}

impl ByteStringReader {
    /// Deploys a reader owned by `owner` with no value attached.
    pub fn deploy(owner: Address) -> Self {
        Self::deploy_with_value(owner, 0)
    }

    /// Deploys a reader owned by `owner` holding `value` as its balance.
    pub fn deploy_with_value(owner: Address, value: u64) -> Self {
        debug!(%owner, value, "deployed byte-string reader");
        Self {
            owner,
            balance: value,
            label: None,
        }
    }

    /// Prefixes reasoned revert messages with `label`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Decodes `input` as `caller`.
    ///
    /// The owner check runs before any parsing. On success the receipt holds
    /// exactly one `ParsedBytes32` event.
    pub fn read_this(&self, caller: &Address, input: &[u8]) -> Result<Receipt, ReadError> {
        let result = self.check_owner(caller).and_then(|()| decode_bytes32(input));
        match result {
            Ok(event) => {
                debug!(
                    %caller,
                    offset = event.offset,
                    length = event.length,
                    "parsed bytes32"
                );
                let mut receipt = Receipt::new();
                receipt.emit(event);
                Ok(receipt)
            }
            Err(err) => {
                debug!(%caller, kind = err.kind(), input_len = input.len(), "read reverted");
                Err(err)
            }
        }
    }

    /// The revert reason a caller observes for `err`, including the label.
    ///
    /// Unreasoned reverts always yield the empty string.
    pub fn revert_reason(&self, err: &ReadError) -> String {
        match (err.reason(), self.label.as_deref()) {
            (None, _) => String::new(),
            (Some(reason), None) => reason.to_string(),
            (Some(reason), Some(label)) => format!("{label} {reason}"),
        }
    }

    fn check_owner(&self, caller: &Address) -> Result<(), ReadError> {
        if *caller == self.owner {
            Ok(())
        } else {
            Err(ReadError::NotOwner)
        }
    }
}
