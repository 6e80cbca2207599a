use serde::{Deserialize, Serialize};

use crate::blockchain::Hash256;
use crate::encode::Encodable;

/// Identifies a specific transaction output by its txid and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends: nothing.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.txid.as_bytes());
        out.extend(&self.vout.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_outpoint_encoding() {
        let op = OutPoint::null();
        assert!(op.is_null());
        let bytes = op.to_bytes();
        assert_eq!(bytes.len(), 36);
        assert!(bytes[..32].iter().all(|b| *b == 0));
        assert_eq!(&bytes[32..], &[0xff; 4]);
    }
}
