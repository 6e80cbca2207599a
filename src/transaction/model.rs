use serde::{Deserialize, Serialize};

use super::TX_VERSION;
use super::outpoint::OutPoint;
use super::script::Script;
use crate::blockchain::{Hash256, hash::sha256d};
use crate::encode::Encodable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// The output being spent; null for a coinbase.
    pub outpoint: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: i64,
    pub script_pubkey: Script,
}

impl TxOutput {
    /// An output with no value and no script.
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

/// A timestamped transaction: the `time` field sits between version and inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Build the single-input, single-empty-output coinbase used by a genesis
    /// block. The input script pushes `0`, `value` and then `message`.
    pub fn coinbase(message: &str, value: i64, time: u32) -> Self {
        let script_sig = Script::new()
            .push_int(0)
            .push_int(value)
            .push_slice(message.as_bytes());
        Self {
            version: TX_VERSION,
            time,
            inputs: vec![TxInput {
                outpoint: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOutput::empty()],
            lock_time: 0,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].outpoint.is_null()
    }

    /// Double SHA-256 of the consensus encoding.
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }
}

impl Encodable for TxInput {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.outpoint.consensus_encode(out);
        self.script_sig.consensus_encode(out);
        out.extend(&self.sequence.to_le_bytes());
    }
}

impl Encodable for TxOutput {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.value.to_le_bytes());
        self.script_pubkey.consensus_encode(out);
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.version.to_le_bytes());
        out.extend(&self.time.to_le_bytes());
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        out.extend(&self.lock_time.to_le_bytes());
    }
}
