use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::hash::scrypt_1024;
use super::merkle::merkle_root;
use super::pow::{CompactDifficulty, Target256, meets_target};
use super::Hash256;
use crate::encode::Encodable;
use crate::transaction::Transaction;

/// Size of the serialized header, the preimage of the block hash.
pub const HEADER_SIZE: usize = 80;

/// How many nonces to try between progress traces while mining.
const PROGRESS_INTERVAL: u32 = 1 << 20;

/// The hashed part of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32, // Unix timestamp (UTC)
    pub bits: CompactDifficulty,
    pub nonce: u32,
}

impl BlockHeader {
    /// scrypt hash of the 80-byte header; doubles as the proof-of-work hash.
    pub fn hash(&self) -> Hash256 {
        scrypt_1024(&self.to_bytes())
    }

    /// Does the header hash meet `target`?
    pub fn meets(&self, target: &Target256) -> bool {
        meets_target(&self.hash(), target)
    }

    /// Proof-of-work search: bump the nonce until the hash is at or below
    /// `target`, moving the timestamp forward one second each time the nonce
    /// wraps. Returns the winning hash. There is no iteration cap.
    pub fn mine(&mut self, target: &Target256) -> Hash256 {
        loop {
            let hash = self.hash();
            if meets_target(&hash, target) {
                return hash;
            }
            self.next_attempt();
        }
    }

    /// Step to the next (time, nonce) candidate.
    fn next_attempt(&mut self) {
        self.nonce = self.nonce.wrapping_add(1);
        if self.nonce == 0 {
            self.time = self.time.wrapping_add(1);
            warn!("nonce wrapped, incrementing time to {}", self.time);
        } else if self.nonce % PROGRESS_INTERVAL == 0 {
            trace!("mining: time={} nonce={}", self.time, self.nonce);
        }
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.reserve(HEADER_SIZE);
        out.extend(&self.version.to_le_bytes());
        out.extend_from_slice(self.prev_block.as_bytes());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend(&self.time.to_le_bytes());
        out.extend(&self.bits.bits().to_le_bytes());
        out.extend(&self.nonce.to_le_bytes());
    }
}

/// A header plus its ordered transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block whose merkle root commits to `transactions`.
    pub fn new(
        version: i32,
        prev_block: Hash256,
        time: u32,
        bits: CompactDifficulty,
        nonce: u32,
        transactions: Vec<Transaction>,
    ) -> Self {
        let header = BlockHeader {
            version,
            prev_block,
            merkle_root: Self::compute_merkle_root(&transactions),
            time,
            bits,
            nonce,
        };
        Self {
            header,
            transactions,
        }
    }

    pub fn compute_merkle_root(transactions: &[Transaction]) -> Hash256 {
        let txids: Vec<Hash256> = transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }

    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Validate that the merkle root matches the transactions and the header
    /// meets its own claimed difficulty. (Does NOT validate chain linkage.)
    pub fn is_valid(&self) -> bool {
        if self.header.merkle_root != Self::compute_merkle_root(&self.transactions) {
            return false;
        }
        match self.header.bits.to_target() {
            Ok(target) => self.header.meets(&target),
            Err(_) => false,
        }
    }
}
