use log::info;
use serde::{Deserialize, Serialize};

use super::pow::{CompactDifficulty, meets_target};
use super::{BLOCK_VERSION, Block, Hash256};
use crate::error::ParamsError;
use crate::transaction::Transaction;

/// Everything that fixes a genesis block before the nonce search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisInputs {
    /// Text embedded in the coinbase input script.
    pub message: String,
    /// Small integer pushed ahead of the message.
    pub coinbase_value: i64,
    /// Starting block time; also the coinbase transaction's time.
    pub time: u32,
    /// Nonce the search starts from.
    pub nonce: u32,
    pub bits: CompactDifficulty,
}

/// Plain-data summary of a derived genesis, handy for logs and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisReport {
    pub hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub nonce: u32,
    pub bits: CompactDifficulty,
}

impl GenesisReport {
    pub fn from_block(block: &Block, hash: Hash256) -> Self {
        Self {
            hash,
            merkle_root: block.header.merkle_root,
            time: block.header.time,
            nonce: block.header.nonce,
            bits: block.header.bits,
        }
    }
}

/// Build the single-coinbase genesis block and run the proof-of-work search
/// from `inputs.nonce`.
///
/// Deterministic: the same inputs always land on the same nonce, time and
/// hash. The only errors are difficulties no hash could satisfy (negative,
/// zero or overflowing targets); a valid target is searched without limit.
pub fn derive_genesis(inputs: &GenesisInputs) -> Result<(Block, Hash256), ParamsError> {
    let target = inputs.bits.to_target()?;

    let coinbase = Transaction::coinbase(&inputs.message, inputs.coinbase_value, inputs.time);
    let mut block = Block::new(
        BLOCK_VERSION,
        Hash256::ZERO,
        inputs.time,
        inputs.bits,
        inputs.nonce,
        vec![coinbase],
    );

    let hash = block.header.mine(&target);
    debug_assert!(meets_target(&hash, &target));

    info!(
        "derived genesis {} (merkle root {}, time {}, nonce {})",
        hash, block.header.merkle_root, block.header.time, block.header.nonce
    );
    Ok((block, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::pow::pow_limit;

    fn easy_inputs() -> GenesisInputs {
        GenesisInputs {
            message: "unit test genesis".into(),
            coinbase_value: 42,
            time: 1_700_000_000,
            nonce: 0,
            bits: CompactDifficulty::from_target(pow_limit(6)),
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let (a, ha) = derive_genesis(&easy_inputs()).unwrap();
        let (b, hb) = derive_genesis(&easy_inputs()).unwrap();
        assert_eq!(ha, hb);
        assert_eq!(a.header.nonce, b.header.nonce);
        assert_eq!(a.header.time, b.header.time);
        assert_eq!(a, b);
    }

    #[test]
    fn result_meets_target_and_shape() {
        let inputs = easy_inputs();
        let (block, hash) = derive_genesis(&inputs).unwrap();
        let target = inputs.bits.to_target().unwrap();

        assert!(meets_target(&hash, &target));
        assert_eq!(hash, block.hash());
        assert!(block.header.prev_block.is_zero());
        assert_eq!(block.header.version, BLOCK_VERSION);
        assert_eq!(block.transactions.len(), 1);
        assert!(block.transactions[0].is_coinbase());
        assert_eq!(block.header.merkle_root, block.transactions[0].txid());
        assert!(block.header.nonce >= inputs.nonce);
        assert!(block.is_valid());
    }

    #[test]
    fn starting_nonce_that_already_wins_is_kept() {
        let (block, _) = derive_genesis(&easy_inputs()).unwrap();
        let mut again = easy_inputs();
        again.nonce = block.header.nonce;
        let (block2, _) = derive_genesis(&again).unwrap();
        assert_eq!(block2.header.nonce, block.header.nonce);
    }

    #[test]
    fn unusable_difficulty_is_rejected_up_front() {
        let mut inputs = easy_inputs();
        inputs.bits = CompactDifficulty::from_bits(0x0100_0000);
        assert_eq!(
            derive_genesis(&inputs).unwrap_err(),
            ParamsError::ZeroTarget(0x0100_0000)
        );
    }

    #[test]
    fn report_mirrors_header() {
        let (block, hash) = derive_genesis(&easy_inputs()).unwrap();
        let report = GenesisReport::from_block(&block, hash);
        assert_eq!(report.hash, hash);
        assert_eq!(report.nonce, block.header.nonce);
        assert_eq!(report.merkle_root, block.header.merkle_root);
    }
}
