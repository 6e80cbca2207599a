use thiserror::Error;

use crate::blockchain::Hash256;
use crate::network::Network;

/// Everything that can go wrong while building or using network parameters.
///
/// Construction errors (genesis mismatches, bad difficulty) are fatal at
/// startup; the registry aborts on them instead of handing out a half-valid set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: expected {expected}, derived {derived}")]
    GenesisHashMismatch {
        network: Network,
        expected: Hash256,
        derived: Hash256,
    },

    #[error("{network} genesis merkle root mismatch: expected {expected}, derived {derived}")]
    MerkleRootMismatch {
        network: Network,
        expected: Hash256,
        derived: Hash256,
    },

    #[error("compact difficulty {0:#010x} is negative")]
    NegativeDifficulty(u32),

    #[error("compact difficulty {0:#010x} overflows 256 bits")]
    DifficultyOverflow(u32),

    #[error("compact difficulty {0:#010x} decodes to a zero target")]
    ZeroTarget(u32),

    #[error("compact difficulty {0:#010x} exceeds the proof-of-work ceiling")]
    TargetAboveLimit(u32),

    #[error("unknown network id {0}")]
    UnknownNetworkId(u8),

    #[error("unknown network name {0:?}")]
    UnknownNetworkName(String),

    #[error("invalid hash hex: {0}")]
    InvalidHashHex(String),

    #[error("invalid base58 address: {0}")]
    InvalidAddress(String),

    #[error("address prefix does not match any {0} address kind")]
    UnknownAddressPrefix(Network),
}
