pub mod block;
pub mod genesis;
pub mod hash;
pub mod merkle;
pub mod pow;

pub use block::{Block, BlockHeader};
pub use genesis::{GenesisInputs, GenesisReport, derive_genesis};
pub use hash::Hash256;
pub use pow::{CompactDifficulty, Target256};

/// Header version of every block this crate builds.
pub const BLOCK_VERSION: i32 = 1;
