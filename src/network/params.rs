use log::debug;
use serde::Serialize;

use super::Network;
use super::seeds::{PeerAddress, randomize_seeds};
use super::variants::{ChainSpec, DnsSeed, chain_spec};
use crate::blockchain::pow::pow_limit;
use crate::blockchain::{
    Block, CompactDifficulty, GenesisInputs, GenesisReport, Hash256, Target256, derive_genesis,
};
use crate::error::ParamsError;

/// Kinds of base-58 encoded data, each with its own version prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressKind {
    PublicKeyHash,
    ScriptHash,
    PrivateKey,
    ExtendedPublicKey,
    ExtendedPrivateKey,
}

impl AddressKind {
    pub const COUNT: usize = 5;

    pub const ALL: [AddressKind; Self::COUNT] = [
        AddressKind::PublicKeyHash,
        AddressKind::ScriptHash,
        AddressKind::PrivateKey,
        AddressKind::ExtendedPublicKey,
        AddressKind::ExtendedPrivateKey,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The frozen consensus parameters of one network.
///
/// Fields are private; a value only exists if its genesis block was derived
/// and matched the network's reference hash and merkle root.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkParams {
    network: Network,
    magic: [u8; 4],
    alert_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    #[serde(serialize_with = "serialize_target")]
    pow_limit: Target256,
    genesis: Block,
    genesis_hash: Hash256,
    base58_prefixes: [Vec<u8>; AddressKind::COUNT],
    dns_seeds: Vec<(String, String)>,
    fixed_seeds: Vec<PeerAddress>,
    data_dir: String,
    last_pow_block: u32,
}

/// Build and validate the parameters for `network`.
pub fn build_network_parameters(network: Network) -> Result<NetworkParams, ParamsError> {
    NetworkParams::from_spec(&chain_spec(network))
}

impl NetworkParams {
    /// Derive the genesis block described by `spec`, check it against the
    /// reference values and freeze the result.
    pub fn from_spec(spec: &ChainSpec) -> Result<Self, ParamsError> {
        let pow_limit = pow_limit(spec.pow_limit_shift);
        let bits = CompactDifficulty::from_target(pow_limit);
        bits.to_target_within(pow_limit)?;

        let inputs = GenesisInputs {
            message: spec.genesis_message.to_string(),
            coinbase_value: spec.genesis_coinbase_value,
            time: spec.genesis_time,
            nonce: spec.genesis_nonce,
            bits,
        };
        let (genesis, genesis_hash) = derive_genesis(&inputs)?;

        let expected_hash: Hash256 = spec.genesis_hash.parse()?;
        if genesis_hash != expected_hash {
            return Err(ParamsError::GenesisHashMismatch {
                network: spec.network,
                expected: expected_hash,
                derived: genesis_hash,
            });
        }
        let expected_root: Hash256 = spec.genesis_merkle_root.parse()?;
        if genesis.header.merkle_root != expected_root {
            return Err(ParamsError::MerkleRootMismatch {
                network: spec.network,
                expected: expected_root,
                derived: genesis.header.merkle_root,
            });
        }

        let fixed_seeds = randomize_seeds(spec.fixed_seeds);
        debug!(
            "built {} parameters: genesis {}, {} fixed seeds",
            spec.network,
            genesis_hash,
            fixed_seeds.len()
        );

        Ok(Self {
            network: spec.network,
            magic: spec.magic,
            alert_pubkey: spec.alert_pubkey.to_vec(),
            default_port: spec.default_port,
            rpc_port: spec.rpc_port,
            pow_limit,
            genesis,
            genesis_hash,
            base58_prefixes: spec.base58_prefixes.map(<[u8]>::to_vec),
            dns_seeds: spec
                .dns_seeds
                .iter()
                .map(|DnsSeed { name, host }| (name.to_string(), host.to_string()))
                .collect(),
            fixed_seeds,
            data_dir: spec.data_dir.to_string(),
            last_pow_block: spec.last_pow_block,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The 4 bytes that open every wire message on this network.
    pub fn magic(&self) -> [u8; 4] {
        self.magic
    }

    /// Does `frame` belong to this network? Peers sending anything else
    /// should be disconnected.
    pub fn matches_magic(&self, frame: &[u8]) -> bool {
        frame.starts_with(&self.magic)
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn pow_limit(&self) -> Target256 {
        self.pow_limit
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    pub fn genesis_report(&self) -> GenesisReport {
        GenesisReport::from_block(&self.genesis, self.genesis_hash)
    }

    pub fn base58_prefix(&self, kind: AddressKind) -> &[u8] {
        &self.base58_prefixes[kind.index()]
    }

    /// (name, host) pairs.
    pub fn dns_seeds(&self) -> &[(String, String)] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    /// Sub-directory of the data dir used by this network; empty for Main.
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// Height of the last block that may be mined by proof-of-work.
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn allows_proof_of_work(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }
}

fn serialize_target<S: serde::Serializer>(target: &Target256, s: S) -> Result<S::Ok, S::Error> {
    let mut be = [0u8; 32];
    target.to_big_endian(&mut be);
    s.serialize_str(&hex::encode(be))
}
