//! Per-network constants as plain data: one base record for Main and a small
//! override table for every other network.

use super::Network;
use super::params::AddressKind;
use super::seeds::SeedSpec6;

/// A DNS seed: display name and host to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Every constant that goes into a `NetworkParams`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    pub network: Network,
    pub magic: [u8; 4],
    pub alert_pubkey: &'static [u8],
    pub default_port: u16,
    pub rpc_port: u16,
    /// Proof-of-work ceiling is `~0 >> pow_limit_shift`.
    pub pow_limit_shift: u32,
    pub genesis_message: &'static str,
    pub genesis_coinbase_value: i64,
    pub genesis_time: u32,
    pub genesis_nonce: u32,
    pub genesis_hash: &'static str,
    pub genesis_merkle_root: &'static str,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [SeedSpec6],
    /// Indexed by `AddressKind::index`.
    pub base58_prefixes: [&'static [u8]; AddressKind::COUNT],
    pub data_dir: &'static str,
    /// Last height at which a proof-of-work block is accepted.
    pub last_pow_block: u32,
}

/// Fields a derived network replaces; `None` inherits from the base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub magic: Option<[u8; 4]>,
    pub alert_pubkey: Option<&'static [u8]>,
    pub default_port: Option<u16>,
    pub rpc_port: Option<u16>,
    pub pow_limit_shift: Option<u32>,
    pub genesis_time: Option<u32>,
    pub genesis_nonce: Option<u32>,
    pub genesis_hash: Option<&'static str>,
    pub genesis_merkle_root: Option<&'static str>,
    pub dns_seeds: Option<&'static [DnsSeed]>,
    pub fixed_seeds: Option<&'static [SeedSpec6]>,
    pub base58_prefixes: Option<[&'static [u8]; AddressKind::COUNT]>,
    pub data_dir: Option<&'static str>,
    pub last_pow_block: Option<u32>,
}

impl ChainSpec {
    /// Derive another network's constants from this one.
    pub fn with_overrides(&self, network: Network, o: &Overrides) -> ChainSpec {
        ChainSpec {
            network,
            magic: o.magic.unwrap_or(self.magic),
            alert_pubkey: o.alert_pubkey.unwrap_or(self.alert_pubkey),
            default_port: o.default_port.unwrap_or(self.default_port),
            rpc_port: o.rpc_port.unwrap_or(self.rpc_port),
            pow_limit_shift: o.pow_limit_shift.unwrap_or(self.pow_limit_shift),
            genesis_message: self.genesis_message,
            genesis_coinbase_value: self.genesis_coinbase_value,
            genesis_time: o.genesis_time.unwrap_or(self.genesis_time),
            genesis_nonce: o.genesis_nonce.unwrap_or(self.genesis_nonce),
            genesis_hash: o.genesis_hash.unwrap_or(self.genesis_hash),
            genesis_merkle_root: o.genesis_merkle_root.unwrap_or(self.genesis_merkle_root),
            dns_seeds: o.dns_seeds.unwrap_or(self.dns_seeds),
            fixed_seeds: o.fixed_seeds.unwrap_or(self.fixed_seeds),
            base58_prefixes: o.base58_prefixes.unwrap_or(self.base58_prefixes),
            data_dir: o.data_dir.unwrap_or(self.data_dir),
            last_pow_block: o.last_pow_block.unwrap_or(self.last_pow_block),
        }
    }
}

/// ::ffff:31.187.71.141
const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[SeedSpec6 {
    addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 31, 187, 71, 141],
    port: 30388,
}];

const TEST_FIXED_SEEDS: &[SeedSpec6] = &[];

pub const MAIN: ChainSpec = ChainSpec {
    network: Network::Main,
    magic: [0x2f, 0x24, 0x15, 0x05],
    alert_pubkey: &[],
    default_port: 30388,
    rpc_port: 30387,
    pow_limit_shift: 20,
    genesis_message: "Be Smart, pay with Clever",
    genesis_coinbase_value: 42,
    genesis_time: 1431117869,
    genesis_nonce: 4796301,
    genesis_hash: "000001f81b7d29caef271362e060ff2664aca2906797402ce8eedc4b634ead57",
    genesis_merkle_root: "34bd1fdfea5993bec2d71e6d8f575a0df2cd016463dbb20f49ccc9be6f48eaad",
    dns_seeds: &[DnsSeed {
        name: "31.187.71.141",
        host: "31.187.71.141",
    }],
    fixed_seeds: MAIN_FIXED_SEEDS,
    base58_prefixes: [
        &[28],
        &[88],
        &[153],
        &[0x04, 0x88, 0xb2, 0x1e],
        &[0x04, 0x88, 0xad, 0xe4],
    ],
    data_dir: "",
    last_pow_block: 2000,
};

pub const TESTNET_OVERRIDES: Overrides = Overrides {
    magic: Some([0x3f, 0x17, 0x07, 0x25]),
    alert_pubkey: None,
    default_port: Some(31388),
    rpc_port: Some(31387),
    pow_limit_shift: Some(16),
    genesis_time: None,
    genesis_nonce: Some(113050),
    genesis_hash: Some("000019e4eb9637e45d22fe196031a7f08c678a29053d7d5887984b9b8543a27f"),
    genesis_merkle_root: None,
    dns_seeds: Some(&[]),
    fixed_seeds: Some(TEST_FIXED_SEEDS),
    base58_prefixes: Some([
        &[127],
        &[196],
        &[239],
        &[0x04, 0x35, 0x87, 0xcf],
        &[0x04, 0x35, 0x83, 0x94],
    ]),
    data_dir: Some("testnet"),
    // Mining never phases out on testnet.
    last_pow_block: Some(0x7fff_ffff),
};

/// The full constant set for `network`.
pub fn chain_spec(network: Network) -> ChainSpec {
    match network {
        Network::Main => MAIN,
        Network::Testnet => MAIN.with_overrides(Network::Testnet, &TESTNET_OVERRIDES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_inherits_what_it_does_not_override() {
        let test = chain_spec(Network::Testnet);
        assert_eq!(test.network, Network::Testnet);
        assert_eq!(test.genesis_message, MAIN.genesis_message);
        assert_eq!(test.genesis_time, MAIN.genesis_time);
        assert_eq!(test.genesis_merkle_root, MAIN.genesis_merkle_root);
        assert_eq!(test.alert_pubkey, MAIN.alert_pubkey);
    }

    #[test]
    fn testnet_overrides_apply() {
        let test = chain_spec(Network::Testnet);
        assert_eq!(test.magic, [0x3f, 0x17, 0x07, 0x25]);
        assert_eq!((test.default_port, test.rpc_port), (31388, 31387));
        assert_eq!(test.pow_limit_shift, 16);
        assert_eq!(test.genesis_nonce, 113050);
        assert!(test.dns_seeds.is_empty());
        assert!(test.fixed_seeds.is_empty());
        assert_eq!(test.data_dir, "testnet");
    }

    #[test]
    fn empty_overrides_change_nothing_but_the_tag() {
        let same = MAIN.with_overrides(Network::Main, &Overrides::default());
        assert_eq!(same, MAIN);
    }
}
