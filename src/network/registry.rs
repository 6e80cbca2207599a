use std::sync::LazyLock;
use std::sync::atomic::{AtomicU8, Ordering};

use log::info;

use super::Network;
use super::params::{NetworkParams, build_network_parameters};
use crate::error::ParamsError;

const UNSELECTED: u8 = u8::MAX;

/// Owns the parameters of every supported network and remembers which one is
/// active. All sets are built up front; selecting only swaps an index, so
/// readers always see a complete set.
#[derive(Debug)]
pub struct Registry {
    sets: [NetworkParams; 2],
    active: AtomicU8,
}

impl Registry {
    /// Build and validate every network's parameters.
    pub fn build() -> Result<Self, ParamsError> {
        let main = build_network_parameters(Network::Main)?;
        let testnet = build_network_parameters(Network::Testnet)?;
        Ok(Self {
            sets: [main, testnet],
            active: AtomicU8::new(UNSELECTED),
        })
    }

    pub fn params(&self, network: Network) -> &NetworkParams {
        &self.sets[network.id() as usize]
    }

    /// Make `network` the active set. Selecting the same network twice is a no-op.
    pub fn select(&self, network: Network) {
        let previous = self.active.swap(network.id(), Ordering::AcqRel);
        if previous != network.id() {
            info!("selected {network} network parameters");
        }
    }

    /// Select by raw id. An id that names no network is a programming error
    /// and aborts.
    pub fn select_id(&self, id: u8) {
        match Network::try_from(id) {
            Ok(network) => self.select(network),
            Err(err) => panic!("unimplemented network: {err}"),
        }
    }

    /// `true` picks Testnet, `false` picks Main.
    pub fn select_from_environment(&self, testnet: bool) {
        self.select(if testnet {
            Network::Testnet
        } else {
            Network::Main
        });
    }

    pub fn selected(&self) -> Option<Network> {
        Network::try_from(self.active.load(Ordering::Acquire)).ok()
    }

    /// The active set; Main until something has been selected.
    pub fn active(&self) -> &NetworkParams {
        self.params(self.selected().unwrap_or(Network::Main))
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::build().unwrap_or_else(|err| panic!("invalid network parameters: {err}"))
});

/// The process-wide registry, built on first use. A genesis mismatch aborts
/// here: a node must not start with parameters the rest of the network
/// disagrees with.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub fn select_network(network: Network) {
    registry().select(network);
}

pub fn select_network_id(id: u8) {
    registry().select_id(id);
}

pub fn select_from_environment(testnet: bool) {
    registry().select_from_environment(testnet);
}

pub fn active_parameters() -> &'static NetworkParams {
    registry().active()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::Target256;

    #[test]
    fn starts_unselected_and_defaults_to_main() {
        let reg = Registry::build().unwrap();
        assert_eq!(reg.selected(), None);
        assert_eq!(reg.active().network(), Network::Main);
    }

    #[test]
    fn switching_is_reversible() {
        let reg = Registry::build().unwrap();

        reg.select(Network::Main);
        let main_magic = reg.active().magic();
        assert_eq!(main_magic, [0x2f, 0x24, 0x15, 0x05]);

        reg.select(Network::Testnet);
        let test = reg.active();
        assert_eq!(test.magic(), [0x3f, 0x17, 0x07, 0x25]);
        assert_eq!(test.default_port(), 31388);
        assert_eq!(test.rpc_port(), 31387);
        assert_eq!(test.pow_limit(), Target256::MAX >> 16);

        reg.select(Network::Main);
        let main = reg.active();
        assert_eq!(main.magic(), main_magic);
        assert_eq!(main.default_port(), 30388);
        assert_eq!(main.rpc_port(), 30387);
        assert_eq!(main.pow_limit(), Target256::MAX >> 20);
    }

    #[test]
    fn selection_is_idempotent() {
        let reg = Registry::build().unwrap();
        reg.select(Network::Testnet);
        let first = reg.active() as *const NetworkParams;
        reg.select(Network::Testnet);
        assert_eq!(reg.active() as *const NetworkParams, first);
        assert_eq!(reg.selected(), Some(Network::Testnet));
    }

    #[test]
    fn environment_flag_maps_to_network() {
        let reg = Registry::build().unwrap();
        reg.select_from_environment(true);
        assert_eq!(reg.selected(), Some(Network::Testnet));
        reg.select_from_environment(false);
        assert_eq!(reg.selected(), Some(Network::Main));
    }

    #[test]
    fn known_ids_select() {
        let reg = Registry::build().unwrap();
        reg.select_id(1);
        assert_eq!(reg.active().network(), Network::Testnet);
    }

    #[test]
    #[should_panic(expected = "unimplemented network")]
    fn unknown_id_aborts() {
        let reg = Registry::build().unwrap();
        reg.select_id(9);
    }

    #[test]
    fn process_wide_accessors() {
        select_network(Network::Testnet);
        assert_eq!(active_parameters().network(), Network::Testnet);
        select_from_environment(false);
        assert_eq!(active_parameters().network(), Network::Main);
        select_network_id(0);
        assert_eq!(
            active_parameters().genesis_hash(),
            registry().params(Network::Main).genesis_hash()
        );
    }

    #[test]
    fn concurrent_readers_see_whole_sets() {
        let reg = std::sync::Arc::new(Registry::build().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reg = reg.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let p = reg.active();
                        let expected = reg.params(p.network());
                        assert_eq!(p.magic(), expected.magic());
                    }
                })
            })
            .collect();
        for i in 0..1000 {
            reg.select_from_environment(i % 2 == 0);
        }
        for h in handles {
            h.join().unwrap();
        }
    }
}
