pub mod params;
pub mod registry;
pub mod seeds;
pub mod variants;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

pub use params::{AddressKind, NetworkParams, build_network_parameters};
pub use registry::{
    Registry, active_parameters, select_from_environment, select_network, select_network_id,
};
pub use seeds::{PeerAddress, randomize_seeds};

/// The networks this node knows how to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Network {
    Main = 0,
    Testnet = 1,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Main, Network::Testnet];

    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Network {
    type Error = ParamsError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Network::Main),
            1 => Ok(Network::Testnet),
            other => Err(ParamsError::UnknownNetworkId(other)),
        }
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            _ => Err(ParamsError::UnknownNetworkName(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => write!(f, "main"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for network in Network::ALL {
            assert_eq!(Network::try_from(network.id()).unwrap(), network);
        }
        assert_eq!(
            Network::try_from(7),
            Err(ParamsError::UnknownNetworkId(7))
        );
    }

    #[test]
    fn names_parse() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Main);
        assert_eq!(" TestNet ".parse::<Network>().unwrap(), Network::Testnet);
        assert!(matches!(
            "regtest".parse::<Network>(),
            Err(ParamsError::UnknownNetworkName(_))
        ));
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }
}
