//! Consensus parameters for the Clever main and test networks: magic bytes,
//! ports, address prefixes, proof-of-work ceiling, the derived genesis block,
//! seed peers and the proof-of-work sunset height.
//!
//! Every network's set is built and checked against its reference genesis
//! once; afterwards the node picks one with [`select_network`] and reads it
//! through [`active_parameters`].

pub mod address;
pub mod blockchain;
pub mod config;
pub mod encode;
pub mod error;
pub mod network;
pub mod transaction;

pub use error::ParamsError;
pub use network::{
    AddressKind, Network, NetworkParams, active_parameters, select_from_environment,
    select_network, select_network_id,
};
