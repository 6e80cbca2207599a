use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Service bit advertised by full nodes.
pub const NODE_NETWORK: u64 = 1;

pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// A compiled-in seed endpoint: 16-byte IPv6 (IPv4 is mapped) and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V6(SocketAddrV6::new(Ipv6Addr::from(self.addr), self.port, 0, 0))
    }
}

/// A peer endpoint with the time it was last seen on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddress {
    pub addr: SocketAddr,
    pub services: u64,
    /// Unix timestamp (UTC)
    pub last_seen: i64,
}

/// Turn fixed seeds into peer addresses with a "last seen" between one and
/// two weeks ago, so they are tried but quickly displaced by fresher gossip.
pub fn randomize_seeds(seeds: &[SeedSpec6]) -> Vec<PeerAddress> {
    randomize_seeds_at(seeds, Utc::now().timestamp(), &mut rand::thread_rng())
}

/// `randomize_seeds` with an explicit clock and random source.
/// Every `last_seen` lands in `[now - 2 weeks, now - 1 week)`.
pub fn randomize_seeds_at<R: Rng>(
    seeds: &[SeedSpec6],
    now: i64,
    rng: &mut R,
) -> Vec<PeerAddress> {
    seeds
        .iter()
        .map(|seed| PeerAddress {
            addr: seed.socket_addr(),
            services: NODE_NETWORK,
            last_seen: now - rng.gen_range(0..ONE_WEEK_SECS) - ONE_WEEK_SECS,
        })
        .collect()
}
