use std::env;
use std::path::PathBuf;

use log::warn;

use crate::network::Network;

/// Startup settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Run on testnet instead of main.
    pub testnet: bool,
    /// Where to write the derived genesis values, if anywhere.
    pub genesis_report: Option<PathBuf>,
}

impl Config {
    /// `NETWORK` (a network name) wins over `TESTNET` (a boolean); a
    /// `-testnet`/`--testnet` argument also selects testnet.
    pub fn from_env() -> Self {
        Self::from_sources(
            |key| env::var(key).ok(),
            env::args().skip(1).collect::<Vec<_>>().as_slice(),
        )
    }

    pub fn from_sources<F>(var: F, args: &[String]) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut testnet = var("TESTNET").map(|v| parse_bool(&v)).unwrap_or(false);

        if let Some(name) = var("NETWORK") {
            match name.parse::<Network>() {
                Ok(network) => testnet = network == Network::Testnet,
                Err(err) => warn!("ignoring NETWORK: {err}"),
            }
        }

        if args.iter().any(|a| a == "-testnet" || a == "--testnet") {
            testnet = true;
        }

        let genesis_report = var("GENESIS_REPORT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            testnet,
            genesis_report,
        }
    }
}

fn parse_bool(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
