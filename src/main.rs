use std::fs;
use std::path::Path;

use clever_chainparams::config::Config;
use clever_chainparams::{NetworkParams, active_parameters, select_from_environment};
use dotenvy::dotenv;
use log::{info, warn};

fn main() {
    let _ = dotenv();
    env_logger::init();

    let config = Config::from_env();
    select_from_environment(config.testnet);
    let params = active_parameters();

    println!(
        "⛓️ {} network: p2p port {}, rpc port {}, genesis {}",
        params.network(),
        params.default_port(),
        params.rpc_port(),
        params.genesis_hash()
    );
    info!(
        "magic {}, proof-of-work until height {}",
        hex::encode(params.magic()),
        params.last_pow_block()
    );

    if let Some(path) = config.genesis_report.as_deref() {
        write_genesis_report(path, params);
    }
}

/// Best-effort dump of the derived genesis values; never fatal.
fn write_genesis_report(path: &Path, params: &NetworkParams) {
    let report = params.genesis_report();
    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => {
            warn!("could not serialize genesis report: {e}");
            return;
        }
    };
    match fs::write(path, json) {
        Ok(()) => info!("wrote genesis report to {}", path.display()),
        Err(e) => warn!("could not write genesis report to {}: {e}", path.display()),
    }
}
