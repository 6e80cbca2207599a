//! Base-58-check encoding with the active network's version prefixes.

use crate::blockchain::hash::sha256d;
use crate::error::ParamsError;
use crate::network::{AddressKind, NetworkParams};

const CHECKSUM_LEN: usize = 4;

/// Prefix `payload` with the network's bytes for `kind`, append a 4-byte
/// double SHA-256 checksum and base-58 encode the lot.
pub fn encode_address(params: &NetworkParams, kind: AddressKind, payload: &[u8]) -> String {
    let mut data = params.base58_prefix(kind).to_vec();
    data.extend_from_slice(payload);
    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum.as_bytes()[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Reverse of `encode_address`: verify the checksum, find which kind's prefix
/// the data carries and return it with the bare payload.
pub fn decode_address(
    params: &NetworkParams,
    encoded: &str,
) -> Result<(AddressKind, Vec<u8>), ParamsError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| ParamsError::InvalidAddress(e.to_string()))?;
    if data.len() < CHECKSUM_LEN + 1 {
        return Err(ParamsError::InvalidAddress("too short".into()));
    }

    let (body, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    if sha256d(body).as_bytes()[..CHECKSUM_LEN] != *checksum {
        return Err(ParamsError::InvalidAddress("bad checksum".into()));
    }

    // Longest prefix first so 4-byte extended-key versions win over 1-byte ones.
    let mut kinds = AddressKind::ALL;
    kinds.sort_by_key(|k| std::cmp::Reverse(params.base58_prefix(*k).len()));
    kinds
        .into_iter()
        .find(|k| body.starts_with(params.base58_prefix(*k)))
        .map(|k| (k, body[params.base58_prefix(k).len()..].to_vec()))
        .ok_or(ParamsError::UnknownAddressPrefix(params.network()))
}
