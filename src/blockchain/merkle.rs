use super::Hash256;
use super::hash::sha256d;

/// Merkle root over an ordered list of leaf hashes. Odd levels pair the last
/// node with itself; an empty list yields the zero hash.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::ZERO;
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                hash_pair(&left, &right)
            })
            .collect();
    }
    level[0]
}

fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left.as_bytes());
    buf[32..].copy_from_slice(right.as_bytes());
    sha256d(&buf)
}
