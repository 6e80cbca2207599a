use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::ParamsError;

/// A 256-bit hash stored in wire (little-endian) byte order.
///
/// `Display` and `FromStr` use the conventional reversed hex, so the genesis
/// hashes read with their leading zeros first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interpret the hash as a little-endian 256-bit integer, the form it is
    /// compared against a proof-of-work target in.
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

/// Double SHA-256, used for transaction ids, merkle nodes and checksums.
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second[..]);
    Hash256(out)
}

/// scrypt(N=1024, r=1, p=1) with the input as both password and salt.
/// This is the block hash and the proof-of-work hash.
pub fn scrypt_1024(data: &[u8]) -> Hash256 {
    let params = scrypt::Params::new(10, 1, 1, 32).expect("scrypt parameters are valid");
    let mut out = [0u8; 32];
    scrypt::scrypt(data, data, &params, &mut out).expect("32-byte scrypt output");
    Hash256(out)
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

impl FromStr for Hash256 {
    type Err = ParamsError;

    /// Parses reversed hex, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| ParamsError::InvalidHashHex(format!("{s}: {e}")))?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
