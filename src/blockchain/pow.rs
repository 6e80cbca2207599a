use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::Hash256;
use crate::error::ParamsError;

/// A full 256-bit proof-of-work target.
pub type Target256 = U256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// The 32-bit "nBits" packing of a 256-bit target: one exponent byte
/// (length in bytes) and a 23-bit mantissa with a sign bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompactDifficulty(u32);

impl CompactDifficulty {
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Pack a target, normalizing so the sign bit is never set.
    pub fn from_target(target: Target256) -> Self {
        let mut size = target.bits().div_ceil(8) as u32;
        let mut compact = if size <= 3 {
            target.low_u32() << (8 * (3 - size))
        } else {
            (target >> (8 * (size - 3) as usize)).low_u32()
        };
        if compact & SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }
        Self(compact | (size << 24))
    }

    /// Unpack into a target. Negative, zero and overflowing encodings are
    /// rejected: none of them is a target a hash could ever meet.
    pub fn to_target(&self) -> Result<Target256, ParamsError> {
        let size = self.0 >> 24;
        let word = self.0 & MANTISSA_MASK;

        if word != 0 && self.0 & SIGN_BIT != 0 {
            return Err(ParamsError::NegativeDifficulty(self.0));
        }
        if word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32))
        {
            return Err(ParamsError::DifficultyOverflow(self.0));
        }

        let target = if size <= 3 {
            U256::from(word >> (8 * (3 - size)))
        } else {
            U256::from(word) << (8 * (size - 3) as usize)
        };
        if target.is_zero() {
            return Err(ParamsError::ZeroTarget(self.0));
        }
        Ok(target)
    }

    /// Decode and check the result against a network ceiling.
    pub fn to_target_within(&self, limit: Target256) -> Result<Target256, ParamsError> {
        let target = self.to_target()?;
        if target > limit {
            return Err(ParamsError::TargetAboveLimit(self.0));
        }
        Ok(target)
    }
}

impl fmt::Debug for CompactDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactDifficulty({:#010x})", self.0)
    }
}

impl fmt::Display for CompactDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// `~0 >> shift`, the usual way of writing a proof-of-work ceiling.
pub fn pow_limit(shift: u32) -> Target256 {
    U256::MAX >> shift as usize
}

/// True when `hash`, read as a little-endian integer, does not exceed `target`.
pub fn meets_target(hash: &Hash256, target: &Target256) -> bool {
    hash.to_u256() <= *target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceilings_pack_to_known_bits() {
        assert_eq!(CompactDifficulty::from_target(pow_limit(20)).bits(), 0x1e0f_ffff);
        assert_eq!(CompactDifficulty::from_target(pow_limit(16)).bits(), 0x1f00_ffff);
        assert_eq!(CompactDifficulty::from_target(pow_limit(32)).bits(), 0x1d00_ffff);
    }

    #[test]
    fn decoded_ceiling_stays_under_limit() {
        let limit = pow_limit(20);
        let target = CompactDifficulty::from_target(limit).to_target().unwrap();
        assert!(target <= limit);
        assert_eq!(target, U256::from(0x0f_ffffu32) << (8 * 27));
    }

    #[test]
    fn bitcoin_genesis_bits() {
        let target = CompactDifficulty::from_bits(0x1d00_ffff).to_target().unwrap();
        assert_eq!(target, U256::from(0xffffu32) << 208);
    }

    #[test]
    fn small_exponents_shift_right() {
        let target = CompactDifficulty::from_bits(0x0212_3456).to_target().unwrap();
        assert_eq!(target, U256::from(0x1234u32));
        assert_eq!(CompactDifficulty::from_target(target).bits(), 0x0212_3400);
    }

    #[test]
    fn rejects_unusable_encodings() {
        assert_eq!(
            CompactDifficulty::from_bits(0x0480_0001).to_target(),
            Err(ParamsError::NegativeDifficulty(0x0480_0001))
        );
        assert_eq!(
            CompactDifficulty::from_bits(0xff12_3456).to_target(),
            Err(ParamsError::DifficultyOverflow(0xff12_3456))
        );
        assert_eq!(
            CompactDifficulty::from_bits(0x0100_0000).to_target(),
            Err(ParamsError::ZeroTarget(0x0100_0000))
        );
    }

    #[test]
    fn limit_check() {
        let relaxed = CompactDifficulty::from_target(pow_limit(16));
        assert_eq!(
            relaxed.to_target_within(pow_limit(20)),
            Err(ParamsError::TargetAboveLimit(0x1f00_ffff))
        );
        assert!(relaxed.to_target_within(pow_limit(16)).is_ok());
    }

    #[test]
    fn target_comparison_is_inclusive() {
        let mut bytes = [0u8; 32];
        bytes[0] = 5;
        let hash = Hash256::from_bytes(bytes);
        assert!(meets_target(&hash, &U256::from(5u32)));
        assert!(!meets_target(&hash, &U256::from(4u32)));
    }
}
