use serde::{Deserialize, Serialize};

use crate::encode::{Encodable, write_var_bytes};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;

/// Raw script bytes with a small push-only builder, enough to assemble a
/// coinbase input script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Push an integer. -1 and 1..=16 use the small-integer opcodes;
    /// anything else is pushed as a minimally encoded script number
    /// (so 0 becomes the empty push, `OP_0`).
    pub fn push_int(mut self, n: i64) -> Self {
        if n == -1 {
            self.0.push(OP_1NEGATE);
            return self;
        }
        if (1..=16).contains(&n) {
            self.0.push(OP_1 + (n as u8 - 1));
            return self;
        }
        let num = script_num(n);
        self.push_slice(&num)
    }

    /// Push arbitrary data with the shortest push opcode for its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
fn script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // Keep the sign bit free for the sign, adding a byte if it is taken.
    if out.last().is_some_and(|b| b & 0x80 != 0) {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        if let Some(last) = out.last_mut() {
            *last |= 0x80;
        }
    }
    out
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Encodable for Script {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_var_bytes(&self.0, out);
    }
}
