//! Consensus (wire) serialization for the handful of structures this crate
//! hashes. Integers are little-endian; collections carry a compact-size count.

/// Types with a canonical byte encoding.
pub trait Encodable {
    fn consensus_encode(&self, out: &mut Vec<u8>);

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.consensus_encode(&mut out);
        out
    }
}

/// Bitcoin-style variable length integer.
pub fn write_compact_size(n: u64, out: &mut Vec<u8>) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend(&n.to_le_bytes());
        }
    }
}

/// Length-prefixed byte string.
pub fn write_var_bytes(bytes: &[u8], out: &mut Vec<u8>) {
    write_compact_size(bytes.len() as u64, out);
    out.extend_from_slice(bytes);
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_compact_size(self.len() as u64, out);
        for item in self {
            item.consensus_encode(out);
        }
    }
}
