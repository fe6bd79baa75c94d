//! Endianness utility functions
//!
//! Field elements and 256-bit integers are stored as four little-endian
//! ordered `u64` limbs (limb 0 is least significant). Every wire format in
//! the workspace is big-endian, so the conversions live here.

/// Convert a u64 from big-endian byte order to native byte order
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert 32 big-endian bytes into four little-endian ordered limbs
pub fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        // limb 0 holds the 8 least significant bytes, limb 3 the most significant
        let start = 24 - i * 8;
        *limb = u64_from_be_bytes(&bytes[start..start + 8]);
    }
    limbs
}

/// Convert four little-endian ordered limbs into 32 big-endian bytes
pub fn limbs_to_be_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 24 - i * 8;
        out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}
