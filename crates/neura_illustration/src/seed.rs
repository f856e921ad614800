//! Stable seeds derived from request keys.

use sha2::{Digest, Sha256};

/// Seed from the SHA-256 of `parts` joined with `"|"`, read as the first four
/// digest bytes in big-endian order.
///
/// # Examples
///
/// ```
/// use neura_illustration::stable_seed;
///
/// assert_eq!(stable_seed(&["alice", "3"]), stable_seed(&["alice", "3"]));
/// assert_ne!(stable_seed(&["alice", "3"]), stable_seed(&["alice", "4"]));
/// ```
pub fn stable_seed(parts: &[&str]) -> u32 {
    let digest = Sha256::digest(parts.join("|").as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
