use ethereum_types::H256;
use sha3::{Digest, Keccak256};

/// Keccak-256 over arbitrary bytes.
pub fn keccak<T: AsRef<[u8]>>(data: T) -> H256 {
    H256(Keccak256::digest(data.as_ref()).into())
}
