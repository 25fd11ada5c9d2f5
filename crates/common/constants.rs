use ethereum_types::H256;
use hex_literal::hex;

/// Keccak-256 of the empty byte string. An account whose `code_hash` equals
/// this sentinel carries no deployed code.
pub const EMPTY_KECCACK_HASH: H256 = H256(hex!(
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
));

/// Root hash of the empty Merkle-Patricia trie.
pub const EMPTY_TRIE_HASH: H256 = H256(hex!(
    "56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"
));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::keccak;

    #[test]
    fn empty_code_sentinel_is_keccak_of_nothing() {
        assert_eq!(keccak(b""), EMPTY_KECCACK_HASH);
    }
}
