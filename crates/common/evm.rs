use ethereum_types::Address;
use rlp::RlpStream;

use crate::utils::keccak;

/// Address of a contract created with the CREATE scheme: the last 20 bytes of
/// `keccak256(rlp([sender, nonce]))`, taking the sender nonce as it stood
/// before this creation bumps it.
pub fn calculate_create_address(sender: Address, nonce: u64) -> Address {
    let mut stream = RlpStream::new_list(2);
    stream.append(&sender);
    stream.append(&nonce);
    let hash = keccak(stream.as_raw());
    Address::from_slice(&hash.as_bytes()[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn known_mainnet_vectors() {
        // First two contracts deployed from this sender on mainnet.
        let sender = Address::from(hex!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0"));
        assert_eq!(
            calculate_create_address(sender, 0),
            Address::from(hex!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d"))
        );
        assert_eq!(
            calculate_create_address(sender, 1),
            Address::from(hex!("343c43a37d37dff08ae8c4a11544c718abb4fcf8"))
        );
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let sender = Address::repeat_byte(0x22);
        assert_eq!(
            calculate_create_address(sender, 42),
            calculate_create_address(sender, 42)
        );
    }

    #[test]
    fn consecutive_nonces_yield_distinct_addresses() {
        let sender = Address::repeat_byte(0x11);
        assert_ne!(
            calculate_create_address(sender, 5),
            calculate_create_address(sender, 6)
        );
    }
}
