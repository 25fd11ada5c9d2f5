use ethereum_types::{H256, U256};
use serde::{Deserialize, Serialize};

use crate::constants::{EMPTY_KECCACK_HASH, EMPTY_TRIE_HASH};

/// On-chain account record: nonce, balance, and the hashes anchoring code and
/// storage. Code bytes live in a separate code store keyed by `code_hash`.
///
/// Reads of addresses that were never written yield [`Account::default`],
/// whose hashes are the empty-code and empty-trie sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub nonce: u64,
    pub balance: U256,
    pub code_hash: H256,
    pub storage_root: H256,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            nonce: 0,
            balance: U256::zero(),
            code_hash: EMPTY_KECCACK_HASH,
            storage_root: EMPTY_TRIE_HASH,
        }
    }
}

impl Account {
    pub fn new(nonce: u64, balance: U256) -> Self {
        Self {
            nonce,
            balance,
            ..Default::default()
        }
    }

    /// True when the account carries deployed code.
    pub fn has_code(&self) -> bool {
        self.code_hash != EMPTY_KECCACK_HASH
    }

    /// [EIP-161] Empty: no code, zero nonce, zero balance.
    pub fn is_empty(&self) -> bool {
        !self.has_code() && self.nonce == 0 && self.balance.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::keccak;

    #[test]
    fn default_account_is_empty_and_codeless() {
        let account = Account::default();
        assert!(!account.has_code());
        assert!(account.is_empty());
    }

    #[test]
    fn balance_or_nonce_make_an_account_non_empty() {
        assert!(!Account::new(1, U256::zero()).is_empty());
        assert!(!Account::new(0, U256::one()).is_empty());
    }

    #[test]
    fn code_hash_drives_has_code() {
        let account = Account {
            code_hash: keccak(b"\x60\x00"),
            ..Default::default()
        };
        assert!(account.has_code());
        assert!(!account.is_empty());
    }
}
