use bytes::Bytes;
use ethmint_common::{Address, H256, U256, types::Account, utils::keccak};
use rustc_hash::FxHashMap;

use crate::errors::DatabaseError;

mod world_state;
pub use world_state::WorldState;

/// Read-only backing store a world state is layered over.
pub trait Database: Send + Sync {
    /// The stored account, or `None` when the address has never been written.
    fn account_state(&self, address: Address) -> Result<Option<Account>, DatabaseError>;
    /// A storage slot of the given account; absent slots read as zero.
    fn storage_value(&self, address: Address, key: H256) -> Result<U256, DatabaseError>;
    /// Code bytes for a code hash previously committed to the store.
    fn code_by_hash(&self, code_hash: H256) -> Result<Bytes, DatabaseError>;
    /// Hash of the block at the given height, when the store knows it.
    fn block_hash(&self, block_number: u64) -> Result<Option<H256>, DatabaseError>;
}

/// Hash-map backed store for tests and embedders without a real trie behind
/// them.
#[derive(Debug, Default)]
pub struct InMemoryDb {
    accounts: FxHashMap<Address, Account>,
    storage: FxHashMap<(Address, H256), U256>,
    code: FxHashMap<H256, Bytes>,
    block_hashes: FxHashMap<u64, H256>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    /// Store code and return its hash, for wiring up `code_hash` fields.
    pub fn add_code(&mut self, code: Bytes) -> H256 {
        let code_hash = keccak(&code);
        self.code.insert(code_hash, code);
        code_hash
    }

    pub fn add_storage(&mut self, address: Address, key: H256, value: U256) {
        self.storage.insert((address, key), value);
    }

    pub fn add_block_hash(&mut self, block_number: u64, hash: H256) {
        self.block_hashes.insert(block_number, hash);
    }
}

impl Database for InMemoryDb {
    fn account_state(&self, address: Address) -> Result<Option<Account>, DatabaseError> {
        Ok(self.accounts.get(&address).copied())
    }

    fn storage_value(&self, address: Address, key: H256) -> Result<U256, DatabaseError> {
        Ok(self.storage.get(&(address, key)).copied().unwrap_or_default())
    }

    fn code_by_hash(&self, code_hash: H256) -> Result<Bytes, DatabaseError> {
        self.code
            .get(&code_hash)
            .cloned()
            .ok_or_else(|| DatabaseError::Custom(format!("unknown code hash {code_hash:#x}")))
    }

    fn block_hash(&self, block_number: u64) -> Result<Option<H256>, DatabaseError> {
        Ok(self.block_hashes.get(&block_number).copied())
    }
}
