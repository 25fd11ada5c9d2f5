use std::{fmt, sync::Arc};

use bytes::Bytes;
use ethmint_common::{
    Address, H256, U256, constants::EMPTY_KECCACK_HASH, types::Account, utils::keccak,
};
use rustc_hash::FxHashMap;

use super::Database;
use crate::errors::{DatabaseError, InternalError, VmError};

/// A snapshot handle over the world state: a shared read-only base plus
/// copy-on-write overlays holding everything written since. Cloning the
/// handle snapshots it, so reverting a frame is handing back the pre-clone
/// handle and dropping the mutated one.
#[derive(Clone)]
pub struct WorldState {
    store: Arc<dyn Database>,
    accounts: FxHashMap<Address, Account>,
    storage: FxHashMap<(Address, H256), U256>,
    code: FxHashMap<H256, Bytes>,
}

impl WorldState {
    pub fn new(store: Arc<dyn Database>) -> Self {
        Self {
            store,
            accounts: FxHashMap::default(),
            storage: FxHashMap::default(),
            code: FxHashMap::default(),
        }
    }

    /// The backing store handle, shared with block and storage views.
    pub fn store(&self) -> Arc<dyn Database> {
        Arc::clone(&self.store)
    }

    /// The account at `address`, or the zero-valued default when absent.
    pub fn account(&self, address: Address) -> Result<Account, DatabaseError> {
        if let Some(account) = self.accounts.get(&address) {
            return Ok(*account);
        }
        Ok(self.store.account_state(address)?.unwrap_or_default())
    }

    /// Whether the address has ever been written, in the overlay or the
    /// backing store.
    pub fn account_exists(&self, address: Address) -> Result<bool, DatabaseError> {
        if self.accounts.contains_key(&address) {
            return Ok(true);
        }
        Ok(self.store.account_state(address)?.is_some())
    }

    /// Insert or replace an account.
    pub fn put_account(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    /// Move `value` wei between two accounts. The caller must already have
    /// checked the sender balance; underflow here is a bug, not an outcome.
    pub fn transfer(&mut self, from: Address, to: Address, value: U256) -> Result<(), VmError> {
        let mut sender = self.account(from)?;
        sender.balance = sender
            .balance
            .checked_sub(value)
            .ok_or(InternalError::Underflow)?;
        self.put_account(from, sender);

        let mut recipient = self.account(to)?;
        recipient.balance = recipient
            .balance
            .checked_add(value)
            .ok_or(InternalError::Overflow)?;
        self.put_account(to, recipient);
        Ok(())
    }

    pub fn increment_nonce(&mut self, address: Address) -> Result<(), VmError> {
        let mut account = self.account(address)?;
        account.nonce = account.nonce.checked_add(1).ok_or(InternalError::Overflow)?;
        self.put_account(address, account);
        Ok(())
    }

    /// Store deployed runtime code under the account and rehash `code_hash`.
    pub fn put_code(&mut self, address: Address, code: Bytes) -> Result<(), VmError> {
        let code_hash = keccak(&code);
        let mut account = self.account(address)?;
        account.code_hash = code_hash;
        self.put_account(address, account);
        self.code.insert(code_hash, code);
        Ok(())
    }

    /// Deployed code of the account; empty for code-less accounts.
    pub fn code(&self, address: Address) -> Result<Bytes, DatabaseError> {
        let account = self.account(address)?;
        if account.code_hash == EMPTY_KECCACK_HASH {
            return Ok(Bytes::new());
        }
        if let Some(code) = self.code.get(&account.code_hash) {
            return Ok(code.clone());
        }
        self.store.code_by_hash(account.code_hash)
    }

    /// A storage slot of the account; slots never written read as zero.
    pub fn storage_value(&self, address: Address, key: H256) -> Result<U256, DatabaseError> {
        if let Some(value) = self.storage.get(&(address, key)) {
            return Ok(*value);
        }
        self.store.storage_value(address, key)
    }

    pub fn put_storage(&mut self, address: Address, key: H256, value: U256) {
        self.storage.insert((address, key), value);
    }
}

impl fmt::Debug for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldState")
            .field("accounts", &self.accounts)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
