//! Shared primitive and chain types for the ethmint contract-creation
//! subsystem: addresses and hashes, the account record, block headers, the
//! fork schedule, and the CREATE address derivation.

pub mod constants;
pub mod evm;
pub mod types;
pub mod utils;

pub use ethereum_types::{Address, H160, H256, U256};
