use ethereum_types::{Address, H256, U256};
use serde::{Deserialize, Serialize};

/// The block-header fields execution exposes to running code: COINBASE,
/// NUMBER, TIMESTAMP, DIFFICULTY, GASLIMIT, and the anchor of the BLOCKHASH
/// ancestry walk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub parent_hash: H256,
    pub coinbase: Address,
    pub state_root: H256,
    pub difficulty: U256,
    pub number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
}
