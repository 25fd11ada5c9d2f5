use std::{fmt, sync::Arc};

use ethmint_common::{Address, H256, U256, types::BlockHeader};

use crate::{constants::BLOCK_HASH_WINDOW, db::Database, errors::DatabaseError};

/// Read-only view of the executing block and its ancestry, backed by the same
/// store handle the world state carries.
#[derive(Clone)]
pub struct BlockInterface {
    header: BlockHeader,
    db: Arc<dyn Database>,
}

impl BlockInterface {
    pub fn new(header: BlockHeader, db: Arc<dyn Database>) -> Self {
        Self { header, db }
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn number(&self) -> u64 {
        self.header.number
    }

    pub fn coinbase(&self) -> Address {
        self.header.coinbase
    }

    pub fn timestamp(&self) -> u64 {
        self.header.timestamp
    }

    pub fn difficulty(&self) -> U256 {
        self.header.difficulty
    }

    pub fn gas_limit(&self) -> u64 {
        self.header.gas_limit
    }

    /// Hash of an ancestor block. Heights at or above the executing block, or
    /// further back than the BLOCKHASH window, read as `None`.
    pub fn ancestor_hash(&self, block_number: u64) -> Result<Option<H256>, DatabaseError> {
        if block_number >= self.header.number
            || self.header.number - block_number > BLOCK_HASH_WINDOW
        {
            return Ok(None);
        }
        self.db.block_hash(block_number)
    }
}

impl fmt::Debug for BlockInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockInterface")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryDb;

    #[test]
    fn ancestor_lookup_respects_the_window() {
        let mut db = InMemoryDb::new();
        for number in 0..300 {
            db.add_block_hash(number, H256::from_low_u64_be(number));
        }
        let header = BlockHeader {
            number: 300,
            ..Default::default()
        };
        let block = BlockInterface::new(header, Arc::new(db));

        assert_eq!(
            block.ancestor_hash(299).unwrap(),
            Some(H256::from_low_u64_be(299))
        );
        assert_eq!(
            block.ancestor_hash(44).unwrap(),
            Some(H256::from_low_u64_be(44))
        );
        // Exactly one block past the window, the executing block itself, and
        // anything later are all out of reach.
        assert_eq!(block.ancestor_hash(43).unwrap(), None);
        assert_eq!(block.ancestor_hash(300).unwrap(), None);
        assert_eq!(block.ancestor_hash(301).unwrap(), None);
    }
}
