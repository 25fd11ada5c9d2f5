use serde::{Deserialize, Serialize};

/// Consensus-rule eras in activation order. Each fork inherits every rule of
/// its predecessor and overrides only the knobs it introduced.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Fork {
    #[default]
    Frontier,
    Homestead,
    Eip150,
    Eip158,
    Byzantium,
}

/// Fork activation schedule, in the shape chain genesis files describe it:
/// a fork with no activation block never turns on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainConfig {
    pub homestead_block: Option<u64>,
    pub eip150_block: Option<u64>,
    pub eip158_block: Option<u64>,
    pub byzantium_block: Option<u64>,
}

impl ChainConfig {
    /// The fork active at the given block height.
    pub fn fork(&self, block_number: u64) -> Fork {
        if self.byzantium_block.is_some_and(|block| block <= block_number) {
            Fork::Byzantium
        } else if self.eip158_block.is_some_and(|block| block <= block_number) {
            Fork::Eip158
        } else if self.eip150_block.is_some_and(|block| block <= block_number) {
            Fork::Eip150
        } else if self.homestead_block.is_some_and(|block| block <= block_number) {
            Fork::Homestead
        } else {
            Fork::Frontier
        }
    }

    /// The schedule Ethereum mainnet activated these forks under.
    pub fn mainnet() -> Self {
        Self {
            homestead_block: Some(1_150_000),
            eip150_block: Some(2_463_000),
            eip158_block: Some(2_675_000),
            byzantium_block: Some(4_370_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forks_are_ordered_by_activation() {
        assert!(Fork::Frontier < Fork::Homestead);
        assert!(Fork::Homestead < Fork::Eip150);
        assert!(Fork::Eip150 < Fork::Eip158);
        assert!(Fork::Eip158 < Fork::Byzantium);
    }

    #[test]
    fn empty_schedule_stays_on_frontier() {
        assert_eq!(ChainConfig::default().fork(u64::MAX), Fork::Frontier);
    }

    #[test]
    fn mainnet_schedule_boundaries() {
        let config = ChainConfig::mainnet();
        assert_eq!(config.fork(0), Fork::Frontier);
        assert_eq!(config.fork(1_149_999), Fork::Frontier);
        assert_eq!(config.fork(1_150_000), Fork::Homestead);
        assert_eq!(config.fork(2_463_000), Fork::Eip150);
        assert_eq!(config.fork(2_674_999), Fork::Eip150);
        assert_eq!(config.fork(2_675_000), Fork::Eip158);
        assert_eq!(config.fork(4_370_000), Fork::Byzantium);
    }
}
