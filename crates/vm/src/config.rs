use ethmint_common::types::{ChainConfig, Fork};

use crate::constants::MAX_CODE_SIZE;

/// Era-specific consensus rules, composed by delegation: each variant owns
/// the knobs its fork introduced and forwards every other query to the era it
/// wraps. Use the constructors; they build well-formed chains ending in
/// [`EraConfig::Frontier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EraConfig {
    Frontier,
    Homestead(Box<EraConfig>),
    Eip150(Box<EraConfig>),
    Eip158(Box<EraConfig>),
    Byzantium(Box<EraConfig>),
}

impl EraConfig {
    pub fn frontier() -> Self {
        Self::Frontier
    }

    pub fn homestead() -> Self {
        Self::Homestead(Box::new(Self::frontier()))
    }

    pub fn eip150() -> Self {
        Self::Eip150(Box::new(Self::homestead()))
    }

    pub fn eip158() -> Self {
        Self::Eip158(Box::new(Self::eip150()))
    }

    pub fn byzantium() -> Self {
        Self::Byzantium(Box::new(Self::eip158()))
    }

    /// Rules for the given fork.
    pub fn for_fork(fork: Fork) -> Self {
        match fork {
            Fork::Frontier => Self::frontier(),
            Fork::Homestead => Self::homestead(),
            Fork::Eip150 => Self::eip150(),
            Fork::Eip158 => Self::eip158(),
            Fork::Byzantium => Self::byzantium(),
        }
    }

    /// Rules active at a block height under the given schedule.
    pub fn for_block(config: &ChainConfig, block_number: u64) -> Self {
        Self::for_fork(config.fork(block_number))
    }

    /// The fork this configuration represents.
    pub fn fork(&self) -> Fork {
        match self {
            Self::Frontier => Fork::Frontier,
            Self::Homestead(_) => Fork::Homestead,
            Self::Eip150(_) => Fork::Eip150,
            Self::Eip158(_) => Fork::Eip158,
            Self::Byzantium(_) => Fork::Byzantium,
        }
    }

    /// Whether running out of gas for the code deposit fails the whole
    /// creation (Homestead on) rather than deploying empty code (Frontier).
    pub fn fails_on_insufficient_code_deposit_gas(&self) -> bool {
        match self {
            Self::Frontier => false,
            Self::Homestead(_) => true,
            Self::Eip150(inner) | Self::Eip158(inner) | Self::Byzantium(inner) => {
                inner.fails_on_insufficient_code_deposit_gas()
            }
        }
    }

    /// [EIP-161] Whether a freshly created contract starts at nonce 1.
    pub fn increments_nonce_on_create(&self) -> bool {
        match self {
            Self::Frontier => false,
            Self::Eip158(_) => true,
            Self::Homestead(inner) | Self::Eip150(inner) | Self::Byzantium(inner) => {
                inner.increments_nonce_on_create()
            }
        }
    }

    /// [EIP-170] The deployed-code size cap, where one applies.
    pub fn max_code_size(&self) -> Option<usize> {
        match self {
            Self::Frontier => None,
            Self::Eip158(_) => Some(MAX_CODE_SIZE),
            Self::Homestead(inner) | Self::Eip150(inner) | Self::Byzantium(inner) => {
                inner.max_code_size()
            }
        }
    }

    /// True when the given deployed-code size breaches the era's cap.
    pub fn exceeds_code_size_limit(&self, code_len: usize) -> bool {
        self.max_code_size().is_some_and(|limit| code_len > limit)
    }

    /// [EIP-150] Whether the 63/64 gas-forwarding rule is in force. Carried
    /// through the environment for the interpreter; the creation path itself
    /// never consults it.
    pub fn charges_eip150_gas(&self) -> bool {
        match self {
            Self::Frontier => false,
            Self::Eip150(_) => true,
            Self::Homestead(inner) | Self::Eip158(inner) | Self::Byzantium(inner) => {
                inner.charges_eip150_gas()
            }
        }
    }

    /// Whether the REVERT opcode is available to the interpreter.
    pub fn supports_revert(&self) -> bool {
        match self {
            Self::Frontier => false,
            Self::Byzantium(_) => true,
            Self::Homestead(inner) | Self::Eip150(inner) | Self::Eip158(inner) => {
                inner.supports_revert()
            }
        }
    }

    /// Whether STATICCALL is available to the interpreter.
    pub fn supports_static_call(&self) -> bool {
        match self {
            Self::Frontier => false,
            Self::Byzantium(_) => true,
            Self::Homestead(inner) | Self::Eip150(inner) | Self::Eip158(inner) => {
                inner.supports_static_call()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_defaults() {
        let config = EraConfig::frontier();
        assert!(!config.fails_on_insufficient_code_deposit_gas());
        assert!(!config.increments_nonce_on_create());
        assert_eq!(config.max_code_size(), None);
        assert!(!config.charges_eip150_gas());
        assert!(!config.supports_revert());
    }

    #[test]
    fn homestead_fails_creations_short_on_deposit_gas() {
        let config = EraConfig::homestead();
        assert!(config.fails_on_insufficient_code_deposit_gas());
        assert!(!config.increments_nonce_on_create());
        assert_eq!(config.max_code_size(), None);
    }

    #[test]
    fn eip150_delegates_everything_but_gas_semantics() {
        let config = EraConfig::eip150();
        assert!(config.charges_eip150_gas());
        assert!(config.fails_on_insufficient_code_deposit_gas());
        assert!(!config.increments_nonce_on_create());
        assert_eq!(config.max_code_size(), None);
    }

    #[test]
    fn eip158_owns_nonce_and_code_size_knobs() {
        let config = EraConfig::eip158();
        assert!(config.increments_nonce_on_create());
        assert_eq!(config.max_code_size(), Some(MAX_CODE_SIZE));
        assert!(!config.exceeds_code_size_limit(MAX_CODE_SIZE));
        assert!(config.exceeds_code_size_limit(MAX_CODE_SIZE + 1));
        assert!(config.charges_eip150_gas());
    }

    #[test]
    fn byzantium_inherits_the_whole_chain_and_adds_revert() {
        let config = EraConfig::byzantium();
        assert!(config.fails_on_insufficient_code_deposit_gas());
        assert!(config.increments_nonce_on_create());
        assert_eq!(config.max_code_size(), Some(MAX_CODE_SIZE));
        assert!(config.charges_eip150_gas());
        assert!(config.supports_revert());
        assert!(config.supports_static_call());
    }

    #[test]
    fn for_block_follows_the_schedule() {
        let schedule = ChainConfig::mainnet();
        assert_eq!(
            EraConfig::for_block(&schedule, 0).fork(),
            Fork::Frontier
        );
        assert_eq!(
            EraConfig::for_block(&schedule, 2_675_000).fork(),
            Fork::Eip158
        );
    }
}
