use bytes::Bytes;
use ethmint_common::{Address, U256};

use crate::{block::BlockInterface, config::EraConfig, db::WorldState};

/// Everything the interpreter sees while running one frame.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Account the code executes as; for a creation, the new contract.
    pub address: Address,
    /// Original transaction signer.
    pub origin: Address,
    pub gas_price: U256,
    /// Frame input data. Always empty for a creation frame.
    pub calldata: Bytes,
    /// Immediate caller of this frame.
    pub sender: Address,
    /// Wei passed in with the frame.
    pub value: U256,
    /// Code being executed; for a creation, the init code.
    pub code: Bytes,
    /// Call depth: 0 for a top-level transaction frame.
    pub depth: usize,
    pub block: BlockInterface,
    /// Snapshot of the world state this frame mutates.
    pub state: WorldState,
    pub config: EraConfig,
}

impl Environment {
    /// Environment for a creation frame: no calldata, the init code as the
    /// running code, and the state as it stands after blank-account setup.
    #[allow(clippy::too_many_arguments)]
    pub fn for_create(
        address: Address,
        sender: Address,
        origin: Address,
        gas_price: U256,
        value: U256,
        init_code: Bytes,
        depth: usize,
        block: BlockInterface,
        state: WorldState,
        config: EraConfig,
    ) -> Self {
        Self {
            address,
            origin,
            gas_price,
            calldata: Bytes::new(),
            sender,
            value,
            code: init_code,
            depth,
            block,
            state,
            config,
        }
    }
}
