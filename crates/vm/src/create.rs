use bytes::Bytes;
use ethmint_common::{
    Address, U256,
    evm::calculate_create_address,
    types::{Account, BlockHeader},
};
use tracing::debug;

use crate::{
    block::BlockInterface,
    config::EraConfig,
    db::WorldState,
    environment::Environment,
    errors::{CreateFailure, InternalError, VmError},
    gas_cost,
    substate::Substate,
    vm::{Vm, VmOutput},
};

/// One contract-creation frame: a top-level creation transaction when
/// `depth == 0`, an inner CREATE otherwise.
///
/// The caller (transaction applier or CREATE handler) has already checked
/// that the sender balance covers the endowment and still owes the
/// transaction-level sender nonce increment; the address derived here uses
/// the nonce as stored.
#[derive(Debug)]
pub struct ContractCreation {
    pub state: WorldState,
    pub sender: Address,
    /// Original transaction signer, propagated into the environment.
    pub originator: Address,
    pub available_gas: u64,
    pub gas_price: U256,
    pub endowment: U256,
    pub init_code: Bytes,
    pub depth: usize,
    pub block_header: BlockHeader,
    pub config: EraConfig,
}

/// Outcome of a creation frame. Both arms carry the state the caller should
/// adopt, the gas left in the frame, and the accrued sub-state; failed frames
/// name their cause and reverts surface the returned bytes in `output`.
#[derive(Debug)]
pub struct CreationReport {
    pub result: CreateResult,
    pub state: WorldState,
    pub gas_remaining: u64,
    pub substate: Substate,
    pub output: Bytes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateResult {
    Success,
    Failure(CreateFailure),
}

impl CreationReport {
    pub fn is_success(&self) -> bool {
        matches!(self.result, CreateResult::Success)
    }

    fn success(state: WorldState, gas_remaining: u64, substate: Substate, output: Bytes) -> Self {
        Self {
            result: CreateResult::Success,
            state,
            gas_remaining,
            substate,
            output,
        }
    }

    fn failure(failure: CreateFailure, state: WorldState, gas_remaining: u64) -> Self {
        Self {
            result: CreateResult::Failure(failure),
            state,
            gas_remaining,
            substate: Substate::default(),
            output: Bytes::new(),
        }
    }
}

impl ContractCreation {
    /// Run the whole creation frame: derive the address, screen the prior
    /// occupant, set up the blank account, execute the init code, and settle
    /// the code deposit.
    ///
    /// `Err` is reserved for infrastructure failures (store access, broken
    /// arithmetic invariants); every consensus outcome, including failed
    /// creations, comes back inside the report. A failed frame always hands
    /// back the caller's own pre-frame state handle, so rollback is free.
    pub fn execute(self, vm: &mut dyn Vm) -> Result<CreationReport, VmError> {
        let Self {
            state,
            sender,
            originator,
            available_gas,
            gas_price,
            endowment,
            init_code,
            depth,
            block_header,
            config,
        } = self;

        let sender_account = state.account(sender)?;
        let new_address = calculate_create_address(sender, sender_account.nonce);

        // Screen whatever already lives at the derived address.
        if state.account_exists(new_address)? {
            let prior = state.account(new_address)?;
            if prior.nonce > 0 || prior.has_code() {
                debug!(address = %new_address, "creation collides with an occupied account");
                return Ok(CreationReport::failure(
                    CreateFailure::AddressCollision,
                    state,
                    0,
                ));
            }
            // A simple zero-nonce occupant: an inner CREATE proceeds as a
            // no-op keeping its gas; a top-level creation burns the budget.
            if depth != 0 {
                let mut state = state;
                if config.increments_nonce_on_create() {
                    state.increment_nonce(new_address)?;
                }
                return Ok(CreationReport::success(
                    state,
                    available_gas,
                    Substate::default(),
                    Bytes::new(),
                ));
            }
            return Ok(CreationReport::success(state, 0, Substate::default(), Bytes::new()));
        }

        // Blank-account setup on a fresh snapshot. The pre-frame handle in
        // `state` stays untouched: reverting is handing it back. The value
        // transfer precedes the nonce bump, and both precede VM entry, so
        // init code observes the endowed, nonce-1 account.
        let mut created = state.clone();
        created.put_account(new_address, Account::default());
        created.transfer(sender, new_address, endowment)?;
        if config.increments_nonce_on_create() {
            created.increment_nonce(new_address)?;
        }

        let block = BlockInterface::new(block_header, created.store());
        let env = Environment::for_create(
            new_address,
            sender,
            originator,
            gas_price,
            endowment,
            init_code,
            depth,
            block,
            created,
            config.clone(),
        );

        let run = vm.run(available_gas, env);

        match run.output {
            VmOutput::Halt => {
                debug!(address = %new_address, "init code halted; creation rolled back");
                Ok(CreationReport::failure(
                    CreateFailure::ExceptionalHalt,
                    state,
                    0,
                ))
            }
            VmOutput::Revert(bytes) => {
                let mut report =
                    CreationReport::failure(CreateFailure::Reverted, state, run.gas_remaining);
                report.output = bytes;
                Ok(report)
            }
            VmOutput::Code(code) => {
                let deposit_cost = gas_cost::code_deposit(code.len())?;
                let insufficient_gas = run.gas_remaining < deposit_cost;

                if insufficient_gas && config.fails_on_insufficient_code_deposit_gas() {
                    debug!(
                        address = %new_address,
                        "remaining gas cannot cover the code deposit; creation rolled back"
                    );
                    return Ok(CreationReport::failure(
                        CreateFailure::CodeDepositOutOfGas,
                        state,
                        0,
                    ));
                }
                if config.exceeds_code_size_limit(code.len()) {
                    debug!(
                        address = %new_address,
                        code_len = code.len(),
                        "deployed code over the size limit; creation rolled back"
                    );
                    return Ok(CreationReport::failure(
                        CreateFailure::CodeSizeExceeded,
                        state,
                        0,
                    ));
                }

                let mut state = run.env.state;
                let gas_remaining = if insufficient_gas {
                    // Pre-Homestead: the contract deploys with no code and
                    // keeps the gas left over from execution.
                    run.gas_remaining
                } else {
                    state.put_code(new_address, code.clone())?;
                    run.gas_remaining
                        .checked_sub(deposit_cost)
                        .ok_or(InternalError::Underflow)?
                };

                let mut substate = run.substate;
                substate.add_touched(new_address);

                Ok(CreationReport::success(state, gas_remaining, substate, code))
            }
        }
    }
}
