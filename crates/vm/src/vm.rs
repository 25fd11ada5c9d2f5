use bytes::Bytes;

use crate::{environment::Environment, substate::Substate};

/// How a frame of code finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VmOutput {
    /// Ran to completion; for a creation frame the bytes are the runtime
    /// code to deploy.
    Code(Bytes),
    /// REVERT: remaining gas survives, state rolls back, and the bytes go
    /// back to the caller.
    Revert(Bytes),
    /// Exceptional halt: gas exhaustion, stack violation, invalid jump or
    /// opcode, depth overflow. Consumes the whole budget.
    Halt,
}

/// Result of one interpreter run.
#[derive(Debug)]
pub struct VmRun {
    pub gas_remaining: u64,
    pub substate: Substate,
    /// The environment as the interpreter left it; `env.state` carries every
    /// state mutation made while the frame ran.
    pub env: Environment,
    pub output: VmOutput,
}

/// The interpreter boundary: a gas budget and an environment go in, the
/// remaining gas, the accrued sub-state, the mutated environment and the
/// frame's output come back. Implementations must be deterministic.
pub trait Vm {
    fn run(&mut self, available_gas: u64, env: Environment) -> VmRun;
}
