/// [EIP-170] Maximum byte size of deployed contract code. Deposits strictly
/// larger than this are rejected from the EIP-158 era on.
pub const MAX_CODE_SIZE: usize = 0x6000;

/// BLOCKHASH reaches at most this many ancestors behind the executing block.
pub const BLOCK_HASH_WINDOW: u64 = 256;
