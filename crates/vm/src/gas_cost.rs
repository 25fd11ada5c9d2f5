//! Gas schedule constants consumed by the creation path.

use crate::errors::InternalError;

/// Gas charged per byte of runtime code stored at the end of a creation.
pub const CODE_DEPOSIT_COST: u64 = 200;

/// Total deposit charge for runtime code of the given length.
pub fn code_deposit(code_len: usize) -> Result<u64, InternalError> {
    u64::try_from(code_len)
        .map_err(|_| InternalError::Overflow)?
        .checked_mul(CODE_DEPOSIT_COST)
        .ok_or(InternalError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_is_linear_in_code_length() {
        assert_eq!(code_deposit(0), Ok(0));
        assert_eq!(code_deposit(10), Ok(2_000));
        assert_eq!(code_deposit(0x6000), Ok(4_915_200));
    }
}
