use ethmint_common::Address;
use rustc_hash::FxHashSet;

/// Side effects accrued while a frame executes: accounts touched, accounts
/// queued for destruction, and gas earmarked for refund. Unioned upward when
/// a frame succeeds, dropped when it reverts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substate {
    touched: FxHashSet<Address>,
    selfdestruct_set: FxHashSet<Address>,
    /// Accumulated gas refund (e.g. from storage clears).
    pub refunded_gas: u64,
}

impl Substate {
    /// Mark an address as touched and return whether it was already marked.
    pub fn add_touched(&mut self, address: Address) -> bool {
        !self.touched.insert(address)
    }

    pub fn is_touched(&self, address: &Address) -> bool {
        self.touched.contains(address)
    }

    /// Mark an address as self-destructed and return whether it was already
    /// marked.
    pub fn add_selfdestruct(&mut self, address: Address) -> bool {
        !self.selfdestruct_set.insert(address)
    }

    pub fn is_selfdestruct(&self, address: &Address) -> bool {
        self.selfdestruct_set.contains(address)
    }

    pub fn add_refund(&mut self, gas: u64) {
        self.refunded_gas = self.refunded_gas.saturating_add(gas);
    }

    /// Union with the sub-state of a completed inner frame.
    pub fn merge(&mut self, other: Substate) {
        self.touched.extend(other.touched);
        self.selfdestruct_set.extend(other.selfdestruct_set);
        self.refunded_gas = self.refunded_gas.saturating_add(other.refunded_gas);
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty() && self.selfdestruct_set.is_empty() && self.refunded_gas == 0
    }

    pub fn touched(&self) -> impl Iterator<Item = &Address> {
        self.touched.iter()
    }

    pub fn selfdestructs(&self) -> impl Iterator<Item = &Address> {
        self.selfdestruct_set.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_is_idempotent() {
        let mut substate = Substate::default();
        let address = Address::repeat_byte(0xaa);
        assert!(!substate.add_touched(address));
        assert!(substate.add_touched(address));
        assert!(substate.is_touched(&address));
        assert_eq!(substate.touched().count(), 1);
    }

    #[test]
    fn merge_unions_sets_and_sums_refunds() {
        let a = Address::repeat_byte(0x01);
        let b = Address::repeat_byte(0x02);

        let mut outer = Substate::default();
        outer.add_touched(a);
        outer.add_refund(10);

        let mut inner = Substate::default();
        inner.add_touched(a);
        inner.add_touched(b);
        inner.add_selfdestruct(b);
        inner.add_refund(5);

        outer.merge(inner);
        assert_eq!(outer.touched().count(), 2);
        assert!(outer.is_selfdestruct(&b));
        assert_eq!(outer.refunded_gas, 15);
    }

    #[test]
    fn fresh_substate_is_the_identity() {
        let mut substate = Substate::default();
        assert!(substate.is_empty());
        substate.merge(Substate::default());
        assert!(substate.is_empty());
    }
}
