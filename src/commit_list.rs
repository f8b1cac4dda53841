multiversx_sc::imports!();

use crate::attribute_store::{self, NUM_TOKENS_ATTR};

/// Per-voter doubly linked list of poll ids, ascending by committed
/// tokens. Poll id 0 is the sentinel: `prev == 0` marks the head and
/// `next == 0` the tail.
#[multiversx_sc::module]
pub trait CommitListModule: attribute_store::AttributeStoreModule {
    fn node_tokens(&self, voter: &ManagedAddress, poll_id: u64) -> BigUint {
        let uuid = self.attribute_uuid(voter, poll_id);
        self.get_attribute(&uuid, NUM_TOKENS_ATTR)
    }

    fn commit_list_next_of(&self, voter: &ManagedAddress, poll_id: u64) -> u64 {
        if poll_id == 0 {
            self.commit_list_head(voter).get()
        } else {
            self.commit_list_next(voter, poll_id).get()
        }
    }

    /// A hint is valid when the new node fits between `prev` and its
    /// current successor without breaking the ascending order.
    fn is_valid_insert_point(&self, voter: &ManagedAddress, prev: u64, num_tokens: &BigUint) -> bool {
        if prev != 0 && !self.commit_list_contains(voter, prev).get() {
            return false;
        }
        if prev != 0 && self.node_tokens(voter, prev) > *num_tokens {
            return false;
        }
        let next = self.commit_list_next_of(voter, prev);
        next == 0 || self.node_tokens(voter, next) >= *num_tokens
    }

    fn commit_list_insert_after(&self, voter: &ManagedAddress, prev: u64, poll_id: u64) {
        let next = self.commit_list_next_of(voter, prev);

        self.commit_list_prev(voter, poll_id).set(prev);
        self.commit_list_next(voter, poll_id).set(next);

        if prev == 0 {
            self.commit_list_head(voter).set(poll_id);
        } else {
            self.commit_list_next(voter, prev).set(poll_id);
        }
        if next != 0 {
            self.commit_list_prev(voter, next).set(poll_id);
        }
        self.commit_list_contains(voter, poll_id).set(true);
    }

    fn commit_list_remove(&self, voter: &ManagedAddress, poll_id: u64) {
        if !self.commit_list_contains(voter, poll_id).get() {
            return;
        }
        let prev = self.commit_list_prev(voter, poll_id).get();
        let next = self.commit_list_next(voter, poll_id).get();

        if prev == 0 {
            self.commit_list_head(voter).set(next);
        } else {
            self.commit_list_next(voter, prev).set(next);
        }
        if next != 0 {
            self.commit_list_prev(voter, next).set(prev);
        }

        self.commit_list_prev(voter, poll_id).clear();
        self.commit_list_next(voter, poll_id).clear();
        self.commit_list_contains(voter, poll_id).clear();
    }

    #[view(getCommittedPolls)]
    fn committed_polls(&self, voter: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let mut node = self.commit_list_head(voter).get();
        while node != 0 {
            result.push(node);
            node = self.commit_list_next(voter, node).get();
        }
        result
    }

    // ── Storage ──

    #[storage_mapper("commitListHead")]
    fn commit_list_head(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("commitListNext")]
    fn commit_list_next(&self, voter: &ManagedAddress, poll_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("commitListPrev")]
    fn commit_list_prev(&self, voter: &ManagedAddress, poll_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("commitListContains")]
    fn commit_list_contains(&self, voter: &ManagedAddress, poll_id: u64) -> SingleValueMapper<bool>;
}
