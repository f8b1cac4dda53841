multiversx_sc::imports!();

use crate::types::Hash;

pub const NUM_TOKENS_ATTR: &[u8] = b"numTokens";
pub const COMMIT_HASH_ATTR: &[u8] = b"commitHash";
pub const REWARD_CLAIMED_ATTR: &[u8] = b"rewardClaimed";

/// Per-(voter, poll) record of committed weight, commit hash and reward
/// claims. Entries outlive the poll so rewards can be computed after
/// resolution without replaying the vote.
#[multiversx_sc::module]
pub trait AttributeStoreModule {
    fn attribute_uuid(&self, voter: &ManagedAddress, poll_id: u64) -> Hash<Self::Api> {
        let mut key = voter.as_managed_buffer().clone();
        key.append_bytes(&poll_id.to_be_bytes());
        self.crypto().keccak256(key)
    }

    fn get_attribute_bytes(&self, uuid: &Hash<Self::Api>, name: &[u8]) -> ManagedBuffer {
        self.attributes(uuid, &ManagedBuffer::from(name)).get()
    }

    fn set_attribute_bytes(&self, uuid: &Hash<Self::Api>, name: &[u8], value: &ManagedBuffer) {
        self.attributes(uuid, &ManagedBuffer::from(name)).set(value);
    }

    /// Missing attributes read as zero.
    fn get_attribute(&self, uuid: &Hash<Self::Api>, name: &[u8]) -> BigUint {
        BigUint::from_bytes_be_buffer(&self.get_attribute_bytes(uuid, name))
    }

    fn set_attribute(&self, uuid: &Hash<Self::Api>, name: &[u8], value: &BigUint) {
        self.set_attribute_bytes(uuid, name, &value.to_bytes_be_buffer());
    }

    fn has_claimed_reward(&self, voter: &ManagedAddress, poll_id: u64) -> bool {
        let uuid = self.attribute_uuid(voter, poll_id);
        self.get_attribute(&uuid, REWARD_CLAIMED_ATTR) > 0u64
    }

    fn mark_reward_claimed(&self, voter: &ManagedAddress, poll_id: u64) {
        let uuid = self.attribute_uuid(voter, poll_id);
        self.set_attribute(&uuid, REWARD_CLAIMED_ATTR, &BigUint::from(1u64));
    }

    #[storage_mapper("attributes")]
    fn attributes(
        &self,
        uuid: &Hash<Self::Api>,
        name: &ManagedBuffer,
    ) -> SingleValueMapper<ManagedBuffer>;
}
