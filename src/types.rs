multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// keccak256 output: commit hashes and proposal ids.
pub type Hash<M> = ManagedByteArray<M, 32>;

// ============================================================
// Listing: a registry entry competing for the whitelist
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Listing<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    /// Tokens backing the listing that are not staked in a challenge
    pub unstaked_deposit: BigUint<M>,
    pub whitelisted: bool,
    pub application_expiry: u64,
    /// Poll id of the latest challenge, 0 if never challenged
    pub challenge_id: u64,
}

// ============================================================
// Challenge: a staked dispute, keyed by its poll id
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Challenge<M: ManagedTypeApi> {
    pub challenger: ManagedAddress<M>,
    /// Share of the loser's stake reserved for winning-side voters
    pub reward_pool: BigUint<M>,
    pub stake: BigUint<M>,
    pub resolved: bool,
    /// Winning-side weight, recorded at resolution
    pub total_tokens: BigUint<M>,
}

// ============================================================
// ParamProposal: a pending change to a live parameter
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ParamProposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub value: BigUint<M>,
    pub owner: ManagedAddress<M>,
    pub deposit: BigUint<M>,
    pub app_expiry: u64,
    /// After this timestamp the proposal can only be expired, never applied
    pub process_by: u64,
    pub challenge_id: u64,
}

// ============================================================
// Poll: a commit-reveal vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Poll<M: ManagedTypeApi> {
    pub commit_end_date: u64,
    pub reveal_end_date: u64,
    /// Percentage of revealed weight that must be "for" to pass
    pub vote_quorum: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
}
