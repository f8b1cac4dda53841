multiversx_sc::imports!();

use crate::types::Hash;

#[multiversx_sc::module]
pub trait EventsModule {
    // ========================================================
    // Registry
    // ========================================================

    #[event("application")]
    fn application_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] applicant: &ManagedAddress,
        #[indexed] deposit: &BigUint,
        #[indexed] app_end_date: u64,
        data: &ManagedBuffer,
    );

    #[event("challenge")]
    fn challenge_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] challenge_id: u64,
        #[indexed] challenger: &ManagedAddress,
        #[indexed] commit_end_date: u64,
        #[indexed] reveal_end_date: u64,
        data: &ManagedBuffer,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] added: &BigUint,
        new_total: &BigUint,
    );

    #[event("withdrawal")]
    fn withdrawal_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] withdrawn: &BigUint,
        new_total: &BigUint,
    );

    #[event("applicationWhitelisted")]
    fn application_whitelisted_event(&self, #[indexed] listing: &ManagedAddress);

    #[event("applicationRemoved")]
    fn application_removed_event(&self, #[indexed] listing: &ManagedAddress);

    #[event("listingRemoved")]
    fn listing_removed_event(&self, #[indexed] listing: &ManagedAddress);

    #[event("listingExited")]
    fn listing_exited_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
    );

    #[event("touchAndRemoved")]
    fn touch_and_removed_event(&self, #[indexed] listing: &ManagedAddress);

    #[event("challengeFailed")]
    fn challenge_failed_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] challenge_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    #[event("challengeSucceeded")]
    fn challenge_succeeded_event(
        &self,
        #[indexed] listing: &ManagedAddress,
        #[indexed] challenge_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    #[event("rewardClaimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] challenge_id: u64,
        #[indexed] voter: &ManagedAddress,
        reward: &BigUint,
    );

    // ========================================================
    // Parameterizer
    // ========================================================

    #[event("reparameterizationProposal")]
    fn reparameterization_proposal_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] value: &BigUint,
        #[indexed] prop_id: &Hash<Self::Api>,
        #[indexed] deposit: &BigUint,
        app_end_date: u64,
    );

    #[event("newChallenge")]
    fn new_challenge_event(
        &self,
        #[indexed] prop_id: &Hash<Self::Api>,
        #[indexed] challenge_id: u64,
        #[indexed] challenger: &ManagedAddress,
        #[indexed] commit_end_date: u64,
        reveal_end_date: u64,
    );

    #[event("proposalAccepted")]
    fn proposal_accepted_event(
        &self,
        #[indexed] prop_id: &Hash<Self::Api>,
        #[indexed] name: &ManagedBuffer,
        value: &BigUint,
    );

    #[event("proposalExpired")]
    fn proposal_expired_event(&self, #[indexed] prop_id: &Hash<Self::Api>);

    #[event("proposalChallengeFailed")]
    fn proposal_challenge_failed_event(
        &self,
        #[indexed] prop_id: &Hash<Self::Api>,
        #[indexed] challenge_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    #[event("proposalChallengeSucceeded")]
    fn proposal_challenge_succeeded_event(
        &self,
        #[indexed] prop_id: &Hash<Self::Api>,
        #[indexed] challenge_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    // ========================================================
    // Voting
    // ========================================================

    #[event("pollCreated")]
    fn poll_created_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] vote_quorum: u64,
        #[indexed] commit_end_date: u64,
        reveal_end_date: u64,
    );

    #[event("pollResolved")]
    fn poll_resolved_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] passed: bool,
        #[indexed] votes_for: &BigUint,
        votes_against: &BigUint,
    );

    #[event("votingRightsGranted")]
    fn voting_rights_granted_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("votingRightsWithdrawn")]
    fn voting_rights_withdrawn_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("voteCommitted")]
    fn vote_committed_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        num_tokens: &BigUint,
    );

    #[event("voteRevealed")]
    fn vote_revealed_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] vote_option: u64,
        num_tokens: &BigUint,
    );

    #[event("tokensRescued")]
    fn tokens_rescued_event(&self, #[indexed] poll_id: u64, #[indexed] voter: &ManagedAddress);
}
