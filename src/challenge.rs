multiversx_sc::imports!();

use crate::{
    attribute_store, commit_list, errors::*, events, token,
    types::Challenge,
    voting,
};

/// Challenge records shared by listing and proposal disputes. Both are
/// keyed by the poll id that decides them, so a single `claimReward`
/// serves voters of either kind.
#[multiversx_sc::module]
pub trait ChallengeModule:
    voting::VotingModule
    + attribute_store::AttributeStoreModule
    + commit_list::CommitListModule
    + token::TokenModule
    + events::EventsModule
{
    /// Opens the poll and records the challenge. The loser's stake is
    /// split: `dispensation_pct` percent goes to the winning party, the
    /// rest forms the voters' reward pool.
    fn open_challenge(
        &self,
        challenger: &ManagedAddress,
        stake: &BigUint,
        dispensation_pct: &BigUint,
        vote_quorum: u64,
        commit_duration: u64,
        reveal_duration: u64,
    ) -> u64 {
        let poll_id = self.start_poll(vote_quorum, commit_duration, reveal_duration);
        let reward_pool = (BigUint::from(100u64) - dispensation_pct) * stake / 100u64;

        self.challenges(poll_id).set(Challenge {
            challenger: challenger.clone(),
            reward_pool,
            stake: stake.clone(),
            resolved: false,
            total_tokens: BigUint::zero(),
        });
        poll_id
    }

    fn challenge_resolvable(&self, challenge_id: u64) -> bool {
        if challenge_id == 0 || self.challenges(challenge_id).is_empty() {
            return false;
        }
        !self.challenges(challenge_id).get().resolved && self.poll_ended(challenge_id)
    }

    fn challenge_open(&self, challenge_id: u64) -> bool {
        challenge_id != 0 && !self.challenges(challenge_id).get().resolved
    }

    /// Marks the challenge resolved and returns the poll outcome together
    /// with the winning party's reward.
    fn settle_challenge(&self, challenge_id: u64) -> (bool, BigUint) {
        let reward = self.determine_reward(challenge_id);
        let passed = self.is_passed(challenge_id);
        let winning_tokens = self.winning_tokens(challenge_id);

        self.challenges(challenge_id).update(|challenge| {
            challenge.resolved = true;
            challenge.total_tokens = winning_tokens;
        });

        let poll = self.polls(challenge_id).get();
        self.poll_resolved_event(challenge_id, passed, &poll.votes_for, &poll.votes_against);
        (passed, reward)
    }

    // ========================================================
    // ENDPOINT: claimReward
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, challenge_id: u64, salt: u64) {
        require!(
            !self.challenges(challenge_id).is_empty(),
            ERR_CHALLENGE_NOT_FOUND
        );
        let challenge = self.challenges(challenge_id).get();
        require!(challenge.resolved, ERR_CHALLENGE_NOT_RESOLVED);

        let voter = self.blockchain().get_caller();
        require!(
            !self.has_claimed_reward(&voter, challenge_id),
            ERR_REWARD_ALREADY_CLAIMED
        );

        let voter_tokens = self.get_num_passing_tokens(&voter, challenge_id, salt);
        require!(voter_tokens > 0u64, ERR_NOT_ON_WINNING_SIDE);

        let reward = voter_tokens * &challenge.reward_pool / &challenge.total_tokens;
        self.mark_reward_claimed(&voter, challenge_id);
        self.send_tokens(&voter, &reward);

        self.reward_claimed_event(challenge_id, &voter, &reward);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Tokens the winning party receives. If nobody voted for the
    /// winning side the voters' pool goes to the winner as well.
    #[view(determineReward)]
    fn determine_reward(&self, challenge_id: u64) -> BigUint {
        require!(
            !self.challenges(challenge_id).is_empty(),
            ERR_CHALLENGE_NOT_FOUND
        );
        let challenge = self.challenges(challenge_id).get();
        require!(!challenge.resolved, ERR_CHALLENGE_ALREADY_RESOLVED);
        require!(self.poll_ended(challenge_id), ERR_POLL_NOT_ENDED);

        let both_stakes = &challenge.stake * 2u64;
        if self.winning_tokens(challenge_id) == 0u64 {
            return both_stakes;
        }
        both_stakes - &challenge.reward_pool
    }

    #[view(voterReward)]
    fn voter_reward(&self, voter: &ManagedAddress, challenge_id: u64, salt: u64) -> BigUint {
        require!(
            !self.challenges(challenge_id).is_empty(),
            ERR_CHALLENGE_NOT_FOUND
        );
        let challenge = self.challenges(challenge_id).get();
        require!(challenge.resolved, ERR_CHALLENGE_NOT_RESOLVED);

        let voter_tokens = self.get_num_passing_tokens(voter, challenge_id, salt);
        if voter_tokens == 0u64 {
            return BigUint::zero();
        }
        voter_tokens * &challenge.reward_pool / &challenge.total_tokens
    }

    #[view(tokenClaims)]
    fn token_claims(&self, challenge_id: u64, voter: &ManagedAddress) -> bool {
        self.has_claimed_reward(voter, challenge_id)
    }

    #[view(getChallenge)]
    fn get_challenge(&self, challenge_id: u64) -> Challenge<Self::Api> {
        require!(
            !self.challenges(challenge_id).is_empty(),
            ERR_CHALLENGE_NOT_FOUND
        );
        self.challenges(challenge_id).get()
    }

    #[storage_mapper("challenges")]
    fn challenges(&self, challenge_id: u64) -> SingleValueMapper<Challenge<Self::Api>>;
}
