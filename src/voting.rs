multiversx_sc::imports!();

use crate::{
    attribute_store::{self, COMMIT_HASH_ATTR, NUM_TOKENS_ATTR},
    commit_list, errors::*, events, token,
    types::{Hash, Poll},
};

pub const VOTE_AGAINST: u64 = 0;
pub const VOTE_FOR: u64 = 1;

// ============================================================
// Partial-lock commit-reveal voting
//
// Voters lock tokens as voting rights, commit keccak256(option, salt)
// with a weight during the commit stage and reveal during the reveal
// stage. Weight committed to a poll that has not ended is unavailable
// for other polls and for withdrawal.
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule:
    attribute_store::AttributeStoreModule
    + commit_list::CommitListModule
    + token::TokenModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: requestVotingRights
    // ========================================================

    #[payable("*")]
    #[endpoint(requestVotingRights)]
    fn request_voting_rights(&self) {
        let voter = self.blockchain().get_caller();
        let amount = self.receive_tokens();

        self.vote_token_balance(&voter).update(|balance| *balance += &amount);
        self.voting_rights_granted_event(&voter, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawVotingRights
    // ========================================================

    #[endpoint(withdrawVotingRights)]
    fn withdraw_voting_rights(&self, amount: BigUint) {
        let voter = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_TOKENS);
        require!(
            amount <= self.available_tokens(&voter, 0),
            ERR_INSUFFICIENT_VOTING_RIGHTS
        );

        self.vote_token_balance(&voter).update(|balance| *balance -= &amount);
        self.send_tokens(&voter, &amount);
        self.voting_rights_withdrawn_event(&voter, &amount);
    }

    // ========================================================
    // ENDPOINT: rescueTokens
    // Unlinks a commitment that was never revealed before its poll ended.
    // ========================================================

    #[endpoint(rescueTokens)]
    fn rescue_tokens(&self, poll_id: u64) {
        let voter = self.blockchain().get_caller();
        require!(self.poll_ended(poll_id), ERR_POLL_NOT_ENDED);
        require!(
            self.commit_list_contains(&voter, poll_id).get(),
            ERR_NOTHING_TO_RESCUE
        );

        self.commit_list_remove(&voter, poll_id);
        self.tokens_rescued_event(poll_id, &voter);
    }

    // ========================================================
    // ENDPOINT: commitVote
    // ========================================================

    #[endpoint(commitVote)]
    fn commit_vote(
        &self,
        poll_id: u64,
        secret_hash: Hash<Self::Api>,
        num_tokens: BigUint,
        prev_poll_id: u64,
    ) {
        require!(self.commit_period_active(poll_id), ERR_COMMIT_PERIOD_INACTIVE);
        require!(num_tokens > 0u64, ERR_ZERO_TOKENS);

        let voter = self.blockchain().get_caller();
        require!(
            num_tokens <= self.available_tokens(&voter, poll_id),
            ERR_INSUFFICIENT_VOTING_RIGHTS
        );

        // Re-committing replaces the previous node. A hint naming the
        // poll itself falls back to that node's old predecessor.
        let mut prev = prev_poll_id;
        if self.commit_list_contains(&voter, poll_id).get() {
            let old_prev = self.commit_list_prev(&voter, poll_id).get();
            self.commit_list_remove(&voter, poll_id);
            if prev == poll_id {
                prev = old_prev;
            }
        }
        require!(
            self.is_valid_insert_point(&voter, prev, &num_tokens),
            ERR_INVALID_INSERT_POINT
        );

        let uuid = self.attribute_uuid(&voter, poll_id);
        self.set_attribute(&uuid, NUM_TOKENS_ATTR, &num_tokens);
        self.set_attribute_bytes(&uuid, COMMIT_HASH_ATTR, secret_hash.as_managed_buffer());
        self.commit_list_insert_after(&voter, prev, poll_id);
        self.did_commit(poll_id, &voter).set(true);

        self.vote_committed_event(poll_id, &voter, &num_tokens);
    }

    // ========================================================
    // ENDPOINT: revealVote
    // ========================================================

    #[endpoint(revealVote)]
    fn reveal_vote(&self, poll_id: u64, vote_option: u64, salt: u64) {
        require!(self.reveal_period_active(poll_id), ERR_REVEAL_PERIOD_INACTIVE);

        let voter = self.blockchain().get_caller();
        require!(self.did_commit(poll_id, &voter).get(), ERR_NO_COMMITMENT);
        require!(!self.did_reveal(poll_id, &voter).get(), ERR_ALREADY_REVEALED);
        require!(
            vote_option == VOTE_FOR || vote_option == VOTE_AGAINST,
            ERR_INVALID_VOTE_OPTION
        );

        let uuid = self.attribute_uuid(&voter, poll_id);
        let commit_hash = self.get_attribute_bytes(&uuid, COMMIT_HASH_ATTR);
        require!(
            self.secret_hash(vote_option, salt).as_managed_buffer() == &commit_hash,
            ERR_HASH_MISMATCH
        );

        let num_tokens = self.get_attribute(&uuid, NUM_TOKENS_ATTR);
        self.polls(poll_id).update(|poll| {
            if vote_option == VOTE_FOR {
                poll.votes_for += &num_tokens;
            } else {
                poll.votes_against += &num_tokens;
            }
        });
        self.did_reveal(poll_id, &voter).set(true);
        self.commit_list_remove(&voter, poll_id);

        self.vote_revealed_event(poll_id, &voter, vote_option, &num_tokens);
    }

    // ========================================================
    // INTERNAL: poll creation
    // ========================================================

    fn start_poll(&self, vote_quorum: u64, commit_duration: u64, reveal_duration: u64) -> u64 {
        let poll_id = self.poll_nonce().get() + 1;
        let now = self.blockchain().get_block_timestamp();
        let commit_end_date = self.add_duration(now, commit_duration);
        let reveal_end_date = self.add_duration(commit_end_date, reveal_duration);

        self.polls(poll_id).set(Poll {
            commit_end_date,
            reveal_end_date,
            vote_quorum,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
        });
        self.poll_nonce().set(poll_id);

        self.poll_created_event(poll_id, vote_quorum, commit_end_date, reveal_end_date);
        poll_id
    }

    fn add_duration(&self, start: u64, duration: u64) -> u64 {
        start
            .checked_add(duration)
            .unwrap_or_else(|| sc_panic!(ERR_DEADLINE_OVERFLOW))
    }

    /// Voting rights not committed to any unfinished poll other than
    /// `exclude_poll_id`.
    fn available_tokens(&self, voter: &ManagedAddress, exclude_poll_id: u64) -> BigUint {
        let balance = self.vote_token_balance(voter).get();
        let locked = self.locked_tokens_excluding(voter, exclude_poll_id);
        if balance > locked {
            balance - locked
        } else {
            BigUint::zero()
        }
    }

    fn locked_tokens_excluding(&self, voter: &ManagedAddress, exclude_poll_id: u64) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let mut locked = BigUint::zero();
        let mut node = self.commit_list_head(voter).get();
        while node != 0 {
            if node != exclude_poll_id && now < self.polls(node).get().reveal_end_date {
                locked += self.node_tokens(voter, node);
            }
            node = self.commit_list_next(voter, node).get();
        }
        locked
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getSecretHash)]
    fn secret_hash(&self, vote_option: u64, salt: u64) -> Hash<Self::Api> {
        let mut data = ManagedBuffer::new();
        data.append_bytes(&vote_option.to_be_bytes());
        data.append_bytes(&salt.to_be_bytes());
        self.crypto().keccak256(data)
    }

    #[view(getInsertPointForNumTokens)]
    fn get_insert_point_for_num_tokens(&self, voter: &ManagedAddress, num_tokens: BigUint) -> u64 {
        let mut prev = 0u64;
        let mut node = self.commit_list_head(voter).get();
        while node != 0 {
            if self.node_tokens(voter, node) > num_tokens {
                break;
            }
            prev = node;
            node = self.commit_list_next(voter, node).get();
        }
        prev
    }

    /// Committed weight if it was cast for the winning option, zero if it
    /// was cast for the losing one. Fails when the salt matches neither.
    #[view(getNumPassingTokens)]
    fn get_num_passing_tokens(&self, voter: &ManagedAddress, poll_id: u64, salt: u64) -> BigUint {
        require!(self.poll_ended(poll_id), ERR_POLL_NOT_ENDED);
        require!(self.did_reveal(poll_id, voter).get(), ERR_VOTE_NOT_REVEALED);

        let (winning_option, losing_option) = if self.is_passed(poll_id) {
            (VOTE_FOR, VOTE_AGAINST)
        } else {
            (VOTE_AGAINST, VOTE_FOR)
        };

        let uuid = self.attribute_uuid(voter, poll_id);
        let commit_hash = self.get_attribute_bytes(&uuid, COMMIT_HASH_ATTR);
        if self.secret_hash(winning_option, salt).as_managed_buffer() == &commit_hash {
            return self.get_attribute(&uuid, NUM_TOKENS_ATTR);
        }
        require!(
            self.secret_hash(losing_option, salt).as_managed_buffer() == &commit_hash,
            ERR_HASH_MISMATCH
        );
        BigUint::zero()
    }

    #[view(isPassed)]
    fn is_passed(&self, poll_id: u64) -> bool {
        require!(self.poll_ended(poll_id), ERR_POLL_NOT_ENDED);

        let poll = self.polls(poll_id).get();
        let total = &poll.votes_for + &poll.votes_against;
        if total == 0u64 {
            return false;
        }
        (&poll.votes_for * 100u64) / &total >= poll.vote_quorum
    }

    #[view(getTotalNumberOfTokensForWinningOption)]
    fn winning_tokens(&self, poll_id: u64) -> BigUint {
        let passed = self.is_passed(poll_id);
        let poll = self.polls(poll_id).get();
        if passed {
            poll.votes_for
        } else {
            poll.votes_against
        }
    }

    #[view(pollEnded)]
    fn poll_ended(&self, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.blockchain().get_block_timestamp() >= self.polls(poll_id).get().reveal_end_date
    }

    #[view(commitPeriodActive)]
    fn commit_period_active(&self, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.blockchain().get_block_timestamp() < self.polls(poll_id).get().commit_end_date
    }

    #[view(revealPeriodActive)]
    fn reveal_period_active(&self, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        let now = self.blockchain().get_block_timestamp();
        let poll = self.polls(poll_id).get();
        now >= poll.commit_end_date && now < poll.reveal_end_date
    }

    #[view(pollExists)]
    fn poll_exists(&self, poll_id: u64) -> bool {
        poll_id != 0 && !self.polls(poll_id).is_empty()
    }

    #[view(getPoll)]
    fn get_poll(&self, poll_id: u64) -> Poll<Self::Api> {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.polls(poll_id).get()
    }

    #[view(getNumTokens)]
    fn get_num_tokens(&self, voter: &ManagedAddress, poll_id: u64) -> BigUint {
        let uuid = self.attribute_uuid(voter, poll_id);
        self.get_attribute(&uuid, NUM_TOKENS_ATTR)
    }

    #[view(getCommitHash)]
    fn get_commit_hash(&self, voter: &ManagedAddress, poll_id: u64) -> ManagedBuffer {
        let uuid = self.attribute_uuid(voter, poll_id);
        self.get_attribute_bytes(&uuid, COMMIT_HASH_ATTR)
    }

    #[view(getLockedTokens)]
    fn get_locked_tokens(&self, voter: &ManagedAddress) -> BigUint {
        self.locked_tokens_excluding(voter, 0)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("pollNonce")]
    fn poll_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("polls")]
    fn polls(&self, poll_id: u64) -> SingleValueMapper<Poll<Self::Api>>;

    #[view(getVotingRights)]
    #[storage_mapper("voteTokenBalance")]
    fn vote_token_balance(&self, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(didCommit)]
    #[storage_mapper("didCommit")]
    fn did_commit(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(didReveal)]
    #[storage_mapper("didReveal")]
    fn did_reveal(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
