multiversx_sc::imports!();

use crate::{
    attribute_store, challenge, commit_list, errors::*, events,
    parameterizer::{
        self, APPLY_STAGE_LENGTH, COMMIT_STAGE_LENGTH, DISPENSATION_PCT, MIN_DEPOSIT,
        REVEAL_STAGE_LENGTH, VOTE_QUORUM,
    },
    token,
    types::Listing,
    voting,
};

#[multiversx_sc::module]
pub trait RegistryModule:
    parameterizer::ParameterizerModule
    + challenge::ChallengeModule
    + voting::VotingModule
    + attribute_store::AttributeStoreModule
    + commit_list::CommitListModule
    + token::TokenModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: apply
    // The payment is the applicant's deposit, at least minDeposit.
    // ========================================================

    #[payable("*")]
    #[endpoint(apply)]
    fn apply(&self, listing: ManagedAddress, data: ManagedBuffer) {
        require!(self.listings(&listing).is_empty(), ERR_LISTING_EXISTS);

        let applicant = self.blockchain().get_caller();
        let deposit = self.receive_tokens();
        require!(deposit >= self.param(MIN_DEPOSIT), ERR_DEPOSIT_BELOW_MINIMUM);

        let application_expiry = self.add_duration(
            self.blockchain().get_block_timestamp(),
            self.param_u64(APPLY_STAGE_LENGTH),
        );
        self.listings(&listing).set(Listing {
            owner: applicant.clone(),
            unstaked_deposit: deposit.clone(),
            whitelisted: false,
            application_expiry,
            challenge_id: 0,
        });

        self.application_event(&listing, &applicant, &deposit, application_expiry, &data);
    }

    // ========================================================
    // ENDPOINT: deposit
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, listing: ManagedAddress) {
        let mut entry = self.owned_listing(&listing);
        require!(
            !self.challenge_open(entry.challenge_id),
            ERR_LISTING_LOCKED
        );

        let amount = self.receive_tokens();
        entry.unstaked_deposit += &amount;
        self.listings(&listing).set(&entry);

        self.deposit_event(&listing, &amount, &entry.unstaked_deposit);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, listing: ManagedAddress, amount: BigUint) {
        let mut entry = self.owned_listing(&listing);
        require!(
            !self.challenge_open(entry.challenge_id),
            ERR_LISTING_LOCKED
        );
        require!(
            amount <= entry.unstaked_deposit,
            ERR_WITHDRAW_EXCEEDS_DEPOSIT
        );
        require!(
            &entry.unstaked_deposit - &amount >= self.param(MIN_DEPOSIT),
            ERR_WITHDRAW_BELOW_MINIMUM
        );

        entry.unstaked_deposit -= &amount;
        self.listings(&listing).set(&entry);
        self.send_tokens(&entry.owner, &amount);

        self.withdrawal_event(&listing, &amount, &entry.unstaked_deposit);
    }

    // ========================================================
    // ENDPOINT: exitListing
    // Owner removes a whitelisted, unchallenged listing and takes back
    // the whole deposit.
    // ========================================================

    #[endpoint(exitListing)]
    fn exit_listing(&self, listing: ManagedAddress) {
        let entry = self.owned_listing(&listing);
        require!(entry.whitelisted, ERR_LISTING_NOT_WHITELISTED);
        require!(
            !self.challenge_open(entry.challenge_id),
            ERR_LISTING_LOCKED
        );

        self.reset_listing(&listing);
        self.listing_exited_event(&listing, &entry.owner);
    }

    // ========================================================
    // ENDPOINT: challenge
    // Challenger stakes minDeposit; returns the poll id, or 0 when the
    // listing was removed for being under-funded.
    // ========================================================

    #[payable("*")]
    #[endpoint(challenge)]
    fn challenge(&self, listing: ManagedAddress, data: ManagedBuffer) -> u64 {
        require!(!self.listings(&listing).is_empty(), ERR_LISTING_NOT_FOUND);
        let mut entry = self.listings(&listing).get();
        require!(
            !self.challenge_open(entry.challenge_id),
            ERR_LISTING_LOCKED
        );

        let challenger = self.blockchain().get_caller();
        let stake = self.receive_tokens();
        let min_deposit = self.param(MIN_DEPOSIT);
        require!(stake == min_deposit, ERR_WRONG_STAKE);

        // minDeposit was raised above what the listing holds
        if entry.unstaked_deposit < min_deposit {
            self.reset_listing(&listing);
            self.send_tokens(&challenger, &stake);
            self.touch_and_removed_event(&listing);
            return 0;
        }

        let poll_id = self.open_challenge(
            &challenger,
            &min_deposit,
            &self.param(DISPENSATION_PCT),
            self.param_u64(VOTE_QUORUM),
            self.param_u64(COMMIT_STAGE_LENGTH),
            self.param_u64(REVEAL_STAGE_LENGTH),
        );
        entry.challenge_id = poll_id;
        entry.unstaked_deposit -= &min_deposit;
        self.listings(&listing).set(&entry);

        let poll = self.polls(poll_id).get();
        self.challenge_event(
            &listing,
            poll_id,
            &challenger,
            poll.commit_end_date,
            poll.reveal_end_date,
            &data,
        );
        poll_id
    }

    // ========================================================
    // ENDPOINT: updateStatus
    // Whitelists an expired unchallenged application or resolves an
    // ended challenge. Anything else reverts.
    // ========================================================

    #[endpoint(updateStatus)]
    fn update_status(&self, listing: ManagedAddress) {
        if self.can_be_whitelisted(&listing) {
            self.whitelist_application(&listing);
        } else if self.challenge_can_be_resolved(&listing) {
            self.resolve_listing_challenge(&listing);
        } else {
            sc_panic!(ERR_CANNOT_UPDATE_STATUS);
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn owned_listing(&self, listing: &ManagedAddress) -> Listing<Self::Api> {
        require!(!self.listings(listing).is_empty(), ERR_LISTING_NOT_FOUND);
        let entry = self.listings(listing).get();
        require!(
            entry.owner == self.blockchain().get_caller(),
            ERR_NOT_LISTING_OWNER
        );
        entry
    }

    fn whitelist_application(&self, listing: &ManagedAddress) {
        let mut entry = self.listings(listing).get();
        if !entry.whitelisted {
            self.application_whitelisted_event(listing);
        }
        entry.whitelisted = true;
        self.listings(listing).set(&entry);
    }

    fn resolve_listing_challenge(&self, listing: &ManagedAddress) {
        let challenge_id = self.listings(listing).get().challenge_id;
        let (passed, reward) = self.settle_challenge(challenge_id);
        let challenge = self.challenges(challenge_id).get();

        if passed {
            self.whitelist_application(listing);
            self.listings(listing)
                .update(|entry| entry.unstaked_deposit += &reward);
            self.challenge_failed_event(
                listing,
                challenge_id,
                &challenge.reward_pool,
                &challenge.total_tokens,
            );
        } else {
            self.reset_listing(listing);
            self.send_tokens(&challenge.challenger, &reward);
            self.challenge_succeeded_event(
                listing,
                challenge_id,
                &challenge.reward_pool,
                &challenge.total_tokens,
            );
        }
    }

    /// Deletes the listing and refunds its unstaked deposit to the owner.
    fn reset_listing(&self, listing: &ManagedAddress) {
        let entry = self.listings(listing).get();
        if entry.whitelisted {
            self.listing_removed_event(listing);
        } else {
            self.application_removed_event(listing);
        }

        self.listings(listing).clear();
        self.send_tokens(&entry.owner, &entry.unstaked_deposit);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(canBeWhitelisted)]
    fn can_be_whitelisted(&self, listing: &ManagedAddress) -> bool {
        if self.listings(listing).is_empty() {
            return false;
        }
        let entry = self.listings(listing).get();
        let now = self.blockchain().get_block_timestamp();
        !entry.whitelisted
            && now >= entry.application_expiry
            && !self.challenge_open(entry.challenge_id)
    }

    #[view(challengeCanBeResolved)]
    fn challenge_can_be_resolved(&self, listing: &ManagedAddress) -> bool {
        if self.listings(listing).is_empty() {
            return false;
        }
        self.challenge_resolvable(self.listings(listing).get().challenge_id)
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, listing: &ManagedAddress) -> bool {
        !self.listings(listing).is_empty() && self.listings(listing).get().whitelisted
    }

    #[view(appWasMade)]
    fn app_was_made(&self, listing: &ManagedAddress) -> bool {
        !self.listings(listing).is_empty()
    }

    #[view(challengeExists)]
    fn challenge_exists(&self, listing: &ManagedAddress) -> bool {
        !self.listings(listing).is_empty()
            && self.challenge_open(self.listings(listing).get().challenge_id)
    }

    #[view(getListing)]
    fn get_listing(&self, listing: &ManagedAddress) -> Listing<Self::Api> {
        require!(!self.listings(listing).is_empty(), ERR_LISTING_NOT_FOUND);
        self.listings(listing).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("listings")]
    fn listings(&self, listing: &ManagedAddress) -> SingleValueMapper<Listing<Self::Api>>;
}
