multiversx_sc::imports!();

use crate::{
    attribute_store, challenge, commit_list, errors::*, events, token,
    types::{Hash, ParamProposal},
    voting,
};

// ── Parameter names ──

pub const MIN_DEPOSIT: &[u8] = b"minDeposit";
pub const P_MIN_DEPOSIT: &[u8] = b"pMinDeposit";
pub const APPLY_STAGE_LENGTH: &[u8] = b"applyStageLength";
pub const P_APPLY_STAGE_LENGTH: &[u8] = b"pApplyStageLength";
pub const COMMIT_STAGE_LENGTH: &[u8] = b"commitStageLength";
pub const P_COMMIT_STAGE_LENGTH: &[u8] = b"pCommitStageLength";
pub const REVEAL_STAGE_LENGTH: &[u8] = b"revealStageLength";
pub const P_REVEAL_STAGE_LENGTH: &[u8] = b"pRevealStageLength";
pub const DISPENSATION_PCT: &[u8] = b"dispensationPct";
pub const P_DISPENSATION_PCT: &[u8] = b"pDispensationPct";
pub const VOTE_QUORUM: &[u8] = b"voteQuorum";
pub const P_VOTE_QUORUM: &[u8] = b"pVoteQuorum";

const PERCENTAGE_PARAMS: [&[u8]; 4] = [DISPENSATION_PCT, P_DISPENSATION_PCT, VOTE_QUORUM, P_VOTE_QUORUM];

/// Voting stages must be open for at least one second.
const VOTING_STAGE_PARAMS: [&[u8]; 4] = [
    COMMIT_STAGE_LENGTH,
    P_COMMIT_STAGE_LENGTH,
    REVEAL_STAGE_LENGTH,
    P_REVEAL_STAGE_LENGTH,
];
const APPLY_STAGE_PARAMS: [&[u8]; 2] = [APPLY_STAGE_LENGTH, P_APPLY_STAGE_LENGTH];

/// Upper bound for any stage length: 365 days in seconds
pub const MAX_STAGE_LENGTH: u64 = 31_536_000;

/// Grace period after the reveal stage during which a proposal can still
/// be applied: 7 days in seconds
pub const PROCESS_BY_GRACE: u64 = 604_800;

#[multiversx_sc::module]
pub trait ParameterizerModule:
    challenge::ChallengeModule
    + voting::VotingModule
    + attribute_store::AttributeStoreModule
    + commit_list::CommitListModule
    + token::TokenModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: proposeReparameterization
    // Stakes pMinDeposit behind a new value for `name`.
    // ========================================================

    #[payable("*")]
    #[endpoint(proposeReparameterization)]
    fn propose_reparameterization(&self, name: ManagedBuffer, value: BigUint) -> Hash<Self::Api> {
        let caller = self.blockchain().get_caller();
        let deposit = self.receive_tokens();
        require!(deposit == self.param(P_MIN_DEPOSIT), ERR_WRONG_STAKE);

        self.validate_param(&name, &value);

        let prop_id = self.compute_prop_id(&name, &value);
        require!(!self.prop_exists(&prop_id), ERR_PROPOSAL_EXISTS);
        require!(self.params(&name).get() != value, ERR_NOOP_PROPOSAL);

        let now = self.blockchain().get_block_timestamp();
        let app_expiry = self.add_duration(now, self.param_u64(P_APPLY_STAGE_LENGTH));
        let voting_stages =
            self.param_u64(P_COMMIT_STAGE_LENGTH) + self.param_u64(P_REVEAL_STAGE_LENGTH);
        let process_by = self.add_duration(app_expiry, voting_stages + PROCESS_BY_GRACE);

        self.proposals(&prop_id).set(ParamProposal {
            name: name.clone(),
            value: value.clone(),
            owner: caller,
            deposit: deposit.clone(),
            app_expiry,
            process_by,
            challenge_id: 0,
        });

        self.reparameterization_proposal_event(&name, &value, &prop_id, &deposit, app_expiry);
        prop_id
    }

    // ========================================================
    // ENDPOINT: challengeReparameterization
    // Challenger matches the proposal deposit.
    // ========================================================

    #[payable("*")]
    #[endpoint(challengeReparameterization)]
    fn challenge_reparameterization(&self, prop_id: Hash<Self::Api>) -> u64 {
        require!(self.prop_exists(&prop_id), ERR_PROPOSAL_NOT_FOUND);
        let mut prop = self.proposals(&prop_id).get();
        require!(prop.challenge_id == 0, ERR_PROPOSAL_ALREADY_CHALLENGED);

        let challenger = self.blockchain().get_caller();
        let stake = self.receive_tokens();
        require!(stake == prop.deposit, ERR_WRONG_STAKE);

        let poll_id = self.open_challenge(
            &challenger,
            &prop.deposit,
            &self.param(P_DISPENSATION_PCT),
            self.param_u64(P_VOTE_QUORUM),
            self.param_u64(P_COMMIT_STAGE_LENGTH),
            self.param_u64(P_REVEAL_STAGE_LENGTH),
        );
        prop.challenge_id = poll_id;
        self.proposals(&prop_id).set(&prop);

        let poll = self.polls(poll_id).get();
        self.new_challenge_event(
            &prop_id,
            poll_id,
            &challenger,
            poll.commit_end_date,
            poll.reveal_end_date,
        );
        poll_id
    }

    // ========================================================
    // ENDPOINT: processProposal
    // Applies, resolves or expires a proposal. Exactly one branch runs
    // and the proposal is deleted afterwards. A challenged proposal only
    // leaves through its challenge, even past processBy.
    // ========================================================

    #[endpoint(processProposal)]
    fn process_proposal(&self, prop_id: Hash<Self::Api>) {
        require!(self.prop_exists(&prop_id), ERR_PROPOSAL_NOT_FOUND);
        let prop = self.proposals(&prop_id).get();
        let now = self.blockchain().get_block_timestamp();

        if self.can_be_set(&prop_id) {
            self.params(&prop.name).set(&prop.value);
            self.proposals(&prop_id).clear();
            self.send_tokens(&prop.owner, &prop.deposit);
            self.proposal_accepted_event(&prop_id, &prop.name, &prop.value);
        } else if self.prop_challenge_can_be_resolved(&prop_id) {
            self.proposals(&prop_id).clear();
            self.resolve_proposal_challenge(&prop_id, &prop, now);
        } else if now >= prop.process_by && !self.challenge_open(prop.challenge_id) {
            self.proposals(&prop_id).clear();
            self.send_tokens(&prop.owner, &prop.deposit);
            self.proposal_expired_event(&prop_id);
        } else {
            sc_panic!(ERR_CANNOT_PROCESS_PROPOSAL);
        }
    }

    fn resolve_proposal_challenge(
        &self,
        prop_id: &Hash<Self::Api>,
        prop: &ParamProposal<Self::Api>,
        now: u64,
    ) {
        let challenge_id = prop.challenge_id;
        let (passed, reward) = self.settle_challenge(challenge_id);
        let challenge = self.challenges(challenge_id).get();

        if passed {
            if now < prop.process_by {
                self.params(&prop.name).set(&prop.value);
                self.proposal_accepted_event(prop_id, &prop.name, &prop.value);
            }
            self.send_tokens(&prop.owner, &reward);
            self.proposal_challenge_failed_event(
                prop_id,
                challenge_id,
                &challenge.reward_pool,
                &challenge.total_tokens,
            );
        } else {
            self.send_tokens(&challenge.challenger, &reward);
            self.proposal_challenge_succeeded_event(
                prop_id,
                challenge_id,
                &challenge.reward_pool,
                &challenge.total_tokens,
            );
        }
    }

    // ========================================================
    // INTERNAL: parameter access
    // ========================================================

    fn param(&self, name: &[u8]) -> BigUint {
        self.params(&ManagedBuffer::from(name)).get()
    }

    fn param_u64(&self, name: &[u8]) -> u64 {
        self.param(name)
            .to_u64()
            .unwrap_or_else(|| sc_panic!(ERR_PARAM_OUT_OF_RANGE))
    }

    fn set_param(&self, name: &[u8], value: &BigUint) {
        self.params(&ManagedBuffer::from(name)).set(value);
    }

    fn is_one_of(&self, name: &ManagedBuffer, params: &[&[u8]]) -> bool {
        params.iter().any(|param| name == &ManagedBuffer::from(*param))
    }

    /// Range checks shared by deployment and proposals.
    fn validate_param(&self, name: &ManagedBuffer, value: &BigUint) {
        if self.is_one_of(name, &PERCENTAGE_PARAMS) {
            require!(*value <= 100u64, ERR_PERCENTAGE_OUT_OF_RANGE);
        }
        if self.is_one_of(name, &APPLY_STAGE_PARAMS) {
            require!(*value <= MAX_STAGE_LENGTH, ERR_INVALID_STAGE_LENGTH);
        }
        if self.is_one_of(name, &VOTING_STAGE_PARAMS) {
            require!(
                *value > 0u64 && *value <= MAX_STAGE_LENGTH,
                ERR_INVALID_STAGE_LENGTH
            );
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(get)]
    fn get_param(&self, name: ManagedBuffer) -> BigUint {
        self.params(&name).get()
    }

    #[view(computePropId)]
    fn compute_prop_id(&self, name: &ManagedBuffer, value: &BigUint) -> Hash<Self::Api> {
        let mut data = ManagedBuffer::new();
        data.append_bytes(&(name.len() as u32).to_be_bytes());
        data.append(name);
        data.append(&value.to_bytes_be_buffer());
        self.crypto().keccak256(data)
    }

    #[view(propExists)]
    fn prop_exists(&self, prop_id: &Hash<Self::Api>) -> bool {
        !self.proposals(prop_id).is_empty()
    }

    /// Unchallenged, past its application stage and not yet expired.
    #[view(canBeSet)]
    fn can_be_set(&self, prop_id: &Hash<Self::Api>) -> bool {
        if !self.prop_exists(prop_id) {
            return false;
        }
        let prop = self.proposals(prop_id).get();
        let now = self.blockchain().get_block_timestamp();
        prop.challenge_id == 0 && now >= prop.app_expiry && now < prop.process_by
    }

    #[view(propChallengeCanBeResolved)]
    fn prop_challenge_can_be_resolved(&self, prop_id: &Hash<Self::Api>) -> bool {
        if !self.prop_exists(prop_id) {
            return false;
        }
        self.challenge_resolvable(self.proposals(prop_id).get().challenge_id)
    }

    #[view(getProposal)]
    fn get_proposal(&self, prop_id: &Hash<Self::Api>) -> ParamProposal<Self::Api> {
        require!(self.prop_exists(prop_id), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(prop_id).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("params")]
    fn params(&self, name: &ManagedBuffer) -> SingleValueMapper<BigUint>;

    #[storage_mapper("proposals")]
    fn proposals(&self, prop_id: &Hash<Self::Api>) -> SingleValueMapper<ParamProposal<Self::Api>>;
}
