#![no_std]

multiversx_sc::imports!();

pub mod attribute_store;
pub mod challenge;
pub mod commit_list;
pub mod errors;
pub mod events;
pub mod parameterizer;
pub mod registry;
pub mod token;
pub mod types;
pub mod voting;

use errors::ERR_INVALID_TOKEN_ID;
use parameterizer::{
    APPLY_STAGE_LENGTH, COMMIT_STAGE_LENGTH, DISPENSATION_PCT, MIN_DEPOSIT, P_APPLY_STAGE_LENGTH,
    P_COMMIT_STAGE_LENGTH, P_DISPENSATION_PCT, P_MIN_DEPOSIT, P_REVEAL_STAGE_LENGTH,
    P_VOTE_QUORUM, REVEAL_STAGE_LENGTH, VOTE_QUORUM,
};

// ============================================================
// Token-Curated Registry
//
// A whitelist of listings curated by stake. Any listing can be challenged
// by matching the minimum deposit; token holders settle the dispute in a
// commit-reveal poll. The registry's own parameters are governed by the
// same proposal/challenge game.
// ============================================================

#[multiversx_sc::contract]
pub trait TokenCuratedRegistry:
    registry::RegistryModule
    + parameterizer::ParameterizerModule
    + challenge::ChallengeModule
    + voting::VotingModule
    + commit_list::CommitListModule
    + attribute_store::AttributeStoreModule
    + token::TokenModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    #[init]
    fn init(
        &self,
        token_id: TokenIdentifier,
        min_deposit: BigUint,
        p_min_deposit: BigUint,
        apply_stage_length: u64,
        p_apply_stage_length: u64,
        commit_stage_length: u64,
        p_commit_stage_length: u64,
        reveal_stage_length: u64,
        p_reveal_stage_length: u64,
        dispensation_pct: u64,
        p_dispensation_pct: u64,
        vote_quorum: u64,
        p_vote_quorum: u64,
    ) {
        require!(token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN_ID);
        self.tcr_token_id().set(&token_id);

        let defaults: [(&[u8], BigUint); 12] = [
            (MIN_DEPOSIT, min_deposit),
            (P_MIN_DEPOSIT, p_min_deposit),
            (APPLY_STAGE_LENGTH, BigUint::from(apply_stage_length)),
            (P_APPLY_STAGE_LENGTH, BigUint::from(p_apply_stage_length)),
            (COMMIT_STAGE_LENGTH, BigUint::from(commit_stage_length)),
            (P_COMMIT_STAGE_LENGTH, BigUint::from(p_commit_stage_length)),
            (REVEAL_STAGE_LENGTH, BigUint::from(reveal_stage_length)),
            (P_REVEAL_STAGE_LENGTH, BigUint::from(p_reveal_stage_length)),
            (DISPENSATION_PCT, BigUint::from(dispensation_pct)),
            (P_DISPENSATION_PCT, BigUint::from(p_dispensation_pct)),
            (VOTE_QUORUM, BigUint::from(vote_quorum)),
            (P_VOTE_QUORUM, BigUint::from(p_vote_quorum)),
        ];
        for (name, value) in defaults.iter() {
            self.validate_param(&ManagedBuffer::from(*name), value);
            self.set_param(name, value);
        }

        self.poll_nonce().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
