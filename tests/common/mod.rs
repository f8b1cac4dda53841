#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use token_curated_registry::{
    registry::RegistryModule, voting::VotingModule, TokenCuratedRegistry,
};

pub const CODE_PATH: MxscPath = MxscPath::new("output/token-curated-registry.mxsc.json");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const APPLICANT: TestAddress = TestAddress::new("applicant");
pub const CHALLENGER: TestAddress = TestAddress::new("challenger");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const TCR_ADDRESS: TestSCAddress = TestSCAddress::new("tcr");

pub const TCR_TOKEN_ID: &str = "TCR-123456";
pub const TCR_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(TCR_TOKEN_ID);
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-123456");

pub const STARTING_BALANCE: u64 = 1_000_000;

// ── Parameter defaults ──

pub const MIN_DEPOSIT: u64 = 500;
pub const P_MIN_DEPOSIT: u64 = 1_000;
pub const APPLY_STAGE_LENGTH: u64 = 100;
pub const P_APPLY_STAGE_LENGTH: u64 = 100;
pub const COMMIT_STAGE_LENGTH: u64 = 60;
pub const P_COMMIT_STAGE_LENGTH: u64 = 60;
pub const REVEAL_STAGE_LENGTH: u64 = 60;
pub const P_REVEAL_STAGE_LENGTH: u64 = 60;
pub const DISPENSATION_PCT: u64 = 50;
pub const P_DISPENSATION_PCT: u64 = 50;
pub const VOTE_QUORUM: u64 = 50;
pub const P_VOTE_QUORUM: u64 = 50;

pub const VOTE_AGAINST: u64 = 0;
pub const VOTE_FOR: u64 = 1;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, token_curated_registry::ContractBuilder);
    blockchain
}

/// Deploys the registry at timestamp 0 with every account funded.
pub fn setup() -> ScenarioWorld {
    let mut world = world();

    world.current_block().block_timestamp(0);
    world.account(OWNER).nonce(1);
    for account in [APPLICANT, CHALLENGER, ALICE, BOB] {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(TCR_TOKEN, STARTING_BALANCE)
            .esdt_balance(OTHER_TOKEN, STARTING_BALANCE);
    }

    world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(CODE_PATH)
        .new_address(TCR_ADDRESS)
        .whitebox(token_curated_registry::contract_obj, |sc| {
            sc.init(
                TokenIdentifier::from(TCR_TOKEN_ID),
                BigUint::from(MIN_DEPOSIT),
                BigUint::from(P_MIN_DEPOSIT),
                APPLY_STAGE_LENGTH,
                P_APPLY_STAGE_LENGTH,
                COMMIT_STAGE_LENGTH,
                P_COMMIT_STAGE_LENGTH,
                REVEAL_STAGE_LENGTH,
                P_REVEAL_STAGE_LENGTH,
                DISPENSATION_PCT,
                P_DISPENSATION_PCT,
                VOTE_QUORUM,
                P_VOTE_QUORUM,
            );
        });

    world
}

pub fn set_time(world: &mut ScenarioWorld, timestamp: u64) {
    world.current_block().block_timestamp(timestamp);
}

pub fn managed(address: TestAddress) -> ManagedAddress<DebugApi> {
    ManagedAddress::from(address.to_address())
}

pub fn apply(world: &mut ScenarioWorld, applicant: TestAddress, listing: TestAddress, deposit: u64) {
    world
        .tx()
        .from(applicant)
        .to(TCR_ADDRESS)
        .payment(TestEsdtTransfer(TCR_TOKEN, 0, deposit))
        .whitebox(token_curated_registry::contract_obj, |sc| {
            sc.apply(managed(listing), ManagedBuffer::new());
        });
}

pub fn challenge(world: &mut ScenarioWorld, challenger: TestAddress, listing: TestAddress) {
    world
        .tx()
        .from(challenger)
        .to(TCR_ADDRESS)
        .payment(TestEsdtTransfer(TCR_TOKEN, 0, MIN_DEPOSIT))
        .whitebox(token_curated_registry::contract_obj, |sc| {
            sc.challenge(managed(listing), ManagedBuffer::new());
        });
}

pub fn update_status(world: &mut ScenarioWorld, listing: TestAddress) {
    world
        .tx()
        .from(OWNER)
        .to(TCR_ADDRESS)
        .whitebox(token_curated_registry::contract_obj, |sc| {
            sc.update_status(managed(listing));
        });
}

pub fn request_voting_rights(world: &mut ScenarioWorld, voter: TestAddress, amount: u64) {
    world
        .tx()
        .from(voter)
        .to(TCR_ADDRESS)
        .payment(TestEsdtTransfer(TCR_TOKEN, 0, amount))
        .whitebox(token_curated_registry::contract_obj, |sc| {
            sc.request_voting_rights();
        });
}

/// Commits `num_tokens` on `poll_id`, using the insert point the
/// contract suggests for that weight.
pub fn commit_vote(
    world: &mut ScenarioWorld,
    voter: TestAddress,
    poll_id: u64,
    vote_option: u64,
    num_tokens: u64,
    salt: u64,
) {
    world
        .tx()
        .from(voter)
        .to(TCR_ADDRESS)
        .whitebox(token_curated_registry::contract_obj, |sc| {
            let secret_hash = sc.secret_hash(vote_option, salt);
            let prev =
                sc.get_insert_point_for_num_tokens(&managed(voter), BigUint::from(num_tokens));
            sc.commit_vote(poll_id, secret_hash, BigUint::from(num_tokens), prev);
        });
}

pub fn reveal_vote(
    world: &mut ScenarioWorld,
    voter: TestAddress,
    poll_id: u64,
    vote_option: u64,
    salt: u64,
) {
    world
        .tx()
        .from(voter)
        .to(TCR_ADDRESS)
        .whitebox(token_curated_registry::contract_obj, |sc| {
            sc.reveal_vote(poll_id, vote_option, salt);
        });
}

pub fn check_token_balance(world: &mut ScenarioWorld, account: TestAddress, expected: u64) {
    world.check_account(account).esdt_balance(TCR_TOKEN, expected);
}

/// Applies and lets the application stage run out.
pub fn add_to_whitelist(
    world: &mut ScenarioWorld,
    applicant: TestAddress,
    listing: TestAddress,
    deposit: u64,
    now: u64,
) -> u64 {
    set_time(world, now);
    apply(world, applicant, listing, deposit);
    let later = now + APPLY_STAGE_LENGTH + 1;
    set_time(world, later);
    update_status(world, listing);
    later
}
