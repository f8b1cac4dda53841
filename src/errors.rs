// ── InvalidState ──

pub const ERR_COMMIT_PERIOD_INACTIVE: &str = "Commit period is not active";
pub const ERR_REVEAL_PERIOD_INACTIVE: &str = "Reveal period is not active";
pub const ERR_POLL_NOT_ENDED: &str = "Poll has not ended";
pub const ERR_ZERO_TOKENS: &str = "Number of tokens must be positive";
pub const ERR_INVALID_INSERT_POINT: &str = "Invalid insert point for commitment";
pub const ERR_NO_COMMITMENT: &str = "No vote committed for this poll";
pub const ERR_ALREADY_REVEALED: &str = "Vote already revealed";
pub const ERR_VOTE_NOT_REVEALED: &str = "Vote was not revealed";
pub const ERR_INVALID_VOTE_OPTION: &str = "Vote option must be 0 or 1";
pub const ERR_NOTHING_TO_RESCUE: &str = "No unrevealed commitment to rescue";
pub const ERR_LISTING_LOCKED: &str = "Listing is locked by an open challenge";
pub const ERR_LISTING_NOT_WHITELISTED: &str = "Listing is not whitelisted";
pub const ERR_CANNOT_UPDATE_STATUS: &str = "Listing cannot be whitelisted or resolved";
pub const ERR_CHALLENGE_NOT_RESOLVED: &str = "Challenge has not been resolved";
pub const ERR_CHALLENGE_ALREADY_RESOLVED: &str = "Challenge already resolved";
pub const ERR_NOT_ON_WINNING_SIDE: &str = "Voter has no tokens on the winning side";
pub const ERR_NOOP_PROPOSAL: &str = "Proposed value equals the current value";
pub const ERR_PERCENTAGE_OUT_OF_RANGE: &str = "Percentage parameter must not exceed 100";
pub const ERR_PROPOSAL_ALREADY_CHALLENGED: &str = "Proposal already challenged";
pub const ERR_CANNOT_PROCESS_PROPOSAL: &str = "Proposal cannot be processed yet";
pub const ERR_PARAM_OUT_OF_RANGE: &str = "Parameter does not fit in 64 bits";
pub const ERR_INVALID_TOKEN_ID: &str = "Invalid token identifier";
pub const ERR_INVALID_STAGE_LENGTH: &str = "Stage length out of range";
pub const ERR_DEADLINE_OVERFLOW: &str = "Deadline overflows the timestamp range";

// ── Unauthorized ──

pub const ERR_NOT_LISTING_OWNER: &str = "Only the listing owner can do this";

// ── InsufficientFunds ──

pub const ERR_WRONG_PAYMENT_TOKEN: &str = "Payment must be in the registry token";
pub const ERR_ZERO_PAYMENT: &str = "Payment must be positive";
pub const ERR_DEPOSIT_BELOW_MINIMUM: &str = "Deposit is below minDeposit";
pub const ERR_WRONG_STAKE: &str = "Stake must equal the required deposit";
pub const ERR_INSUFFICIENT_VOTING_RIGHTS: &str = "Not enough available voting rights";
pub const ERR_WITHDRAW_EXCEEDS_DEPOSIT: &str = "Withdrawal exceeds unstaked deposit";
pub const ERR_WITHDRAW_BELOW_MINIMUM: &str = "Withdrawal would leave deposit below minDeposit";

// ── AlreadyExists ──

pub const ERR_LISTING_EXISTS: &str = "Listing already applied or whitelisted";
pub const ERR_PROPOSAL_EXISTS: &str = "Proposal already exists";

// ── NotFound ──

pub const ERR_POLL_NOT_FOUND: &str = "Poll does not exist";
pub const ERR_LISTING_NOT_FOUND: &str = "Listing does not exist";
pub const ERR_CHALLENGE_NOT_FOUND: &str = "Challenge does not exist";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";

// ── VerificationFailed ──

pub const ERR_HASH_MISMATCH: &str = "Vote option and salt do not match the commit hash";

// ── AlreadyClaimed ──

pub const ERR_REWARD_ALREADY_CLAIMED: &str = "Reward already claimed";
