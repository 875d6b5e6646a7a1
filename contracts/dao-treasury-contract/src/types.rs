use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

/// One stroop-denominated unit of the treasury token (7 decimals).
pub const UNIT: i128 = 10_000_000;

/// Cumulative contribution at which a member is promoted to stakeholder.
pub const DEFAULT_STAKEHOLDER_THRESHOLD: i128 = 2 * UNIT;

/// Voting window: 3 days in seconds
pub const DEFAULT_VOTING_PERIOD: u64 = 3 * 24 * 60 * 60;

/// Exact fee a member pays to open a proposal
pub const DEFAULT_PROPOSAL_FEE: i128 = UNIT;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,                       // Treasury token (native asset SAC)
    Config,                      // DaoConfig
    ProposalCount,               // Next proposal id
    Proposal(u32),               // Proposal ID -> Proposal
    ReleaseLock(u32),            // Proposal ID -> release in flight
    MemberBalance(Address),      // Identity -> member-tracked contributions
    StakeholderBalance(Address), // Identity -> stakeholder-tracked contributions
    Votes(Address),              // Identity -> proposal ids voted on
}

/// Governance parameters, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    pub stakeholder_threshold: i128,
    pub voting_period: u64,
    pub proposal_fee: i128,
}

impl DaoConfig {
    pub fn standard() -> Self {
        DaoConfig {
            stakeholder_threshold: DEFAULT_STAKEHOLDER_THRESHOLD,
            voting_period: DEFAULT_VOTING_PERIOD,
            proposal_fee: DEFAULT_PROPOSAL_FEE,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.stakeholder_threshold <= 0 || self.voting_period == 0 || self.proposal_fee < 0 {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Member,
    Stakeholder,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funding {
    pub funder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub amount: i128, // Requested amount
    pub receiver: Address,
    pub proposer: Address,
    pub voting_deadline: u64,
    pub votes_in_favor: u32,
    pub votes_against: u32,
    pub funders: Vec<Funding>,
    pub total_funds_raised: i128,
    pub is_completed: bool,
    pub is_released: bool,
}

impl Proposal {
    /// Favor must strictly beat against; a tie is not an approval.
    pub fn is_approved(&self) -> bool {
        self.votes_in_favor > self.votes_against
    }

    pub fn voting_expired(&self, now: u64) -> bool {
        now > self.voting_deadline
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidFee = 4,
    ProposalNotFound = 5,
    VotingClosed = 6,
    DuplicateVote = 7,
    NotApproved = 8,
    AlreadyFunded = 9,
    InsufficientFunds = 10,
    Reentrancy = 11,
    InvalidAmount = 12,
    InvalidConfig = 13,
}
