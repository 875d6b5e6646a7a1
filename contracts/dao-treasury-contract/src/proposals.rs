use crate::access::AccessController;
use crate::admin::AdminModule;
use crate::distribution;
use crate::events;
use crate::types::{DataKey, Error, Proposal, Role};
use soroban_sdk::{Address, Env, String, Vec};

/// ProposalStore owns the id-indexed proposal table.
/// Ids are dense and sequential starting from 0.
pub struct ProposalStore;

impl ProposalStore {
    /// Open a new proposal
    ///
    /// # Arguments
    /// * `proposer` - must be a member
    /// * `amount` - amount requested for `receiver`
    /// * `fee` - must equal the configured proposal fee exactly
    ///
    /// # Returns
    /// * `Result<u32, Error>` - the new proposal id
    pub fn create(
        env: &Env,
        proposer: &Address,
        title: String,
        description: String,
        receiver: &Address,
        amount: i128,
        image_url: String,
        fee: i128,
    ) -> Result<u32, Error> {
        proposer.require_auth();

        let config = AdminModule::get_config(env)?;

        AccessController::authorize(env, proposer, Role::Member, "Only members can propose")?;

        if fee != config.proposal_fee {
            return Err(Error::InvalidFee);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let voting_deadline = env
            .ledger()
            .timestamp()
            .checked_add(config.voting_period)
            .ok_or(Error::InvalidConfig)?;

        distribution::collect(env, proposer, fee)?;

        let proposal_id = Self::next_id(env)?;
        let proposal = Proposal {
            id: proposal_id,
            title,
            description,
            image_url,
            amount,
            receiver: receiver.clone(),
            proposer: proposer.clone(),
            voting_deadline,
            votes_in_favor: 0,
            votes_against: 0,
            funders: Vec::new(env),
            total_funds_raised: 0,
            is_completed: false,
            is_released: false,
        };

        Self::save(env, &proposal);

        events::new_proposal(env, proposal_id, proposer, amount);

        Ok(proposal_id)
    }

    /// Load a proposal. A proposal past its voting deadline always comes back
    /// completed, so the closing transition is observed by every reader and
    /// persisted by the next write.
    pub fn get(env: &Env, proposal_id: u32) -> Result<Proposal, Error> {
        let mut proposal: Proposal = env
            .storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(Error::ProposalNotFound)?;

        if proposal.voting_expired(env.ledger().timestamp()) {
            proposal.is_completed = true;
        }

        Ok(proposal)
    }

    pub fn get_all(env: &Env) -> Vec<Proposal> {
        let mut proposals = Vec::new(env);
        for proposal_id in 0..Self::count(env) {
            if let Ok(proposal) = Self::get(env, proposal_id) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }

    pub fn count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0)
    }

    pub fn save(env: &Env, proposal: &Proposal) {
        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal.id), proposal);
    }

    fn next_id(env: &Env) -> Result<u32, Error> {
        let proposal_id = Self::count(env);
        let next = proposal_id.checked_add(1).ok_or(Error::InvalidAmount)?;
        env.storage().instance().set(&DataKey::ProposalCount, &next);
        Ok(proposal_id)
    }
}
