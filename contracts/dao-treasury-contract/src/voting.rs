use crate::access::AccessController;
use crate::funding::FundingLedger;
use crate::proposals::ProposalStore;
use crate::types::{DataKey, Error, Role};
use soroban_sdk::{log, Address, Env, Vec};

/// VotingEngine records one vote per identity per proposal and keeps the tallies
pub struct VotingEngine;

impl VotingEngine {
    /// Cast a vote for a proposal
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `voter` - The address of the voter, must be a stakeholder
    /// * `proposal_id` - The ID of the proposal being voted on
    /// * `in_favor` - Whether the vote is in favor (true) or against (false)
    ///
    /// # Returns
    /// * `Result<(), Error>` - Success or an error
    pub fn cast_vote(
        env: &Env,
        voter: &Address,
        proposal_id: u32,
        in_favor: bool,
    ) -> Result<(), Error> {
        voter.require_auth();

        FundingLedger::ensure_unlocked(env, proposal_id)?;
        AccessController::authorize(env, voter, Role::Stakeholder, "Only stakeholders can vote")?;

        let mut proposal = ProposalStore::get(env, proposal_id)?;

        if proposal.is_completed || proposal.voting_expired(env.ledger().timestamp()) {
            // Nothing to write: a failed call is rolled back, and
            // ProposalStore::get reports expired proposals as completed.
            log!(env, "voting closed on proposal {}", proposal_id);
            return Err(Error::VotingClosed);
        }

        let mut votes = Self::votes_of(env, voter);
        if votes.contains(proposal_id) {
            return Err(Error::DuplicateVote);
        }

        if in_favor {
            proposal.votes_in_favor = proposal
                .votes_in_favor
                .checked_add(1)
                .ok_or(Error::InvalidAmount)?;
        } else {
            proposal.votes_against = proposal
                .votes_against
                .checked_add(1)
                .ok_or(Error::InvalidAmount)?;
        }
        votes.push_back(proposal_id);

        ProposalStore::save(env, &proposal);
        env.storage()
            .persistent()
            .set(&DataKey::Votes(voter.clone()), &votes);

        log!(
            env,
            "vote in_favor: {}, against: {}",
            proposal.votes_in_favor,
            proposal.votes_against
        );

        Ok(())
    }

    /// Proposal ids `voter` has voted on; the caller must be a stakeholder
    pub fn get_votes(env: &Env, voter: &Address) -> Result<Vec<u32>, Error> {
        AccessController::authorize(env, voter, Role::Stakeholder, "Only stakeholders can view")?;
        Ok(Self::votes_of(env, voter))
    }

    fn votes_of(env: &Env, voter: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::Votes(voter.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }
}
