use crate::access::AccessController;
use crate::distribution;
use crate::events;
use crate::proposals::ProposalStore;
use crate::types::{DataKey, Error, Funding, Proposal, Role};
use soroban_sdk::{log, Address, Env, Vec};

/// FundingLedger accumulates per-proposal funding and performs the one-time release.
pub struct FundingLedger;

impl FundingLedger {
    /// Add `amount` from `funder` to an approved proposal.
    /// The proposal completes once the raised total meets the requested amount.
    pub fn fund(env: &Env, funder: &Address, proposal_id: u32, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        Self::ensure_unlocked(env, proposal_id)?;
        AccessController::authorize(
            env,
            funder,
            Role::Stakeholder,
            "Only stakeholders can fund",
        )?;

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut proposal = ProposalStore::get(env, proposal_id)?;

        if proposal.is_released || proposal.total_funds_raised > proposal.amount {
            return Err(Error::AlreadyFunded);
        }
        if !proposal.is_approved() {
            return Err(Error::NotApproved);
        }

        let new_total = proposal
            .total_funds_raised
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        distribution::collect(env, funder, amount)?;

        proposal.funders.push_back(Funding {
            funder: funder.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
        });
        proposal.total_funds_raised = new_total;
        if proposal.total_funds_raised >= proposal.amount {
            proposal.is_completed = true;
        }

        ProposalStore::save(env, &proposal);

        log!(
            env,
            "proposal {} raised {} of {}",
            proposal_id,
            proposal.total_funds_raised,
            proposal.amount
        );

        Ok(())
    }

    /// Transfer everything raised for a proposal to its receiver.
    ///
    /// All guards run before the transfer. While the transfer is in flight the
    /// proposal's release lock is held and nothing else is written; the
    /// released state is committed only after the transfer has returned.
    pub fn release(env: &Env, releaser: &Address, proposal_id: u32) -> Result<(), Error> {
        releaser.require_auth();

        Self::ensure_unlocked(env, proposal_id)?;
        AccessController::authorize(
            env,
            releaser,
            Role::Stakeholder,
            "Only stakeholders can release",
        )?;

        let mut proposal = ProposalStore::get(env, proposal_id)?;
        Self::check_releasable(&proposal)?;

        let amount = proposal.total_funds_raised;

        Self::lock(env, proposal_id);
        distribution::pay_out(env, &proposal.receiver, amount)?;

        proposal.is_released = true;
        proposal.is_completed = true;
        ProposalStore::save(env, &proposal);
        Self::unlock(env, proposal_id);

        events::payment(env, proposal_id, releaser, &proposal.receiver, amount);
        log!(env, "released {} to {}", amount, proposal.receiver);

        Ok(())
    }

    pub fn get_funders(env: &Env, proposal_id: u32) -> Result<Vec<Funding>, Error> {
        Ok(ProposalStore::get(env, proposal_id)?.funders)
    }

    /// Fails with `Reentrancy` while a release on `proposal_id` is in flight
    pub fn ensure_unlocked(env: &Env, proposal_id: u32) -> Result<(), Error> {
        if env
            .storage()
            .instance()
            .has(&DataKey::ReleaseLock(proposal_id))
        {
            return Err(Error::Reentrancy);
        }
        Ok(())
    }

    // Strict: a total equal to the requested amount is not releasable
    fn check_releasable(proposal: &Proposal) -> Result<(), Error> {
        if proposal.is_released {
            return Err(Error::AlreadyFunded);
        }
        if proposal.total_funds_raised <= proposal.amount {
            return Err(Error::InsufficientFunds);
        }
        Ok(())
    }

    fn lock(env: &Env, proposal_id: u32) {
        env.storage()
            .instance()
            .set(&DataKey::ReleaseLock(proposal_id), &true);
    }

    fn unlock(env: &Env, proposal_id: u32) {
        env.storage()
            .instance()
            .remove(&DataKey::ReleaseLock(proposal_id));
    }
}
