#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod access;
pub mod admin;
pub mod distribution;
pub mod events;
pub mod funding;
pub mod membership;
pub mod proposals;
pub mod types;
pub mod voting;


use access::AccessController;
use admin::AdminModule;
use funding::FundingLedger;
use membership::MembershipRegistry;
use proposals::ProposalStore;
use voting::VotingEngine;

pub use types::{DaoConfig, Error, Funding, Proposal, Role};

/// Main contract trait defining all available functions
pub trait DaoTreasuryTrait {
    // Setup
    fn init(env: Env, token: Address, config: DaoConfig) -> Result<(), Error>;
    fn get_config(env: Env) -> Result<DaoConfig, Error>;
    fn get_token(env: Env) -> Result<Address, Error>;

    // Membership
    fn create_stakeholder(env: Env, contributor: Address, amount: i128) -> Result<bool, Error>;
    fn get_member_balance(env: Env, caller: Address) -> Result<i128, Error>;
    fn get_stakeholder_balance(env: Env, caller: Address) -> Result<i128, Error>;
    fn is_member(env: Env, caller: Address) -> bool;
    fn is_stakeholder(env: Env, caller: Address) -> bool;

    // Proposal lifecycle
    fn create_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        receiver: Address,
        amount: i128,
        image_url: String,
        fee: i128,
    ) -> Result<u32, Error>;
    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error>;
    fn get_all_proposals(env: Env) -> Vec<Proposal>;
    fn get_proposal_count(env: Env) -> u32;

    // Voting
    fn vote(env: Env, voter: Address, proposal_id: u32, in_favor: bool) -> Result<(), Error>;
    fn get_votes(env: Env, caller: Address) -> Result<Vec<u32>, Error>;

    // Funding
    fn provide_funds(env: Env, funder: Address, proposal_id: u32, amount: i128)
        -> Result<(), Error>;
    fn release_funding(env: Env, releaser: Address, proposal_id: u32) -> Result<(), Error>;
    fn get_funders(env: Env, proposal_id: u32) -> Result<Vec<Funding>, Error>;
    fn get_treasury_balance(env: Env) -> Result<i128, Error>;
}

#[contract]
pub struct DaoTreasury;

#[contractimpl]
impl DaoTreasuryTrait for DaoTreasury {
    fn init(env: Env, token: Address, config: DaoConfig) -> Result<(), Error> {
        AdminModule::init(&env, &token, &config)
    }

    fn get_config(env: Env) -> Result<DaoConfig, Error> {
        AdminModule::get_config(&env)
    }

    fn get_token(env: Env) -> Result<Address, Error> {
        AdminModule::get_token(&env)
    }

    fn create_stakeholder(env: Env, contributor: Address, amount: i128) -> Result<bool, Error> {
        MembershipRegistry::contribute(&env, &contributor, amount)
    }

    fn get_member_balance(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        MembershipRegistry::balance_of(&env, &caller, Role::Member)
    }

    fn get_stakeholder_balance(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        MembershipRegistry::balance_of(&env, &caller, Role::Stakeholder)
    }

    fn is_member(env: Env, caller: Address) -> bool {
        AccessController::has_role(&env, &caller, Role::Member)
    }

    fn is_stakeholder(env: Env, caller: Address) -> bool {
        AccessController::has_role(&env, &caller, Role::Stakeholder)
    }

    fn create_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        receiver: Address,
        amount: i128,
        image_url: String,
        fee: i128,
    ) -> Result<u32, Error> {
        ProposalStore::create(
            &env,
            &proposer,
            title,
            description,
            &receiver,
            amount,
            image_url,
            fee,
        )
    }

    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error> {
        ProposalStore::get(&env, proposal_id)
    }

    fn get_all_proposals(env: Env) -> Vec<Proposal> {
        ProposalStore::get_all(&env)
    }

    fn get_proposal_count(env: Env) -> u32 {
        ProposalStore::count(&env)
    }

    fn vote(env: Env, voter: Address, proposal_id: u32, in_favor: bool) -> Result<(), Error> {
        VotingEngine::cast_vote(&env, &voter, proposal_id, in_favor)
    }

    fn get_votes(env: Env, caller: Address) -> Result<Vec<u32>, Error> {
        caller.require_auth();
        VotingEngine::get_votes(&env, &caller)
    }

    fn provide_funds(
        env: Env,
        funder: Address,
        proposal_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        FundingLedger::fund(&env, &funder, proposal_id, amount)
    }

    fn release_funding(env: Env, releaser: Address, proposal_id: u32) -> Result<(), Error> {
        FundingLedger::release(&env, &releaser, proposal_id)
    }

    fn get_funders(env: Env, proposal_id: u32) -> Result<Vec<Funding>, Error> {
        FundingLedger::get_funders(&env, proposal_id)
    }

    fn get_treasury_balance(env: Env) -> Result<i128, Error> {
        distribution::treasury_balance(&env)
    }
}
