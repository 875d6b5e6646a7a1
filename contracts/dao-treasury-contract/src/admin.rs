use crate::types::{DaoConfig, DataKey, Error};
use soroban_sdk::{Address, Env, Symbol};

pub struct AdminModule;

impl AdminModule {
    /// Initialize the contract with its treasury token and governance parameters.
    /// Parameters are fixed for the lifetime of the contract.
    pub fn init(env: &Env, token: &Address, config: &DaoConfig) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }

        config.validate()?;

        env.storage().instance().set(&DataKey::Token, token);
        env.storage().instance().set(&DataKey::Config, config);
        env.storage().instance().set(&DataKey::ProposalCount, &0u32);

        env.events().publish(
            (Symbol::new(env, "contract_initialized"),),
            (
                token.clone(),
                config.stakeholder_threshold,
                config.voting_period,
                config.proposal_fee,
            ),
        );

        Ok(())
    }

    pub fn get_config(env: &Env) -> Result<DaoConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    /// Address of the token contract every value movement goes through
    pub fn get_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }
}
