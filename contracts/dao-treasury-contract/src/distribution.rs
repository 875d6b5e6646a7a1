use crate::admin::AdminModule;
use crate::types::Error;
use soroban_sdk::{token, Address, Env};

// Move tokens out of the treasury
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let token = AdminModule::get_token(env)?;
    token::Client::new(env, &token).transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

// Pull tokens into the treasury; zero amounts move nothing
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token = AdminModule::get_token(env)?;
    token::Client::new(env, &token).transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

pub fn treasury_balance(env: &Env) -> Result<i128, Error> {
    let token = AdminModule::get_token(env)?;
    Ok(token::Client::new(env, &token).balance(&env.current_contract_address()))
}
