use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewMember {
    pub member: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewProposal {
    pub proposal_id: u32,
    pub proposer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub proposal_id: u32,
    pub releaser: Address,
    pub receiver: Address,
    pub amount: i128,
}

pub fn new_member(env: &Env, member: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "new_member"), member.clone()),
        NewMember {
            member: member.clone(),
            amount,
        },
    );
}

pub fn new_proposal(env: &Env, proposal_id: u32, proposer: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "new_proposal"), proposer.clone()),
        NewProposal {
            proposal_id,
            proposer: proposer.clone(),
            amount,
        },
    );
}

pub fn payment(env: &Env, proposal_id: u32, releaser: &Address, receiver: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "payment"), receiver.clone()),
        Payment {
            proposal_id,
            releaser: releaser.clone(),
            receiver: receiver.clone(),
            amount,
        },
    );
}
