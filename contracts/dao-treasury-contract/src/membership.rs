use crate::access::AccessController;
use crate::admin::AdminModule;
use crate::distribution;
use crate::events;
use crate::types::{DataKey, Error, Role};
use soroban_sdk::{log, Address, Env};

/// MembershipRegistry keeps two contribution ledgers per identity.
///
/// The member ledger absorbs every contribution. The stakeholder ledger is
/// opened with the cumulative total on the contribution that reaches the
/// stakeholder threshold, and from then on is incremented alongside the
/// member ledger. The two totals are never unified.
pub struct MembershipRegistry;

impl MembershipRegistry {
    /// Credit `amount` to `contributor`, moving the same amount into the treasury.
    ///
    /// # Returns
    /// * `Result<bool, Error>` - whether the contributor is a stakeholder afterwards
    pub fn contribute(env: &Env, contributor: &Address, amount: i128) -> Result<bool, Error> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = AdminModule::get_config(env)?;
        distribution::collect(env, contributor, amount)?;

        let member_balance = Self::member_balance(env, contributor)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        if Self::is_stakeholder(env, contributor) {
            let stakeholder_balance = Self::stakeholder_balance(env, contributor)
                .checked_add(amount)
                .ok_or(Error::InvalidAmount)?;
            Self::set_stakeholder_balance(env, contributor, stakeholder_balance);
        } else if member_balance >= config.stakeholder_threshold {
            // Promotion: stakeholder ledger opens at the cumulative total
            Self::set_stakeholder_balance(env, contributor, member_balance);
            log!(env, "promoted {} to stakeholder at {}", contributor, member_balance);
        }

        Self::set_member_balance(env, contributor, member_balance);

        events::new_member(env, contributor, amount);

        Ok(Self::is_stakeholder(env, contributor))
    }

    /// Balance on the ledger of `role`; the caller must hold that role.
    pub fn balance_of(env: &Env, who: &Address, role: Role) -> Result<i128, Error> {
        match role {
            Role::Member => {
                AccessController::authorize(env, who, Role::Member, "Only members can view")?;
                Ok(Self::member_balance(env, who))
            }
            Role::Stakeholder => {
                AccessController::authorize(
                    env,
                    who,
                    Role::Stakeholder,
                    "Only stakeholders can view",
                )?;
                Ok(Self::stakeholder_balance(env, who))
            }
        }
    }

    pub fn is_member(env: &Env, who: &Address) -> bool {
        Self::member_balance(env, who) > 0
    }

    pub fn is_stakeholder(env: &Env, who: &Address) -> bool {
        Self::stakeholder_balance(env, who) > 0
    }

    fn member_balance(env: &Env, who: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::MemberBalance(who.clone()))
            .unwrap_or(0)
    }

    fn stakeholder_balance(env: &Env, who: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::StakeholderBalance(who.clone()))
            .unwrap_or(0)
    }

    fn set_member_balance(env: &Env, who: &Address, balance: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::MemberBalance(who.clone()), &balance);
    }

    fn set_stakeholder_balance(env: &Env, who: &Address, balance: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::StakeholderBalance(who.clone()), &balance);
    }
}
