use crate::membership::MembershipRegistry;
use crate::types::{Error, Role};
use soroban_sdk::{log, Address, Env, String};

/// Role checks. Roles are never stored: they are read off the membership
/// balances every time, so role state cannot drift from balance state.
pub struct AccessController;

impl AccessController {
    pub fn has_role(env: &Env, who: &Address, role: Role) -> bool {
        match role {
            Role::Member => MembershipRegistry::is_member(env, who),
            Role::Stakeholder => MembershipRegistry::is_stakeholder(env, who),
        }
    }

    /// Fails with `Unauthorized` when `who` lacks `role`. `reason` is logged verbatim.
    pub fn authorize(env: &Env, who: &Address, role: Role, reason: &str) -> Result<(), Error> {
        if Self::has_role(env, who, role) {
            return Ok(());
        }
        log!(env, "unauthorized {}: {}", who, String::from_str(env, reason));
        Err(Error::Unauthorized)
    }
}
