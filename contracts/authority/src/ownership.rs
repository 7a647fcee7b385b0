//! Single-owner admin gate.
//!
//! The admin cell has three states: uninitialized (no `Initialized` flag),
//! set (`Admin` entry present), and renounced (`Initialized` set but `Admin`
//! absent). Renounced is absorbing: the `Admin` entry is removed and nothing
//! ever writes it again, so every admin-gated call fails from then on.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events;
use crate::state::DataKey;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Stored admin address. Fails `NotInitialized` before setup and after
/// renouncement.
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    match env.storage().instance().get::<DataKey, Address>(&DataKey::Admin) {
        Some(admin) => admin == *address,
        None => false,
    }
}

/// Authorize `caller` and require it to be the stored admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn transfer(env: &Env, current_owner: &Address, new_owner: &Address) -> Result<(), Error> {
    require_admin(env, current_owner)?;
    set_admin(env, new_owner);
    events::emit_ownership_transferred(env, current_owner, new_owner);
    Ok(())
}

pub fn renounce(env: &Env, current_owner: &Address) -> Result<(), Error> {
    require_admin(env, current_owner)?;
    env.storage().instance().remove(&DataKey::Admin);
    events::emit_ownership_renounced(env, current_owner);
    Ok(())
}
