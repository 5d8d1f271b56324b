use soroban_sdk::{token, Address, Env};

use crate::storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT, TTL_THRESHOLD};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

/// Current ledger close time in seconds.
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn token_client(env: &Env) -> token::TokenClient<'_> {
    let token_address: Address = env.storage().instance().get(&DataKey::Token).unwrap();
    token::TokenClient::new(env, &token_address)
}

/// Pull `amount` from `from` into the contract. Traps the whole invocation if
/// the token contract rejects the transfer.
pub fn transfer_in(env: &Env, from: &Address, amount: i128) {
    token_client(env).transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` out of the contract to `to`. Traps the whole invocation if
/// the token contract rejects the transfer.
pub fn transfer_out(env: &Env, to: &Address, amount: i128) {
    token_client(env).transfer(&env.current_contract_address(), to, &amount);
}
