use harbor::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Initialized,
    Paused,
    Stakers,
    Positions(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_ratio_numerator: u64,
    pub reward_ratio_denominator: u64,
    /// Time slice, in seconds, over which the ratio pays out once.
    pub reward_interval: u64,
    pub min_staking_period: u64,
    pub max_staking_period: u64,
}

/// One stake deposit and its claim history. Never deleted; closing only
/// flips `is_active`, so closed positions stay queryable forever.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub amount: i128,
    pub start_time: u64,
    /// Timestamp of the most recent claim, or `start_time` before any claim.
    pub last_claimed_time: u64,
    pub total_rewards: i128,
    pub is_active: bool,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Staking: Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Every address that has ever opened a position, in first-stake order.
/// Only system-wide aggregation walks this list.
pub fn get_stakers(env: &Env) -> Vec<Address> {
    let stakers = env
        .storage()
        .persistent()
        .get(&DataKey::Stakers)
        .unwrap_or_else(|| Vec::new(env));

    if env.storage().persistent().has(&DataKey::Stakers) {
        env.storage().persistent().extend_ttl(
            &DataKey::Stakers,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    stakers
}

pub fn save_stakers(env: &Env, stakers: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Stakers, stakers);
    env.storage().persistent().extend_ttl(
        &DataKey::Stakers,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Position ids are indexes into this vector, allocated in creation order
/// and never reused or removed.
pub fn get_positions(env: &Env, key: &Address) -> Vec<StakePosition> {
    let positions = env
        .storage()
        .persistent()
        .get(&DataKey::Positions(key.clone()))
        .unwrap_or_else(|| Vec::new(env));

    if env
        .storage()
        .persistent()
        .has(&DataKey::Positions(key.clone()))
    {
        env.storage().persistent().extend_ttl(
            &DataKey::Positions(key.clone()),
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    positions
}

pub fn save_positions(env: &Env, key: &Address, positions: &Vec<StakePosition>) {
    env.storage()
        .persistent()
        .set(&DataKey::Positions(key.clone()), positions);
    env.storage().persistent().extend_ttl(
        &DataKey::Positions(key.clone()),
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub mod utils {
    use soroban_sdk::{token, Address, Env};

    pub fn transfer_token(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
        let token_client = token::Client::new(env, token);
        token_client.transfer(from, to, &amount);
    }

    pub fn token_balance(env: &Env, token: &Address, account: &Address) -> i128 {
        token::Client::new(env, token).balance(account)
    }

    pub fn check_nonnegative_amount(amount: i128) {
        if amount < 0 {
            panic!("negative amount is not allowed: {}", amount)
        }
    }
}
