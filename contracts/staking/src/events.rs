use soroban_sdk::{Address, Env, Symbol};

pub struct StakingEvents {}

impl StakingEvents {
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[ts: u64, stake_token: Address, reward_token: Address]`
    pub fn initialize(
        env: &Env,
        ts: u64,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
    ) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (ts, stake_token, reward_token));
    }

    /// Emitted once per successful deposit, after the position is recorded.
    ///
    /// - topics - `["staked", user: Address]`
    /// - data - `[ts: u64, position_id: u32, amount: i128]`
    pub fn staked(env: &Env, ts: u64, user: Address, position_id: u32, amount: i128) {
        let topics = (Symbol::new(env, "staked"), user);
        env.events().publish(topics, (ts, position_id, amount));
    }

    /// Emitted once per successful claim, after the reward is credited.
    ///
    /// - topics - `["claimed", user: Address]`
    /// - data - `[ts: u64, position_id: u32, reward: i128]`
    pub fn claimed(env: &Env, ts: u64, user: Address, position_id: u32, reward: i128) {
        let topics = (Symbol::new(env, "claimed"), user);
        env.events().publish(topics, (ts, position_id, reward));
    }

    /// Emitted once per successful close. Carries the principal amount only,
    /// even when the payout included a final reward.
    ///
    /// - topics - `["unstaked", user: Address]`
    /// - data - `[ts: u64, position_id: u32, principal: i128]`
    pub fn unstaked(env: &Env, ts: u64, user: Address, position_id: u32, principal: i128) {
        let topics = (Symbol::new(env, "unstaked"), user);
        env.events().publish(topics, (ts, position_id, principal));
    }

    /// - topics - `["paused", admin: Address]`
    /// - data - `[ts: u64]`
    pub fn paused(env: &Env, ts: u64, admin: Address) {
        let topics = (Symbol::new(env, "paused"), admin);
        env.events().publish(topics, ts);
    }

    /// - topics - `["unpaused", admin: Address]`
    /// - data - `[ts: u64]`
    pub fn unpaused(env: &Env, ts: u64, admin: Address) {
        let topics = (Symbol::new(env, "unpaused"), admin);
        env.events().publish(topics, ts);
    }

    /// - topics - `["config_updated", admin: Address]`
    /// - data - `[ts: u64, field: Symbol]`
    pub fn config_updated(env: &Env, ts: u64, admin: Address, field: Symbol) {
        let topics = (Symbol::new(env, "config_updated"), admin);
        env.events().publish(topics, (ts, field));
    }

    /// - topics - `["admin_withdrawal", admin: Address]`
    /// - data - `[ts: u64, amount: i128]`
    pub fn admin_withdrawal(env: &Env, ts: u64, admin: Address, amount: i128) {
        let topics = (Symbol::new(env, "admin_withdrawal"), admin);
        env.events().publish(topics, (ts, amount));
    }
}
