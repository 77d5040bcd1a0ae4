use soroban_sdk::{Address, Env};

use crate::msg::{ConfigResponse, PositionsResponse};
use crate::storage::StakePosition;

pub trait StakingTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        reward_ratio_numerator: u64,
        reward_ratio_denominator: u64,
        reward_interval: u64,
        min_staking_period: u64,
        max_staking_period: u64,
    );

    /// Emergency circuit breaker: blocks stake, claim and unstake until
    /// `unpause` is called. Queries and `admin_withdraw` stay available.
    fn pause(env: Env, sender: Address);

    fn unpause(env: Env, sender: Address);

    fn set_reward_interval(env: Env, sender: Address, reward_interval: u64);

    fn set_reward_ratio_numerator(env: Env, sender: Address, reward_ratio_numerator: u64);

    fn set_reward_ratio_denominator(env: Env, sender: Address, reward_ratio_denominator: u64);

    fn set_min_staking_period(env: Env, sender: Address, min_staking_period: u64);

    fn set_max_staking_period(env: Env, sender: Address, max_staking_period: u64);

    fn set_stake_token(env: Env, sender: Address, stake_token: Address);

    fn set_reward_token(env: Env, sender: Address, reward_token: Address);

    /// Move `amount` of the stake token out of the pool to the admin.
    /// Performs no solvency check against open positions.
    fn admin_withdraw(env: Env, sender: Address, amount: i128);

    // ################################################################
    //                             USER
    // ################################################################

    /// Deposit `amount` stake tokens into a new position. Returns the id
    /// assigned to the position within the sender's ledger.
    fn stake(env: Env, sender: Address, amount: i128) -> u32;

    /// Withdraw the reward accrued by one position since its last claim,
    /// keeping the position open. Returns the reward paid out.
    fn claim_rewards(env: Env, sender: Address, position_id: u32) -> i128;

    /// Close a position permanently, returning the principal plus any final
    /// reward. Closing before the minimum staking period forfeits the reward.
    fn unstake(env: Env, sender: Address, position_id: u32);

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_is_paused(env: Env) -> bool;

    fn query_position(env: Env, user: Address, position_id: u32) -> StakePosition;

    fn query_positions(env: Env, user: Address) -> PositionsResponse;

    fn query_accrued_reward(env: Env, user: Address, position_id: u32) -> i128;

    fn query_participant_reward(env: Env, user: Address) -> i128;

    /// Sum of principal across every open position of every participant.
    /// Walks the whole roster, so cost grows with the number of positions
    /// ever opened. Reporting use only.
    fn query_total_staked(env: Env) -> i128;

    /// Unclaimed reward across every open position of every participant.
    /// Same cost caveat as `query_total_staked`.
    fn query_total_accrued_reward(env: Env) -> i128;
}
