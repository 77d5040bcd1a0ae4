use harbor::error::{ErrorCode, HarborResult};
use harbor::math::safe_math::SafeMath;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, Symbol, Vec,
};

use crate::controller;
use crate::events::StakingEvents;
use crate::msg::{ConfigResponse, PositionEntry, PositionsResponse};
use crate::reward;
use crate::staking::StakingTrait;
use crate::storage::{
    get_config, get_positions, get_stakers, is_initialized, is_paused, save_config,
    set_initialized, set_paused, Config, StakePosition,
};

contractmeta!(
    key = "Description",
    val = "Ledger of timed stake positions paying interval rewards"
);

#[contract]
pub struct Staking;

#[contractimpl]
impl StakingTrait for Staking {
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
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        for value in [
            reward_ratio_numerator,
            reward_ratio_denominator,
            reward_interval,
            min_staking_period,
            max_staking_period,
        ] {
            require_nonzero(&env, value);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
                reward_ratio_numerator,
                reward_ratio_denominator,
                reward_interval,
                min_staking_period,
                max_staking_period,
            },
        );

        StakingEvents::initialize(
            &env,
            env.ledger().timestamp(),
            admin,
            stake_token,
            reward_token,
        );
    }

    fn pause(env: Env, sender: Address) {
        require_admin(&env, &sender);
        set_paused(&env, true);
        StakingEvents::paused(&env, env.ledger().timestamp(), sender);
    }

    fn unpause(env: Env, sender: Address) {
        require_admin(&env, &sender);
        set_paused(&env, false);
        StakingEvents::unpaused(&env, env.ledger().timestamp(), sender);
    }

    fn set_reward_interval(env: Env, sender: Address, reward_interval: u64) {
        let mut config = require_admin(&env, &sender);
        require_nonzero(&env, reward_interval);

        config.reward_interval = reward_interval;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "reward_interval"),
        );
    }

    fn set_reward_ratio_numerator(env: Env, sender: Address, reward_ratio_numerator: u64) {
        let mut config = require_admin(&env, &sender);
        require_nonzero(&env, reward_ratio_numerator);

        config.reward_ratio_numerator = reward_ratio_numerator;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "reward_ratio_numerator"),
        );
    }

    fn set_reward_ratio_denominator(env: Env, sender: Address, reward_ratio_denominator: u64) {
        let mut config = require_admin(&env, &sender);
        require_nonzero(&env, reward_ratio_denominator);

        config.reward_ratio_denominator = reward_ratio_denominator;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "reward_ratio_denominator"),
        );
    }

    fn set_min_staking_period(env: Env, sender: Address, min_staking_period: u64) {
        let mut config = require_admin(&env, &sender);
        require_nonzero(&env, min_staking_period);

        // Nothing relates this to max_staking_period on purpose: the admin
        // is trusted to keep the two coherent.
        config.min_staking_period = min_staking_period;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "min_staking_period"),
        );
    }

    fn set_max_staking_period(env: Env, sender: Address, max_staking_period: u64) {
        let mut config = require_admin(&env, &sender);
        require_nonzero(&env, max_staking_period);

        config.max_staking_period = max_staking_period;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "max_staking_period"),
        );
    }

    fn set_stake_token(env: Env, sender: Address, stake_token: Address) {
        let mut config = require_admin(&env, &sender);

        config.stake_token = stake_token;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "stake_token"),
        );
    }

    fn set_reward_token(env: Env, sender: Address, reward_token: Address) {
        let mut config = require_admin(&env, &sender);

        config.reward_token = reward_token;
        save_config(&env, &config);

        StakingEvents::config_updated(
            &env,
            env.ledger().timestamp(),
            sender,
            Symbol::new(&env, "reward_token"),
        );
    }

    fn admin_withdraw(env: Env, sender: Address, amount: i128) {
        require_admin(&env, &sender);

        controller::stake::admin_withdraw(&env, &sender, amount, env.ledger().timestamp());
    }

    fn stake(env: Env, sender: Address, amount: i128) -> u32 {
        sender.require_auth();
        require_not_paused(&env);

        controller::stake::open_position(&env, &sender, amount, env.ledger().timestamp())
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn claim_rewards(env: Env, sender: Address, position_id: u32) -> i128 {
        sender.require_auth();
        require_not_paused(&env);

        controller::stake::claim_rewards(&env, &sender, position_id, env.ledger().timestamp())
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn unstake(env: Env, sender: Address, position_id: u32) {
        sender.require_auth();
        require_not_paused(&env);

        controller::stake::close_position(&env, &sender, position_id, env.ledger().timestamp())
            .unwrap_or_else(|err| panic_with_error!(&env, err));
    }

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Address {
        get_config(&env).admin
    }

    fn query_is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    fn query_position(env: Env, user: Address, position_id: u32) -> StakePosition {
        let positions = get_positions(&env, &user);

        controller::stake::lookup_position(&env, &positions, position_id)
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_positions(env: Env, user: Address) -> PositionsResponse {
        let mut active = Vec::new(&env);
        let mut inactive = Vec::new(&env);

        for (id, position) in get_positions(&env, &user).iter().enumerate() {
            let entry = PositionEntry {
                id: id as u32,
                start_time: position.start_time,
                end_time: if position.is_active {
                    0
                } else {
                    position.last_claimed_time
                },
                total_rewards: position.total_rewards,
            };

            if position.is_active {
                active.push_back(entry);
            } else {
                inactive.push_back(entry);
            }
        }

        PositionsResponse { active, inactive }
    }

    fn query_accrued_reward(env: Env, user: Address, position_id: u32) -> i128 {
        let config = get_config(&env);
        let positions = get_positions(&env, &user);

        controller::stake::lookup_position(&env, &positions, position_id)
            .and_then(|position| {
                reward::accrued_reward(&env, &position, &config, env.ledger().timestamp())
            })
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_participant_reward(env: Env, user: Address) -> i128 {
        let config = get_config(&env);
        let positions = get_positions(&env, &user);

        reward::accrued_reward_for_positions(&env, &positions, &config, env.ledger().timestamp())
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_total_staked(env: Env) -> i128 {
        total_staked(&env).unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_total_accrued_reward(env: Env) -> i128 {
        total_accrued_reward(&env).unwrap_or_else(|err| panic_with_error!(&env, err))
    }
}

fn require_admin(env: &Env, sender: &Address) -> Config {
    sender.require_auth();

    let config = get_config(env);
    if config.admin != *sender {
        log!(env, "Staking: You are not authorized!");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }

    config
}

fn require_not_paused(env: &Env) {
    if is_paused(env) {
        log!(env, "Staking: Contract is paused");
        panic_with_error!(env, ErrorCode::ContractPaused);
    }
}

fn require_nonzero(env: &Env, value: u64) {
    if value == 0 {
        log!(env, "Staking: configuration values must be non-zero");
        panic_with_error!(env, ErrorCode::InvalidConfiguration);
    }
}

// Roster walks for the reporting aggregates. Cost grows with every position
// ever opened, which is why the mutating paths never call these.

fn total_staked(env: &Env) -> HarborResult<i128> {
    let mut total: i128 = 0;
    for staker in get_stakers(env).iter() {
        for position in get_positions(env, &staker).iter() {
            if position.is_active {
                total = total.safe_add(position.amount, env)?;
            }
        }
    }
    Ok(total)
}

fn total_accrued_reward(env: &Env) -> HarborResult<i128> {
    let config = get_config(env);
    let now = env.ledger().timestamp();

    let mut total: i128 = 0;
    for staker in get_stakers(env).iter() {
        let positions = get_positions(env, &staker);
        total = total.safe_add(
            reward::accrued_reward_for_positions(env, &positions, &config, now)?,
            env,
        )?;
    }
    Ok(total)
}
