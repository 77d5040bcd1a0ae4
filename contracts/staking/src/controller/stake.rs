use harbor::error::{ErrorCode, HarborResult};
use harbor::math::safe_math::SafeMath;
use harbor::validate;
use soroban_sdk::{log, Address, Env, Vec};

use crate::events::StakingEvents;
use crate::reward;
use crate::storage::{
    get_config, get_positions, get_stakers, save_positions, save_stakers, utils, StakePosition,
};

/// Open a new position for `sender`, pulling `amount` stake tokens into the
/// pool. Returns the id assigned to the position.
pub fn open_position(env: &Env, sender: &Address, amount: i128, now: u64) -> HarborResult<u32> {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidAmount,
        "Staking: Stake: amount must be positive"
    )?;

    let config = get_config(env);

    let balance = utils::token_balance(env, &config.stake_token, sender);
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "Staking: Stake: sender stake token balance is too low"
    )?;

    utils::transfer_token(
        env,
        &config.stake_token,
        sender,
        &env.current_contract_address(),
        amount,
    );

    let mut positions = get_positions(env, sender);

    // Positions are never removed, so an empty ledger means this is the
    // sender's first ever stake and they are not yet on the roster.
    if positions.is_empty() {
        let mut stakers = get_stakers(env);
        stakers.push_back(sender.clone());
        save_stakers(env, &stakers);
    }

    positions.push_back(StakePosition {
        amount,
        start_time: now,
        last_claimed_time: now,
        total_rewards: 0,
        is_active: true,
    });
    save_positions(env, sender, &positions);

    let position_id = positions.len() - 1;

    StakingEvents::staked(env, now, sender.clone(), position_id, amount);

    Ok(position_id)
}

/// Pay out the reward accrued by `position_id` since its last claim and
/// restart accrual from `now`. The position stays open.
pub fn claim_rewards(
    env: &Env,
    sender: &Address,
    position_id: u32,
    now: u64,
) -> HarborResult<i128> {
    let config = get_config(env);

    let mut positions = get_positions(env, sender);
    let mut position = lookup_position(env, &positions, position_id)?;

    validate!(
        env,
        position.is_active,
        ErrorCode::InactivePosition,
        "Staking: Claim rewards: position is closed"
    )?;

    // Claims are gated on the time since the previous claim. Unstaking is
    // gated on the time since the position opened instead.
    let claimable_from = position
        .last_claimed_time
        .safe_add(config.min_staking_period, env)?;
    validate!(
        env,
        now >= claimable_from,
        ErrorCode::ClaimTooSoon,
        "Staking: Claim rewards: minimum period since last claim has not elapsed"
    )?;

    let reward = reward::accrued_reward(env, &position, &config, now)?;

    let reserve = utils::token_balance(env, &config.reward_token, &env.current_contract_address());
    validate!(
        env,
        reserve >= reward,
        ErrorCode::InsufficientPoolReserve,
        "Staking: Claim rewards: pool reward reserve is too low"
    )?;

    position.total_rewards = position.total_rewards.safe_add(reward, env)?;
    position.last_claimed_time = now;
    positions.set(position_id, position);
    save_positions(env, sender, &positions);

    utils::transfer_token(
        env,
        &config.reward_token,
        &env.current_contract_address(),
        sender,
        reward,
    );

    StakingEvents::claimed(env, now, sender.clone(), position_id, reward);

    Ok(reward)
}

/// Close `position_id` permanently and pay out the principal, plus the final
/// reward when the position was held for at least the minimum period.
/// Returns `(principal, final_reward)`.
pub fn close_position(
    env: &Env,
    sender: &Address,
    position_id: u32,
    now: u64,
) -> HarborResult<(i128, i128)> {
    let config = get_config(env);

    let mut positions = get_positions(env, sender);
    let mut position = lookup_position(env, &positions, position_id)?;

    validate!(
        env,
        position.is_active,
        ErrorCode::InactivePosition,
        "Staking: Unstake: position is closed"
    )?;

    let held_long_enough =
        now >= position.start_time.safe_add(config.min_staking_period, env)?;

    // Closing early forfeits whatever accrued.
    let final_reward = if held_long_enough {
        reward::accrued_reward(env, &position, &config, now)?
    } else {
        0
    };

    let payout = position.amount.safe_add(final_reward, env)?;

    let reserve = utils::token_balance(env, &config.stake_token, &env.current_contract_address());
    validate!(
        env,
        reserve >= payout,
        ErrorCode::InsufficientPoolReserve,
        "Staking: Unstake: pool stake reserve is too low"
    )?;

    let principal = position.amount;

    position.total_rewards = position.total_rewards.safe_add(final_reward, env)?;
    position.last_claimed_time = now;
    position.is_active = false;
    positions.set(position_id, position);
    save_positions(env, sender, &positions);

    utils::transfer_token(
        env,
        &config.stake_token,
        &env.current_contract_address(),
        sender,
        payout,
    );

    StakingEvents::unstaked(env, now, sender.clone(), position_id, principal);

    Ok((principal, final_reward))
}

/// Move `amount` of the stake token from the pool to the admin. No check
/// against outstanding positions: the pool trusts its administrator.
pub fn admin_withdraw(env: &Env, admin: &Address, amount: i128, now: u64) {
    utils::check_nonnegative_amount(amount);

    let config = get_config(env);

    utils::transfer_token(
        env,
        &config.stake_token,
        &env.current_contract_address(),
        admin,
        amount,
    );

    StakingEvents::admin_withdrawal(env, now, admin.clone(), amount);
}

pub fn lookup_position(
    env: &Env,
    positions: &Vec<StakePosition>,
    position_id: u32,
) -> HarborResult<StakePosition> {
    validate!(
        env,
        !positions.is_empty(),
        ErrorCode::NotStaked,
        "Staking: sender has no positions"
    )?;

    let position = match positions.get(position_id) {
        Some(position) => position,
        None => {
            log!(env, "Staking: position {} does not exist", position_id);
            return Err(ErrorCode::InvalidPositionId);
        }
    };

    // A zeroed record never represents a real position.
    validate!(
        env,
        position.amount > 0,
        ErrorCode::InvalidPositionId,
        "Staking: position {} does not exist",
        position_id
    )?;

    Ok(position)
}
