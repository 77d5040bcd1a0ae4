use harbor::error::HarborResult;
use harbor::math::safe_math::SafeMath;
use soroban_sdk::{Env, Vec};

use crate::storage::{Config, StakePosition};

/// Reward accrued by one position since its last claim, as of `now`.
///
/// Accrual runs only inside the window `[start_time, start_time +
/// max_staking_period]`. Time spent past the window still pays out, exactly
/// once, for the unclaimed stretch up to the window end; after a claim or
/// close has consumed that tail the position accrues nothing further.
///
/// Rates are read from the current `Config` on every call. There is no
/// per-position rate snapshot, so a configuration change applies to the
/// whole unclaimed stretch of every open position.
pub fn accrued_reward(
    env: &Env,
    position: &StakePosition,
    config: &Config,
    now: u64,
) -> HarborResult<i128> {
    if !position.is_active {
        return Ok(0);
    }

    let window_end = position.start_time.safe_add(config.max_staking_period, env)?;

    let accrual_seconds = if now <= window_end {
        now.safe_sub(position.last_claimed_time, env)?
    } else if position.last_claimed_time <= window_end {
        window_end.safe_sub(position.last_claimed_time, env)?
    } else {
        // Tail already consumed by a claim or close past the window end.
        return Ok(0);
    };

    reward_for_duration(env, position.amount, config, accrual_seconds)
}

/// `amount * numerator * seconds / (denominator * interval)`.
///
/// Integer floor division: fractions below one reward unit are lost, not
/// carried forward to the next claim.
fn reward_for_duration(
    env: &Env,
    amount: i128,
    config: &Config,
    seconds: u64,
) -> HarborResult<i128> {
    let divisor =
        (config.reward_ratio_denominator as i128).safe_mul(config.reward_interval as i128, env)?;

    amount
        .safe_mul(config.reward_ratio_numerator as i128, env)?
        .safe_mul(seconds as i128, env)?
        .safe_div(divisor, env)
}

/// Sum of `accrued_reward` over the open positions in `positions`.
pub fn accrued_reward_for_positions(
    env: &Env,
    positions: &Vec<StakePosition>,
    config: &Config,
    now: u64,
) -> HarborResult<i128> {
    let mut total: i128 = 0;
    for position in positions.iter() {
        if position.is_active {
            total = total.safe_add(accrued_reward(env, &position, config, now)?, env)?;
        }
    }
    Ok(total)
}
