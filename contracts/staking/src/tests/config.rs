extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use super::setup::{
    deploy_staking_contract, deploy_staking_contract_with_config, deploy_token_contract, ONE_DAY,
    DEFAULT_MAX_PERIOD, DEFAULT_MIN_PERIOD, DEFAULT_REWARD_DENOMINATOR, DEFAULT_REWARD_INTERVAL,
    DEFAULT_REWARD_NUMERATOR,
};
use crate::msg::ConfigResponse;
use crate::storage::Config;

#[test]
fn initialize_staking_contract() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    assert_eq!(
        staking.query_config(),
        ConfigResponse {
            config: Config {
                admin: admin.clone(),
                stake_token: stake_token.address,
                reward_token: reward_token.address,
                reward_ratio_numerator: DEFAULT_REWARD_NUMERATOR,
                reward_ratio_denominator: DEFAULT_REWARD_DENOMINATOR,
                reward_interval: DEFAULT_REWARD_INTERVAL,
                min_staking_period: DEFAULT_MIN_PERIOD,
                max_staking_period: DEFAULT_MAX_PERIOD,
            },
        }
    );
    assert_eq!(staking.query_admin(), admin);
    assert_eq!(staking.query_is_paused(), false);
    assert_eq!(staking.query_total_staked(), 0);
}

#[test]
#[should_panic(expected = "initializing contract twice is not allowed")]
fn initializing_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    staking.initialize(
        &admin,
        &stake_token.address,
        &reward_token.address,
        &DEFAULT_REWARD_NUMERATOR,
        &DEFAULT_REWARD_DENOMINATOR,
        &DEFAULT_REWARD_INTERVAL,
        &DEFAULT_MIN_PERIOD,
        &DEFAULT_MAX_PERIOD,
    );
}

#[test]
#[should_panic(expected = "configuration values must be non-zero")]
fn initializing_with_zero_denominator_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    deploy_staking_contract_with_config(
        &env,
        &admin,
        &stake_token.address,
        &reward_token.address,
        DEFAULT_REWARD_NUMERATOR,
        0,
        DEFAULT_REWARD_INTERVAL,
        DEFAULT_MIN_PERIOD,
        DEFAULT_MAX_PERIOD,
    );
}

#[test]
fn admin_updates_configuration() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);
    let (new_stake_token, _) = deploy_token_contract(&env, &admin);
    let (new_reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    staking.set_reward_interval(&admin, &(2 * ONE_DAY));
    staking.set_reward_ratio_numerator(&admin, &3);
    staking.set_reward_ratio_denominator(&admin, &1_000);
    staking.set_min_staking_period(&admin, &(3 * ONE_DAY));
    staking.set_max_staking_period(&admin, &(30 * ONE_DAY));
    staking.set_stake_token(&admin, &new_stake_token.address);
    staking.set_reward_token(&admin, &new_reward_token.address);

    let config = staking.query_config().config;
    assert_eq!(config.reward_interval, 2 * ONE_DAY);
    assert_eq!(config.reward_ratio_numerator, 3);
    assert_eq!(config.reward_ratio_denominator, 1_000);
    assert_eq!(config.min_staking_period, 3 * ONE_DAY);
    assert_eq!(config.max_staking_period, 30 * ONE_DAY);
    assert_eq!(config.stake_token, new_stake_token.address);
    assert_eq!(config.reward_token, new_reward_token.address);
}

#[test]
#[should_panic(expected = "You are not authorized")]
fn non_admin_cannot_update_configuration() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    staking.set_reward_interval(&user, &ONE_DAY);
}

#[test]
#[should_panic(expected = "configuration values must be non-zero")]
fn zero_configuration_value_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    staking.set_min_staking_period(&admin, &0);
}

#[test]
fn pause_flag_is_admin_controlled() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    staking.pause(&admin);
    assert_eq!(staking.query_is_paused(), true);

    staking.unpause(&admin);
    assert_eq!(staking.query_is_paused(), false);
}

#[test]
#[should_panic(expected = "You are not authorized")]
fn non_admin_cannot_pause() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, _) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    staking.pause(&user);
}

#[test]
#[should_panic(expected = "Contract is paused")]
fn pause_blocks_staking() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_asset) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_asset.mint(&user, &1_000);
    staking.pause(&admin);

    staking.stake(&user, &1_000);
}

#[test]
#[should_panic(expected = "Contract is paused")]
fn pause_blocks_claiming() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_asset) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_asset.mint(&user, &1_000);
    staking.stake(&user, &1_000);
    staking.pause(&admin);

    staking.claim_rewards(&user, &0);
}

#[test]
fn unpause_restores_staking() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let (stake_token, stake_asset) = deploy_token_contract(&env, &admin);
    let (reward_token, _) = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &stake_token.address, &reward_token.address);

    stake_asset.mint(&user, &1_000);
    staking.pause(&admin);
    staking.unpause(&admin);

    staking.stake(&user, &1_000);
    assert_eq!(staking.query_total_staked(), 1_000);
}
