use soroban_sdk::{contracttype, Vec};

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionEntry {
    pub id: u32,
    pub start_time: u64,
    /// Close timestamp, or zero while the position is still open.
    pub end_time: u64,
    pub total_rewards: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionsResponse {
    pub active: Vec<PositionEntry>,
    pub inactive: Vec<PositionEntry>,
}
