#![no_std]

mod contract;
mod controller;
mod events;
mod msg;
mod reward;
mod staking;
mod storage;

#[cfg(test)]
mod tests;
