use soroban_sdk::contracterror;

pub type HarborResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    ContractPaused = 3,
    InvalidConfiguration = 4,
    InvalidAmount = 5,
    InsufficientBalance = 6,
    NotStaked = 7,
    InvalidPositionId = 8,
    InactivePosition = 9,
    ClaimTooSoon = 10,
    InsufficientPoolReserve = 11,
    MathError = 12,
}
