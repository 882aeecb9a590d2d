use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{entrypoint::ProgramResult, log::sol_log_data, pubkey::Pubkey};

use crate::{
    error::LaunchError,
    state::{VaultParams, VaultUpdate},
};

/// First `sol_log_data` field of every event, so clients can tell ours apart
/// from payloads logged by other programs in the same transaction.
pub const EVENT_TAG: [u8; 8] = *b"lvevent1";

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeVaultEvent {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub params: VaultParams,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DepositEvent {
    pub user: Pubkey,
    pub vault: Pubkey,
    pub nft_amount: u8,
    pub deposit_amount: u64,
    pub is_whitelist: bool,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct IncrementDepositEvent {
    pub user: Pubkey,
    pub vault: Pubkey,
    pub deposit_index: u8,
    pub original_deposit_amount: u64,
    pub new_deposit_amount: u64,
    pub increment_amount: u64,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdateVaultEvent {
    pub vault: Pubkey,
    pub update: VaultUpdate,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum LaunchEvent {
    InitializeVault(InitializeVaultEvent),
    Deposit(DepositEvent),
    IncrementDeposit(IncrementDepositEvent),
    UpdateVault(UpdateVaultEvent),
}

impl LaunchEvent {
    /// Logs the event as `Program data: <tag> <borsh payload>`.
    pub fn emit(&self) -> ProgramResult {
        let payload = borsh::to_vec(self).map_err(|_| LaunchError::SerializationError)?;
        sol_log_data(&[EVENT_TAG.as_slice(), payload.as_slice()]);
        Ok(())
    }
}
