use solana_program::{
    account_info::{AccountInfo, next_account_info},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

use super::shared::{
    check_signer, check_system_program, check_writable, load_user_deposit, load_vault,
    store_user_deposit, store_vault, transfer_lamports,
};
use crate::{
    admission::admit_increment,
    error::LaunchError,
    events::{IncrementDepositEvent, LaunchEvent},
};

/// Accounts:
/// [signer, writable user]
/// [writable recipient]
/// [writable vault]
/// [writable user_deposit]
/// [readonly system program]
pub fn increment_deposit(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    deposit_index: u8,
    new_unit_price: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let user = next_account_info(account_info_iter)?;
    let recipient = next_account_info(account_info_iter)?;
    let vault = next_account_info(account_info_iter)?;
    let user_deposit = next_account_info(account_info_iter)?;
    let system_prog = next_account_info(account_info_iter)?;

    // Basic checks
    check_signer(user)?;
    check_writable(user)?;
    check_writable(recipient)?;
    check_writable(vault)?;
    check_writable(user_deposit)?;
    check_system_program(system_prog)?;

    let mut vault_state = load_vault(program_id, vault)?;
    if *recipient.key != vault_state.recipient {
        return Err(LaunchError::InvalidRecipient.into());
    }
    let (ledger, _) = load_user_deposit(program_id, user, vault, user_deposit)?;

    let admission = admit_increment(&vault_state, ledger.as_ref(), deposit_index, new_unit_price)?;
    if user.lamports() < admission.increment_amount {
        return Err(LaunchError::InsufficientFunds.into());
    }

    msg!(
        "Transferring increment of {} lamports to recipient",
        admission.increment_amount
    );
    transfer_lamports(user, recipient, system_prog, admission.increment_amount)?;

    // admit_increment found the entry, so the ledger exists
    let mut ledger = ledger.ok_or(LaunchError::InvalidDepositIndex)?;
    ledger.increment(admission.deposit_index, admission.new_deposit_amount)?;
    store_user_deposit(&ledger, user_deposit)?;

    vault_state.record_increment(admission.increment_amount)?;
    store_vault(&vault_state, vault)?;

    LaunchEvent::IncrementDeposit(IncrementDepositEvent {
        user: *user.key,
        vault: *vault.key,
        deposit_index,
        original_deposit_amount: admission.original_deposit_amount,
        new_deposit_amount: admission.new_deposit_amount,
        increment_amount: admission.increment_amount,
        timestamp: Clock::get()?.unix_timestamp,
    })
    .emit()?;

    msg!("Deposit #{} incremented", deposit_index);
    Ok(())
}
