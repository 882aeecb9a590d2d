use solana_program::{
    account_info::{AccountInfo, next_account_info},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

use super::shared::{
    check_signer, check_system_program, check_writable, fit_user_deposit, load_user_deposit,
    load_vault, store_user_deposit, store_vault, transfer_lamports,
};
use crate::{
    admission::{DepositRequest, admit_deposit},
    error::LaunchError,
    events::{DepositEvent, LaunchEvent},
    merkle::Node,
    state::UserDeposit,
};

/// Accounts:
/// [signer, writable user]
/// [writable recipient]
/// [writable vault]
/// [writable user_deposit]
/// [readonly system program]
pub fn deposit(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    nft_amount: u8,
    unit_price: Option<u64>,
    merkle_proof: Option<&[Node]>,
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
    let (ledger, bump) = load_user_deposit(program_id, user, vault, user_deposit)?;
    let existing_nft_amount = ledger.as_ref().map_or(0, |l| l.total_nft_amount);

    let now = Clock::get()?.unix_timestamp;
    let admission = admit_deposit(
        &vault_state,
        existing_nft_amount,
        &DepositRequest {
            user: user.key,
            nft_amount,
            unit_price,
            merkle_proof,
            now,
        },
    )?;

    if user.lamports() < admission.deposit_amount {
        return Err(LaunchError::InsufficientFunds.into());
    }

    msg!(
        "Transferring {} lamports for {} NFTs to recipient",
        admission.deposit_amount,
        nft_amount
    );
    transfer_lamports(user, recipient, system_prog, admission.deposit_amount)?;

    // Update user ledger
    let mut ledger = ledger.unwrap_or_else(|| UserDeposit::new(*user.key, *vault.key, bump));
    let index = ledger.append(nft_amount, admission.deposit_amount, now)?;
    fit_user_deposit(program_id, user, vault, user_deposit, system_prog, &ledger)?;
    store_user_deposit(&ledger, user_deposit)?;

    // Update vault totals
    vault_state.record_deposit(nft_amount, admission.deposit_amount)?;
    store_vault(&vault_state, vault)?;

    LaunchEvent::Deposit(DepositEvent {
        user: *user.key,
        vault: *vault.key,
        nft_amount,
        deposit_amount: admission.deposit_amount,
        is_whitelist: admission.is_whitelist,
        timestamp: now,
    })
    .emit()?;

    msg!(
        "Deposit #{} recorded, vault totals: {} NFTs / {} lamports",
        index,
        vault_state.total_nfts,
        vault_state.total_deposited
    );
    Ok(())
}
