use solana_program::{
    account_info::{AccountInfo, next_account_info},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};
use solana_system_interface::instruction as system_instruction;

use super::shared::{check_signer, check_system_program, check_writable, store_vault};
use crate::{
    error::LaunchError,
    events::{InitializeVaultEvent, LaunchEvent},
    state::{Vault, VaultParams},
};

/// Accounts:
/// [signer, writable payer]
/// [signer, writable vault]
/// [readonly system program]
pub fn initialize_vault(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    params: VaultParams,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer = next_account_info(account_info_iter)?;
    let vault = next_account_info(account_info_iter)?;
    let system_prog = next_account_info(account_info_iter)?;

    // Basic checks
    check_signer(payer)?;
    check_signer(vault)?;
    check_writable(payer)?;
    check_writable(vault)?;
    check_system_program(system_prog)?;

    if vault.lamports() > 0 || !vault.data_is_empty() {
        return Err(LaunchError::AlreadyInitialized.into());
    }
    params.validate()?;

    msg!("Creating vault account");
    let lamports = Rent::get()?.minimum_balance(Vault::LEN);
    invoke(
        &system_instruction::create_account(
            payer.key,
            vault.key,
            lamports,
            Vault::LEN as u64,
            program_id,
        ),
        &[payer.clone(), vault.clone(), system_prog.clone()],
    )?;

    let state = Vault::new(*payer.key, &params);
    store_vault(&state, vault)?;

    LaunchEvent::InitializeVault(InitializeVaultEvent {
        vault: *vault.key,
        owner: *payer.key,
        params,
        timestamp: Clock::get()?.unix_timestamp,
    })
    .emit()?;

    msg!("Vault initialized, owner {}", payer.key);
    Ok(())
}
