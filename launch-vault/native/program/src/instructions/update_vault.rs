use solana_program::{
    account_info::{AccountInfo, next_account_info},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use super::shared::{check_signer, check_writable, load_vault, store_vault};
use crate::{
    error::LaunchError,
    events::{LaunchEvent, UpdateVaultEvent},
    state::VaultUpdate,
};

/// Accounts:
/// [signer owner]
/// [writable vault]
pub fn update_vault(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    update: VaultUpdate,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let owner = next_account_info(account_info_iter)?;
    let vault = next_account_info(account_info_iter)?;

    check_signer(owner)?;
    check_writable(vault)?;

    let mut vault_state = load_vault(program_id, vault)?;
    if vault_state.owner != *owner.key {
        msg!("Unauthorized update attempt by {}", owner.key);
        return Err(LaunchError::UnauthorizedOwner.into());
    }

    vault_state.apply_update(&update);
    store_vault(&vault_state, vault)?;

    LaunchEvent::UpdateVault(UpdateVaultEvent {
        vault: *vault.key,
        update,
    })
    .emit()?;

    msg!("Vault updated");
    Ok(())
}
