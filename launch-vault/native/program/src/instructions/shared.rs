use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};
use solana_system_interface::{instruction as system_instruction, program as system_program};

use crate::{
    constants::USER_DEPOSIT_SEED,
    error::LaunchError,
    state::{UserDeposit, Vault},
};

pub fn check_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        return Err(LaunchError::NotSigner.into());
    }
    Ok(())
}

pub fn check_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        return Err(LaunchError::NotWritable.into());
    }
    Ok(())
}

pub fn check_system_program(account: &AccountInfo) -> ProgramResult {
    if account.key != &system_program::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Reads a vault owned by this program.
pub fn load_vault(program_id: &Pubkey, vault: &AccountInfo) -> Result<Vault, ProgramError> {
    if vault.owner != program_id {
        msg!("Vault is not owned by this program");
        return Err(LaunchError::InvalidVaultAccount.into());
    }
    Vault::unpack(&vault.data.borrow())
}

pub fn store_vault(vault: &Vault, account: &AccountInfo) -> ProgramResult {
    vault.pack(&mut account.data.borrow_mut())
}

/// Verifies `user_deposit` is the canonical PDA of (user, vault) and returns
/// the decoded ledger, or `None` if it has not been created yet.
pub fn load_user_deposit(
    program_id: &Pubkey,
    user: &AccountInfo,
    vault: &AccountInfo,
    user_deposit: &AccountInfo,
) -> Result<(Option<UserDeposit>, u8), ProgramError> {
    let (pda, bump) = UserDeposit::find_address(program_id, user.key, vault.key);
    if pda != *user_deposit.key {
        msg!("User deposit PDA mismatch");
        return Err(LaunchError::InvalidUserDepositAccount.into());
    }
    if user_deposit.data_is_empty() {
        return Ok((None, bump));
    }
    if user_deposit.owner != program_id {
        return Err(LaunchError::InvalidUserDepositAccount.into());
    }

    let ledger = UserDeposit::unpack(&user_deposit.data.borrow())?;
    if ledger.user != *user.key || ledger.vault != *vault.key {
        msg!("User deposit belongs to another user or vault");
        return Err(LaunchError::InvalidUserDepositAccount.into());
    }
    Ok((Some(ledger), bump))
}

/// Moves lamports from a system-owned signer to `to` through the system program.
pub fn transfer_lamports<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke(
        &system_instruction::transfer(from.key, to.key, amount),
        &[from.clone(), to.clone(), system_program.clone()],
    )
}

/// Creates the user deposit PDA, or grows it, so that it can hold `ledger`,
/// with the user paying the rent difference.
pub fn fit_user_deposit<'a>(
    program_id: &Pubkey,
    user: &AccountInfo<'a>,
    vault: &AccountInfo<'a>,
    user_deposit: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    ledger: &UserDeposit,
) -> ProgramResult {
    let space = ledger.space();
    let required = Rent::get()?.minimum_balance(space);
    let bump = [ledger.bump];
    let seeds: &[&[u8]] = &[USER_DEPOSIT_SEED, user.key.as_ref(), vault.key.as_ref(), &bump];

    if user_deposit.data_is_empty() && user_deposit.lamports() == 0 {
        msg!("Creating user deposit account");
        return invoke_signed(
            &system_instruction::create_account(
                user.key,
                user_deposit.key,
                required,
                space as u64,
                program_id,
            ),
            &[user.clone(), user_deposit.clone(), system_program.clone()],
            &[seeds],
        );
    }

    let shortfall = required.saturating_sub(user_deposit.lamports());
    if shortfall > 0 {
        transfer_lamports(user, user_deposit, system_program, shortfall)?;
    }

    // Lamports sent to the PDA before its first deposit rule out create_account.
    if user_deposit.owner != program_id {
        msg!("Claiming pre-funded user deposit account");
        invoke_signed(
            &system_instruction::allocate(user_deposit.key, space as u64),
            &[user_deposit.clone(), system_program.clone()],
            &[seeds],
        )?;
        return invoke_signed(
            &system_instruction::assign(user_deposit.key, program_id),
            &[user_deposit.clone(), system_program.clone()],
            &[seeds],
        );
    }
    user_deposit.realloc(space, false)
}

pub fn store_user_deposit(ledger: &UserDeposit, account: &AccountInfo) -> ProgramResult {
    ledger.pack(&mut account.data.borrow_mut())
}
