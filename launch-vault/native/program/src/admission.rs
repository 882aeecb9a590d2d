//! Deposit and increment admission.
//!
//! Pure decisions over the current vault and ledger; nothing here touches
//! accounts or moves lamports. A rejected request leaves no trace.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    error::LaunchError,
    merkle::{self, Node},
    state::{UserDeposit, Vault},
};

pub struct DepositRequest<'a> {
    pub user: &'a Pubkey,
    pub nft_amount: u8,
    /// Caller-chosen price; the vault's floor price when omitted.
    pub unit_price: Option<u64>,
    pub merkle_proof: Option<&'a [Node]>,
    pub now: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositAdmission {
    pub unit_price: u64,
    pub deposit_amount: u64,
    pub is_whitelist: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncrementAdmission {
    pub deposit_index: usize,
    pub original_deposit_amount: u64,
    pub new_deposit_amount: u64,
    pub increment_amount: u64,
}

/// Decides whether `request` may be deposited on top of `existing_nft_amount`
/// units the user already holds in this vault.
pub fn admit_deposit(
    vault: &Vault,
    existing_nft_amount: u8,
    request: &DepositRequest,
) -> Result<DepositAdmission, LaunchError> {
    if request.now < vault.start_time {
        return Err(LaunchError::NotStarted);
    }
    if request.now > vault.end_time {
        return Err(LaunchError::Ended);
    }
    if request.nft_amount == 0 {
        return Err(LaunchError::InvalidNftAmount);
    }

    let unit_price = match request.unit_price {
        Some(price) if !vault.price_in_range(price) => return Err(LaunchError::InvalidUnitPrice),
        Some(price) => price,
        None => vault.min_unit_price,
    };

    let is_whitelist = match request.merkle_proof {
        Some(proof) if merkle::verify_address(&vault.merkle_root, proof, request.user) => true,
        Some(_) => {
            msg!("Merkle proof did not verify, applying the general mint limit");
            false
        }
        None => false,
    };

    let (cap, limit_error) = if is_whitelist {
        (vault.whitelist_max_mint_amount, LaunchError::ExceedsWhitelistLimit)
    } else {
        (vault.max_mint_amount, LaunchError::ExceedsMintLimit)
    };
    match existing_nft_amount.checked_add(request.nft_amount) {
        Some(total) if total <= cap => {}
        _ => return Err(limit_error),
    }

    let deposit_amount = u64::from(request.nft_amount)
        .checked_mul(unit_price)
        .ok_or(LaunchError::Overflow)?;

    Ok(DepositAdmission {
        unit_price,
        deposit_amount,
        is_whitelist,
    })
}

/// Decides whether entry `deposit_index` of `ledger` may be repriced to
/// `new_unit_price`. Neither the sale window nor the caps are consulted: the
/// allocation was already admitted.
pub fn admit_increment(
    vault: &Vault,
    ledger: Option<&UserDeposit>,
    deposit_index: u8,
    new_unit_price: u64,
) -> Result<IncrementAdmission, LaunchError> {
    let index = usize::from(deposit_index);
    let entry = ledger
        .and_then(|ledger| ledger.deposits.get(index))
        .ok_or(LaunchError::InvalidDepositIndex)?;

    if !vault.price_in_range(new_unit_price) {
        return Err(LaunchError::InvalidUnitPrice);
    }

    let new_deposit_amount = u64::from(entry.nft_amount)
        .checked_mul(new_unit_price)
        .ok_or(LaunchError::Overflow)?;
    if new_deposit_amount <= entry.deposit_amount {
        return Err(LaunchError::InvalidDepositAmount);
    }

    Ok(IncrementAdmission {
        deposit_index: index,
        original_deposit_amount: entry.deposit_amount,
        new_deposit_amount,
        increment_amount: new_deposit_amount - entry.deposit_amount,
    })
}
