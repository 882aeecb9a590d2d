use solana_program::{
    account_info::{AccountInfo, next_account_info},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use super::shared::check_signer;
use crate::{
    error::LaunchError,
    merkle::{self, Node},
};

/// Accounts:
/// [signer payer]
pub fn verify_merkle_proof(
    accounts: &[AccountInfo],
    root: Node,
    proof: &[Node],
    address: Pubkey,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let payer = next_account_info(account_info_iter)?;
    check_signer(payer)?;

    if !merkle::verify_address(&root, proof, &address) {
        return Err(LaunchError::InvalidMerkleProof.into());
    }
    msg!("Merkle proof verified successfully for address: {}", address);
    Ok(())
}
