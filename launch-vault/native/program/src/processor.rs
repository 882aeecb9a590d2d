use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey,
};

use crate::{
    error::LaunchError,
    instructions,
    state::{VaultParams, VaultUpdate},
};

#[derive(Debug, BorshSerialize, BorshDeserialize, Clone, PartialEq, Eq)]
pub enum LaunchInstruction {
    /// Creates a vault for a new sale.
    /// Accounts:
    /// 0. `[signer, writable]` Payer, becomes the vault owner
    /// 1. `[signer, writable]` Vault account (fresh keypair)
    /// 2. `[]` System program
    InitializeVault(VaultParams),

    /// Pays for `nft_amount` units at `unit_price` (the floor price if omitted).
    /// Accounts:
    /// 0. `[signer, writable]` User
    /// 1. `[writable]` Recipient, must match the vault
    /// 2. `[writable]` Vault
    /// 3. `[writable]` User deposit PDA `["user_deposit", user, vault]`
    /// 4. `[]` System program
    Deposit {
        nft_amount: u8,
        unit_price: Option<u64>,
        merkle_proof: Option<Vec<[u8; 32]>>,
    },

    /// Reprices an earlier deposit upward and pays the difference.
    /// Accounts: same as `Deposit`.
    IncrementDeposit {
        deposit_index: u8,
        new_unit_price: u64,
    },

    /// Owner-only partial update of the vault configuration.
    /// Accounts:
    /// 0. `[signer]` Vault owner
    /// 1. `[writable]` Vault
    UpdateVault(VaultUpdate),

    /// Fails unless `proof` places `address` under `root`.
    /// Accounts:
    /// 0. `[signer]` Payer
    VerifyMerkleProof {
        root: [u8; 32],
        proof: Vec<[u8; 32]>,
        address: Pubkey,
    },
}

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = LaunchInstruction::try_from_slice(instruction_data)
        .map_err(|_| LaunchError::InvalidInstruction)?;

    match instruction {
        LaunchInstruction::InitializeVault(params) => {
            msg!("Instruction: InitializeVault");
            instructions::initialize_vault(program_id, accounts, params)
        }
        LaunchInstruction::Deposit {
            nft_amount,
            unit_price,
            merkle_proof,
        } => {
            msg!("Instruction: Deposit");
            instructions::deposit(
                program_id,
                accounts,
                nft_amount,
                unit_price,
                merkle_proof.as_deref(),
            )
        }
        LaunchInstruction::IncrementDeposit {
            deposit_index,
            new_unit_price,
        } => {
            msg!("Instruction: IncrementDeposit");
            instructions::increment_deposit(program_id, accounts, deposit_index, new_unit_price)
        }
        LaunchInstruction::UpdateVault(update) => {
            msg!("Instruction: UpdateVault");
            instructions::update_vault(program_id, accounts, update)
        }
        LaunchInstruction::VerifyMerkleProof {
            root,
            proof,
            address,
        } => {
            msg!("Instruction: VerifyMerkleProof");
            instructions::verify_merkle_proof(accounts, root, &proof, address)
        }
    }
}
