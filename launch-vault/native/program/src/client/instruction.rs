//! Builders for the program's instructions.

use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use solana_system_interface::program as system_program;

use crate::{
    merkle::Node,
    processor::LaunchInstruction,
    state::{UserDeposit, VaultParams, VaultUpdate},
};

pub fn initialize_vault(
    program_id: &Pubkey,
    payer: &Pubkey,
    vault: &Pubkey,
    params: VaultParams,
) -> Instruction {
    Instruction::new_with_borsh(
        *program_id,
        &LaunchInstruction::InitializeVault(params),
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*vault, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
    )
}

fn deposit_accounts(
    program_id: &Pubkey,
    user: &Pubkey,
    recipient: &Pubkey,
    vault: &Pubkey,
) -> Vec<AccountMeta> {
    let (user_deposit, _) = UserDeposit::find_address(program_id, user, vault);
    vec![
        AccountMeta::new(*user, true),
        AccountMeta::new(*recipient, false),
        AccountMeta::new(*vault, false),
        AccountMeta::new(user_deposit, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ]
}

pub fn deposit(
    program_id: &Pubkey,
    user: &Pubkey,
    recipient: &Pubkey,
    vault: &Pubkey,
    nft_amount: u8,
    unit_price: Option<u64>,
    merkle_proof: Option<Vec<Node>>,
) -> Instruction {
    Instruction::new_with_borsh(
        *program_id,
        &LaunchInstruction::Deposit {
            nft_amount,
            unit_price,
            merkle_proof,
        },
        deposit_accounts(program_id, user, recipient, vault),
    )
}

pub fn increment_deposit(
    program_id: &Pubkey,
    user: &Pubkey,
    recipient: &Pubkey,
    vault: &Pubkey,
    deposit_index: u8,
    new_unit_price: u64,
) -> Instruction {
    Instruction::new_with_borsh(
        *program_id,
        &LaunchInstruction::IncrementDeposit {
            deposit_index,
            new_unit_price,
        },
        deposit_accounts(program_id, user, recipient, vault),
    )
}

pub fn update_vault(
    program_id: &Pubkey,
    owner: &Pubkey,
    vault: &Pubkey,
    update: VaultUpdate,
) -> Instruction {
    Instruction::new_with_borsh(
        *program_id,
        &LaunchInstruction::UpdateVault(update),
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(*vault, false),
        ],
    )
}

pub fn verify_merkle_proof(
    program_id: &Pubkey,
    payer: &Pubkey,
    root: Node,
    proof: Vec<Node>,
    address: Pubkey,
) -> Instruction {
    Instruction::new_with_borsh(
        *program_id,
        &LaunchInstruction::VerifyMerkleProof {
            root,
            proof,
            address,
        },
        vec![AccountMeta::new_readonly(*payer, true)],
    )
}
