//! Launch vault: collects lamports for an NFT mint allotment.
//!
//! Each sale is a `Vault` account holding its caps, price bounds, sale window,
//! whitelist root and running totals. Every depositor gets a `UserDeposit`
//! PDA (`["user_deposit", user, vault]`) listing their individual deposits.
//! Proceeds go straight to the vault's recipient inside the same instruction
//! that records them.

pub mod admission;
pub mod client;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod processor;
pub mod state;

solana_program::declare_id!("9r65eZV3ZGamTZnvWXShu7DQtAqTwS237LW13Aq69Umd");

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint {
    use solana_program::entrypoint;

    use crate::processor::process_instruction;

    entrypoint!(process_instruction);
}
