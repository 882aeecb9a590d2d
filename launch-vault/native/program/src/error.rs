use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Codes start at 6000 so they never collide with the small custom codes
/// returned by the system program through CPI.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum LaunchError {
    // Sale window
    #[error("Deposit not started yet")]
    NotStarted = 6000,
    #[error("Deposit period ended")]
    Ended,

    // Deposit parameters
    #[error("NFT amount must be greater than zero")]
    InvalidNftAmount,
    #[error("Unit price outside the vault's price range")]
    InvalidUnitPrice,
    #[error("New deposit amount must exceed the current one")]
    InvalidDepositAmount,
    #[error("Deposit index out of range")]
    InvalidDepositIndex,

    // Caps
    #[error("Exceeds mint limit")]
    ExceedsMintLimit,
    #[error("Exceeds whitelist mint limit")]
    ExceedsWhitelistLimit,

    #[error("Only vault owner can perform this action")]
    UnauthorizedOwner,
    #[error("Invalid merkle proof")]
    InvalidMerkleProof,
    #[error("Invalid recipient")]
    InvalidRecipient,
    #[error("Insufficient funds")]
    InsufficientFunds,

    // Vault configuration
    #[error("Invalid mint amount configuration")]
    InvalidMintAmount,
    #[error("Invalid time configuration")]
    InvalidTimeConfig,
    #[error("Invalid price configuration")]
    InvalidPriceConfig,
    #[error("Vault is already initialized")]
    AlreadyInitialized,

    #[error("Invalid instruction")]
    InvalidInstruction,
    #[error("Invalid user deposit account")]
    InvalidUserDepositAccount,
    #[error("Invalid vault account")]
    InvalidVaultAccount,
    #[error("Failed to serialize account data")]
    SerializationError,
    #[error("Overflow occurred")]
    Overflow,
    #[error("Missing required signer")]
    NotSigner,
    #[error("Account not writable")]
    NotWritable,
}

impl LaunchError {
    /// Maps a `ProgramError::Custom` code back to the error that produced it.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }
}

impl From<LaunchError> for ProgramError {
    fn from(e: LaunchError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
