use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::{
    constants::{MAX_DEPOSITS_PER_USER, USER_DEPOSIT_SEED},
    error::LaunchError,
};

/// First byte of every account this program owns.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKey {
    Uninitialized,
    Vault,
    UserDeposit,
}

/// Sale parameters supplied when a vault is created.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultParams {
    pub recipient: Pubkey,
    pub max_mint_amount: u8,
    pub whitelist_max_mint_amount: u8,
    pub max_unit_price: u64,
    pub min_unit_price: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub merkle_root: [u8; 32],
}

impl VaultParams {
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.whitelist_max_mint_amount <= self.max_mint_amount {
            return Err(LaunchError::InvalidMintAmount);
        }
        if self.start_time <= 0 || self.start_time >= self.end_time {
            return Err(LaunchError::InvalidTimeConfig);
        }
        if self.max_unit_price < self.min_unit_price {
            return Err(LaunchError::InvalidPriceConfig);
        }
        Ok(())
    }
}

/// One sale: configuration plus totals across every depositor.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Vault {
    pub key: AccountKey,
    pub owner: Pubkey,
    pub recipient: Pubkey,
    pub max_mint_amount: u8,
    pub whitelist_max_mint_amount: u8,
    pub max_unit_price: u64,
    pub min_unit_price: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub merkle_root: [u8; 32],
    pub total_deposited: u64,
    pub total_nfts: u64,
}

impl Vault {
    // key + owner + recipient + caps + prices + window + root + totals
    pub const LEN: usize = 1 + 32 + 32 + 1 + 1 + 8 + 8 + 8 + 8 + 32 + 8 + 8;

    pub fn new(owner: Pubkey, params: &VaultParams) -> Self {
        Self {
            key: AccountKey::Vault,
            owner,
            recipient: params.recipient,
            max_mint_amount: params.max_mint_amount,
            whitelist_max_mint_amount: params.whitelist_max_mint_amount,
            max_unit_price: params.max_unit_price,
            min_unit_price: params.min_unit_price,
            start_time: params.start_time,
            end_time: params.end_time,
            merkle_root: params.merkle_root,
            total_deposited: 0,
            total_nfts: 0,
        }
    }

    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let vault = Self::deserialize(&mut &data[..])
            .map_err(|_| LaunchError::InvalidVaultAccount)?;
        if vault.key != AccountKey::Vault {
            return Err(LaunchError::InvalidVaultAccount.into());
        }
        Ok(vault)
    }

    pub fn pack(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        self.serialize(&mut &mut dst[..])
            .map_err(|_| LaunchError::SerializationError.into())
    }

    pub fn price_in_range(&self, unit_price: u64) -> bool {
        (self.min_unit_price..=self.max_unit_price).contains(&unit_price)
    }

    pub fn record_deposit(&mut self, nft_amount: u8, deposit_amount: u64) -> Result<(), LaunchError> {
        let total_nfts = self
            .total_nfts
            .checked_add(u64::from(nft_amount))
            .ok_or(LaunchError::Overflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(deposit_amount)
            .ok_or(LaunchError::Overflow)?;
        self.total_nfts = total_nfts;
        self.total_deposited = total_deposited;
        Ok(())
    }

    pub fn record_increment(&mut self, increment_amount: u64) -> Result<(), LaunchError> {
        self.total_deposited = self
            .total_deposited
            .checked_add(increment_amount)
            .ok_or(LaunchError::Overflow)?;
        Ok(())
    }

    /// Overwrites every field present in `update`. No cross-field checks run
    /// here; an inconsistent window or price range surfaces at deposit time.
    pub fn apply_update(&mut self, update: &VaultUpdate) {
        if let Some(recipient) = update.recipient {
            self.recipient = recipient;
        }
        if let Some(max_mint_amount) = update.max_mint_amount {
            self.max_mint_amount = max_mint_amount;
        }
        if let Some(whitelist_max_mint_amount) = update.whitelist_max_mint_amount {
            self.whitelist_max_mint_amount = whitelist_max_mint_amount;
        }
        if let Some(max_unit_price) = update.max_unit_price {
            self.max_unit_price = max_unit_price;
        }
        if let Some(min_unit_price) = update.min_unit_price {
            self.min_unit_price = min_unit_price;
        }
        if let Some(start_time) = update.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            self.end_time = end_time;
        }
        if let Some(merkle_root) = update.merkle_root {
            self.merkle_root = merkle_root;
        }
    }
}

/// Owner-supplied partial update; `None` leaves the field as it is.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct VaultUpdate {
    pub recipient: Option<Pubkey>,
    pub max_mint_amount: Option<u8>,
    pub whitelist_max_mint_amount: Option<u8>,
    pub max_unit_price: Option<u64>,
    pub min_unit_price: Option<u64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub merkle_root: Option<[u8; 32]>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DepositInfo {
    pub nft_amount: u8,
    pub deposit_amount: u64,
    pub timestamp: i64,
}

impl DepositInfo {
    pub const LEN: usize = 1 + 8 + 8;
}

/// Deposits of one user into one vault (PDA, seeds = [b"user_deposit", user, vault]).
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserDeposit {
    pub key: AccountKey,
    pub user: Pubkey,
    pub vault: Pubkey,
    pub bump: u8,
    pub total_nft_amount: u8,
    pub total_deposit_amount: u64,
    pub deposits: Vec<DepositInfo>,
}

impl UserDeposit {
    // key + user + vault + bump + totals + vec length prefix
    pub const HEADER_LEN: usize = 1 + 32 + 32 + 1 + 1 + 8 + 4;

    /// Offset of `vault`, for memcmp filters over program accounts.
    pub const VAULT_OFFSET: usize = 1 + 32;

    pub fn new(user: Pubkey, vault: Pubkey, bump: u8) -> Self {
        Self {
            key: AccountKey::UserDeposit,
            user,
            vault,
            bump,
            total_nft_amount: 0,
            total_deposit_amount: 0,
            deposits: Vec::new(),
        }
    }

    pub fn find_address(program_id: &Pubkey, user: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[USER_DEPOSIT_SEED, user.as_ref(), vault.as_ref()],
            program_id,
        )
    }

    pub const fn space_for(entries: usize) -> usize {
        Self::HEADER_LEN + entries * DepositInfo::LEN
    }

    pub fn space(&self) -> usize {
        Self::space_for(self.deposits.len())
    }

    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let ledger = Self::deserialize(&mut &data[..])
            .map_err(|_| LaunchError::InvalidUserDepositAccount)?;
        if ledger.key != AccountKey::UserDeposit {
            return Err(LaunchError::InvalidUserDepositAccount.into());
        }
        Ok(ledger)
    }

    pub fn pack(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        self.serialize(&mut &mut dst[..])
            .map_err(|_| LaunchError::SerializationError.into())
    }

    /// Appends a new entry and returns its index.
    pub fn append(
        &mut self,
        nft_amount: u8,
        deposit_amount: u64,
        timestamp: i64,
    ) -> Result<usize, LaunchError> {
        if self.deposits.len() >= MAX_DEPOSITS_PER_USER {
            return Err(LaunchError::Overflow);
        }
        let total_nft_amount = self
            .total_nft_amount
            .checked_add(nft_amount)
            .ok_or(LaunchError::Overflow)?;
        let total_deposit_amount = self
            .total_deposit_amount
            .checked_add(deposit_amount)
            .ok_or(LaunchError::Overflow)?;

        self.deposits.push(DepositInfo {
            nft_amount,
            deposit_amount,
            timestamp,
        });
        self.total_nft_amount = total_nft_amount;
        self.total_deposit_amount = total_deposit_amount;
        Ok(self.deposits.len() - 1)
    }

    /// Raises the amount paid for entry `index` to `new_deposit_amount` and
    /// returns the difference. The entry's NFT count never changes.
    pub fn increment(&mut self, index: usize, new_deposit_amount: u64) -> Result<u64, LaunchError> {
        let entry = self
            .deposits
            .get_mut(index)
            .ok_or(LaunchError::InvalidDepositIndex)?;
        let increment_amount = new_deposit_amount
            .checked_sub(entry.deposit_amount)
            .filter(|delta| *delta > 0)
            .ok_or(LaunchError::InvalidDepositAmount)?;
        let total_deposit_amount = self
            .total_deposit_amount
            .checked_add(increment_amount)
            .ok_or(LaunchError::Overflow)?;

        entry.deposit_amount = new_deposit_amount;
        self.total_deposit_amount = total_deposit_amount;
        Ok(increment_amount)
    }
}
