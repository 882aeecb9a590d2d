//! Read-side helpers over raw account data and transaction logs, for
//! indexers and scripts. Fetching is left to the caller's RPC client.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::{
    constants::PROGRAM_DATA_LOG_PREFIX,
    events::{DepositEvent, EVENT_TAG, LaunchEvent},
    state::{UserDeposit, Vault},
};

pub fn find_user_deposit_address(program_id: &Pubkey, user: &Pubkey, vault: &Pubkey) -> Pubkey {
    UserDeposit::find_address(program_id, user, vault).0
}

pub fn decode_vault(data: &[u8]) -> Result<Vault, ProgramError> {
    Vault::unpack(data)
}

pub fn decode_user_deposit(data: &[u8]) -> Result<UserDeposit, ProgramError> {
    UserDeposit::unpack(data)
}

/// Byte offset of the vault key inside a user deposit account, for a
/// `memcmp` filter on `getProgramAccounts`.
pub const fn user_deposit_filter_offset() -> usize {
    UserDeposit::VAULT_OFFSET
}

/// Why a record was left out of a [`LedgerScan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Undecodable,
    OtherVault,
    NotCanonicalAddress,
}

#[derive(Debug, Default)]
pub struct LedgerScan {
    pub verified: Vec<(Pubkey, UserDeposit)>,
    pub skipped: Vec<(Pubkey, SkipReason)>,
}

/// Splits raw program accounts into the ledgers that really belong to
/// `vault` and the rest: records that fail to decode, point at another vault,
/// or sit at an address other than the canonical PDA of their (user, vault)
/// pair are reported in `skipped`.
pub fn verified_user_deposits<I, D>(program_id: &Pubkey, vault: &Pubkey, accounts: I) -> LedgerScan
where
    I: IntoIterator<Item = (Pubkey, D)>,
    D: AsRef<[u8]>,
{
    let mut scan = LedgerScan::default();
    for (address, data) in accounts {
        let Ok(ledger) = decode_user_deposit(data.as_ref()) else {
            scan.skipped.push((address, SkipReason::Undecodable));
            continue;
        };
        if ledger.vault != *vault {
            scan.skipped.push((address, SkipReason::OtherVault));
        } else if find_user_deposit_address(program_id, &ledger.user, vault) != address {
            scan.skipped.push((address, SkipReason::NotCanonicalAddress));
        } else {
            scan.verified.push((address, ledger));
        }
    }
    scan
}

/// Decodes every event this program logged in `logs`.
pub fn events<S: AsRef<str>>(logs: &[S]) -> Vec<LaunchEvent> {
    logs.iter()
        .filter_map(|line| line.as_ref().strip_prefix(PROGRAM_DATA_LOG_PREFIX))
        .filter_map(|fields| {
            let mut fields = fields.split(' ');
            let tag = STANDARD.decode(fields.next()?).ok()?;
            if tag != EVENT_TAG {
                return None;
            }
            let payload = STANDARD.decode(fields.next()?).ok()?;
            borsh::from_slice::<LaunchEvent>(&payload).ok()
        })
        .collect()
}

/// Deposit events for `vault` found in `logs`, in log order.
pub fn deposit_events<S: AsRef<str>>(logs: &[S], vault: &Pubkey) -> Vec<DepositEvent> {
    events(logs)
        .into_iter()
        .filter_map(|event| match event {
            LaunchEvent::Deposit(deposit) if deposit.vault == *vault => Some(deposit),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::IncrementDepositEvent;

    fn log_line(event: &LaunchEvent) -> String {
        format!(
            "{}{} {}",
            PROGRAM_DATA_LOG_PREFIX,
            STANDARD.encode(EVENT_TAG),
            STANDARD.encode(borsh::to_vec(event).unwrap())
        )
    }

    fn ledger_bytes(program_id: &Pubkey, user: &Pubkey, vault: &Pubkey) -> (Pubkey, Vec<u8>) {
        let (address, bump) = UserDeposit::find_address(program_id, user, vault);
        let mut ledger = UserDeposit::new(*user, *vault, bump);
        ledger.append(1, 1_000, 42).unwrap();
        (address, borsh::to_vec(&ledger).unwrap())
    }

    #[test]
    fn enumeration_drops_forged_records() {
        let program_id = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let other_vault = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let genuine = ledger_bytes(&program_id, &alice, &vault);
        // Bob's record copied to an address that is not his PDA.
        let (_, bob_data) = ledger_bytes(&program_id, &bob, &vault);
        let forged = (Pubkey::new_unique(), bob_data);
        let foreign = ledger_bytes(&program_id, &bob, &other_vault);
        let garbage = (Pubkey::new_unique(), vec![2u8, 1, 2, 3]);

        let scan = verified_user_deposits(
            &program_id,
            &vault,
            vec![genuine.clone(), forged.clone(), foreign.clone(), garbage.clone()],
        );
        assert_eq!(scan.verified.len(), 1);
        assert_eq!(scan.verified[0].0, genuine.0);
        assert_eq!(scan.verified[0].1.user, alice);
        assert_eq!(scan.verified[0].1.total_deposit_amount, 1_000);
        assert_eq!(
            scan.skipped,
            vec![
                (forged.0, SkipReason::NotCanonicalAddress),
                (foreign.0, SkipReason::OtherVault),
                (garbage.0, SkipReason::Undecodable),
            ]
        );
    }

    #[test]
    fn deposit_events_are_filtered_by_vault() {
        let vault = Pubkey::new_unique();
        let deposit = DepositEvent {
            user: Pubkey::new_unique(),
            vault,
            nft_amount: 2,
            deposit_amount: 2_000,
            is_whitelist: true,
            timestamp: 7,
        };
        let elsewhere = DepositEvent {
            vault: Pubkey::new_unique(),
            ..deposit.clone()
        };
        let increment = LaunchEvent::IncrementDeposit(IncrementDepositEvent {
            user: deposit.user,
            vault,
            deposit_index: 0,
            original_deposit_amount: 2_000,
            new_deposit_amount: 3_000,
            increment_amount: 1_000,
            timestamp: 8,
        });

        let logs = vec![
            "Program log: Instruction: Deposit".to_string(),
            log_line(&LaunchEvent::Deposit(deposit.clone())),
            log_line(&LaunchEvent::Deposit(elsewhere)),
            log_line(&increment),
            format!("{}{}", PROGRAM_DATA_LOG_PREFIX, STANDARD.encode(b"not ours")),
        ];

        assert_eq!(deposit_events(&logs, &vault), vec![deposit]);
        assert_eq!(events(&logs).len(), 3);
    }

    #[test]
    fn filter_offset_points_at_vault() {
        let program_id = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let (_, data) = ledger_bytes(&program_id, &Pubkey::new_unique(), &vault);
        let offset = user_deposit_filter_offset();
        assert_eq!(&data[offset..offset + 32], vault.as_ref());
    }
}
