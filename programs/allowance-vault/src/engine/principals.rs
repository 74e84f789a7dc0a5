//! Principal registry operations. Every path validates fully before the first
//! write, so a failed call leaves the registry and totals untouched.

use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_PRINCIPALS;
use crate::engine::access::require_operator;
use crate::error::VaultError;
use crate::state::{PrincipalEntry, Registry, VaultState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    pub index: u32,
    /// Balance carried over from an earlier registration of the same identity.
    pub retained_balance: u64,
    pub reactivated: bool,
    pub total_expected: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmountUpdate {
    pub old_amount: u64,
    pub new_amount: u64,
    pub total_expected: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    pub index: u32,
    pub retained_balance: u64,
    pub total_expected: u64,
}

/// Admin or Staff. A previously removed identity is reactivated in its
/// original slot and keeps its ledger balance.
pub fn register(
    caller: &Pubkey,
    state: &mut VaultState,
    registry: &mut Registry,
    identity: Pubkey,
    monthly_amount: u64,
) -> Result<Registration, VaultError> {
    require_operator(&state.roles, caller)?;
    if identity == Pubkey::default() {
        return Err(VaultError::InvalidPubkey);
    }
    if monthly_amount == 0 {
        return Err(VaultError::InvalidAmount);
    }

    let total_expected = state
        .totals
        .total_expected_monthly
        .checked_add(monthly_amount)
        .ok_or(VaultError::MathOverflow)?;
    let active_count = registry
        .active_count
        .checked_add(1)
        .ok_or(VaultError::MathOverflow)?;

    let (index, retained_balance, reactivated) = match registry.position(&identity) {
        Some(index) => {
            let entry = &mut registry.entries[index];
            if entry.is_active {
                return Err(VaultError::DuplicatePrincipal);
            }
            entry.monthly_amount = monthly_amount;
            entry.is_active = true;
            (index, entry.ledger_balance, true)
        }
        None => {
            if registry.slot_count() >= MAX_PRINCIPALS {
                return Err(VaultError::RegistryFull);
            }
            registry.entries.push(PrincipalEntry {
                identity,
                monthly_amount,
                ledger_balance: 0,
                is_active: true,
            });
            (registry.slot_count() - 1, 0, false)
        }
    };

    registry.active_count = active_count;
    state.totals.total_expected_monthly = total_expected;

    Ok(Registration {
        index: index as u32,
        retained_balance,
        reactivated,
        total_expected,
    })
}

/// Admin or Staff. Adjusts the expected total by the delta; the ledger
/// balance is not touched.
pub fn update_amount(
    caller: &Pubkey,
    state: &mut VaultState,
    registry: &mut Registry,
    identity: &Pubkey,
    new_amount: u64,
) -> Result<AmountUpdate, VaultError> {
    require_operator(&state.roles, caller)?;
    if new_amount == 0 {
        return Err(VaultError::InvalidAmount);
    }
    let index = active_position(registry, identity)?;
    let old_amount = registry.entries[index].monthly_amount;

    let total_expected = state
        .totals
        .total_expected_monthly
        .checked_sub(old_amount)
        .and_then(|t| t.checked_add(new_amount))
        .ok_or(VaultError::MathOverflow)?;

    registry.entries[index].monthly_amount = new_amount;
    state.totals.total_expected_monthly = total_expected;

    Ok(AmountUpdate {
        old_amount,
        new_amount,
        total_expected,
    })
}

/// Admin or Staff. Tombstones the slot: the index stays occupied and the
/// ledger balance is retained.
pub fn remove(
    caller: &Pubkey,
    state: &mut VaultState,
    registry: &mut Registry,
    identity: &Pubkey,
) -> Result<Removal, VaultError> {
    require_operator(&state.roles, caller)?;
    let index = active_position(registry, identity)?;
    let entry = registry.entries[index];

    let total_expected = state
        .totals
        .total_expected_monthly
        .checked_sub(entry.monthly_amount)
        .ok_or(VaultError::MathOverflow)?;
    let active_count = registry
        .active_count
        .checked_sub(1)
        .ok_or(VaultError::MathOverflow)?;

    registry.entries[index].is_active = false;
    registry.active_count = active_count;
    state.totals.total_expected_monthly = total_expected;

    Ok(Removal {
        index: index as u32,
        retained_balance: entry.ledger_balance,
        total_expected,
    })
}

fn active_position(registry: &Registry, identity: &Pubkey) -> Result<usize, VaultError> {
    registry
        .position(identity)
        .filter(|&i| registry.entries[i].is_active)
        .ok_or(VaultError::PrincipalNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Role, RoleSet};

    fn setup() -> (Pubkey, VaultState, Registry) {
        let admin = Pubkey::new_unique();
        let state = VaultState {
            roles: RoleSet::with_admin(admin),
            ..VaultState::default()
        };
        (admin, state, Registry::default())
    }

    fn live_sum(registry: &Registry) -> u64 {
        registry.expected_sum(0..registry.slot_count()).unwrap()
    }

    #[test]
    fn register_appends_and_counts() {
        let (admin, mut state, mut registry) = setup();
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();

        let rx = register(&admin, &mut state, &mut registry, x, 500).unwrap();
        let ry = register(&admin, &mut state, &mut registry, y, 600).unwrap();

        assert_eq!(rx.index, 0);
        assert_eq!(ry.index, 1);
        assert!(!ry.reactivated);
        assert_eq!(registry.count(), 2);
        assert_eq!(state.totals.total_expected_monthly, 1100);
        assert_eq!(registry.balance_of(&x), 0);
    }

    #[test]
    fn staff_may_register_strangers_may_not() {
        let (_admin, mut state, mut registry) = setup();
        let staff = Pubkey::new_unique();
        state.roles.members_mut(Role::Staff).push(staff);

        register(&staff, &mut state, &mut registry, Pubkey::new_unique(), 10).unwrap();

        let stranger = Pubkey::new_unique();
        let err = register(&stranger, &mut state, &mut registry, Pubkey::new_unique(), 10);
        assert_eq!(err, Err(VaultError::UnauthorizedOperator));
        assert_eq!(registry.count(), 1);
        assert_eq!(state.totals.total_expected_monthly, 10);
    }

    #[test]
    fn duplicate_registration_leaves_counters_unchanged() {
        let (admin, mut state, mut registry) = setup();
        let x = Pubkey::new_unique();
        register(&admin, &mut state, &mut registry, x, 500).unwrap();
        let totals = state.totals;

        assert_eq!(
            register(&admin, &mut state, &mut registry, x, 600),
            Err(VaultError::DuplicatePrincipal)
        );
        assert_eq!(state.totals, totals);
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get(&x).unwrap().monthly_amount, 500);
    }

    #[test]
    fn register_rejects_null_identity_and_zero_amount() {
        let (admin, mut state, mut registry) = setup();
        assert_eq!(
            register(&admin, &mut state, &mut registry, Pubkey::default(), 500),
            Err(VaultError::InvalidPubkey)
        );
        assert_eq!(
            register(&admin, &mut state, &mut registry, Pubkey::new_unique(), 0),
            Err(VaultError::InvalidAmount)
        );
        assert_eq!(registry.slot_count(), 0);
    }

    #[test]
    fn update_and_remove_track_the_live_sum() {
        let (admin, mut state, mut registry) = setup();
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        register(&admin, &mut state, &mut registry, x, 500).unwrap();
        register(&admin, &mut state, &mut registry, y, 600).unwrap();

        let update = update_amount(&admin, &mut state, &mut registry, &x, 700).unwrap();
        assert_eq!((update.old_amount, update.total_expected), (500, 1300));
        assert_eq!(state.totals.total_expected_monthly, live_sum(&registry));

        let removal = remove(&admin, &mut state, &mut registry, &x).unwrap();
        assert_eq!(removal.total_expected, 600);
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.slot_count(), 2);
        assert_eq!(state.totals.total_expected_monthly, live_sum(&registry));
        // y keeps index 1 after x is removed.
        assert_eq!(registry.at(1).unwrap().identity, y);
    }

    #[test]
    fn operations_on_unknown_or_removed_principals_fail() {
        let (admin, mut state, mut registry) = setup();
        let x = Pubkey::new_unique();
        assert_eq!(
            update_amount(&admin, &mut state, &mut registry, &x, 10),
            Err(VaultError::PrincipalNotFound)
        );
        assert_eq!(
            remove(&admin, &mut state, &mut registry, &x),
            Err(VaultError::PrincipalNotFound)
        );

        register(&admin, &mut state, &mut registry, x, 500).unwrap();
        remove(&admin, &mut state, &mut registry, &x).unwrap();
        assert_eq!(
            remove(&admin, &mut state, &mut registry, &x),
            Err(VaultError::PrincipalNotFound)
        );
    }

    #[test]
    fn reregistration_reuses_slot_and_keeps_balance() {
        let (admin, mut state, mut registry) = setup();
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        register(&admin, &mut state, &mut registry, x, 500).unwrap();
        register(&admin, &mut state, &mut registry, y, 600).unwrap();
        registry.entries[0].ledger_balance = 120;

        remove(&admin, &mut state, &mut registry, &x).unwrap();
        let again = register(&admin, &mut state, &mut registry, x, 300).unwrap();

        assert_eq!(again.index, 0);
        assert!(again.reactivated);
        assert_eq!(again.retained_balance, 120);
        assert_eq!(registry.slot_count(), 2);
        assert_eq!(registry.count(), 2);
        assert_eq!(state.totals.total_expected_monthly, 900);
    }

    #[test]
    fn registry_capacity_is_enforced() {
        let (admin, mut state, mut registry) = setup();
        for _ in 0..MAX_PRINCIPALS {
            register(&admin, &mut state, &mut registry, Pubkey::new_unique(), 1).unwrap();
        }
        assert_eq!(
            register(&admin, &mut state, &mut registry, Pubkey::new_unique(), 1),
            Err(VaultError::RegistryFull)
        );
        assert_eq!(state.totals.total_expected_monthly, MAX_PRINCIPALS as u64);
    }

    #[test]
    fn expected_total_matches_live_sum_over_mixed_sequence() {
        let (admin, mut state, mut registry) = setup();
        let ids: Vec<Pubkey> = (0..8).map(|_| Pubkey::new_unique()).collect();

        for (i, id) in ids.iter().enumerate() {
            register(&admin, &mut state, &mut registry, *id, 100 + i as u64).unwrap();
        }
        for id in ids.iter().step_by(3) {
            remove(&admin, &mut state, &mut registry, id).unwrap();
            assert_eq!(state.totals.total_expected_monthly, live_sum(&registry));
        }
        for (i, id) in ids.iter().enumerate().skip(1).step_by(2) {
            let _ = update_amount(&admin, &mut state, &mut registry, id, 1_000 * i as u64);
            assert_eq!(state.totals.total_expected_monthly, live_sum(&registry));
        }
        register(&admin, &mut state, &mut registry, ids[0], 42).unwrap();
        assert_eq!(state.totals.total_expected_monthly, live_sum(&registry));
        assert_eq!(registry.count(), registry.all().len());
    }
}
