//! End-to-end flows across the engine: register, fund, distribute, spend,
//! withdraw, checked against the ledger counters and the token balances.

use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_BATCH_SIZE;
use crate::engine::custody::memory::MemoryToken;
use crate::engine::custody::CustodyToken;
use crate::engine::distribution::{distribute_all, distribute_range};
use crate::engine::ledger::{balance_of, batch_info, reconcile, total_distributed, total_expected};
use crate::engine::principals::{register, remove, update_amount};
use crate::engine::transfer::transfer;
use crate::engine::treasury::{acknowledge_deposit, emergency_withdraw, withdraw_all};
use crate::error::{ErrorKind, VaultError};
use crate::state::{Registry, RoleSet, VaultState};

struct Vault {
    admin: Pubkey,
    state: VaultState,
    registry: Registry,
    token: MemoryToken,
}

impl Vault {
    fn new() -> Self {
        let admin = Pubkey::new_unique();
        Self {
            admin,
            state: VaultState {
                roles: RoleSet::with_admin(admin),
                ..VaultState::default()
            },
            registry: Registry::default(),
            token: MemoryToken::default(),
        }
    }

    fn register(&mut self, amount: u64) -> Pubkey {
        let id = Pubkey::new_unique();
        register(&self.admin, &mut self.state, &mut self.registry, id, amount).unwrap();
        id
    }

    fn deposit(&mut self, amount: u64) {
        acknowledge_deposit(&mut self.state, amount).unwrap();
        self.token.custody += amount;
    }

    fn distribute_all(&mut self) -> Result<u64, VaultError> {
        distribute_all(&self.admin, &mut self.state, &mut self.registry, &mut self.token)
            .map(|d| d.amount)
    }

    fn distribute_range(&mut self, start: u32, end: u32) -> Result<u64, VaultError> {
        distribute_range(
            &self.admin,
            &mut self.state,
            &mut self.registry,
            start,
            end,
            &mut self.token,
        )
        .map(|d| d.amount)
    }

    fn balances(&self) -> Vec<u64> {
        self.registry.entries.iter().map(|e| e.ledger_balance).collect()
    }

    fn assert_reconciled(&self) {
        let rec = reconcile(
            &self.state,
            &self.registry,
            self.token.custody_balance(),
            self.token.reserve_balance(),
        )
        .unwrap();
        assert!(rec.is_consistent(), "{rec:?}");
        assert_eq!(rec.reserve_balance, rec.outstanding);
        assert_eq!(rec.custody_balance, rec.expected_custody);
    }
}

#[test]
fn scenario_a_distribute_then_spend() {
    let mut v = Vault::new();
    let x = v.register(500);
    let y = v.register(600);
    let z = v.register(450);
    v.deposit(1_550);

    assert_eq!(v.distribute_all(), Ok(1_550));
    assert_eq!(balance_of(&v.registry, &x), 500);
    assert_eq!(balance_of(&v.registry, &y), 600);
    assert_eq!(balance_of(&v.registry, &z), 450);
    assert_eq!(total_distributed(&v.state), 1_550);
    assert_eq!(v.token.custody_balance(), 0);

    let w = Pubkey::new_unique();
    transfer(&x, &mut v.state, &mut v.registry, &w, 100, &mut v.token).unwrap();
    assert_eq!(balance_of(&v.registry, &x), 400);
    assert_eq!(v.token.balance_of(&w), 100);
    v.assert_reconciled();
}

#[test]
fn scenario_b_unfunded_distribution() {
    let mut v = Vault::new();
    let x = v.register(500);

    let err = v.distribute_all().unwrap_err();
    assert_eq!(err, VaultError::InsufficientFunds);
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    assert_eq!(v.registry.balance_of(&x), 0);
    assert_eq!(total_distributed(&v.state), 0);
}

#[test]
fn scenario_c_range_past_the_end() {
    let mut v = Vault::new();
    v.register(500);
    v.register(600);
    v.register(450);
    v.deposit(10_000);

    let err = v.distribute_range(0, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(v.balances(), vec![0, 0, 0]);
}

#[test]
fn distribute_all_moves_exactly_the_expected_total() {
    let mut v = Vault::new();
    for amount in [120, 80, 300, 45] {
        v.register(amount);
    }
    v.deposit(1_000);
    let expected = total_expected(&v.state);
    let before = v.balances();

    assert_eq!(v.distribute_all(), Ok(expected));

    let deltas: Vec<u64> = v
        .balances()
        .iter()
        .zip(before)
        .map(|(after, before)| after - before)
        .collect();
    let amounts: Vec<u64> = v.registry.entries.iter().map(|e| e.monthly_amount).collect();
    assert_eq!(deltas, amounts);
    assert_eq!(total_distributed(&v.state), expected);
    assert_eq!(v.token.custody_balance(), 1_000 - expected);
    v.assert_reconciled();
}

#[test]
fn disjoint_ranges_match_one_whole_distribution() {
    let n = MAX_BATCH_SIZE * 2 + 7;
    let amounts: Vec<u64> = (0..n as u64).map(|i| 10 + i % 13).collect();

    let mut whole = Vault::new();
    let mut batched = Vault::new();
    for &amount in &amounts {
        whole.register(amount);
        batched.register(amount);
    }
    // Tombstones inside a batch must not shift the other slots.
    for v in [&mut whole, &mut batched] {
        let (admin, gone) = (v.admin, v.registry.entries[3].identity);
        remove(&admin, &mut v.state, &mut v.registry, &gone).unwrap();
        v.deposit(1_000_000);
    }

    whole.distribute_all().unwrap();

    let info = batch_info(&batched.registry);
    assert_eq!(info.estimated_batches, 3);
    for batch in 0..info.estimated_batches {
        let start = batch * info.max_batch_size;
        let end = (start + info.max_batch_size).min(info.slot_count);
        batched.distribute_range(start, end).unwrap();
    }

    assert_eq!(whole.balances(), batched.balances());
    assert_eq!(whole.state.totals, batched.state.totals);
    assert_eq!(whole.token.custody, batched.token.custody);
    assert_eq!(whole.balances()[3], 0);
    batched.assert_reconciled();
}

#[test]
fn range_funds_checked_per_call() {
    let mut v = Vault::new();
    v.register(500);
    v.register(600);
    v.deposit(700);

    assert_eq!(v.distribute_range(0, 1), Ok(500));
    assert_eq!(v.distribute_range(1, 2), Err(VaultError::InsufficientFunds));
    assert_eq!(v.balances(), vec![500, 0]);
    v.deposit(400);
    assert_eq!(v.distribute_range(1, 2), Ok(600));
    v.assert_reconciled();
}

#[test]
fn emergency_withdraw_leaves_ledger_alone() {
    let mut v = Vault::new();
    let x = v.register(500);
    v.deposit(2_000);
    v.distribute_all().unwrap();
    let expected = total_expected(&v.state);

    let admin = v.admin;
    let w = emergency_withdraw(&admin, &mut v.state, 1_000, &mut v.token).unwrap();
    assert_eq!(w.custody_balance, 500);
    assert_eq!(
        emergency_withdraw(&admin, &mut v.state, 501, &mut v.token),
        Err(VaultError::InsufficientFunds)
    );
    let w = emergency_withdraw(&admin, &mut v.state, 500, &mut v.token).unwrap();
    assert_eq!(w.reserve_balance, 500);

    assert_eq!(v.token.custody_balance(), 0);
    assert_eq!(v.registry.balance_of(&x), 500);
    assert_eq!(total_expected(&v.state), expected);
    // Credited allowances stay spendable from the reserve.
    transfer(&x, &mut v.state, &mut v.registry, &Pubkey::new_unique(), 500, &mut v.token)
        .unwrap();
    v.assert_reconciled();
}

#[test]
fn amount_update_applies_from_next_distribution() {
    let mut v = Vault::new();
    let x = v.register(500);
    v.deposit(5_000);
    v.distribute_all().unwrap();

    let admin = v.admin;
    update_amount(&admin, &mut v.state, &mut v.registry, &x, 800).unwrap();
    assert_eq!(v.registry.balance_of(&x), 500);
    v.distribute_all().unwrap();
    assert_eq!(v.registry.balance_of(&x), 1_300);
    v.assert_reconciled();
}

#[test]
fn unauthorized_calls_change_nothing() {
    let mut v = Vault::new();
    let x = v.register(500);
    v.deposit(1_000);
    let stranger = Pubkey::new_unique();
    let state_before = v.state.clone();
    let registry_before = v.registry.clone();

    let results = [
        register(&stranger, &mut v.state, &mut v.registry, Pubkey::new_unique(), 1).map(|_| ()),
        update_amount(&stranger, &mut v.state, &mut v.registry, &x, 1).map(|_| ()),
        remove(&stranger, &mut v.state, &mut v.registry, &x).map(|_| ()),
        distribute_all(&stranger, &mut v.state, &mut v.registry, &mut v.token).map(|_| ()),
        distribute_range(&stranger, &mut v.state, &mut v.registry, 0, 1, &mut v.token).map(|_| ()),
        emergency_withdraw(&stranger, &mut v.state, 1, &mut v.token).map(|_| ()),
        withdraw_all(&stranger, &mut v.state, &mut v.token).map(|_| ()),
    ];

    for result in results {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Unauthorized);
    }
    assert_eq!(v.state.totals, state_before.totals);
    assert_eq!(v.state.busy, state_before.busy);
    assert_eq!(v.registry.entries, registry_before.entries);
    assert_eq!(v.token.custody, 1_000);
}

#[test]
fn withdraw_all_recovers_removed_principal_funds() {
    let mut v = Vault::new();
    let x = v.register(500);
    v.deposit(500);
    v.distribute_all().unwrap();
    let admin = v.admin;
    remove(&admin, &mut v.state, &mut v.registry, &x).unwrap();

    let w = Pubkey::new_unique();
    assert_eq!(
        transfer(&x, &mut v.state, &mut v.registry, &w, 500, &mut v.token),
        Err(VaultError::NotActivePrincipal)
    );
    assert_eq!(
        emergency_withdraw(&admin, &mut v.state, 500, &mut v.token),
        Err(VaultError::InsufficientFunds)
    );

    let out = withdraw_all(&admin, &mut v.state, &mut v.token).unwrap();
    assert_eq!(out.amount, 500);
    assert_eq!(out.reclaimed, 500);
    assert_eq!(v.token.balance_of(&admin), 500);
    assert_eq!(v.token.reserve_balance(), 0);
    assert_eq!(v.state.totals.total_reclaimed, 500);

    // The ledger still records the credit; the reserve no longer backs it.
    assert_eq!(balance_of(&v.registry, &x), 500);
    let rec = reconcile(&v.state, &v.registry, 0, 0).unwrap();
    assert_eq!(rec.shortfall, 500);
    assert!(!rec.is_consistent());

    assert_eq!(
        withdraw_all(&admin, &mut v.state, &mut v.token),
        Err(VaultError::NoBalanceToWithdraw)
    );
}

#[test]
fn unacknowledged_custody_funds_still_reconcile() {
    let mut v = Vault::new();
    v.register(500);
    v.token.custody += 1_000;

    assert_eq!(v.distribute_all(), Ok(500));
    assert_eq!(v.state.totals.total_deposited, 0);

    let rec = reconcile(
        &v.state,
        &v.registry,
        v.token.custody_balance(),
        v.token.reserve_balance(),
    )
    .unwrap();
    assert_eq!(rec.expected_custody, 0);
    assert_eq!(rec.custody_balance, 500);
    assert_eq!(rec.shortfall, 0);
    assert!(rec.is_consistent());
}
