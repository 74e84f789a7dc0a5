pub mod initialize_vault;
pub mod register_principal;
pub mod update_principal_amount;
pub mod remove_principal;
pub mod manage_roles;
pub mod deposit;
pub mod distribute_all;
pub mod distribute_range;
pub mod transfer_allowance;
pub mod emergency_withdraw;
pub mod emit_vault_snapshot;
pub mod emit_principal_info;

pub use initialize_vault::*;
pub use register_principal::*;
pub use update_principal_amount::*;
pub use remove_principal::*;
pub use manage_roles::*;
pub use deposit::*;
pub use distribute_all::*;
pub use distribute_range::*;
pub use transfer_allowance::*;
pub use emergency_withdraw::*;
pub use emit_vault_snapshot::*;
pub use emit_principal_info::*;
