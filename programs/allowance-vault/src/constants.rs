//! Program-wide constants.

/// Registry slot capacity. Slots are never reclaimed, so this bounds every
/// identity ever registered. Sized to keep the registry account under the
/// 10 KiB limit for accounts created through CPI.
pub const MAX_PRINCIPALS: usize = 150;

/// Max registry slots covered by one `distribute_range` call.
pub const MAX_BATCH_SIZE: usize = 50;

/// Max identities holding the Admin role.
pub const MAX_ADMINS: usize = 4;

/// Max identities holding the Staff role.
pub const MAX_STAFF: usize = 16;
