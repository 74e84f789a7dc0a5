pub mod guard;
pub mod spl_custody;

pub use guard::BusyGuard;
pub use spl_custody::SplCustody;
