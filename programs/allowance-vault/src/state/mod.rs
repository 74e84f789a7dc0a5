pub mod registry;
pub mod roles;
pub mod vault_state;

pub use registry::*;
pub use roles::*;
pub use vault_state::*;
