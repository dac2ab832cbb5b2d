// Entity Models
// Following the identity/value split: "Identity persists, values change"
//
// Account has:
// - Stable identity (UUID) that NEVER changes
// - Canonical username value, unique within its registry
// - Registry that owns uniqueness and creation

pub mod account;

pub use account::{mask_password, Account, AccountRegistry, MASK_CHAR};
