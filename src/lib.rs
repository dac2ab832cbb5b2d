// Account Normalizer - Core Library
// Exposes all modules for use in the CLI and tests

pub mod error;
pub mod username;   // Canonical usernames + collision resolution
pub mod password;   // Fixed strength policy
pub mod entities;   // Account entity + registry
pub mod import;     // CSV registrations
pub mod logging;

// Re-export commonly used types
pub use error::{RegistrationError, UsernameConflict};
pub use username::{
    UsernameNormalizer,
    canonicalize, normalize, suggest_alternatives, is_canonical,
    DEFAULT_MAX_SUGGESTIONS,
};
pub use password::{
    PasswordPolicy, PasswordReport, PolicyViolation, CharacterClasses,
    evaluate, is_strong,
    COMMON_WORDS, MIN_PASSWORD_LENGTH, MIN_CHARACTER_CLASSES,
};
pub use entities::{Account, AccountRegistry};
pub use import::{Registration, load_registrations};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
