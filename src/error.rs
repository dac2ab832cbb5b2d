use crate::password::PolicyViolation;
use serde::Serialize;
use thiserror::Error;

/// Advisory raised when a raw username matches one already reserved verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsernameConflict {
    pub raw_username: String,
    pub suggestions: Vec<String>,
}

impl std::fmt::Display for UsernameConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Username conflict for '{}'. Suggestions: {}",
            self.raw_username,
            self.suggestions.join(", ")
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Weak password for '{raw_username}'. Password must be at least 8 characters with multiple character types")]
    WeakPassword {
        raw_username: String,
        violations: Vec<PolicyViolation>,
        conflict: Option<UsernameConflict>,
    },
}

impl RegistrationError {
    /// Raw username as the caller supplied it
    pub fn raw_username(&self) -> &str {
        match self {
            RegistrationError::WeakPassword { raw_username, .. } => raw_username,
        }
    }

    pub fn conflict(&self) -> Option<&UsernameConflict> {
        match self {
            RegistrationError::WeakPassword { conflict, .. } => conflict.as_ref(),
        }
    }
}
