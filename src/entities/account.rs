// 👤 Account Entity - Canonical username + validated password
//
// "Username is the VALUE users see, UUID is the IDENTITY"
//
// Problem solved:
// - "Jastine " and "jastine" must never become two accounts named "jastine"
// - Weak passwords never produce an account, and never burn a username
// - Normalize + reserve is one critical section, so concurrent callers
//   cannot both claim "jastine1"

use crate::error::{RegistrationError, UsernameConflict};
use crate::password;
use crate::username::{self, DEFAULT_MAX_SUGGESTIONS};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Mask character used when rendering passwords
pub const MASK_CHAR: char = '*';

/// Mask a password: one mask character per password character
pub fn mask_password(password: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(password.chars().count())
        .collect()
}

fn serialize_masked<S>(password: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&mask_password(password))
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity - one provisioned identity
///
/// Identity: UUID (never changes)
/// Value: normalized username, unique within its registry
///
/// Only `AccountRegistry::create_account` builds these, and they are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: String,
    normalized_username: String,
    #[serde(serialize_with = "serialize_masked")]
    password: String,
    created_at: DateTime<Utc>,
}

impl Account {
    fn new(normalized_username: String, password: String) -> Self {
        Account {
            id: uuid::Uuid::new_v4().to_string(),
            normalized_username,
            password,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn normalized_username(&self) -> &str {
        &self.normalized_username
    }

    /// Raw password, stored verbatim (no hashing in this crate)
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn masked_password(&self) -> String {
        mask_password(&self.password)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Username: {} | Password: {} (meets strength requirements)",
            self.normalized_username,
            self.masked_password()
        )
    }
}

// ============================================================================
// ACCOUNT REGISTRY
// ============================================================================

#[derive(Debug, Default)]
struct RegistryState {
    /// Every normalized username ever issued
    assigned_usernames: HashSet<String>,

    /// Accounts in creation order (append-only, never delete)
    accounts: Vec<Account>,
}

/// Registry of all accounts created in one session
///
/// Explicitly constructed and passed around, never global. Both collections
/// live behind one lock so `assigned_usernames` always equals the set of
/// usernames over `accounts`.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    state: RwLock<RegistryState>,
}

impl AccountRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        AccountRegistry {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Normalize the username, validate the password, then reserve both
    ///
    /// On a weak password nothing is reserved or recorded. If the raw username,
    /// lowercased, was already reserved verbatim, the error also carries a
    /// conflict advisory with suggested alternatives.
    pub fn create_account(
        &self,
        raw_username: &str,
        password: &str,
    ) -> Result<Account, RegistrationError> {
        let mut state = self.state.write();

        let normalized = username::normalize(raw_username, &state.assigned_usernames);

        let report = password::evaluate(password);
        if !report.is_strong() {
            tracing::warn!(
                raw_username = %raw_username,
                reason = %report.summary(),
                "weak password, account not created"
            );

            let conflict = Self::conflict_advisory(raw_username, &state.assigned_usernames);
            if let Some(conflict) = &conflict {
                tracing::warn!(
                    raw_username = %raw_username,
                    suggestions = %conflict.suggestions.join(", "),
                    "username conflict"
                );
            }

            return Err(RegistrationError::WeakPassword {
                raw_username: raw_username.to_string(),
                violations: report.violations,
                conflict,
            });
        }

        let account = Account::new(normalized, password.to_string());
        state
            .assigned_usernames
            .insert(account.normalized_username.clone());
        state.accounts.push(account.clone());

        tracing::info!(
            username = %account.normalized_username,
            id = %account.id,
            "account created"
        );

        Ok(account)
    }

    /// Attempt every registration in order; failures do not stop the batch
    pub fn create_accounts<I, U, P>(&self, registrations: I) -> Vec<Result<Account, RegistrationError>>
    where
        I: IntoIterator<Item = (U, P)>,
        U: AsRef<str>,
        P: AsRef<str>,
    {
        registrations
            .into_iter()
            .map(|(raw_username, password)| {
                self.create_account(raw_username.as_ref(), password.as_ref())
            })
            .collect()
    }

    /// Fires only when the lowercased raw name is itself already reserved
    fn conflict_advisory(
        raw_username: &str,
        assigned: &HashSet<String>,
    ) -> Option<UsernameConflict> {
        if !assigned.contains(&raw_username.to_lowercase()) {
            return None;
        }

        let base = username::advisory_base(raw_username);
        Some(UsernameConflict {
            raw_username: raw_username.to_string(),
            suggestions: username::suggest_alternatives(&base, assigned, DEFAULT_MAX_SUGGESTIONS),
        })
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> Vec<Account> {
        self.state.read().accounts.clone()
    }

    /// Snapshot of every issued username
    pub fn assigned_usernames(&self) -> HashSet<String> {
        self.state.read().assigned_usernames.clone()
    }

    /// Find account by normalized username (exact match)
    pub fn find_by_username(&self, normalized_username: &str) -> Option<Account> {
        self.state
            .read()
            .accounts
            .iter()
            .find(|a| a.normalized_username == normalized_username)
            .cloned()
    }

    pub fn contains_username(&self, normalized_username: &str) -> bool {
        self.state.read().assigned_usernames.contains(normalized_username)
    }

    pub fn count(&self) -> usize {
        self.state.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
