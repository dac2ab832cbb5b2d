// 🔐 Password Policy - Fixed strength rules
//
// A password is strong when it:
// - is at least 8 characters and not blank
// - contains no common word from the deny-list (case-insensitive substring)
// - uses at least 3 of 4 character classes (upper, lower, digit, special)
//
// Thresholds are constants; nothing here is configurable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Character classes a strong password must use
pub const MIN_CHARACTER_CLASSES: usize = 3;

/// Substrings that disqualify a password regardless of anything else
pub const COMMON_WORDS: [&str; 10] = [
    "password", "qwerty", "123456", "letmein", "welcome",
    "admin", "login", "master", "hello", "sunshine",
];

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Decimal digits only; "½" or "²" are not digits
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Nd}").unwrap());

static LETTER_OR_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}]").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    /// Scan a password, first matching class wins per character
    pub fn scan(password: &str) -> Self {
        let mut classes = CharacterClasses::default();

        let mut buf = [0u8; 4];
        for c in password.chars() {
            let ch = c.encode_utf8(&mut buf);

            if c.is_uppercase() {
                classes.uppercase = true;
            } else if c.is_lowercase() {
                classes.lowercase = true;
            } else if DECIMAL_DIGIT.is_match(ch) {
                classes.digit = true;
            } else if !LETTER_OR_DIGIT.is_match(ch) {
                classes.special = true;
            }
        }

        classes
    }

    /// Number of classes present (0-4)
    pub fn count(&self) -> usize {
        [self.uppercase, self.lowercase, self.digit, self.special]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

// ============================================================================
// VIOLATIONS & REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyViolation {
    /// Empty or whitespace only
    Blank,

    /// Fewer than MIN_PASSWORD_LENGTH characters
    TooShort { length: usize },

    /// Contains a deny-listed word
    CommonWord { word: String },

    /// Fewer than MIN_CHARACTER_CLASSES classes
    TooFewCharacterClasses { found: usize },
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyViolation::Blank => write!(f, "password is empty or blank"),
            PolicyViolation::TooShort { length } => write!(
                f,
                "password has {} characters, at least {} required",
                length, MIN_PASSWORD_LENGTH
            ),
            PolicyViolation::CommonWord { word } => {
                write!(f, "password contains common word '{}'", word)
            }
            PolicyViolation::TooFewCharacterClasses { found } => write!(
                f,
                "password uses {} character types, at least {} required",
                found, MIN_CHARACTER_CLASSES
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
    pub length: usize,
    pub classes: CharacterClasses,
    pub violations: Vec<PolicyViolation>,
}

impl PasswordReport {
    pub fn is_strong(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_strong() {
            return format!(
                "Strong: {} characters, {} character types",
                self.length,
                self.classes.count()
            );
        }

        let reasons: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        format!("Weak: {}", reasons.join("; "))
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// First deny-listed word found in the password, if any
pub fn find_common_word(password: &str) -> Option<&'static str> {
    let lowered = password.to_lowercase();
    COMMON_WORDS.iter().copied().find(|word| lowered.contains(word))
}

/// Evaluate a password and collect the reason it fails, if it does
///
/// Checks run in order (blank, length, deny-list, classes) and stop at the
/// first failing gate.
pub fn evaluate(password: &str) -> PasswordReport {
    let length = password.chars().count();
    let classes = CharacterClasses::scan(password);
    let mut violations = Vec::new();

    if password.trim().is_empty() {
        violations.push(PolicyViolation::Blank);
    } else if length < MIN_PASSWORD_LENGTH {
        violations.push(PolicyViolation::TooShort { length });
    } else if let Some(word) = find_common_word(password) {
        violations.push(PolicyViolation::CommonWord {
            word: word.to_string(),
        });
    } else if classes.count() < MIN_CHARACTER_CLASSES {
        violations.push(PolicyViolation::TooFewCharacterClasses {
            found: classes.count(),
        });
    }

    PasswordReport {
        length,
        classes,
        violations,
    }
}

pub fn is_strong(password: &str) -> bool {
    evaluate(password).is_strong()
}

/// Stateless facade over the policy functions
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub fn new() -> Self {
        PasswordPolicy
    }

    pub fn is_strong(&self, password: &str) -> bool {
        is_strong(password)
    }

    pub fn evaluate(&self, password: &str) -> PasswordReport {
        evaluate(password)
    }
}

// ============================================================================
// TESTS
// ============================================================================
