// Registry scenarios: the sample session, uniqueness and atomic failures

use account_normalizer::{
    is_canonical, normalize, suggest_alternatives, AccountRegistry, RegistrationError,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_trailing_space_is_trimmed() {
    let registry = AccountRegistry::new();

    let account = registry.create_account("Jastine ", "S3cur3Pa$$").unwrap();

    assert_eq!(account.normalized_username(), "jastine");
}

#[test]
fn test_weak_password_after_existing_account() {
    let registry = AccountRegistry::new();
    registry.create_account("Jastine ", "S3cur3Pa$$").unwrap();

    let result = registry.create_account("jastine", "weak");

    match result {
        Err(RegistrationError::WeakPassword { raw_username, violations, conflict }) => {
            assert_eq!(raw_username, "jastine");
            assert_eq!(violations.len(), 1);
            // "jastine" was reserved verbatim, so the advisory fires
            let conflict = conflict.expect("conflict advisory");
            assert_eq!(conflict.suggestions, vec!["jastine1", "jastine2", "jastine3"]);
        }
        Ok(account) => panic!("expected weak password, got {}", account),
    }

    assert_eq!(registry.assigned_usernames(), set(&["jastine"]));
}

#[test]
fn test_distinct_base_does_not_collide() {
    let registry = AccountRegistry::new();
    registry.create_account("Jastine ", "S3cur3Pa$$").unwrap();

    let account = registry.create_account("JastineNicole", "V3ryS3cure!").unwrap();

    assert_eq!(account.normalized_username(), "jastinenicole");
}

#[test]
fn test_suggestions_skip_reserved() {
    assert_eq!(
        suggest_alternatives("jastine", &set(&["jastine", "jastine1"]), 2),
        vec!["jastine2", "jastine3"]
    );
}

#[test]
fn test_sample_session() {
    let registry = AccountRegistry::new();

    assert!(registry.create_account("Jastine ", "S3cur3Pa$$").is_ok());
    assert!(registry.create_account("Nicole", "J@ne1234").is_ok());

    let duplicate = registry.create_account("jastine", "An0therPa$$").unwrap();
    assert_eq!(duplicate.normalized_username(), "jastine1");

    assert!(registry.create_account("mochi", "weak").is_err());
    assert!(registry.create_account("JastineNicole", "V3ryS3cure!").is_ok());

    let names: Vec<String> = registry
        .accounts()
        .iter()
        .map(|a| a.normalized_username().to_string())
        .collect();
    assert_eq!(names, vec!["jastine", "nicole", "jastine1", "jastinenicole"]);
}

#[test]
fn test_failure_never_mutates() {
    let registry = AccountRegistry::new();
    registry.create_account("alice", "V3ryS3cure!").unwrap();
    registry.create_account("bob", "V3ryS3cure!").unwrap();

    let usernames_before = registry.assigned_usernames();
    let accounts_before = registry.accounts();

    for (raw, password) in [
        ("alice", ""),
        ("carol", "       "),
        ("dave", "Ab1!xY2"),
        ("erin", "Zz9#Password1!Qq7&Ww"),
        ("frank", "abcdefgh12"),
    ] {
        assert!(registry.create_account(raw, password).is_err());
    }

    assert_eq!(registry.assigned_usernames(), usernames_before);
    assert_eq!(registry.accounts(), accounts_before);
}

#[test]
fn test_assigned_set_matches_accounts() {
    let registry = AccountRegistry::new();
    for (raw, password) in [
        ("Jastine ", "S3cur3Pa$$"),
        ("jastine", "weak"),
        ("JASTINE", "V3ryS3cure!"),
        ("!!!", "V3ryS3cure!"),
        ("???", "V3ryS3cure!"),
    ] {
        let _ = registry.create_account(raw, password);
    }

    let from_accounts: HashSet<String> = registry
        .accounts()
        .iter()
        .map(|a| a.normalized_username().to_string())
        .collect();

    assert_eq!(from_accounts, registry.assigned_usernames());
    assert_eq!(from_accounts.len(), registry.count());
}

#[test]
fn test_normalize_sequence_is_unique() {
    let mut existing = HashSet::new();
    let raws = ["Sam", "sam", "SAM ", "s.a.m", "s-a-m", "sam!", "", "  ", "sam1", "Sam"];

    let mut issued = Vec::new();
    for raw in raws.iter().cycle().take(50) {
        let name = normalize(raw, &existing);
        existing.insert(name.clone());
        issued.push(name);
    }

    let distinct: HashSet<&String> = issued.iter().collect();
    assert_eq!(distinct.len(), issued.len());
}

#[test]
fn test_canonical_names_stay_put() {
    let existing = set(&["other"]);
    for name in ["sam", "s-a-m", "user_42", "josé"] {
        assert!(is_canonical(name));
        assert_eq!(normalize(name, &existing), name);
    }
}

#[test]
fn test_concurrent_registration_yields_unique_names() {
    let registry = Arc::new(AccountRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..25 {
                    registry.create_account("Jastine", "S3cur3Pa$$").unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.count(), 200);
    assert_eq!(registry.assigned_usernames().len(), 200);
    assert!(registry.contains_username("jastine"));
    assert!(registry.contains_username("jastine199"));
    assert!(!registry.contains_username("jastine200"));
}
