//! Integration tests for salt loading and mppass derivation through the
//! public library API.

use std::fs;

use mppass::crypto::{derive, verify, Username, MPPASS_LEN};
use mppass::errors::MppassError;
use mppass::salt::{Salt, SaltStore};
use tempfile::TempDir;

fn store_with(contents: &str) -> (TempDir, SaltStore) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.salt");
    fs::write(&path, contents).unwrap();
    (dir, SaltStore::new(path))
}

// ---------------------------------------------------------------------------
// Load, then derive
// ---------------------------------------------------------------------------

#[test]
fn loaded_salt_derives_known_fixture() {
    let (_dir, store) = store_with("ABCDEFGHIJKLMNOP\n");
    let salt = store.load().expect("salt should load");

    let mppass = derive(&salt, &Username::parse("alice").unwrap());
    assert_eq!(mppass.to_string(), "d1547afecdf3866ce5b6508fc347ce45");
}

#[test]
fn whitespace_around_salt_does_not_change_output() {
    let (_a, padded) = store_with("\t ABCDEFGHIJKLMNOP \r\n");
    let (_b, plain) = store_with("ABCDEFGHIJKLMNOP");
    let user = Username::parse("alice").unwrap();

    assert_eq!(
        derive(&padded.load().unwrap(), &user),
        derive(&plain.load().unwrap(), &user)
    );
}

#[test]
fn distinct_usernames_give_distinct_mppasses() {
    let salt = Salt::parse("0123456789abcdef").unwrap();
    let names = ["alice", "bob", "carol", "Alice", "alice1", "1alice"];

    let derived: Vec<String> = names
        .iter()
        .map(|n| derive(&salt, &Username::parse(n).unwrap()).to_string())
        .collect();

    for (i, a) in derived.iter().enumerate() {
        assert_eq!(a.len(), MPPASS_LEN);
        for b in &derived[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn salt_comes_before_username() {
    // "ABCDEFGHIJKLMNOP" + "alice" must not hash like "alice" + salt.
    let salt = Salt::parse("ABCDEFGHIJKLMNOP").unwrap();
    let mppass = derive(&salt, &Username::parse("alice").unwrap());
    assert_ne!(mppass.as_str(), "31ef0d6074c3baea4340f56898e952c0");
    assert_eq!(mppass.as_str(), "d1547afecdf3866ce5b6508fc347ce45");
}

#[test]
fn verify_round_trips_with_derive() {
    let salt = Salt::parse("ABCDEFGHIJKLMNOP").unwrap();
    let user = Username::parse("Notch").unwrap();
    let mppass = derive(&salt, &user);

    assert!(verify(&salt, &user, mppass.as_str()));
    assert!(!verify(&salt, &Username::parse("notch").unwrap(), mppass.as_str()));
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn missing_salt_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.salt");

    let err = SaltStore::new(&path).load().unwrap_err();
    assert!(matches!(err, MppassError::SaltNotFound(p) if p == path));
}

#[test]
fn wrong_length_salts_are_invalid() {
    for contents in ["ABCDEFGHIJKLMNO", "ABCDEFGHIJKLMNOPQ", "", "\n\n"] {
        let (_dir, store) = store_with(contents);
        let err = store.load().unwrap_err();
        assert!(
            matches!(err, MppassError::InvalidSaltFormat { expected: 16 }),
            "content {contents:?} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn salt_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    let err = SaltStore::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, MppassError::Io(_)));
}
