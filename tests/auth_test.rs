//! Authentication tests — password hashing, verification, and the user model.

mod common;

use common::*;
use endringslogg::auth::password;
use endringslogg::models::user::{self, NewUser};

const TEST_USERNAME: &str = "testadmin";
const TEST_PASSWORD: &str = "password123";

fn new_user(username: &str, hash: String) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: hash,
        display_name: "Test Admin".to_string(),
        is_admin: true,
    }
}

#[test]
fn test_hash_and_verify_password() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    assert!(hash.len() > 20);

    assert!(password::verify_password(TEST_PASSWORD, &hash).expect("Verification failed"));
    assert!(!password::verify_password("wrongpassword", &hash).expect("Verification failed"));
}

#[test]
fn test_create_and_find_user() {
    let (_dir, conn) = setup_test_db();

    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let id = user::create(&conn, &new_user(TEST_USERNAME, hash)).expect("Failed to create user");
    assert!(id > 0);

    let found = user::find_by_username(&conn, TEST_USERNAME)
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found.id, id);
    assert_eq!(found.username, TEST_USERNAME);
    assert!(found.is_admin);
    assert!(password::verify_password(TEST_PASSWORD, &found.password_hash).expect("verify"));
}

#[test]
fn test_find_unknown_user_returns_none() {
    let (_dir, conn) = setup_test_db();

    let found = user::find_by_username(&conn, "nobody").expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_duplicate_username_rejected() {
    let (_dir, conn) = setup_test_db();

    let hash = password::hash_password(TEST_PASSWORD).expect("hash");
    user::create(&conn, &new_user(TEST_USERNAME, hash.clone())).expect("first create");

    let result = user::create(&conn, &new_user(TEST_USERNAME, hash));
    assert!(result.is_err(), "Should fail on duplicate username");

    assert_eq!(user::count(&conn).expect("count"), 1);
}
