use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter22"),
        Ok(LoginRequest { email: "user@example.com".to_owned(), password: "hunter22".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("a@b.com", " pw ").unwrap();
    assert_eq!(request.password, " pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("   ", "pw"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Please fill in all fields"));
}

fn make_user(id: i64) -> User {
    User {
        id,
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

#[test]
fn accept_profile_passes_positive_id() {
    assert_eq!(accept_profile(make_user(7)), Ok(make_user(7)));
}

#[test]
fn accept_profile_rejects_non_positive_id() {
    assert_eq!(accept_profile(make_user(0)), Err(INVALID_PROFILE));
    assert_eq!(accept_profile(make_user(-3)), Err("Login failed: server returned an invalid profile"));
}

#[test]
fn rejected_profile_leaves_session_signed_out() {
    use crate::state::session::SessionStore;
    use crate::util::storage::MemoryStorage;

    let mut store = SessionStore::new(MemoryStorage::new());
    store.initialize();
    if let Ok(user) = accept_profile(make_user(0)) {
        store.login(user);
    }
    assert!(!store.read().authenticated);
    assert_eq!(store.read().profile, None);
}
