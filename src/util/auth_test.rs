use super::*;

#[test]
fn redirect_options_replace_history_entry() {
    let options = redirect_options();
    assert!(options.replace);
    assert!(options.scroll);
}

#[test]
fn denied_guard_targets_login_page() {
    assert_eq!(GuardState::Denied.redirect_target(), Some(crate::config::LOGIN_PATH));
}

#[test]
fn logout_yields_one_redirect_from_the_guard() {
    use crate::net::types::User;
    use crate::state::guard::GuardTracker;
    use crate::state::session::{SessionContext, SessionStore};
    use crate::util::storage::MemoryStorage;

    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::new(SessionStore::new(MemoryStorage::new()));
        session.initialize();
        session.login(User {
            id: 7,
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            email: "a@b.com".to_owned(),
        });
        let mut tracker = GuardTracker::new(&session.snapshot_untracked());
        assert_eq!(tracker.state().redirect_target(), None);

        session.logout();
        let mut redirects = Vec::new();
        // A second notification of the same snapshot must not redirect again.
        for _ in 0..2 {
            let before = tracker.state();
            let after = tracker.advance(session.snapshot_untracked());
            if before != after {
                redirects.extend(after.redirect_target());
            }
        }
        assert_eq!(redirects, vec![crate::config::LOGIN_PATH]);
    });
}
