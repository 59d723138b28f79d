//! Integration tests for session slot persistence across restarts

use blitzseller::auth::DEFAULT_SESSION_KEY;
use blitzseller::storage::{KeyValueStore, SledStore};
use blitzseller::types::{Segment, UserUpdate};
mod common;

#[tokio::test]
async fn login_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = common::sled_session(&dir);
        assert!(!session.is_authenticated());
        assert!(session.login("maria.souza@empresa.com", "segredo").await);

        let user = session.current().unwrap();
        assert_eq!(user.name, "maria.souza");
        assert_eq!((user.level, user.xp, user.coins, user.streak), (1, 0, 50, 0));
    }

    let session = common::sled_session(&dir);
    assert!(!session.is_loading());
    let user = session.current().expect("restored user");
    assert_eq!(user.email, "maria.souza@empresa.com");
}

#[tokio::test]
async fn update_is_persisted_and_logout_clears_slot() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = common::sled_session(&dir);
        assert!(session.register("Ana Lima", "ana@bridge.com", "x").await);
        session.update_user(UserUpdate {
            primary_segment: Some(Segment::SpeakerScheduler),
            coins: Some(80),
            ..Default::default()
        });
    }
    {
        let mut session = common::sled_session(&dir);
        let user = session.current().unwrap();
        assert_eq!(user.name, "Ana Lima");
        assert_eq!(user.coins, 80);
        assert_eq!(user.primary_segment, Some(Segment::SpeakerScheduler));
        session.logout();
        assert!(session.current().is_none());
    }

    let session = common::sled_session(&dir);
    assert!(session.current().is_none());
}

#[tokio::test]
async fn malformed_record_starts_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    {
        let slot = SledStore::open(dir.path().join("session")).unwrap();
        slot.set(DEFAULT_SESSION_KEY, b"{not json").unwrap();
    }

    let session = common::sled_session(&dir);
    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    drop(session);

    let slot = SledStore::open(dir.path().join("session")).unwrap();
    assert!(slot.get(DEFAULT_SESSION_KEY).unwrap().is_none());
}

#[tokio::test]
async fn update_without_user_does_nothing() {
    let mut session = common::memory_session();
    session.update_user(UserUpdate {
        name: Some("Ninguém".to_string()),
        ..Default::default()
    });
    assert!(session.current().is_none());
}

#[tokio::test]
async fn empty_credentials_are_refused() {
    let mut session = common::memory_session();
    assert!(!session.login("", "x").await);
    assert!(!session.login("a@b.com", "").await);
    assert!(!session.is_authenticated());
}
