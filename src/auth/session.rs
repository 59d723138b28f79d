use std::time::Duration;

use log::{debug, info, warn};

use crate::errors::BlitzError;
use crate::logutil::{escape_log, mask_email};
use crate::storage::KeyValueStore;
use crate::types::{User, UserUpdate};

/// Slot key the dashboard has always used for the serialized user.
pub const DEFAULT_SESSION_KEY: &str = "blitzseller-user";

/// Artificial wait applied to login and register.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(500);

/// Builder so callers and tests can pick the slot key and the auth delay.
pub struct SessionStoreBuilder<S: KeyValueStore> {
    slot: S,
    key: String,
    auth_delay: Duration,
}

impl<S: KeyValueStore> SessionStoreBuilder<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            key: DEFAULT_SESSION_KEY.to_string(),
            auth_delay: DEFAULT_AUTH_DELAY,
        }
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn auth_delay(mut self, delay: Duration) -> Self {
        self.auth_delay = delay;
        self
    }

    /// Build the store and restore the persisted user once.
    pub fn open(self) -> SessionStore<S> {
        let mut store = SessionStore {
            slot: self.slot,
            key: self.key,
            auth_delay: self.auth_delay,
            user: None,
            loading: true,
        };
        store.restore();
        store
    }
}

/// # Session Store
///
/// Holds the current user and mirrors it into one key-value slot. The store
/// is handed explicitly to whatever renders the dashboard; there is no global
/// instance.
///
/// ## Lifecycle
///
/// 1. **Loading** - `open()` reads the slot; a malformed value is discarded
/// 2. **Anonymous** - no user; protected routes redirect to the entry route
/// 3. **Authenticated** - `login` / `register` fabricated a user
/// 4. `logout` returns to anonymous and clears the slot
///
/// ```rust,no_run
/// use blitzseller::auth::session::SessionStoreBuilder;
/// use blitzseller::storage::MemoryStore;
///
/// # async fn demo() {
/// let mut session = SessionStoreBuilder::new(MemoryStore::new()).open();
/// assert!(session.login("ana@bridge.com", "segredo").await);
/// assert_eq!(session.current().map(|u| u.coins), Some(50));
/// # }
/// ```
pub struct SessionStore<S: KeyValueStore> {
    slot: S,
    key: String,
    auth_delay: Duration,
    user: Option<User>,
    loading: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn restore(&mut self) {
        self.loading = true;
        match self.slot.get(&self.key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<User>(&bytes) {
                Ok(user) => {
                    debug!("Restored session for {}", mask_email(&user.email));
                    self.user = Some(user);
                }
                Err(e) => {
                    warn!("Discarding malformed session record: {}", e);
                    if let Err(e) = self.slot.remove(&self.key) {
                        warn!("Failed to clear malformed session record: {}", e);
                    }
                }
            },
            Ok(None) => {}
            Err(e) => warn!("Session slot unreadable, starting anonymous: {}", e),
        }
        self.loading = false;
    }

    fn persist(&self, user: &User) -> Result<(), BlitzError> {
        let bytes = serde_json::to_vec(user)?;
        self.slot.set(&self.key, &bytes)
    }

    /// Replace the current user and persist it. On a storage failure the
    /// in-memory state is left untouched.
    fn establish(&mut self, user: User) -> bool {
        match self.persist(&user) {
            Ok(()) => {
                self.user = Some(user);
                true
            }
            Err(e) => {
                warn!("Failed to persist session: {}", e);
                false
            }
        }
    }

    /// Sign in. Any non-empty email/password pair is accepted after the
    /// artificial delay; the user name comes from the email.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.loading = true;
        tokio::time::sleep(self.auth_delay).await;

        let ok = if email.is_empty() || password.is_empty() {
            false
        } else {
            self.establish(User::new(&User::name_from_email(email), email))
        };
        if ok {
            info!("Login for {}", mask_email(email));
        }
        self.loading = false;
        ok
    }

    /// Create an account. Same as login but keeps the given name.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.loading = true;
        tokio::time::sleep(self.auth_delay).await;

        let ok = if name.is_empty() || email.is_empty() || password.is_empty() {
            false
        } else {
            self.establish(User::new(name, email))
        };
        if ok {
            info!("Registered {} ({})", escape_log(name), mask_email(email));
        }
        self.loading = false;
        ok
    }

    /// Shallow-merge `update` into the current user and stamp activity.
    /// Does nothing when nobody is signed in.
    pub fn update_user(&mut self, update: UserUpdate) {
        let Some(current) = self.user.as_ref() else {
            debug!("update_user ignored: no active session");
            return;
        };
        let mut updated = current.clone();
        update.apply_to(&mut updated);
        updated.touch();
        if let Err(e) = self.persist(&updated) {
            warn!("Failed to persist user update: {}", e);
        }
        self.user = Some(updated);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logout for {}", mask_email(&user.email));
        }
        if let Err(e) = self.slot.remove(&self.key) {
            warn!("Failed to clear session slot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn quick(slot: MemoryStore) -> SessionStore<MemoryStore> {
        SessionStoreBuilder::new(slot)
            .auth_delay(Duration::ZERO)
            .open()
    }

    #[tokio::test]
    async fn login_persists_default_user() {
        let slot = MemoryStore::new();
        let mut session = quick(slot.clone());
        assert!(!session.is_loading());
        assert!(session.current().is_none());

        assert!(session.login("carlos@bridge.com", "x").await);
        let user = session.current().unwrap();
        assert_eq!(user.name, "carlos");
        assert_eq!((user.level, user.xp, user.coins, user.streak), (1, 0, 50, 0));
        assert!(slot.get(DEFAULT_SESSION_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn restore_reads_previous_session() {
        let slot = MemoryStore::new();
        {
            let mut first = quick(slot.clone());
            assert!(first.register("Lucia", "lucia@bridge.com", "pw").await);
        }
        let second = quick(slot);
        assert_eq!(second.current().map(|u| u.name.as_str()), Some("Lucia"));
    }

    #[test]
    fn malformed_record_is_discarded() {
        let slot = MemoryStore::new();
        slot.set(DEFAULT_SESSION_KEY, b"{not json").unwrap();
        let session = quick(slot.clone());
        assert!(session.current().is_none());
        assert!(!session.is_loading());
        assert!(slot.get(DEFAULT_SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn update_without_user_is_noop() {
        let slot = MemoryStore::new();
        let mut session = quick(slot.clone());
        session.update_user(UserUpdate {
            coins: Some(999),
            ..Default::default()
        });
        assert!(session.current().is_none());
        assert!(slot.get(DEFAULT_SESSION_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn custom_key_is_used() {
        let slot = MemoryStore::new();
        let mut session = SessionStoreBuilder::new(slot.clone())
            .key("outra-chave")
            .auth_delay(Duration::ZERO)
            .open();
        assert!(session.login("a@b.c", "p").await);
        assert!(slot.get("outra-chave").unwrap().is_some());
        assert!(slot.get(DEFAULT_SESSION_KEY).unwrap().is_none());
    }
}
