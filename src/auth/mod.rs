//! Session handling for the dashboard: the persisted current-user store, the
//! entry-page form, and the route guard.

pub mod form;
pub mod guard;
pub mod session;

pub use form::{submit, AuthForm, AuthFormError, AuthNotice};
pub use guard::{guard, resolve, GuardDecision, Route};
pub use session::{SessionStore, SessionStoreBuilder, DEFAULT_AUTH_DELAY, DEFAULT_SESSION_KEY};
