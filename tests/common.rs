#![allow(dead_code)]

use std::time::Duration;

use blitzseller::auth::{SessionStore, SessionStoreBuilder};
use blitzseller::storage::{MemoryStore, SledStore};
use tempfile::TempDir;

/// Session on a throwaway sled directory with no artificial delay.
pub fn sled_session(dir: &TempDir) -> SessionStore<SledStore> {
    let slot = SledStore::open(dir.path().join("session")).expect("open sled");
    SessionStoreBuilder::new(slot)
        .auth_delay(Duration::ZERO)
        .open()
}

pub fn memory_session() -> SessionStore<MemoryStore> {
    SessionStoreBuilder::new(MemoryStore::new())
        .auth_delay(Duration::ZERO)
        .open()
}
