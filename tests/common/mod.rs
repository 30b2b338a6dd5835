#![allow(dead_code)]

use menu_service::{MenuService, MenuStore};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A throwaway SQLite file; the database and its WAL side files are removed on drop.
pub struct TempDb {
    pub path: PathBuf,
    pub url: String,
}

impl TempDb {
    pub fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "menu-{prefix}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        let url = format!("sqlite:{}", path.display());
        Self { path, url }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let wal_path = PathBuf::from(format!("{}-wal", self.path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.path.to_string_lossy()));
        let _ = std::fs::remove_file(&wal_path);
        let _ = std::fs::remove_file(&shm_path);
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Fresh store with the default menu already seeded.
pub async fn seeded_store(prefix: &str) -> (TempDb, MenuStore) {
    let db = TempDb::new(prefix);
    let store = MenuStore::connect(&db.url)
        .await
        .expect("failed to open test database");
    assert!(store.seed_if_empty().await.expect("seeding failed"));
    (db, store)
}

pub async fn seeded_service(prefix: &str) -> (TempDb, MenuService) {
    let (db, store) = seeded_store(prefix).await;
    (db, MenuService::new(store))
}
