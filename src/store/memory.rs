use super::CodeStore;
use crate::models::CodeEntry;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store. Entries are never swept; an expired entry stays until
/// a verify call sees it or a new code overwrites it.
#[derive(Clone, Default)]
pub struct MemoryCodeStore {
    codes: Arc<RwLock<HashMap<String, CodeEntry>>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn get(&self, phone: &str) -> Option<CodeEntry> {
        let codes = self.codes.read().await;
        codes.get(phone).cloned()
    }

    async fn set(&self, phone: &str, entry: CodeEntry) {
        let mut codes = self.codes.write().await;
        codes.insert(phone.to_string(), entry);
    }

    async fn delete(&self, phone: &str) {
        let mut codes = self.codes.write().await;
        codes.remove(phone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn entry(code: &str) -> CodeEntry {
        CodeEntry {
            code: code.to_string(),
            expires_at: Utc::now() + Duration::minutes(5),
        }
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let store = MemoryCodeStore::new();
        assert!(store.get("13800138000").await.is_none());

        store.set("13800138000", entry("123456")).await;
        assert_eq!(store.get("13800138000").await.unwrap().code, "123456");
        assert_eq!(store.len().await, 1);

        store.delete("13800138000").await;
        assert!(store.get("13800138000").await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryCodeStore::new();
        store.set("13800138000", entry("111111")).await;
        store.set("13800138000", entry("222222")).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("13800138000").await.unwrap().code, "222222");
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = MemoryCodeStore::new();
        store.delete("13800138000").await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryCodeStore::new();
        let other = store.clone();
        other.set("13900139000", entry("654321")).await;
        assert_eq!(store.get("13900139000").await.unwrap().code, "654321");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers() {
        let store = MemoryCodeStore::new();
        let mut handles = Vec::new();
        for i in 0..50u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let phone = format!("138{:08}", i);
                store.set(&phone, entry("123456")).await;
                store.get(&phone).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }
        assert_eq!(store.len().await, 50);
    }
}
