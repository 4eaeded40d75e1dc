//! Storage for issued captcha codes.
//!
//! The service only needs point lookups keyed by phone, so the contract is
//! kept to `get`/`set`/`delete`. Each call is atomic on its own; callers that
//! read and then write (cooldown check, verify) do so in separate calls.

mod memory;

pub use memory::MemoryCodeStore;

use crate::models::CodeEntry;
use async_trait::async_trait;

#[async_trait]
pub trait CodeStore: Send + Sync {
    async fn get(&self, phone: &str) -> Option<CodeEntry>;

    /// Inserts or overwrites the entry for `phone`.
    async fn set(&self, phone: &str, entry: CodeEntry);

    async fn delete(&self, phone: &str);
}
