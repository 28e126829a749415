use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persists a new account; any `id` already set is ignored.
    async fn create(&self, account: Account) -> RepositoryResult<Account>;
    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>>;
    async fn all(&self) -> RepositoryResult<Vec<Account>>;
    /// Fails with `InvalidState` when `account.id` is unset. Returns `None`
    /// if the row no longer exists.
    async fn update(&self, account: &Account) -> RepositoryResult<Option<Account>>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
