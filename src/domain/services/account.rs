use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AccountData};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, data: AccountData) -> AppResult<Account>;
    async fn find(&self, id: i64) -> AppResult<Account>;
    async fn list(&self) -> AppResult<Vec<Account>>;
    async fn update(&self, account: Account, data: AccountData) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}
