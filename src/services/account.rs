use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, AccountData},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Account with id [{id}] could not be found."))
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn create(&self, data: AccountData) -> AppResult<Account> {
        Ok(self.repository.create(Account::new(data)).await?)
    }

    async fn find(&self, id: i64) -> AppResult<Account> {
        self.repository.find(id).await?.ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        Ok(self.repository.all().await?)
    }

    async fn update(&self, mut account: Account, data: AccountData) -> AppResult<Account> {
        account.apply(data);

        match self.repository.update(&account).await? {
            Some(updated) => Ok(updated),
            None => Err(not_found(account.id.unwrap_or_default())),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
