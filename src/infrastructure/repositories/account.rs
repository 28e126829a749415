use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::PgAccount;

pub struct AccountRepositoryImpl {
    db: PgPool,
}

impl AccountRepositoryImpl {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

const COLUMNS: &str = "id, name, email, address, phone_number";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, account: Account) -> RepositoryResult<Account> {
        tracing::debug!(name = %account.name, "Creating account");

        let account: PgAccount = sqlx::query_as(&format!(
            "INSERT INTO account (name, email, address, phone_number) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(account.name)
        .bind(account.email)
        .bind(account.address)
        .bind(account.phone_number)
        .fetch_one(&self.db)
        .await?;

        Ok(account.into())
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>> {
        tracing::debug!(id, "Fetching account");

        let account: Option<PgAccount> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM account WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(account.map(Into::into))
    }

    async fn all(&self) -> RepositoryResult<Vec<Account>> {
        tracing::debug!("Fetching all accounts");

        let accounts: Vec<PgAccount> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM account ORDER BY id"))
                .fetch_all(&self.db)
                .await?;

        Ok(accounts.into_iter().map(Into::into).collect())
    }

    async fn update(&self, account: &Account) -> RepositoryResult<Option<Account>> {
        let id = account.id.ok_or_else(|| {
            RepositoryError::InvalidState("Cannot update an Account without an id".to_string())
        })?;

        tracing::debug!(id, name = %account.name, "Updating account");

        let updated: Option<PgAccount> = sqlx::query_as(&format!(
            "UPDATE account SET name = $2, email = $3, address = $4, phone_number = $5 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .fetch_optional(&self.db)
        .await?;

        Ok(updated.map(Into::into))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        tracing::debug!(id, deleted = result.rows_affected(), "Deleted account");

        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    /// In-memory store assigning sequential ids, used by handler and service tests.
    #[derive(Default)]
    pub struct AccountRepositoryImpl {
        pub accounts: Mutex<Vec<Account>>,
    }

    impl AccountRepositoryImpl {
        pub fn with(accounts: Vec<Account>) -> Self {
            Self {
                accounts: Mutex::new(accounts),
            }
        }
    }

    #[async_trait]
    impl AccountRepository for AccountRepositoryImpl {
        async fn create(&self, mut account: Account) -> RepositoryResult<Account> {
            let mut accounts = self.accounts.lock().await;

            account.id = Some(accounts.iter().filter_map(|a| a.id).max().unwrap_or(0) + 1);

            accounts.push(account.clone());

            Ok(account)
        }

        async fn find(&self, id: i64) -> RepositoryResult<Option<Account>> {
            let accounts = self.accounts.lock().await;
            Ok(accounts.iter().find(|a| a.id == Some(id)).cloned())
        }

        async fn all(&self) -> RepositoryResult<Vec<Account>> {
            Ok(self.accounts.lock().await.clone())
        }

        async fn update(&self, account: &Account) -> RepositoryResult<Option<Account>> {
            if account.id.is_none() {
                return Err(RepositoryError::InvalidState(
                    "Cannot update an Account without an id".to_string(),
                ));
            }

            let mut accounts = self.accounts.lock().await;

            match accounts.iter_mut().find(|a| a.id == account.id) {
                Some(stored) => {
                    *stored = account.clone();
                    Ok(Some(stored.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i64) -> RepositoryResult<()> {
            self.accounts.lock().await.retain(|a| a.id != Some(id));
            Ok(())
        }
    }
}
