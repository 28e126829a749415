use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(pool: PgPool) -> Self {
        Container::with_repository(Arc::new(AccountRepositoryImpl::new(pool)))
    }

    pub fn with_repository(account_repository: Arc<dyn AccountRepository>) -> Self {
        Container {
            account_service: Arc::new(AccountServiceImpl::new(account_repository)),
        }
    }
}
