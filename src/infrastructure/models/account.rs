use sqlx::FromRow;

use crate::domain::models::account::Account;

#[derive(Debug, FromRow)]
pub struct PgAccount {
    id: i64,
    name: String,
    email: String,
    address: String,
    phone_number: String,
}

impl From<PgAccount> for Account {
    fn from(acc: PgAccount) -> Self {
        Account {
            id: Some(acc.id),
            name: acc.name,
            email: acc.email,
            address: acc.address,
            phone_number: acc.phone_number,
        }
    }
}
