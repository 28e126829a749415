use crate::domain::models::account::Account;
use sqlx::PgPool;

pub async fn seed_account(pool: &PgPool) -> Account {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO account (name, email, address, phone_number) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind("Test Account")
    .bind("test_account@example.com")
    .bind("10 Test Lane")
    .bind("555-0199")
    .fetch_one(pool)
    .await
    .unwrap();

    Account {
        id: Some(id),
        name: "Test Account".to_string(),
        email: "test_account@example.com".to_string(),
        address: "10 Test Lane".to_string(),
        phone_number: "555-0199".to_string(),
    }
}

pub async fn count_accounts(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT count(*) FROM account")
        .fetch_one(pool)
        .await
        .unwrap()
}
