use crate::config::DatabaseConfig;

use sqlx::{Error, PgPool, postgres::PgPoolOptions};

pub const ACCOUNT_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS account (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        address TEXT NOT NULL,
        phone_number TEXT NOT NULL
    )
"#;

pub async fn connect(db_config: &DatabaseConfig) -> Result<PgPool, Error> {
    PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .connect(&db_config.uri)
        .await
}

/// Creates the `account` table if it does not exist yet.
pub async fn create_schema(pool: &PgPool) -> Result<(), Error> {
    sqlx::query(ACCOUNT_TABLE_DDL).execute(pool).await?;

    tracing::info!("Database tables created (if not already present)");

    Ok(())
}

/// Drops and recreates every table. Destroys all stored accounts.
pub async fn recreate_schema(pool: &PgPool) -> Result<(), Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DROP TABLE IF EXISTS account")
        .execute(&mut *tx)
        .await?;
    sqlx::query(ACCOUNT_TABLE_DDL).execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::warn!("Database tables dropped and recreated");

    Ok(())
}
