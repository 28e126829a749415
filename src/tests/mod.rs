
pub mod utils;

use std::sync::Arc;

use serde::Deserialize;
use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::{postgres::Postgres, testcontainers::runners::AsyncRunner};

use crate::infrastructure::databases::postgres;
use crate::{config::AppConfig, container::Container};

use rstest::*;

const POSTGRES_PORT: u16 = 5432;

pub struct Database {
    pub pool: PgPool,
    pub container: ContainerAsync<Postgres>,
}

pub struct TestContext {
    pub db: Database,
    pub container: Arc<Container>,
}

#[fixture]
async fn context() -> TestContext {
    let db_container = Postgres::default().start().await.unwrap();

    let mut config = AppConfig::default();

    let host = db_container.get_host().await.unwrap();
    let port = db_container
        .get_host_port_ipv4(POSTGRES_PORT)
        .await
        .unwrap();

    config.database.uri = format!("postgres://postgres:postgres@{host}:{port}/postgres");

    let pool = postgres::connect(&config.database).await.unwrap();

    postgres::create_schema(&pool).await.unwrap();

    let db = Database {
        pool: pool.clone(),
        container: db_container,
    };

    let container = Arc::new(Container::new(pool));

    TestContext { db, container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    status: u16,
    error: String,
    message: String,
}
