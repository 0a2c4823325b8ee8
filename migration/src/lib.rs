pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::SqlxSqliteConnector;
use sqlx::SqlitePool;

mod m20241015_000001_create_catalog_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241015_000001_create_catalog_tables::Migration)]
    }
}

/// Applies every pending migration on the pool the service queries through.
pub async fn run(pool: &SqlitePool) -> Result<(), DbErr> {
    let connection = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.to_owned());
    Migrator::up(&connection, None).await
}
