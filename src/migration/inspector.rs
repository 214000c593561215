//! Table existence probing against the database catalog.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement};

/// Capability to check whether a table exists in the connected schema.
///
/// Blanket-implemented for every SeaORM connection by querying the backend's
/// catalog, so it is usable on live connections and open transactions alike.
#[async_trait]
pub trait SchemaInspector {
    /// Whether a table with the given name exists in the current schema.
    async fn table_exists(&self, table: &str) -> Result<bool, DbErr>;
}

#[async_trait]
impl<C> SchemaInspector for C
where
    C: ConnectionTrait,
{
    async fn table_exists(&self, table: &str) -> Result<bool, DbErr> {
        let backend = self.get_database_backend();
        let sql = match backend {
            DatabaseBackend::MySql => {
                "SELECT COUNT(*) AS cnt FROM information_schema.tables \
                 WHERE table_schema = DATABASE() AND table_name = ?"
            }
            DatabaseBackend::Postgres => {
                "SELECT COUNT(*) AS cnt FROM information_schema.tables \
                 WHERE table_schema = current_schema() AND table_name = $1"
            }
            DatabaseBackend::Sqlite => {
                "SELECT COUNT(*) AS cnt FROM sqlite_master \
                 WHERE type = 'table' AND name = ?"
            }
        };

        let stmt = Statement::from_sql_and_values(backend, sql, [table.into()]);
        let row = self
            .query_one(stmt)
            .await?
            .ok_or_else(|| DbErr::Custom("catalog query returned no rows".to_string()))?;

        Ok(row.try_get::<i64>("", "cnt")? > 0)
    }
}
