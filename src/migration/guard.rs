//! One-shot schema initialization guard.
//!
//! Initializes the files service schema exactly once per database, no matter
//! how many times the runner is invoked. Two prior states make it abstain:
//! a ledger that already records an applied version, and a ledger table left
//! behind by the predecessor migration tool.

use sea_orm::sea_query::{ColumnDef, Table, TableCreateStatement};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, DbErr, DeriveIden, EntityTrait,
    PaginatorTrait, Set, TransactionTrait,
};
use tracing::{info, warn};

use crate::entity::migration as ledger;
use crate::error::SchemaApplicationError;

use super::inspector::SchemaInspector;

/// Version recorded in the ledger once the bootstrap batch has run.
pub const SEED_VERSION: i64 = 20190213124514;

/// Ledger table written and checked by this bootstrap step.
pub const LEDGER_TABLE: &str = "migrations";

/// Ledger table maintained by the predecessor migration tool. Its presence
/// means the schema is already managed elsewhere and must not be touched.
pub const LEGACY_LEDGER_TABLE: &str = "schema_migrations";

/// Initialize the files service schema if no migration system has run yet.
///
/// The connection is the only input; all state lives in the database. The
/// call returns without touching the schema when the ledger already records
/// an applied version, or when the predecessor's ledger table exists.
/// Otherwise the full batch (files table, ledger table, seed row) is applied
/// inside a single transaction.
///
/// A failure anywhere in the batch rolls the transaction back before the
/// error is surfaced; the caller is expected to treat that as fatal and halt
/// startup.
pub async fn apply<C>(db: &C) -> Result<(), SchemaApplicationError>
where
    C: ConnectionTrait + TransactionTrait,
{
    if db.table_exists(LEDGER_TABLE).await? {
        let applied = ledger::Entity::find().count(db).await?;
        if applied > 0 {
            info!(versions = applied, "schema already initialized, nothing to do");
            return Ok(());
        }
    }

    if db.table_exists(LEGACY_LEDGER_TABLE).await? {
        info!(
            table = LEGACY_LEDGER_TABLE,
            "predecessor ledger found, leaving schema untouched"
        );
        return Ok(());
    }

    let txn = db.begin().await?;
    match seed_schema(&txn).await {
        Ok(()) => {
            txn.commit().await?;
            info!(version = SEED_VERSION, "schema bootstrap applied");
            Ok(())
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback after failed bootstrap did not complete");
            }
            Err(err.into())
        }
    }
}

/// Execute the full DDL/DML batch on an open transaction.
async fn seed_schema(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    let backend = txn.get_database_backend();

    txn.execute(backend.build(&files_table())).await?;
    txn.execute(backend.build(&ledger_table())).await?;

    ledger::ActiveModel {
        version: Set(SEED_VERSION),
        dirty: Set(false),
    }
    .insert(txn)
    .await?;

    Ok(())
}

#[derive(DeriveIden)]
enum Files {
    Table,
    Id,
    Storage,
    Path,
    Filename,
    Bucket,
    ContentType,
    Size,
    UserId,
    Location,
    CreatedAt,
    UpdatedAt,
    IsAdminOnly,
    IsPrivate,
}

#[derive(DeriveIden)]
enum Migrations {
    Table,
    Version,
    Dirty,
}

/// `files` table: one row of metadata per stored object.
fn files_table() -> TableCreateStatement {
    Table::create()
        .table(Files::Table)
        .col(
            ColumnDef::new(Files::Id)
                .unsigned()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Files::Storage).string_len(255))
        .col(ColumnDef::new(Files::Path).string_len(255).not_null())
        .col(ColumnDef::new(Files::Filename).string_len(255))
        .col(ColumnDef::new(Files::Bucket).string_len(255))
        .col(ColumnDef::new(Files::ContentType).string_len(255))
        .col(ColumnDef::new(Files::Size).string_len(255))
        .col(ColumnDef::new(Files::UserId).string_len(36))
        .col(ColumnDef::new(Files::Location).string_len(255))
        .col(ColumnDef::new(Files::CreatedAt).date_time())
        .col(ColumnDef::new(Files::UpdatedAt).date_time())
        .col(ColumnDef::new(Files::IsAdminOnly).boolean())
        .col(ColumnDef::new(Files::IsPrivate).boolean())
        .to_owned()
}

/// Ledger recording which schema versions have been applied.
fn ledger_table() -> TableCreateStatement {
    Table::create()
        .table(Migrations::Table)
        .col(
            ColumnDef::new(Migrations::Version)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Migrations::Dirty).boolean().not_null())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::{MysqlQueryBuilder, SchemaStatementBuilder, SqliteQueryBuilder};

    #[test]
    fn test_files_table_auto_increments_per_backend() {
        let mysql = files_table().to_string(MysqlQueryBuilder);
        assert!(mysql.contains("`files`"));
        assert!(mysql.contains("AUTO_INCREMENT"));
        assert!(mysql.contains("`user_id` varchar(36)"));

        let sqlite = files_table().to_string(SqliteQueryBuilder);
        assert!(sqlite.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_ledger_table_shape() {
        let mysql = ledger_table().to_string(MysqlQueryBuilder);
        assert!(mysql.contains("`migrations`"));
        assert!(mysql.contains("`version` bigint"));
        assert!(mysql.contains("`dirty`"));
        assert!(!mysql.contains("AUTO_INCREMENT"));
    }

    #[test]
    fn test_ledger_and_legacy_tables_are_distinct() {
        assert_ne!(LEDGER_TABLE, LEGACY_LEDGER_TABLE);
    }
}
