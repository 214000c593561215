//! File metadata entity backing the `files` table.
//!
//! Rows are created and mutated by the files service itself; the bootstrap
//! only defines the schema. The serde attributes fix the JSON face of a file
//! record: camelCase keys, with the storage bucket kept internal.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "files")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u32,
    pub storage: Option<String>,
    pub path: String,
    pub filename: Option<String>,
    #[serde(skip_serializing)]
    pub bucket: Option<String>,
    pub content_type: Option<String>,
    /// Size in bytes, kept as text by the upstream uploader.
    pub size: Option<String>,
    /// Back-reference to a user in the accounts service; not a foreign key.
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
    pub is_admin_only: Option<bool>,
    pub is_private: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
