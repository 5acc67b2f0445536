//! Logs entity
//!
//! Shared audit trail for every service that touches the database. Free of
//! foreign keys so a log line can outlive whatever it describes.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service: String,
    pub message: String,
    /// e.g. 'info', 'error', 'debug'
    pub message_type: String,
    pub time: DateTimeUtc,
    pub instance_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            time: Set(chrono::Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}
