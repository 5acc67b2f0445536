//! Bible info entity
//!
//! Glossary entry for a character or place, scoped to a novel. Translators
//! use these to keep names consistent across chapters.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bibleinfo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub raw_name: String,
    pub description: String,
    pub novel_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::novel::Entity",
        from = "Column::NovelId",
        to = "super::novel::Column::Id",
        on_delete = "Cascade"
    )]
    Novel,
}

impl Related<super::novel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Novel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
