//! Novel entity
//!
//! Root of the schema: chapters, glossary entries, shelf rows, and bookmarks
//! all hang off a novel and are removed with it.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "novel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub url: String,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chapter::Entity")]
    Chapter,
    #[sea_orm(has_many = "super::bible_info::Entity")]
    BibleInfo,
    #[sea_orm(has_many = "super::bookshelf::Entity")]
    BookShelf,
    #[sea_orm(has_many = "super::bookmarks::Entity")]
    Bookmarks,
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl Related<super::bible_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BibleInfo.def()
    }
}

impl Related<super::bookshelf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookShelf.def()
    }
}

impl Related<super::bookmarks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookmarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            last_updated: Set(chrono::Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}
