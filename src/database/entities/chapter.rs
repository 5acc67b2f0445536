//! Chapter entity
//!
//! A chapter's number is unique within its novel; the constraint lives in the
//! schema, not here.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chapter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub novel_id: i32,
    pub content: String,
    pub accessed_at: DateTimeUtc,
    pub title: String,
    pub url: String,
    pub chapter_number: i32,
    pub is_filled: bool,
    pub is_translated: bool,
    pub translated_content: Option<String>,
    pub translated_title: Option<String>,
    pub summary: Option<String>,
    pub notes_for_next_chapter: Option<String>,
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
    #[sea_orm(has_many = "super::chapters_read::Entity")]
    ChaptersRead,
    #[sea_orm(has_many = "super::bookmarks::Entity")]
    Bookmarks,
}

impl Related<super::novel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Novel.def()
    }
}

impl Related<super::chapters_read::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChaptersRead.def()
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
            accessed_at: Set(chrono::Utc::now()),
            is_filled: Set(false),
            is_translated: Set(false),
            ..ActiveModelTrait::default()
        }
    }
}
