//! Initial migration to create all tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create novel table
        manager
            .create_table(
                Table::create()
                    .table(Novel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Novel::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Novel::Title).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Novel::Url)
                            .string_len(500)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Novel::LastUpdated).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create chapter table
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chapter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chapter::NovelId).integer().not_null())
                    .col(ColumnDef::new(Chapter::Content).text().not_null())
                    .col(ColumnDef::new(Chapter::AccessedAt).timestamp().not_null())
                    .col(ColumnDef::new(Chapter::Title).string_len(500).not_null())
                    .col(ColumnDef::new(Chapter::Url).string_len(500).not_null())
                    .col(ColumnDef::new(Chapter::ChapterNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Chapter::IsFilled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Chapter::IsTranslated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Chapter::TranslatedContent).text())
                    .col(ColumnDef::new(Chapter::TranslatedTitle).string_len(255))
                    .col(ColumnDef::new(Chapter::Summary).text())
                    .col(ColumnDef::new(Chapter::NotesForNextChapter).text())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Chapter::Table, Chapter::NovelId)
                            .to(Novel::Table, Novel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create bibleinfo table
        manager
            .create_table(
                Table::create()
                    .table(BibleInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BibleInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BibleInfo::Name).string_len(255).not_null())
                    .col(ColumnDef::new(BibleInfo::RawName).string_len(255).not_null())
                    .col(ColumnDef::new(BibleInfo::Description).text().not_null())
                    .col(ColumnDef::new(BibleInfo::NovelId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(BibleInfo::Table, BibleInfo::NovelId)
                            .to(Novel::Table, Novel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create logs table
        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Logs::Service).string_len(255).not_null())
                    .col(ColumnDef::new(Logs::Message).text().not_null())
                    .col(ColumnDef::new(Logs::MessageType).string_len(50).not_null())
                    .col(ColumnDef::new(Logs::Time).timestamp().not_null())
                    .col(ColumnDef::new(Logs::InstanceId).string_len(255))
                    .to_owned(),
            )
            .await?;

        // Create user table
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(User::Username)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::Password).string_len(255).not_null())
                    .col(ColumnDef::new(User::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create bookshelf junction table
        manager
            .create_table(
                Table::create()
                    .table(BookShelf::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookShelf::NovelId).integer().not_null())
                    .col(ColumnDef::new(BookShelf::UserId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BookShelf::NovelId)
                            .col(BookShelf::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookShelf::Table, BookShelf::NovelId)
                            .to(Novel::Table, Novel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookShelf::Table, BookShelf::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create chaptersread junction table
        manager
            .create_table(
                Table::create()
                    .table(ChaptersRead::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ChaptersRead::ChapterId).integer().not_null())
                    .col(ColumnDef::new(ChaptersRead::UserId).integer().not_null())
                    .col(ColumnDef::new(ChaptersRead::ReadAt).timestamp().not_null())
                    .primary_key(
                        Index::create()
                            .col(ChaptersRead::ChapterId)
                            .col(ChaptersRead::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChaptersRead::Table, ChaptersRead::ChapterId)
                            .to(Chapter::Table, Chapter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChaptersRead::Table, ChaptersRead::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create bookmarks table
        manager
            .create_table(
                Table::create()
                    .table(Bookmarks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookmarks::ChapterId).integer().not_null())
                    .col(ColumnDef::new(Bookmarks::UserId).integer().not_null())
                    .col(ColumnDef::new(Bookmarks::NovelId).integer().not_null())
                    .col(
                        ColumnDef::new(Bookmarks::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Bookmarks::Content).text())
                    .col(
                        ColumnDef::new(Bookmarks::BookmarkFilled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Bookmarks::CreatedAt).timestamp().not_null())
                    .primary_key(
                        Index::create()
                            .col(Bookmarks::ChapterId)
                            .col(Bookmarks::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Bookmarks::Table, Bookmarks::ChapterId)
                            .to(Chapter::Table, Chapter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Bookmarks::Table, Bookmarks::NovelId)
                            .to(Novel::Table, Novel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Bookmarks::Table, Bookmarks::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique indices enforcing the per-novel and per-position rules
        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_novel_number")
                    .table(Chapter::Table)
                    .col(Chapter::NovelId)
                    .col(Chapter::ChapterNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookmarks_chapter_user_position")
                    .table(Bookmarks::Table)
                    .col(Bookmarks::ChapterId)
                    .col(Bookmarks::UserId)
                    .col(Bookmarks::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Lookup indices for the child-of-novel and per-user access paths
        manager
            .create_index(
                Index::create()
                    .name("idx_bibleinfo_novel")
                    .table(BibleInfo::Table)
                    .col(BibleInfo::NovelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookmarks_novel")
                    .table(Bookmarks::Table)
                    .col(Bookmarks::NovelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chaptersread_user")
                    .table(ChaptersRead::Table)
                    .col(ChaptersRead::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order of creation
        manager
            .drop_table(Table::drop().table(Bookmarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChaptersRead::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BookShelf::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BibleInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Novel::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Table identifiers

#[derive(Iden)]
enum Novel {
    Table,
    Id,
    Title,
    Url,
    LastUpdated,
}

#[derive(Iden)]
enum Chapter {
    Table,
    Id,
    NovelId,
    Content,
    AccessedAt,
    Title,
    Url,
    ChapterNumber,
    IsFilled,
    IsTranslated,
    TranslatedContent,
    TranslatedTitle,
    Summary,
    NotesForNextChapter,
}

#[derive(Iden)]
enum BibleInfo {
    #[iden = "bibleinfo"]
    Table,
    Id,
    Name,
    RawName,
    Description,
    NovelId,
}

#[derive(Iden)]
enum Logs {
    Table,
    Id,
    Service,
    Message,
    MessageType,
    Time,
    InstanceId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
    Username,
    Password,
    CreatedAt,
}

#[derive(Iden)]
enum BookShelf {
    #[iden = "bookshelf"]
    Table,
    NovelId,
    UserId,
}

#[derive(Iden)]
enum ChaptersRead {
    #[iden = "chaptersread"]
    Table,
    ChapterId,
    UserId,
    ReadAt,
}

#[derive(Iden)]
enum Bookmarks {
    Table,
    ChapterId,
    UserId,
    NovelId,
    Position,
    Content,
    BookmarkFilled,
    CreatedAt,
}
