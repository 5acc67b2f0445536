//! Bootstrap behavior: schema creation, idempotency, and row round-trips.

use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, ModelTrait, Set};
use shadow_db::database::entities::{bible_info, chapter, logs, novel, user};
use shadow_db::Database;
use tempfile::TempDir;

/// Open a freshly bootstrapped database backed by a temp file.
async fn open_test_db() -> (TempDir, Database) {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("shadow.db");

    let db = Database::connect_url(format!("sqlite://{}?mode=rwc", db_path.display()))
        .await
        .unwrap();
    db.migrate().await.unwrap();

    (temp_dir, db)
}

#[tokio::test]
async fn bootstrap_makes_every_table_queryable() {
    let (_guard, db) = open_test_db().await;

    assert!(novel::Entity::find().all(db.conn()).await.unwrap().is_empty());
    assert!(chapter::Entity::find().all(db.conn()).await.unwrap().is_empty());
    assert!(bible_info::Entity::find().all(db.conn()).await.unwrap().is_empty());
    assert!(logs::Entity::find().all(db.conn()).await.unwrap().is_empty());
    assert!(user::Entity::find().all(db.conn()).await.unwrap().is_empty());
}

#[tokio::test]
async fn bootstrap_twice_is_a_no_op() {
    let (_guard, db) = open_test_db().await;

    let novel = novel::ActiveModel {
        title: Set("Reverend Insanity".to_string()),
        url: Set("https://example.com/novel/reverend-insanity".to_string()),
        ..novel::ActiveModel::new()
    }
    .insert(db.conn())
    .await
    .unwrap();

    // Second bootstrap against the initialized database: no error, no data loss.
    db.migrate().await.unwrap();

    let read = novel::Entity::find_by_id(novel.id)
        .one(db.conn())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read, novel);
}

#[tokio::test]
async fn novel_round_trips_with_default_timestamp() {
    let (_guard, db) = open_test_db().await;

    let created = novel::ActiveModel {
        title: Set("Lord of the Mysteries".to_string()),
        url: Set("https://example.com/novel/lotm".to_string()),
        ..novel::ActiveModel::new()
    }
    .insert(db.conn())
    .await
    .unwrap();

    let read = novel::Entity::find_by_id(created.id)
        .one(db.conn())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(read.title, "Lord of the Mysteries");
    assert_eq!(read.url, "https://example.com/novel/lotm");
    assert_eq!(read.last_updated.timestamp(), created.last_updated.timestamp());
}

#[tokio::test]
async fn chapter_round_trips_including_nullable_fields() {
    let (_guard, db) = open_test_db().await;

    let novel = novel::ActiveModel {
        title: Set("Shadow Slave".to_string()),
        url: Set("https://example.com/novel/shadow-slave".to_string()),
        ..novel::ActiveModel::new()
    }
    .insert(db.conn())
    .await
    .unwrap();

    let created = chapter::ActiveModel {
        novel_id: Set(novel.id),
        content: Set("Sunny opened his eyes...".to_string()),
        title: Set("Nightmare Begins".to_string()),
        url: Set("https://example.com/novel/shadow-slave/1".to_string()),
        chapter_number: Set(1),
        translated_title: Set(Some("악몽의 시작".to_string())),
        summary: Set(None),
        ..chapter::ActiveModel::new()
    }
    .insert(db.conn())
    .await
    .unwrap();

    // Booleans come from the declared defaults.
    assert!(!created.is_filled);
    assert!(!created.is_translated);

    let read = chapter::Entity::find_by_id(created.id)
        .one(db.conn())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(read.novel_id, novel.id);
    assert_eq!(read.chapter_number, 1);
    assert_eq!(read.translated_title.as_deref(), Some("악몽의 시작"));
    assert_eq!(read.translated_content, None);
    assert_eq!(read.summary, None);
    assert_eq!(read.notes_for_next_chapter, None);

    // The novel resolves its chapters through the declared relation.
    let chapters = novel.find_related(chapter::Entity).all(db.conn()).await.unwrap();
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].id, read.id);
}

#[tokio::test]
async fn log_lines_round_trip_and_serialize() {
    let (_guard, db) = open_test_db().await;

    let created = logs::ActiveModel {
        service: Set("scraper".to_string()),
        message: Set("fetched 12 chapters".to_string()),
        message_type: Set("info".to_string()),
        instance_id: Set(Some("scraper-7f3a".to_string())),
        ..logs::ActiveModel::new()
    }
    .insert(db.conn())
    .await
    .unwrap();

    let read = logs::Entity::find_by_id(created.id)
        .one(db.conn())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(read.service, "scraper");
    assert_eq!(read.message_type, "info");
    assert_eq!(read.instance_id.as_deref(), Some("scraper-7f3a"));

    let json = serde_json::to_value(&read).unwrap();
    assert_eq!(json["service"], "scraper");
    assert_eq!(json["message_type"], "info");
}

#[tokio::test]
async fn users_round_trip_with_stored_credentials() {
    let (_guard, db) = open_test_db().await;

    let created = user::ActiveModel {
        username: Set("reader_one".to_string()),
        password: Set("$argon2id$v=19$stub".to_string()),
        ..user::ActiveModel::new()
    }
    .insert(db.conn())
    .await
    .unwrap();

    let read = user::Entity::find_by_id(created.id)
        .one(db.conn())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(read.username, "reader_one");
    // Stored verbatim; hashing happens upstream.
    assert_eq!(read.password, "$argon2id$v=19$stub");
    assert_eq!(read.created_at.timestamp(), created.created_at.timestamp());
}
