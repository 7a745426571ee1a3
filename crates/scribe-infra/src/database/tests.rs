use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

use scribe_core::domain::{Post, PostDraft};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_base::map_db_err;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: i64, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(7, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 7);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(1000).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "El post de prueba")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let draft = PostDraft::validate(Some("El post de prueba")).unwrap();

    let post = repo.create(draft).await.unwrap();
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "El post de prueba");
}

#[tokio::test]
async fn test_list_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "first"), model(2, "second")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.list().await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn test_delete_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, i64>::delete(&repo, 1000).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[test]
fn test_db_error_mapping() {
    assert!(matches!(map_db_err(DbErr::RecordNotUpdated), RepoError::NotFound));
    assert!(matches!(
        map_db_err(DbErr::Conn(RuntimeErr::Internal("connection refused".into()))),
        RepoError::Connection(_)
    ));
    // posts has no unique column besides the key, so these stay query failures
    assert!(matches!(
        map_db_err(DbErr::Custom("duplicate key value violates unique constraint".into())),
        RepoError::Query(_)
    ));
}
