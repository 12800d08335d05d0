//! Integration tests for text2sql core functionality
//!
//! Runs the full translate and execute path against a mocked Hugging Face
//! endpoint and a real on-disk SQLite database.

use serde_json::json;
use sqlx::{Connection, SqliteConnection};
use std::path::Path;
use tempfile::TempDir;
use text2sql_core::{
    Config, Database, ErrorRecord, SqlDatabase, Text2SqlError, Text2SqlResult, TextToSql,
    into_record,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/suriya7/t5-base-text-to-sql";

/// Create a small shop database and return its path
async fn seed_database(dir: &Path) -> String {
    let db_path = dir.join("shop.db");
    let db_path = db_path.to_string_lossy().to_string();

    let mut conn = SqliteConnection::connect(&format!("sqlite://{}?mode=rwc", db_path))
        .await
        .unwrap();
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, balance REAL)")
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query("INSERT INTO users (id, name, balance) VALUES (1, 'Alice', 10.5), (2, 'Bob', NULL)")
        .execute(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();

    db_path
}

fn config_for(server: &MockServer, database_url: Option<String>) -> Config {
    let mut config = Config::default();
    config.model.base_url = Some(server.uri());
    config.database.url = database_url;
    config
}

async fn mount_generation(server: &MockServer, question: &str, sql: &str) {
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "inputs": format!("translate English to SQL: {}", question),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": sql }])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_execute_against_sqlite_file() -> Text2SqlResult<()> {
    let dir = TempDir::new().unwrap();
    let db_path = seed_database(dir.path()).await;

    let database = SqlDatabase::new(&db_path)?;
    let result = database
        .execute("SELECT id, name, balance FROM users ORDER BY id")
        .await?;

    assert_eq!(result.columns, vec!["id", "name", "balance"]);
    assert_eq!(
        result.rows,
        vec![
            vec![json!(1), json!("Alice"), json!(10.5)],
            vec![json!(2), json!("Bob"), serde_json::Value::Null],
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_execute_runs_writes_verbatim() -> Text2SqlResult<()> {
    let dir = TempDir::new().unwrap();
    let db_path = seed_database(dir.path()).await;
    let database = SqlDatabase::new(&db_path)?;

    let result = database.execute("DELETE FROM users WHERE id = 2").await?;
    assert!(result.is_empty());

    let remaining = database.execute("SELECT COUNT(*) FROM users").await?;
    assert_eq!(remaining.rows, vec![vec![json!(1)]]);
    Ok(())
}

#[tokio::test]
async fn test_read_only_database_rejects_writes() -> Text2SqlResult<()> {
    let dir = TempDir::new().unwrap();
    let db_path = seed_database(dir.path()).await;
    let database = SqlDatabase::new(&db_path)?.with_read_only(true);

    let err = database.execute("DROP TABLE users").await.unwrap_err();
    assert!(matches!(err, Text2SqlError::InvalidInput { .. }));

    let count = database.execute("SELECT COUNT(*) FROM users").await?;
    assert_eq!(count.rows, vec![vec![json!(2)]]);
    Ok(())
}

#[tokio::test]
async fn test_ask_end_to_end() -> Text2SqlResult<()> {
    let server = MockServer::start().await;
    mount_generation(
        &server,
        "What are the names of all users?",
        "SELECT name FROM users ORDER BY id",
    )
    .await;

    let dir = TempDir::new().unwrap();
    let db_path = seed_database(dir.path()).await;

    let t2s = TextToSql::from_config(&config_for(&server, Some(db_path)))?;
    let outcome = t2s.ask("What are the names of all users?").await?;

    assert_eq!(outcome.sql, "SELECT name FROM users ORDER BY id");
    assert_eq!(outcome.result.rows, vec![vec![json!("Alice")], vec![json!("Bob")]]);
    Ok(())
}

#[tokio::test]
async fn test_model_failure_is_an_error_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "CUDA out of memory" })),
        )
        .mount(&server)
        .await;

    let t2s = TextToSql::from_config(&config_for(&server, None)).unwrap();
    let record = into_record(t2s.translate("anything").await).unwrap_err();

    assert!(record.error.contains("CUDA out of memory"));
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "error": record.error.clone() })
    );
}

#[tokio::test]
async fn test_connection_failure_is_an_error_record() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing").join("nothing.db");

    let database = SqlDatabase::new(missing.to_string_lossy()).unwrap();
    let result = database.execute("SELECT 1").await;

    let record: ErrorRecord = into_record(result).unwrap_err();
    assert!(!record.error.is_empty());
}

#[tokio::test]
async fn test_bad_sql_is_an_error_record() {
    let dir = TempDir::new().unwrap();
    let db_path = seed_database(dir.path()).await;
    let database = SqlDatabase::new(&db_path).unwrap();

    let record = into_record(database.execute("SELECT * FROM no_such_table").await).unwrap_err();
    assert!(record.error.contains("no_such_table"));
}
