//! The `TextToSql` wrapper

use crate::config::Config;
use crate::database::{Database, QueryResult, SqlDatabase};
use crate::error::{Text2SqlError, Text2SqlResult};
use crate::llm::{GenerationParams, ModelClient, Seq2SeqModel};
use crate::translate::Translator;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// A question, the SQL generated for it and the rows that SQL produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskOutcome {
    pub question: String,
    pub sql: String,
    pub result: QueryResult,
}

/// A text-to-SQL model paired with the database its SQL runs against.
///
/// Both operations return errors as values. Use [`crate::into_record`] to
/// collapse any of them to the `{"error": "..."}` shape.
#[derive(Clone)]
pub struct TextToSql {
    translator: Translator,
    database: Option<Arc<dyn Database>>,
}

impl TextToSql {
    /// Wrap a model; no database is attached yet
    pub fn new(model: Arc<dyn Seq2SeqModel>) -> Self {
        Self {
            translator: Translator::new(model),
            database: None,
        }
    }

    pub fn with_database(mut self, database: Arc<dyn Database>) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_generation(mut self, params: GenerationParams) -> Self {
        self.translator = self.translator.with_params(params);
        self
    }

    /// Build the model client and, when a URL is configured, the database.
    ///
    /// No network or database connection is made here.
    pub fn from_config(config: &Config) -> Text2SqlResult<Self> {
        let client = ModelClient::new(config.model.clone())?;
        let mut text_to_sql =
            Self::new(Arc::new(client)).with_generation(config.model.generation);

        if config.database.url.is_some() {
            let database = SqlDatabase::from_config(&config.database)?;
            text_to_sql = text_to_sql.with_database(Arc::new(database));
        }

        Ok(text_to_sql)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn has_database(&self) -> bool {
        self.database.is_some()
    }

    /// Translate an English question into SQL
    pub async fn translate(&self, question: &str) -> Text2SqlResult<String> {
        self.translator.translate(question).await
    }

    /// Run `sql` verbatim and return every row
    pub async fn execute(&self, sql: &str) -> Text2SqlResult<QueryResult> {
        let database = self.database.as_ref().ok_or_else(|| {
            Text2SqlError::config_with_context(
                "No database configured",
                "set database.url or TEXT2SQL_DATABASE_URL",
            )
        })?;
        database.execute(sql).await
    }

    /// Translate `question` and run the resulting SQL
    pub async fn ask(&self, question: &str) -> Text2SqlResult<AskOutcome> {
        let sql = self.translate(question).await?;
        info!("Running generated SQL");
        let result = self.execute(&sql).await?;

        Ok(AskOutcome {
            question: question.to_string(),
            sql,
            result,
        })
    }
}

impl std::fmt::Debug for TextToSql {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextToSql")
            .field("translator", &self.translator)
            .field("has_database", &self.has_database())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MockDatabase;
    use crate::error::{ErrorRecord, into_record};
    use crate::llm::model::MockSeq2SeqModel;
    use serde_json::json;

    fn model_returning(output: &'static str) -> MockSeq2SeqModel {
        let mut model = MockSeq2SeqModel::new();
        model
            .expect_model_name()
            .returning(|| "test-model".to_string());
        model
            .expect_generate()
            .returning(move |_, _| Ok(vec![output.to_string()]));
        model
    }

    fn failing_model(message: &'static str) -> MockSeq2SeqModel {
        let mut model = MockSeq2SeqModel::new();
        model
            .expect_model_name()
            .returning(|| "test-model".to_string());
        model
            .expect_generate()
            .returning(move |_, _| Err(Text2SqlError::model(message)));
        model
    }

    fn rows(values: &[i64]) -> QueryResult {
        QueryResult {
            columns: vec!["id".to_string()],
            rows: values.iter().map(|v| vec![json!(v)]).collect(),
            execution_time_ms: 1,
        }
    }

    #[tokio::test]
    async fn test_translate_returns_decoded_output() {
        let t2s = TextToSql::new(Arc::new(model_returning("SELECT 1")));
        assert_eq!(t2s.translate("give me one").await.unwrap(), "SELECT 1");
    }

    #[tokio::test]
    async fn test_translate_failure_becomes_error_record() {
        let t2s = TextToSql::new(Arc::new(failing_model("model weights not found")));
        let record = into_record(t2s.translate("anything").await).unwrap_err();
        assert!(record.error.contains("model weights not found"));
        assert_eq!(
            serde_json::to_value(&record).unwrap().as_object().unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_execute_returns_rows_unchanged() {
        let mut database = MockDatabase::new();
        database
            .expect_execute()
            .withf(|sql| sql == "SELECT id FROM t")
            .times(1)
            .returning(|_| Ok(rows(&[1, 2])));

        let t2s = TextToSql::new(Arc::new(model_returning("unused")))
            .with_database(Arc::new(database));
        let result = t2s.execute("SELECT id FROM t").await.unwrap();
        assert_eq!(result.rows, vec![vec![json!(1)], vec![json!(2)]]);
    }

    #[tokio::test]
    async fn test_execute_failure_becomes_error_record() {
        let mut database = MockDatabase::new();
        database
            .expect_execute()
            .returning(|_| Err(Text2SqlError::connection("could not connect to server")));

        let t2s = TextToSql::new(Arc::new(model_returning("unused")))
            .with_database(Arc::new(database));
        let record = into_record(t2s.execute("SELECT 1").await).unwrap_err();
        assert_eq!(record, ErrorRecord::new("could not connect to server"));
    }

    #[tokio::test]
    async fn test_execute_without_database_is_config_error() {
        let t2s = TextToSql::new(Arc::new(model_returning("unused")));
        let err = t2s.execute("SELECT 1").await.unwrap_err();
        assert!(matches!(err, Text2SqlError::Config { .. }));
    }

    #[tokio::test]
    async fn test_ask_runs_generated_sql() {
        let mut database = MockDatabase::new();
        database
            .expect_execute()
            .withf(|sql| sql == "SELECT id FROM users")
            .times(1)
            .returning(|_| Ok(rows(&[7])));

        let t2s = TextToSql::new(Arc::new(model_returning("SELECT id FROM users")))
            .with_database(Arc::new(database));
        let outcome = t2s.ask("user ids").await.unwrap();

        assert_eq!(outcome.question, "user ids");
        assert_eq!(outcome.sql, "SELECT id FROM users");
        assert_eq!(outcome.result.rows, vec![vec![json!(7)]]);
    }

    #[tokio::test]
    async fn test_ask_stops_when_translation_fails() {
        let mut database = MockDatabase::new();
        database.expect_execute().times(0);

        let t2s = TextToSql::new(Arc::new(failing_model("rate limited")))
            .with_database(Arc::new(database));
        assert!(t2s.ask("anything").await.is_err());
    }

    #[test]
    fn test_from_config_without_database() {
        let t2s = TextToSql::from_config(&Config::default()).unwrap();
        assert!(!t2s.has_database());
        assert_eq!(t2s.translator().model_name(), crate::llm::DEFAULT_MODEL);
    }

    #[test]
    fn test_from_config_with_database() {
        let mut config = Config::default();
        config.database.url = Some("sqlite::memory:".to_string());
        let t2s = TextToSql::from_config(&config).unwrap();
        assert!(t2s.has_database());
    }
}
