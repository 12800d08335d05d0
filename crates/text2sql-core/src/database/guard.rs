//! Read-only statement guard

use crate::database::types::DatabaseType;
use crate::error::{Text2SqlError, Text2SqlResult};
use sqlparser::ast::{Query, SetExpr, Statement};
use sqlparser::dialect::{Dialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

/// Reject anything that could modify the database.
///
/// Every statement in `sql` must be a plain query (or an `EXPLAIN` without
/// `ANALYZE`). Data-modifying CTEs and `SELECT ... INTO` are rejected too.
pub fn ensure_read_only(sql: &str, database_type: DatabaseType) -> Text2SqlResult<()> {
    let dialect: Box<dyn Dialect> = match database_type {
        DatabaseType::PostgreSql => Box::new(PostgreSqlDialect {}),
        DatabaseType::Sqlite => Box::new(SQLiteDialect {}),
    };

    let statements = Parser::parse_sql(dialect.as_ref(), sql).map_err(|e| {
        Text2SqlError::invalid_input_field(format!("Could not parse SQL: {}", e), "sql")
    })?;

    if statements.is_empty() {
        return Err(Text2SqlError::invalid_input_field(
            "SQL statement is empty",
            "sql",
        ));
    }

    for statement in &statements {
        if !statement_is_read_only(statement) {
            let keyword = statement
                .to_string()
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_uppercase();
            return Err(Text2SqlError::invalid_input_field(
                format!("Read-only mode rejects {} statements", keyword),
                "sql",
            ));
        }
    }

    Ok(())
}

fn statement_is_read_only(statement: &Statement) -> bool {
    match statement {
        Statement::Query(query) => query_is_read_only(query),
        Statement::Explain { analyze, .. } => !*analyze,
        _ => false,
    }
}

fn query_is_read_only(query: &Query) -> bool {
    let ctes_read_only = query.with.as_ref().is_none_or(|with| {
        with.cte_tables
            .iter()
            .all(|cte| query_is_read_only(&cte.query))
    });
    ctes_read_only && set_expr_is_read_only(&query.body)
}

fn set_expr_is_read_only(expr: &SetExpr) -> bool {
    match expr {
        SetExpr::Select(select) => select.into.is_none(),
        SetExpr::Query(query) => query_is_read_only(query),
        SetExpr::SetOperation { left, right, .. } => {
            set_expr_is_read_only(left) && set_expr_is_read_only(right)
        }
        SetExpr::Values(_) | SetExpr::Table(_) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_allowed() {
        assert!(ensure_read_only("SELECT id, name FROM users WHERE id = 1", DatabaseType::PostgreSql).is_ok());
        assert!(ensure_read_only("SELECT 1", DatabaseType::Sqlite).is_ok());
    }

    #[test]
    fn test_set_operations_and_ctes_are_allowed() {
        let sql = "WITH recent AS (SELECT * FROM orders WHERE total > 10) \
                   SELECT id FROM recent UNION SELECT id FROM archived_orders";
        assert!(ensure_read_only(sql, DatabaseType::PostgreSql).is_ok());
    }

    #[test]
    fn test_writes_are_rejected() {
        for sql in [
            "DELETE FROM users",
            "UPDATE users SET name = 'x'",
            "INSERT INTO users (id) VALUES (1)",
            "DROP TABLE users",
        ] {
            let err = ensure_read_only(sql, DatabaseType::PostgreSql).unwrap_err();
            assert!(
                matches!(err, Text2SqlError::InvalidInput { .. }),
                "{} should be rejected",
                sql
            );
        }
    }

    #[test]
    fn test_rejection_names_the_statement() {
        let err = ensure_read_only("DROP TABLE users", DatabaseType::Sqlite).unwrap_err();
        assert!(err.to_string().contains("DROP"));
    }

    #[test]
    fn test_trailing_write_is_rejected() {
        let sql = "SELECT 1; DELETE FROM users";
        assert!(ensure_read_only(sql, DatabaseType::Sqlite).is_err());
    }

    #[test]
    fn test_select_into_is_rejected() {
        let sql = "SELECT * INTO backup FROM users";
        assert!(ensure_read_only(sql, DatabaseType::PostgreSql).is_err());
    }

    #[test]
    fn test_explain_analyze_is_rejected() {
        assert!(ensure_read_only("EXPLAIN SELECT 1", DatabaseType::PostgreSql).is_ok());
        assert!(ensure_read_only("EXPLAIN ANALYZE DELETE FROM users", DatabaseType::PostgreSql).is_err());
    }

    #[test]
    fn test_unparseable_sql_is_rejected() {
        assert!(ensure_read_only("SELEC * FORM users", DatabaseType::Sqlite).is_err());
        assert!(ensure_read_only("", DatabaseType::Sqlite).is_err());
    }
}
