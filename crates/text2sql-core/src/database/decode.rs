//! Driver rows to JSON values
//!
//! The runtime type of each value decides the conversion, so expression
//! columns (`SELECT 1`, `COUNT(*)`, ...) decode the same way table columns do.

use crate::database::types::Row;
use crate::error::{Text2SqlError, Text2SqlResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};
use sqlx::postgres::{PgRow, PgValueFormat, Postgres};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::types::chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::types::{Decimal, JsonValue, Uuid};
use sqlx::{Column, Decode, Row as _, Type, TypeInfo, ValueRef};

/// Column names of a row set; empty when there are no rows
pub(crate) fn column_names<R: sqlx::Row>(rows: &[R]) -> Vec<String> {
    rows.first()
        .map(|row| {
            row.columns()
                .iter()
                .map(|column| column.name().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn pg_rows(rows: &[PgRow]) -> Text2SqlResult<Vec<Row>> {
    rows.iter().map(pg_row).collect()
}

pub(crate) fn sqlite_rows(rows: &[SqliteRow]) -> Text2SqlResult<Vec<Row>> {
    rows.iter().map(sqlite_row).collect()
}

fn pg_row(row: &PgRow) -> Text2SqlResult<Row> {
    (0..row.len()).map(|idx| pg_value(row, idx)).collect()
}

fn sqlite_row(row: &SqliteRow) -> Text2SqlResult<Row> {
    (0..row.len()).map(|idx| sqlite_value(row, idx)).collect()
}

fn column_name<R: sqlx::Row>(row: &R, idx: usize) -> String {
    row.columns()
        .get(idx)
        .map(|column| column.name().to_string())
        .unwrap_or_else(|| idx.to_string())
}

/// Type name of the value at `idx`, or `None` for SQL NULL
fn runtime_type<R>(row: &R, idx: usize) -> Text2SqlResult<Option<String>>
where
    R: sqlx::Row,
    usize: sqlx::ColumnIndex<R>,
{
    let raw = row
        .try_get_raw(idx)
        .map_err(|e| Text2SqlError::decode(column_name(row, idx), "unknown", e.to_string()))?;
    if raw.is_null() {
        return Ok(None);
    }
    Ok(Some(raw.type_info().name().to_string()))
}

fn get_pg<'r, T>(row: &'r PgRow, idx: usize, type_name: &str) -> Text2SqlResult<T>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get::<T, _>(idx)
        .map_err(|e| Text2SqlError::decode(column_name(row, idx), type_name, e.to_string()))
}

fn get_sqlite<'r, T>(row: &'r SqliteRow, idx: usize, type_name: &str) -> Text2SqlResult<T>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get::<T, _>(idx)
        .map_err(|e| Text2SqlError::decode(column_name(row, idx), type_name, e.to_string()))
}

/// How a PostgreSQL value is turned into JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PgKind {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Numeric,
    Text,
    Json,
    Uuid,
    Date,
    Time,
    Timestamp,
    Timestamptz,
    Bytes,
    BoolArray,
    Int4Array,
    Int8Array,
    Float8Array,
    TextArray,
    Void,
    /// No native mapping; the server's text rendering is used
    /// (`INTERVAL`, `MONEY`, `INET`, `TIMETZ`, `"CHAR"`, enums, ...)
    ServerText,
}

fn pg_kind(type_name: &str) -> PgKind {
    match type_name {
        "BOOL" => PgKind::Bool,
        "INT2" => PgKind::Int2,
        "INT4" => PgKind::Int4,
        "INT8" => PgKind::Int8,
        "FLOAT4" => PgKind::Float4,
        "FLOAT8" => PgKind::Float8,
        "NUMERIC" => PgKind::Numeric,
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CITEXT" | "UNKNOWN" => PgKind::Text,
        "JSON" | "JSONB" => PgKind::Json,
        "UUID" => PgKind::Uuid,
        "DATE" => PgKind::Date,
        "TIME" => PgKind::Time,
        "TIMESTAMP" => PgKind::Timestamp,
        "TIMESTAMPTZ" => PgKind::Timestamptz,
        "BYTEA" => PgKind::Bytes,
        "BOOL[]" => PgKind::BoolArray,
        "INT4[]" => PgKind::Int4Array,
        "INT8[]" => PgKind::Int8Array,
        "FLOAT8[]" => PgKind::Float8Array,
        "TEXT[]" | "VARCHAR[]" => PgKind::TextArray,
        "VOID" => PgKind::Void,
        _ => PgKind::ServerText,
    }
}

fn pg_value(row: &PgRow, idx: usize) -> Text2SqlResult<Value> {
    let Some(type_name) = runtime_type(row, idx)? else {
        return Ok(Value::Null);
    };
    let ty = type_name.as_str();

    let value = match pg_kind(ty) {
        PgKind::Bool => json!(get_pg::<bool>(row, idx, ty)?),
        PgKind::Int2 => json!(get_pg::<i16>(row, idx, ty)?),
        PgKind::Int4 => json!(get_pg::<i32>(row, idx, ty)?),
        PgKind::Int8 => json!(get_pg::<i64>(row, idx, ty)?),
        PgKind::Float4 => json!(get_pg::<f32>(row, idx, ty)?),
        PgKind::Float8 => json!(get_pg::<f64>(row, idx, ty)?),
        PgKind::Numeric => decimal_value(get_pg::<Decimal>(row, idx, ty)?),
        PgKind::Text => Value::String(get_pg::<String>(row, idx, ty)?),
        PgKind::Json => get_pg::<JsonValue>(row, idx, ty)?,
        PgKind::Uuid => Value::String(get_pg::<Uuid>(row, idx, ty)?.to_string()),
        PgKind::Date => Value::String(get_pg::<NaiveDate>(row, idx, ty)?.to_string()),
        PgKind::Time => Value::String(get_pg::<NaiveTime>(row, idx, ty)?.to_string()),
        PgKind::Timestamp => Value::String(get_pg::<NaiveDateTime>(row, idx, ty)?.to_string()),
        PgKind::Timestamptz => {
            Value::String(get_pg::<DateTime<Utc>>(row, idx, ty)?.to_rfc3339())
        }
        PgKind::Bytes => Value::String(BASE64.encode(get_pg::<Vec<u8>>(row, idx, ty)?)),
        PgKind::BoolArray => json!(get_pg::<Vec<Option<bool>>>(row, idx, ty)?),
        PgKind::Int4Array => json!(get_pg::<Vec<Option<i32>>>(row, idx, ty)?),
        PgKind::Int8Array => json!(get_pg::<Vec<Option<i64>>>(row, idx, ty)?),
        PgKind::Float8Array => json!(get_pg::<Vec<Option<f64>>>(row, idx, ty)?),
        PgKind::TextArray => json!(get_pg::<Vec<Option<String>>>(row, idx, ty)?),
        PgKind::Void => Value::Null,
        PgKind::ServerText => server_text(row, idx, ty)?,
    };

    Ok(value)
}

/// The value exactly as the server rendered it. Only text-format values
/// carry a rendering; binary values of unmapped types are a decode error.
fn server_text(row: &PgRow, idx: usize, type_name: &str) -> Text2SqlResult<Value> {
    let is_text = row
        .try_get_raw(idx)
        .map(|raw| raw.format() == PgValueFormat::Text)
        .unwrap_or(false);
    if !is_text {
        return Err(Text2SqlError::decode(
            column_name(row, idx),
            type_name,
            "unsupported column type",
        ));
    }

    row.try_get_unchecked::<String, _>(idx)
        .map(Value::String)
        .map_err(|e| Text2SqlError::decode(column_name(row, idx), type_name, e.to_string()))
}

fn sqlite_value(row: &SqliteRow, idx: usize) -> Text2SqlResult<Value> {
    let Some(type_name) = runtime_type(row, idx)? else {
        return Ok(Value::Null);
    };
    let ty = type_name.as_str();

    let value = match ty {
        "INTEGER" | "BOOLEAN" => json!(get_sqlite::<i64>(row, idx, ty)?),
        "REAL" => json!(get_sqlite::<f64>(row, idx, ty)?),
        "TEXT" | "DATE" | "TIME" | "DATETIME" => Value::String(get_sqlite::<String>(row, idx, ty)?),
        "BLOB" => Value::String(BASE64.encode(get_sqlite::<Vec<u8>>(row, idx, ty)?)),
        other => {
            return Err(Text2SqlError::decode(
                column_name(row, idx),
                other,
                "unsupported column type",
            ));
        }
    };

    Ok(value)
}

/// Numbers stay numbers when JSON can hold them exactly
fn decimal_value(decimal: Decimal) -> Value {
    let text = decimal.normalize().to_string();
    serde_json::from_str::<serde_json::Number>(&text)
        .map(Value::Number)
        .unwrap_or(Value::String(text))
}
