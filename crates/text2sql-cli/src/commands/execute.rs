//! `text2sql execute`

use crate::commands::print_json;
use text2sql_core::{Text2SqlResult, TextToSql, format_result};

pub async fn run(t2s: &TextToSql, sql: &str, json: bool) -> Text2SqlResult<()> {
    let result = t2s.execute(sql).await?;

    if json {
        print_json(&result);
    } else {
        print!("{}", format_result(&result));
    }
    Ok(())
}
