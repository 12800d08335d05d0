//! `text2sql translate`

use crate::commands::print_json;
use crate::console::CliConsole;
use serde_json::json;
use text2sql_core::{Text2SqlResult, TextToSql};

pub async fn run(t2s: &TextToSql, question: &str, json: bool) -> Text2SqlResult<()> {
    let mut console = CliConsole::new(false);
    if !json {
        console.start_progress("Generating SQL...");
    }

    let result = t2s.translate(question).await;
    console.finish_progress();
    let sql = result?;

    if json {
        print_json(&json!({ "question": question, "sql": sql }));
    } else {
        console.print_sql(&sql);
    }
    Ok(())
}
