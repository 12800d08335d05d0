//! `text2sql ask`: translate, then execute

use crate::commands::print_json;
use crate::console::CliConsole;
use text2sql_core::{Text2SqlResult, TextToSql, format_result};

pub async fn run(t2s: &TextToSql, question: &str, json: bool, verbose: bool) -> Text2SqlResult<()> {
    if json {
        let outcome = t2s.ask(question).await?;
        print_json(&outcome);
        return Ok(());
    }

    let mut console = CliConsole::new(verbose);
    console.info(&format!("Model: {}", t2s.translator().model_name()));

    console.start_progress("Generating SQL...");
    let sql = t2s.translate(question).await;
    console.finish_progress();
    let sql = sql?;
    console.print_sql(&sql);

    let result = t2s.execute(&sql).await?;
    println!();
    print!("{}", format_result(&result));
    Ok(())
}
