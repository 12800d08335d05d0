//! Generated text cleanup

use once_cell::sync::Lazy;
use regex::Regex;

// T5 vocabulary markers that some serving stacks leave in decoded output
static SPECIAL_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?s>|<pad>|<unk>").expect("valid special token regex"));

/// Strip tokenizer special tokens and surrounding whitespace from a decoded
/// sequence. Text between the tokens is left untouched.
pub fn clean_generated_text(text: &str) -> String {
    SPECIAL_TOKEN_RE.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sql_unchanged() {
        assert_eq!(clean_generated_text("SELECT 1"), "SELECT 1");
    }

    #[test]
    fn test_special_tokens_removed() {
        assert_eq!(
            clean_generated_text("<pad> SELECT COUNT(*) FROM users</s>"),
            "SELECT COUNT(*) FROM users"
        );
        assert_eq!(clean_generated_text("<s>SELECT <unk></s>"), "SELECT");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        assert_eq!(
            clean_generated_text("SELECT name  FROM t WHERE x = 'a  b'"),
            "SELECT name  FROM t WHERE x = 'a  b'"
        );
    }

    #[test]
    fn test_only_tokens_gives_empty() {
        assert_eq!(clean_generated_text("<pad></s>"), "");
    }
}
