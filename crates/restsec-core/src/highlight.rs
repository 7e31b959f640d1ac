//! Line tokenizer for the C# and JSON code samples
//!
//! The tokenizer is deliberately shallow: each line is scanned on its own
//! with a handful of regexes. Concatenating the returned token texts always
//! reproduces the input line.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    CSharp,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Plain,
    Comment,
    String,
    Attribute,
    Keyword,
    Number,
    Type,
    Key,
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

const CSHARP_KEYWORDS: &str = "using|var|new|return|public|private|protected|internal|static|\
async|await|class|interface|record|struct|abstract|override|virtual|sealed|readonly|const|void|\
string|int|bool|double|float|decimal|long|object|null|true|false|if|else|for|foreach|while|do|\
switch|case|break|continue|throw|try|catch|finally|namespace|this|base|params|ref|out|in|is|as|\
get|set|init|and|or|not|when|with|required|Task|IActionResult";

/// C# patterns in priority order; on equal start the earlier one wins.
static CSHARP_RULES: LazyLock<Vec<(Regex, TokenKind)>> = LazyLock::new(|| {
    let rule = |pattern: &str, kind| {
        (
            Regex::new(pattern).expect("C# highlight regex is valid"),
            kind,
        )
    };
    vec![
        rule(r"//.*", TokenKind::Comment),
        rule(r"/\*[\s\S]*?\*/", TokenKind::Comment),
        rule(r#""(?:[^"\\]|\\.)*"|@"(?:[^"]|"")*""#, TokenKind::String),
        rule(r"\[.*?\]", TokenKind::Attribute),
        rule(&format!(r"\b(?:{CSHARP_KEYWORDS})\b"), TokenKind::Keyword),
        rule(r"\b\d+(\.\d+)?\b", TokenKind::Number),
        rule(r"\b([A-Z][a-zA-Z0-9]*(?:<[^>]*>)?)\b", TokenKind::Type),
    ]
});

/// Groups: 1 key, 2 colon before a value, 3 string value, 4 literal, 5 number.
static JSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"("(?:[^"\\]|\\.)*")\s*:|(:\s*)("(?:[^"\\]|\\.)*")|(\bfalse\b|\btrue\b|\bnull\b)|(\d+)"#,
    )
    .expect("JSON highlight regex is valid")
});

/// Tokenize one line of source.
pub fn highlight_line(line: &str, lang: Lang) -> Vec<Token<'_>> {
    if line.trim_start().starts_with("//") {
        return vec![Token {
            text: line,
            kind: TokenKind::Comment,
        }];
    }

    let spans = match lang {
        Lang::CSharp => csharp_spans(line),
        Lang::Json => json_spans(line),
    };
    fill_gaps(line, spans)
}

fn csharp_spans(line: &str) -> Vec<(Range<usize>, TokenKind)> {
    let mut found: Vec<(Range<usize>, TokenKind)> = CSHARP_RULES
        .iter()
        .flat_map(|(re, kind)| re.find_iter(line).map(move |m| (m.range(), *kind)))
        .filter(|(range, _)| !range.is_empty())
        .collect();

    // Stable: ties keep priority order
    found.sort_by_key(|(range, _)| range.start);

    let mut cursor = 0;
    found.retain(|(range, _)| {
        if range.start < cursor {
            return false;
        }
        cursor = range.end;
        true
    });
    found
}

fn json_spans(line: &str) -> Vec<(Range<usize>, TokenKind)> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(caps) = JSON_PATTERN.captures_at(line, pos) {
        let Some(whole) = caps.get(0) else { break };

        if let Some(key) = caps.get(1) {
            spans.push((key.range(), TokenKind::Key));
            // Resume at the colon so a string value after it is still seen
            pos = key.end();
            continue;
        }
        if let Some(value) = caps.get(3) {
            spans.push((value.range(), TokenKind::String));
        } else if let Some(lit) = caps.get(4) {
            spans.push((lit.range(), TokenKind::Literal));
        } else if let Some(num) = caps.get(5) {
            spans.push((num.range(), TokenKind::Number));
        }

        if whole.is_empty() {
            break;
        }
        pos = whole.end();
    }
    spans
}

/// Turn sorted, disjoint spans into a gapless token list.
fn fill_gaps(line: &str, spans: Vec<(Range<usize>, TokenKind)>) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;

    for (range, kind) in spans {
        if range.start > last {
            tokens.push(Token {
                text: &line[last..range.start],
                kind: TokenKind::Plain,
            });
        }
        last = range.end;
        tokens.push(Token {
            text: &line[range],
            kind,
        });
    }
    if last < line.len() {
        tokens.push(Token {
            text: &line[last..],
            kind: TokenKind::Plain,
        });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::CODE_TABS;

    fn kinds<'a>(tokens: &[Token<'a>]) -> Vec<(&'a str, TokenKind)> {
        tokens.iter().map(|t| (t.text, t.kind)).collect()
    }

    #[test]
    fn test_csharp_statement() {
        let tokens = highlight_line(r#"var token = new JwtSecurityToken("issuer", 42);"#, Lang::CSharp);
        assert_eq!(
            kinds(&tokens),
            vec![
                ("var", TokenKind::Keyword),
                (" token = ", TokenKind::Plain),
                ("new", TokenKind::Keyword),
                (" ", TokenKind::Plain),
                ("JwtSecurityToken", TokenKind::Type),
                ("(", TokenKind::Plain),
                ("\"issuer\"", TokenKind::String),
                (", ", TokenKind::Plain),
                ("42", TokenKind::Number),
                (");", TokenKind::Plain),
            ]
        );
    }

    #[test]
    fn test_attribute_swallows_inner_matches() {
        let tokens = highlight_line(r#"[Authorize(Roles = "Admin")]"#, Lang::CSharp);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Attribute);
    }

    #[test]
    fn test_keyword_beats_type_on_same_start() {
        let tokens = highlight_line("Task Run()", Lang::CSharp);
        assert_eq!(tokens[0], Token { text: "Task", kind: TokenKind::Keyword });
        assert_eq!(tokens[2], Token { text: "Run", kind: TokenKind::Type });
    }

    #[test]
    fn test_keywords_inside_strings_stay_strings() {
        let tokens = highlight_line(r#"Log("return null");"#, Lang::CSharp);
        assert!(tokens
            .iter()
            .any(|t| t.text == "\"return null\"" && t.kind == TokenKind::String));
        assert!(!tokens.iter().any(|t| t.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_comment_lines_are_one_token() {
        for lang in [Lang::CSharp, Lang::Json] {
            let tokens = highlight_line("    // ① Build the claims", lang);
            assert_eq!(kinds(&tokens), vec![("    // ① Build the claims", TokenKind::Comment)]);
        }
    }

    #[test]
    fn test_trailing_comment() {
        let tokens = highlight_line("x = 1; // done", Lang::CSharp);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Comment));
        assert_eq!(tokens.last().map(|t| t.text), Some("// done"));
    }

    #[test]
    fn test_json_key_and_values() {
        let tokens = highlight_line(r#"  "Url": "https://*:443", "Enabled": true, "Port": 8443"#, Lang::Json);
        assert_eq!(
            kinds(&tokens),
            vec![
                ("  ", TokenKind::Plain),
                ("\"Url\"", TokenKind::Key),
                (": ", TokenKind::Plain),
                ("\"https://*:443\"", TokenKind::String),
                (", ", TokenKind::Plain),
                ("\"Enabled\"", TokenKind::Key),
                (": ", TokenKind::Plain),
                ("true", TokenKind::Literal),
                (", ", TokenKind::Plain),
                ("\"Port\"", TokenKind::Key),
                (": ", TokenKind::Plain),
                ("8443", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_empty_line() {
        assert!(highlight_line("", Lang::CSharp).is_empty());
        assert!(highlight_line("", Lang::Json).is_empty());
    }

    #[test]
    fn test_every_sample_line_round_trips() {
        for tab in &CODE_TABS {
            for file in tab.files {
                for line in file.lines() {
                    let joined: String = highlight_line(line, file.lang)
                        .iter()
                        .map(|t| t.text)
                        .collect();
                    assert_eq!(joined, line, "{}", file.filename);
                }
            }
        }
    }
}
