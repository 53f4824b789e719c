//! HTML page for the form front end.
//!
//! The page always shows the form, the lexical table and the result table.
//! Before the first submission the result cells stay empty, which is how the
//! page tells "not analyzed yet" apart from "analyzed, nothing found".

use goanalyzer_core::{Analysis, Token, TokenCensus, TokenKind};
use std::fmt::Write;

/// Column order of the lexical table, after the leading lexeme column.
const KIND_COLUMNS: [TokenKind; 5] = [
    TokenKind::Keyword,
    TokenKind::Id,
    TokenKind::Num,
    TokenKind::Sym,
    TokenKind::Err,
];

const HEADERS: [&str; 6] = ["Tokens", "KEYWORD", "ID", "Números", "Símbolos", "Error"];
const MARK: &str = "x";

/// One table row: the lexeme, then a mark under the token's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub lexeme: String,
    pub marks: [bool; 5],
}

impl From<&Token> for DisplayRow {
    fn from(token: &Token) -> Self {
        Self {
            lexeme: token.lexeme.clone(),
            marks: KIND_COLUMNS.map(|kind| kind == token.kind),
        }
    }
}

impl DisplayRow {
    pub fn cells(&self) -> [&str; 6] {
        let mark = |on: bool| if on { MARK } else { "" };
        [
            self.lexeme.as_str(),
            mark(self.marks[0]),
            mark(self.marks[1]),
            mark(self.marks[2]),
            mark(self.marks[3]),
            mark(self.marks[4]),
        ]
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = r#"
    .container { width: 100%; margin: 20px auto; padding: 20px; background-color: #fff; }
    h1 { color: #333; }
    textarea { width: 100%; height: 200px; border: 1px solid #ddd; border-radius: 8px; padding: 10px; margin-bottom: 10px; font-size: 16px; }
    input[type="submit"] { background-color: #007BFF; color: white; padding: 10px 20px; border: none; border-radius: 5px; cursor: pointer; font-size: 18px; }
    input[type="submit"]:hover { background-color: #0056b3; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: center; }
    th { background-color: #f2f2f2; color: #333; }
    .error { color: #b00020; font-weight: bold; }
"#;

/// Renders the full page. `analysis` is `None` until the form is submitted.
pub fn render_page(code: &str, analysis: Option<&Analysis>) -> String {
    render(code, analysis, None)
}

/// Renders the page for a submission that was not analyzed, with `message`
/// above the form.
pub fn render_rejected(code: &str, message: &str) -> String {
    render(code, None, Some(message))
}

fn render(code: &str, analysis: Option<&Analysis>, notice: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str("<!doctype html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1, shrink-to-fit=no\">\n",
    );
    let _ = writeln!(html, "  <style>{}</style>", STYLE);
    html.push_str("  <title>Analizador Go</title>\n</head>\n<body>\n");
    html.push_str("  <div class=\"container\">\n    <h1>Analizador Go</h1>\n");
    if let Some(notice) = notice {
        let _ = writeln!(html, "    <p class=\"error\">{}</p>", escape_html(notice));
    }

    html.push_str("    <form method=\"post\">\n");
    let _ = writeln!(
        html,
        "      <textarea name=\"code\" rows=\"10\" cols=\"50\">{}</textarea><br>",
        escape_html(code)
    );
    html.push_str("      <input type=\"submit\" value=\"Analizar\">\n    </form>\n");

    render_lexical(&mut html, analysis);
    render_verdicts(&mut html, analysis);

    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn render_lexical(html: &mut String, analysis: Option<&Analysis>) {
    html.push_str("    <div>\n      <h2>Analizador Léxico</h2>\n      <table>\n        <tr>");
    for header in HEADERS {
        let _ = write!(html, "<th>{}</th>", header);
    }
    html.push_str("</tr>\n");

    let census = analysis.map(|a| a.lexical.census).unwrap_or_default();
    if let Some(analysis) = analysis {
        for token in &analysis.lexical.tokens {
            render_row(html, &DisplayRow::from(token).cells());
        }
    }
    render_totals(html, &census);

    html.push_str("      </table>\n    </div>\n");
}

fn render_row(html: &mut String, cells: &[&str]) {
    html.push_str("        <tr>");
    for cell in cells {
        let _ = write!(html, "<td>{}</td>", escape_html(cell));
    }
    html.push_str("</tr>\n");
}

fn render_totals(html: &mut String, census: &TokenCensus) {
    let counts: Vec<String> = KIND_COLUMNS
        .iter()
        .map(|kind| census.get(*kind).to_string())
        .collect();
    let mut cells = vec!["Total"];
    cells.extend(counts.iter().map(String::as_str));
    render_row(html, &cells);
}

fn render_verdicts(html: &mut String, analysis: Option<&Analysis>) {
    let (syntactic, semantic) = analysis
        .map(|a| (a.structure.summary(), a.conventions.summary()))
        .unwrap_or_default();

    html.push_str("    <div>\n      <h2>Analizador Sintáctico y Semántico</h2>\n      <table>\n");
    html.push_str("        <tr><th>Sintáctico</th><th>Semántico</th></tr>\n");
    render_row(html, &[syntactic.as_str(), semantic.as_str()]);
    html.push_str("      </table>\n    </div>\n");
}
