use goanalyzer_core::{
    ConventionViolation, StructuralViolation, TokenKind, Violation, analyze, check_conventions,
    check_structure, tokenize,
};
use pretty_assertions::assert_eq;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[test]
fn test_print_call_tokens() {
    let stream = tokenize("fmt.Println(1)");
    let tokens: Vec<_> = stream
        .tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Keyword, "fmt"),
            (TokenKind::Err, "."),
            (TokenKind::Keyword, "Println"),
            (TokenKind::Sym, "("),
            (TokenKind::Num, "1"),
            (TokenKind::Sym, ")"),
        ]
    );
}

#[test]
fn test_structure_of_empty_input() {
    assert_eq!(
        check_structure("").into_violations(),
        vec![
            StructuralViolation::MissingPackage,
            StructuralViolation::MissingEntrypoint
        ]
    );
}

#[test]
fn test_structure_of_minimal_program() {
    assert!(check_structure("package main\nfunc main() {\n}\n").is_clean());
}

#[test]
fn test_structure_of_unclosed_entrypoint() {
    let report = check_structure("func main() {\n");
    let codes: Vec<_> = report.violations().iter().map(|v| v.code()).collect();
    assert_eq!(codes, vec!["S001", "S004"]);
}

#[test]
fn test_conventions_of_consistent_loop() {
    let input = "for i := 0; i < 10; i++ {\n}\nfmt.Println(i)";
    assert!(check_conventions(input).is_clean());
}

#[test]
fn test_conventions_of_inconsistent_loop() {
    let report = check_conventions("for i := 0; j < 10; i++ {\n}");
    let inconsistent: Vec<_> = report
        .violations()
        .iter()
        .filter(|v| matches!(v, ConventionViolation::InconsistentLoopVariable { .. }))
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        inconsistent,
        vec!["Inconsistencia de variables en la línea: for i := 0; j < 10; i++ {"]
    );
}

#[test]
fn test_full_program() {
    let input = r#"package main

import "fmt"

func main() {
	total := 0
	for i := 0; i < 5; i++ {
		total = total + i
	}
	if total > 3 {
		fmt.Println(total)
	} else {
		return
	}
}
"#;
    let analysis = analyze(input);

    let census = analysis.lexical.census;
    // package main import fmt func main for fmt Println if else return
    assert_eq!(census.keyword, 12);
    // total x5, i x4
    assert_eq!(census.id, 9);
    assert_eq!(census.num, 4);
    // quotes around "fmt", ':' of two ':=', '.' of fmt.Println
    assert_eq!(census.err, 5);
    assert_eq!(census.total(), analysis.lexical.len());

    // `} else {` ends with `{`, so the line scan sees one brace too many.
    assert_eq!(
        analysis.structure.into_violations(),
        vec![StructuralViolation::UnmatchedOpeningBraces { open: 1 }]
    );
    assert_eq!(
        analysis.conventions.summary(),
        "Uso correcto de las estructuras semánticas"
    );
}
