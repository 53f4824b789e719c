//! Property-based tests for the analysis pipeline.

use goanalyzer_core::{TokenCensus, analyze, check_conventions, check_structure, tokenize};
use proptest::prelude::*;

/// Go-flavoured fragments so that generated inputs hit every rule.
fn source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "package main", "func main()", "fmt.Println", "for i := 0; i < 10; i++", "{", "}", "\n",
        " ", "\t", "x", "_y2", "42", "7up", ":=", ";", "\"", ".", "ñ", "<=", "format", "\r\n",
    ]);
    prop_oneof![
        prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat()),
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn test_census_sums_to_token_count(input in source_strategy()) {
        let stream = tokenize(&input);
        prop_assert_eq!(stream.census.total(), stream.tokens.len());

        let recount: TokenCensus = stream.tokens.iter().collect();
        prop_assert_eq!(recount, stream.census);
    }

    #[test]
    fn test_tokenize_is_deterministic(input in source_strategy()) {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
        prop_assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn test_tokens_are_in_input_order(input in source_strategy()) {
        let stream = tokenize(&input);
        for pair in stream.tokens.windows(2) {
            prop_assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
        }
    }

    #[test]
    fn test_lexemes_are_never_whitespace(input in source_strategy()) {
        for token in tokenize(&input).tokens {
            prop_assert!(!token.lexeme.is_empty());
            prop_assert!(!token.lexeme.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_required_declarations(input in source_strategy()) {
        let messages = check_structure(&input).messages();
        prop_assert_eq!(
            input.contains("package main"),
            !messages.contains(&"El código debe contener 'package main'.".to_string())
        );
        prop_assert_eq!(
            input.contains("func main()"),
            !messages.contains(&"El código debe contener 'func main()'.".to_string())
        );
    }

    #[test]
    fn test_non_loop_lines_never_flag_loops(input in "[a-eg-z0-9 (){};=\n]{0,200}") {
        // No line can start with `for` without an `f`.
        let report = check_conventions(&input);
        prop_assert!(report.len() <= 1);
    }
}
