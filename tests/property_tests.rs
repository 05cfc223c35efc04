//! Property-based tests for the Jack syntax analyzer.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use jackal::driver::{analyze_run, SourceUnit};
use jackal_syntax::lexer::{self, TokenKind};
use jackal_syntax::registry::ClassRegistry;
use proptest::prelude::*;

// Strategy for identifiers that are not reserved words.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,11}".prop_filter("not a keyword", |s| {
        jackal_core::lang::keywords::from_str(s).is_none()
    })
}

// Strategy for a minimal class body built from generated names.
fn simple_class_strategy() -> impl Strategy<Value = (String, String)> {
    (ident_strategy(), ident_strategy(), 0u16..=32767).prop_map(|(class, var, value)| {
        let source = format!(
            "class {class} {{ function void main() {{ var int {var}; let {var} = {value}; return; }} }}"
        );
        (class, source)
    })
}

proptest! {
    /// Lexing is deterministic: the same input always yields the same result,
    /// whether that result is a token sequence or an error.
    #[test]
    fn lexing_is_deterministic(input in ".{0,200}") {
        let first = lexer::lex(&input);
        let second = lexer::lex(&input);
        prop_assert_eq!(first, second);
    }

    /// A generated identifier lexes to exactly one identifier token spanning
    /// the whole input.
    #[test]
    fn identifiers_lex_to_a_single_token(name in ident_strategy()) {
        let tokens = lexer::lex(&name).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Ident(name.clone()));
        prop_assert_eq!(tokens[0].span.start, 0);
        prop_assert_eq!(tokens[0].span.end, name.len());
    }

    /// Integer constants in range lex to their numeric value.
    #[test]
    fn in_range_integers_lex(value in 0u16..=32767) {
        let tokens = lexer::lex(&value.to_string()).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Int(value));
    }

    /// Integer constants above the range are rejected.
    #[test]
    fn out_of_range_integers_fail(value in 32768u32..=1_000_000) {
        prop_assert!(lexer::lex(&value.to_string()).is_err());
    }

    /// Generated classes analyze to a tag-balanced node sequence.
    #[test]
    fn generated_classes_are_balanced((_, source) in simple_class_strategy()) {
        let units = [SourceUnit::new("Gen.jack", source)];
        let analyzed = analyze_run(&units).unwrap();

        let mut depth = 0i32;
        for node in &analyzed[0].nodes {
            if node.starts_with("</") {
                depth -= 1;
            } else if node.starts_with('<') && node.ends_with('>') && !node.contains(' ') {
                depth += 1;
            }
            prop_assert!(depth >= 0, "closing tag without opener at `{}`", node);
        }
        prop_assert_eq!(depth, 0);
    }

    /// The class registry is independent of unit order.
    #[test]
    fn registry_ignores_unit_order(mut names in prop::collection::vec(ident_strategy(), 1..6)) {
        names.sort();
        names.dedup();

        let sources: Vec<String> = names.iter().map(|n| format!("class {n} {{ }}")).collect();
        let sequences: Vec<Vec<lexer::Token>> = sources
            .iter()
            .map(|s| lexer::lex(s).unwrap())
            .collect();

        let forward = ClassRegistry::from_units(
            names.iter().map(String::as_str).zip(sequences.iter().map(Vec::as_slice)),
        )
        .unwrap();
        let backward = ClassRegistry::from_units(
            names.iter().map(String::as_str).zip(sequences.iter().map(Vec::as_slice)).rev(),
        )
        .unwrap();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.len(), names.len());
    }
}
