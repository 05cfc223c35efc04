//! Class registry and the forward-declaration pass.
//!
//! The grammar treats "is this identifier a declared class name" as a registry
//! lookup, and the language permits a type reference to a class declared later
//! in file order or in a different file. That is not resolvable in a single
//! left-to-right pass, so before any unit's body is parsed, every unit of the
//! run is scanned just far enough to find the `class Name {` prefix and the
//! name is collected here.
//!
//! The registry is built in one explicit phase and immutable afterwards; the
//! grammar engine only ever borrows it read-only.

use crate::diagnostics::ForwardDeclareError;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use jackal_core::lang::keywords::KeywordId;
use jackal_core::lang::symbols::SymbolId;
use std::collections::BTreeSet;

/// The set of class names declared across all compilation units of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRegistry {
    names: BTreeSet<String>,
}

impl ClassRegistry {
    /// Run the forward-declaration pass over the complete set of compilation
    /// units and return the frozen registry.
    ///
    /// Each unit is a `(name, tokens)` pair; only the `class Name {` prefix of
    /// each token sequence is inspected. Registration is order-independent, and
    /// duplicate declarations of the same name collapse into one entry.
    ///
    /// ## Errors
    /// [`ForwardDeclareError`] naming the offending unit if any unit does not
    /// start with the minimal class-declaration shape. The whole run fails,
    /// since the registry would otherwise be incomplete.
    pub fn from_units<'a, I>(units: I) -> Result<Self, ForwardDeclareError>
    where
        I: IntoIterator<Item = (&'a str, &'a [Token])>,
    {
        let mut names = BTreeSet::new();
        for (unit, tokens) in units {
            let name = declared_class_name(unit, tokens)?;
            tracing::debug!(class = name, unit, "forward declared class");
            names.insert(name.to_string());
        }
        Ok(Self { names })
    }

    /// Return `true` if `name` was declared by some unit of the run.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate the declared class names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of distinct declared classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return `true` if no class was declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Extract the declared class name from the `class Name {` prefix of a unit's
/// token sequence.
fn declared_class_name<'t>(unit: &str, tokens: &'t [Token]) -> Result<&'t str, ForwardDeclareError> {
    let expect = |index: usize, expected: &'static str| -> Result<&'t Token, ForwardDeclareError> {
        tokens.get(index).ok_or_else(|| header_end_error(unit, tokens, expected))
    };

    let class_kw = expect(0, "keyword `class`")?;
    if !class_kw.kind.is_keyword(KeywordId::Class) {
        return Err(header_error(unit, class_kw, "keyword `class`"));
    }

    let name_tok = expect(1, "a class name")?;
    let Some(name) = name_tok.kind.ident() else {
        return Err(header_error(unit, name_tok, "a class name"));
    };

    let brace = expect(2, "symbol `{`")?;
    if !brace.kind.is_symbol(SymbolId::LBrace) {
        return Err(header_error(unit, brace, "symbol `{`"));
    }

    Ok(name)
}

fn header_error(unit: &str, found: &Token, expected: &'static str) -> ForwardDeclareError {
    ForwardDeclareError::MalformedHeader {
        unit: unit.to_string(),
        expected,
        found: found.kind.to_string(),
        span: found.span,
    }
}

fn header_end_error(unit: &str, tokens: &[Token], expected: &'static str) -> ForwardDeclareError {
    match tokens.last() {
        Some(last) => ForwardDeclareError::MalformedHeader {
            unit: unit.to_string(),
            expected,
            found: "end of input".to_string(),
            span: Span::new(last.span.end, last.span.end),
        },
        None => ForwardDeclareError::EmptyUnit {
            unit: unit.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn registry_of(sources: &[&str]) -> Result<ClassRegistry, ForwardDeclareError> {
        let sequences: Vec<Vec<Token>> = sources.iter().map(|s| lex(s).unwrap()).collect();
        ClassRegistry::from_units(
            sequences
                .iter()
                .enumerate()
                .map(|(i, tokens)| (sources[i], tokens.as_slice())),
        )
    }

    #[test]
    fn test_registers_one_class_per_unit() {
        let registry = registry_of(&["class Main { }", "class Square { }"]).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Main"));
        assert!(registry.contains("Square"));
        assert!(!registry.contains("Other"));
    }

    #[test]
    fn test_only_the_header_is_inspected() {
        // The body is nonsense past the header; the pass must not care.
        let registry = registry_of(&["class Main { ; ; ; let"]).unwrap();
        assert!(registry.contains("Main"));
    }

    #[test]
    fn test_order_independent() {
        let forward = registry_of(&["class A { }", "class B { }", "class C { }"]).unwrap();
        let backward = registry_of(&["class C { }", "class B { }", "class A { }"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duplicates_collapse() {
        let registry = registry_of(&["class Main { }", "class Main { }"]).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_unit() {
        let err = registry_of(&[""]).unwrap_err();
        assert!(matches!(err, ForwardDeclareError::EmptyUnit { .. }));
        assert_eq!(err.unit(), "");
    }

    #[test]
    fn test_missing_class_keyword() {
        let err = registry_of(&["function Main { }"]).unwrap_err();
        match err {
            ForwardDeclareError::MalformedHeader { expected, found, .. } => {
                assert_eq!(expected, "keyword `class`");
                assert!(found.contains("function"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_name() {
        let err = registry_of(&["class { }"]).unwrap_err();
        assert!(matches!(err, ForwardDeclareError::MalformedHeader { expected: "a class name", .. }));
    }

    #[test]
    fn test_truncated_header() {
        let err = registry_of(&["class Main"]).unwrap_err();
        match err {
            ForwardDeclareError::MalformedHeader { expected, found, .. } => {
                assert_eq!(expected, "symbol `{`");
                assert_eq!(found, "end of input");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_keyword_in_name_position() {
        let err = registry_of(&["class class { }"]).unwrap_err();
        assert!(matches!(err, ForwardDeclareError::MalformedHeader { expected: "a class name", .. }));
    }
}
