//! Symbol vocabulary.
//!
//! This module defines the canonical set of single-character symbol tokens used
//! by the lexer and grammar engine: delimiters, separators, the member-access
//! dot, and the expression operators.
//!
//! ## Notes
//! - Every Jack symbol is exactly one character; lookup is via [`from_char`].
//! - Operator fixity lives here as metadata ([`is_binary`], [`is_unary`]) so
//!   the grammar engine does not hard-code character lists.
//!
//! ## Examples
//! ```rust
//! use jackal_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_char('{'), Some(SymbolId::LBrace));
//! assert_eq!(symbols::as_char(SymbolId::Lt), '<');
//! assert!(symbols::is_binary(SymbolId::Plus));
//! ```

/// Broad syntactic grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators: `,` and `;`.
    Separator,
    /// Member access: `.`.
    Access,
    /// Expression operators.
    Operator,
}

/// Stable identifier for symbol tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,

    // Separators / access
    Dot,
    Comma,
    Semicolon,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Lt,
    Gt,
    Eq,
    Tilde,
}

/// Metadata for a symbol token.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub canonical: char,
    pub category: SymbolCategory,
    /// Usable as `term binaryOp term`.
    pub binary: bool,
    /// Usable as `unaryOp term`.
    pub unary: bool,
}

/// Registry of all symbol tokens.
pub const SYMBOLS: &[SymbolInfo] = &[
    // Delimiters
    info(SymbolId::LBrace, '{', SymbolCategory::Delimiter),
    info(SymbolId::RBrace, '}', SymbolCategory::Delimiter),
    info(SymbolId::LParen, '(', SymbolCategory::Delimiter),
    info(SymbolId::RParen, ')', SymbolCategory::Delimiter),
    info(SymbolId::LBracket, '[', SymbolCategory::Delimiter),
    info(SymbolId::RBracket, ']', SymbolCategory::Delimiter),
    // Separators / access
    info(SymbolId::Dot, '.', SymbolCategory::Access),
    info(SymbolId::Comma, ',', SymbolCategory::Separator),
    info(SymbolId::Semicolon, ';', SymbolCategory::Separator),
    // Operators
    op(SymbolId::Plus, '+', true, false),
    op(SymbolId::Minus, '-', true, true),
    op(SymbolId::Star, '*', true, false),
    op(SymbolId::Slash, '/', true, false),
    op(SymbolId::Amp, '&', true, false),
    op(SymbolId::Pipe, '|', true, false),
    op(SymbolId::Lt, '<', true, false),
    op(SymbolId::Gt, '>', true, false),
    op(SymbolId::Eq, '=', true, false),
    op(SymbolId::Tilde, '~', false, true),
];

/// Return the canonical character for a symbol token.
pub fn as_char(id: SymbolId) -> char {
    info_for(id).canonical
}

/// Return the category for a symbol token.
pub fn category(id: SymbolId) -> SymbolCategory {
    info_for(id).category
}

/// Return `true` if the symbol can appear between two terms.
pub fn is_binary(id: SymbolId) -> bool {
    info_for(id).binary
}

/// Return `true` if the symbol can prefix a single term.
pub fn is_unary(id: SymbolId) -> bool {
    info_for(id).unary
}

/// Return the full metadata entry for a symbol token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    SYMBOLS.iter().find(|s| s.id == id).expect("symbol info missing")
}

/// Resolve a character to its symbol identifier.
pub fn from_char(c: char) -> Option<SymbolId> {
    SYMBOLS.iter().find(|s| s.canonical == c).map(|s| s.id)
}

const fn info(id: SymbolId, canonical: char, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo {
        id,
        canonical,
        category,
        binary: false,
        unary: false,
    }
}

const fn op(id: SymbolId, canonical: char, binary: bool, unary: bool) -> SymbolInfo {
    SymbolInfo {
        id,
        canonical,
        category: SymbolCategory::Operator,
        binary,
        unary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_roundtrip() {
        for s in SYMBOLS {
            assert_eq!(from_char(s.canonical), Some(s.id), "lookup failed for {:?}", s.id);
            assert_eq!(as_char(s.id), s.canonical);
        }
    }

    #[test]
    fn test_fixity() {
        assert!(is_binary(SymbolId::Plus));
        assert!(!is_unary(SymbolId::Plus));
        assert!(is_binary(SymbolId::Minus));
        assert!(is_unary(SymbolId::Minus));
        assert!(is_unary(SymbolId::Tilde));
        assert!(!is_binary(SymbolId::Tilde));
        assert!(!is_binary(SymbolId::Semicolon));
    }

    #[test]
    fn test_non_symbol_is_none() {
        assert_eq!(from_char('!'), None);
        assert_eq!(from_char('a'), None);
        assert_eq!(from_char(' '), None);
    }

    #[test]
    fn test_operators_categorized_as_operators() {
        for s in SYMBOLS {
            if s.binary || s.unary {
                assert_eq!(s.category, SymbolCategory::Operator, "{:?}", s.id);
            }
        }
    }
}
