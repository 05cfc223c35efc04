//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and
//! to make it easy to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use jackal_core::lang::keywords::KeywordId;
use jackal_core::lang::symbols::SymbolId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the symbol id, if this is a symbol token.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        match self {
            TokenKind::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given symbol.
    pub fn is_symbol(&self, id: SymbolId) -> bool {
        matches!(self, TokenKind::Symbol(s) if *s == id)
    }

    /// Return the identifier spelling, if this is an identifier token.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.symbol_id()`.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        self.kind.symbol_id()
    }

    /// Convenience wrapper for `self.kind.ident()`.
    pub fn ident(&self) -> Option<&str> {
        self.kind.ident()
    }
}
