//! Token types for the Jack lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Symbol(SymbolId)` for single-character symbols
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the grammar engine.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.
//! - Tokens are immutable values; the lexer is the only producer.

use crate::span::Span;
use jackal_core::lang::keywords::{self, KeywordId};
use jackal_core::lang::symbols::{self, SymbolId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Symbol(SymbolId),
    Ident(String),
    /// Integer constant, already range-checked to 0..=32767.
    Int(u16),
    /// String constant without the surrounding quotes.
    Str(String),
}

impl TokenKind {
    /// Tag name used when rendering this token as a node line.
    pub fn xml_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integerConstant",
            TokenKind::Str(_) => "stringConstant",
        }
    }

    /// Source spelling of the token.
    pub fn text(&self) -> String {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            TokenKind::Symbol(id) => symbols::as_char(*id).to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Int(value) => value.to_string(),
            TokenKind::Str(text) => text.clone(),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword `{}`", keywords::as_str(*id)),
            TokenKind::Symbol(id) => write!(f, "symbol `{}`", symbols::as_char(*id)),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Int(value) => write!(f, "integer constant {value}"),
            TokenKind::Str(text) => write!(f, "string constant \"{text}\""),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Render this token as one node line, e.g. `<keyword> class </keyword>`.
    pub fn xml_line(&self) -> String {
        let name = self.kind.xml_name();
        format!("<{name}> {} </{name}>", xml_escape(&self.kind.text()))
    }
}

/// Escape the characters XML reserves; `<`, `>`, and `&` are Jack symbols.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
