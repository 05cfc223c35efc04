//! Define the reserved keyword vocabulary for the Jack language.
//!
//! This module is the single source of truth for reserved words: a stable
//! identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that
//! records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; `Class` is an identifier,
//!   `class` is a keyword.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use jackal_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Class), "class");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Class,
    Constructor,
    Function,
    Method,
    Field,
    Static,
    Var,

    // Built-in types
    Int,
    Char,
    Boolean,
    Void,

    // Keyword constants
    True,
    False,
    Null,
    This,

    // Statements
    Let,
    Do,
    If,
    Else,
    While,
    Return,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Type,
    Constant,
    Statement,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Constructor, "constructor", KeywordCategory::Declaration),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::Method, "method", KeywordCategory::Declaration),
    info(KeywordId::Field, "field", KeywordCategory::Declaration),
    info(KeywordId::Static, "static", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    // Built-in types
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Char, "char", KeywordCategory::Type),
    info(KeywordId::Boolean, "boolean", KeywordCategory::Type),
    info(KeywordId::Void, "void", KeywordCategory::Type),
    // Keyword constants
    info(KeywordId::True, "true", KeywordCategory::Constant),
    info(KeywordId::False, "false", KeywordCategory::Constant),
    info(KeywordId::Null, "null", KeywordCategory::Constant),
    info(KeywordId::This, "this", KeywordCategory::Constant),
    // Statements
    info(KeywordId::Let, "let", KeywordCategory::Statement),
    info(KeywordId::Do, "do", KeywordCategory::Statement),
    info(KeywordId::If, "if", KeywordCategory::Statement),
    info(KeywordId::Else, "else", KeywordCategory::Statement),
    info(KeywordId::While, "while", KeywordCategory::Statement),
    info(KeywordId::Return, "return", KeywordCategory::Statement),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
