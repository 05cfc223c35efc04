//! Error taxonomy for the syntax frontend.
//!
//! Four concrete error kinds, mirroring the four ways an analysis can fail:
//!
//! - [`LexError`] - malformed character stream; fatal for the unit.
//! - [`CursorError`] - cursor contract violation; an engine bug, not bad input.
//! - [`ForwardDeclareError`] - a unit's token sequence does not start with the
//!   minimal `class Name {` shape; fatal for the whole run.
//! - [`SyntaxError`] - token stream does not match the grammar; fatal for the
//!   unit, reported at the first violation (no recovery, no multi-error lists).
//!
//! [`AnalyzeError`] is the umbrella returned by the per-unit entry points. The
//! driver layer is expected to attach the originating unit's identity and the
//! source text when reporting; every span-carrying variant exposes a labeled
//! `miette` span for that purpose.

use crate::span::Span;
use miette::Diagnostic;
use thiserror::Error;

/// Malformed character stream.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unexpected character `{ch}`")]
    #[diagnostic(code(jackal::lex::unexpected_char))]
    UnexpectedChar {
        ch: char,
        #[label("not part of any token")]
        span: Span,
    },

    #[error("unterminated string constant")]
    #[diagnostic(
        code(jackal::lex::unterminated_string),
        help("string constants must be closed with `\"` on the same line")
    )]
    UnterminatedString {
        #[label("string starts here")]
        span: Span,
    },

    #[error("unterminated block comment")]
    #[diagnostic(code(jackal::lex::unterminated_comment))]
    UnterminatedComment {
        #[label("comment starts here")]
        span: Span,
    },

    #[error("integer constant `{text}` is out of range")]
    #[diagnostic(
        code(jackal::lex::int_out_of_range),
        help("integer constants must fit in 0..=32767")
    )]
    IntOutOfRange {
        text: String,
        #[label("too large")]
        span: Span,
    },
}

/// Contract violation on [`crate::cursor::TokenCursor`] use.
///
/// Reaching one of these from the grammar engine indicates an engine bug, not
/// a problem with the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum CursorError {
    #[error("advance past the end of the token sequence")]
    #[diagnostic(code(jackal::cursor::advance_past_end))]
    AdvancePastEnd,

    #[error("retreat without an immediately preceding advance")]
    #[diagnostic(code(jackal::cursor::retreat_without_advance))]
    RetreatWithoutAdvance,
}

/// A unit failed the forward-declaration pass.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ForwardDeclareError {
    #[error("`{unit}` contains no tokens")]
    #[diagnostic(code(jackal::forward_declare::empty_unit))]
    EmptyUnit { unit: String },

    #[error("`{unit}` does not start with a class declaration: expected {expected}, found {found}")]
    #[diagnostic(
        code(jackal::forward_declare::malformed_header),
        help("every compilation unit must begin with `class Name {{`")
    )]
    MalformedHeader {
        unit: String,
        expected: &'static str,
        found: String,
        #[label("expected {expected}")]
        span: Span,
    },
}

impl ForwardDeclareError {
    /// Name of the offending compilation unit.
    pub fn unit(&self) -> &str {
        match self {
            ForwardDeclareError::EmptyUnit { unit } => unit,
            ForwardDeclareError::MalformedHeader { unit, .. } => unit,
        }
    }
}

/// The token stream does not match the grammar.
///
/// Carries the production being attempted and the token actually found.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("expected {expected} in {production}, found {found}")]
    #[diagnostic(code(jackal::syntax::unexpected_token))]
    UnexpectedToken {
        production: &'static str,
        expected: String,
        found: String,
        #[label("found {found}")]
        span: Span,
    },

    #[error("unexpected end of input in {production}: expected {expected}")]
    #[diagnostic(code(jackal::syntax::unexpected_end))]
    UnexpectedEnd {
        production: &'static str,
        expected: String,
    },

    #[error("unknown type `{name}` in {production}")]
    #[diagnostic(
        code(jackal::syntax::unknown_type),
        help("a type must be `int`, `char`, `boolean`, or a class declared in this compilation run")
    )]
    UnknownType {
        production: &'static str,
        name: String,
        #[label("not a declared class")]
        span: Span,
    },

    #[error("trailing input after the class body, found {found}")]
    #[diagnostic(code(jackal::syntax::trailing_tokens))]
    TrailingTokens {
        found: String,
        #[label("nothing may follow the closing `}}` of the class")]
        span: Span,
    },
}

/// Umbrella error for the per-unit analysis entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AnalyzeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Cursor(#[from] CursorError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ForwardDeclare(#[from] ForwardDeclareError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}
