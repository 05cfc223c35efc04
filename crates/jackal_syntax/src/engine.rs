//! Grammar engine for the Jack language.
//!
//! Drives a [`TokenCursor`] through the class grammar by recursive descent and
//! emits a flattened, tag-balanced node sequence: each grammar production
//! contributes an opening tag line, its tokens and sub-productions in order,
//! and a matching closing tag line.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use jackal_syntax::{engine, lexer, registry::ClassRegistry};
//!
//! let tokens = lexer::lex("class Main { }").unwrap();
//! let classes = ClassRegistry::from_units([("Main.jack", tokens.as_slice())]).unwrap();
//! let nodes = engine::compile_unit(&tokens, &classes).unwrap();
//! assert_eq!(nodes.len(), 6);
//! ```

use crate::cursor::TokenCursor;
use crate::diagnostics::{AnalyzeError, SyntaxError};
use crate::lexer::{Token, TokenKind};
use crate::registry::ClassRegistry;
use jackal_core::lang::keywords::{self, KeywordId};
use jackal_core::lang::symbols::{self, SymbolId};

// NOTE: This module is split across multiple files using `include!` to keep all
// engine methods in the same Rust module (preserving privacy + call patterns)
// while avoiding a single large source file.

include!("engine/core.rs");
include!("engine/helpers.rs");
include!("engine/decl.rs");
include!("engine/stmts.rs");
include!("engine/expr.rs");
include!("engine/api.rs");
include!("engine/tests.rs");
