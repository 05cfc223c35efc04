//! Syntax frontend for the Jack language: lexer, token cursor, class registry,
//! and the recursive-descent grammar engine.
//!
//! The output of a successful analysis is a flattened, tag-balanced node
//! sequence (one XML-style line per grammar tag or token), ready to be written
//! out one line per node.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no symbol tables beyond class
//!   names, no type checking, no code generation.
//! - Vocabulary identity (keywords/symbols) comes from `jackal_core::lang`
//!   registries.
//!
//! ## Examples
//! ```rust,no_run
//! use jackal_syntax::{engine, lexer, registry::ClassRegistry};
//!
//! let tokens = lexer::lex("class Main { }").unwrap();
//! let classes = ClassRegistry::from_units([("Main.jack", tokens.as_slice())]).unwrap();
//! let nodes = engine::compile_unit(&tokens, &classes).unwrap();
//! assert_eq!(nodes.first().map(String::as_str), Some("<class>"));
//! ```

pub mod cursor;
pub mod diagnostics;
pub mod engine;
pub mod lexer;
pub mod registry;
pub mod span;
pub mod token_helpers;
