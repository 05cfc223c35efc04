//! Shared language vocabulary for the Jack syntax analyzer.
//!
//! This crate is the single source of truth for the fixed lexical vocabulary of
//! the Jack language: reserved keywords and single-character symbols, each with
//! a stable identifier plus a const metadata table.
//!
//! ## Notes
//! - This crate is intentionally **pure**: no I/O, no tokenization, no parsing.
//!   The lexer and grammar engine live in `jackal_syntax`.
//! - ID-bearing vocabulary avoids stringly-typed checks in the grammar engine.

pub mod lang;
