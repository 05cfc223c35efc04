//! Language vocabulary registries.
//!
//! - `keywords` - the reserved-word registry ([`keywords::KeywordId`])
//! - `symbols` - the single-character symbol registry ([`symbols::SymbolId`])

pub mod keywords;
pub mod symbols;
