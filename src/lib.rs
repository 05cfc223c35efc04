//! Jack syntax analyzer.
//!
//! The analysis core (lexer, token cursor, class registry, grammar engine)
//! lives in the `jackal_syntax` crate; this crate is the driver layer around
//! it: enumerating input files, running the two analysis phases in order, and
//! writing the resulting node sequences out.
//!
//! ## Modules
//!
//! - `driver` - run orchestration over a set of compilation units
//! - `cli` - command-line interface

pub mod cli;
pub mod driver;
