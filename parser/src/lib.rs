//! strictname Parser
//!
//! This crate turns a structured identifier into constraint instances:
//! - Tokenizing an identifier on its separator
//! - Checking and stripping the holder-type prefix of a name
//! - Greedy, single-pass assignment of tokens to constraint instances
//! - Reporting incomplete constraints and discarded filler words

mod config;
mod error;
mod lexer;
mod name;
mod parser;

pub use config::ParserConfig;
pub use error::*;
pub use lexer::{tokenize, DEFAULT_SEPARATOR};
pub use name::{split_name, split_name_with, HolderKind, NameParts};
pub use parser::{parse_constraints, DroppedConstraint, Parsed, Parser};
