//! Lexical analysis module for the IMP toolchain.
//!
//! This module contains the lexer (tokenizer) that converts a source
//! character stream into tokens for a parser to pull. It handles:
//!
//! - Single-byte lookahead over any `Read` source
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for every token
//! - Whitespace skipping

pub mod lexer;
pub mod scanner;
pub mod tokens;
