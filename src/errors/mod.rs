//! Error types and error handling for the lexer.
//!
//! This module defines the errors raised while scanning a source. It includes:
//!
//! - The error structure carrying the source location of the failure
//! - The two lexical error variants plus the character-source failure
//! - The `[name:line:column] message` rendering used for human-facing output

pub mod errors;
