//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the token model:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TOKEN_FACTORIES!` - Creates one constructor per payload-free token kind
//!
//! Both are crate-internal: `MK_TOKEN!` builds a Token through its private
//! fields, so it only compiles inside `lexer::tokens`.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$payload` - The token's payload, which must agree with `$kind`
/// * `$loc` - The source location
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, Payload::Int(42), loc);
/// ```
macro_rules! MK_TOKEN {
    ($kind:expr, $payload:expr, $loc:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            payload: $payload,
            loc: $loc,
        }
    };
}

/// Creates a constructor for each payload-free token kind.
///
/// Expands inside an `impl Token` block to `pub fn $name(loc: Location) -> Token`.
///
/// # Example
///
/// ```ignore
/// impl Token {
///     MK_TOKEN_FACTORIES! {
///         lparen => TokenKind::LParen,
///         rparen => TokenKind::RParen,
///     }
/// }
/// ```
macro_rules! MK_TOKEN_FACTORIES {
    ($($name:ident => $kind:expr),* $(,)?) => {
        $(
            pub fn $name(loc: $crate::Location) -> Self {
                $crate::macros::MK_TOKEN!($kind, $crate::lexer::tokens::Payload::None, loc)
            }
        )*
    };
}

pub(crate) use MK_TOKEN;
pub(crate) use MK_TOKEN_FACTORIES;
