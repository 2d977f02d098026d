/// Parser state, the entry points and the token-consumption primitive.
pub mod core;

/// Binary operator levels: additive and multiplicative expressions.
pub mod binary;

/// Factors: prefix signs, integer literals and parenthesized groups.
pub mod unary;
