pub mod token_provider;

pub use token_provider::{TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE};
