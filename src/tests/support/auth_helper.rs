use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// Accepts any bearer token and answers with fixed claims.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: i64,
    token_type: String,
    reject: bool,
}

impl StubTokenProvider {
    pub fn access(user_id: i64) -> Self {
        Self::with_type(user_id, "access")
    }

    pub fn with_type(user_id: i64, token_type: &str) -> Self {
        Self {
            user_id,
            token_type: token_type.to_string(),
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            user_id: 0,
            token_type: "access".to_string(),
            reject: true,
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if self.reject {
            return Err(TokenError::InvalidSignature);
        }

        Ok(TokenClaims {
            sub: self.user_id,
            iss: "forum".to_string(),
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: self.token_type.clone(),
        })
    }
}

pub fn token_provider_data(
    provider: impl TokenProvider + 'static,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
