use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(jsonwebtoken::Algorithm),
    #[error("no usable signing key in key set")]
    KeyNotFound,
    #[error("invalid jwk: {0}")]
    InvalidJwk(String),
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("key set unavailable: {0}")]
    KeySetUnavailable(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AuthzError::UnsupportedAlgorithm(jsonwebtoken::Algorithm::HS256),
            AuthzError::KeyNotFound,
            AuthzError::InvalidJwk("bad kty".to_string()),
            AuthzError::KeySetUnavailable("connection refused".to_string()),
        ];

        for error in errors {
            let rendered = error.to_string();
            assert!(!rendered.is_empty());
        }
    }
}
