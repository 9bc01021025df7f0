//! CORS policy built from [`ServerConfig::cors_origins`].

use attest_config::ServerConfig;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::ServerError;

pub(crate) fn layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_origin_with_control_characters() {
        let config = ServerConfig {
            cors_origins: vec!["http://bad\norigin".into()],
            ..ServerConfig::default()
        };
        assert!(matches!(layer(&config), Err(ServerError::InvalidOrigin(_))));
    }

    #[test]
    fn accepts_default_and_wildcard() {
        assert!(layer(&ServerConfig::default()).is_ok());
        let config = ServerConfig {
            cors_origins: vec!["*".into()],
            ..ServerConfig::default()
        };
        assert!(layer(&config).is_ok());
    }
}
