use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";

/// CORS middleware
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:3000,http://localhost:8080")
pub fn init_cors() -> Cors {
    let origins = allowed_origins(env::var("CORS_ALLOWED_ORIGINS").ok());

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

pub fn allowed_origins(raw: Option<String>) -> Vec<String> {
    raw.unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        let origins = allowed_origins(Some(" http://a.test , ,http://b.test".to_string()));

        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn should_use_local_defaults() {
        assert_eq!(allowed_origins(None).len(), 2);
    }
}
