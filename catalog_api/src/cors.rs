use actix_cors::Cors;
use actix_web::http::Method;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
    Any,
    Exact(String),
}

impl AllowedOrigin {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "*" => Self::Any,
            origin => Self::Exact(origin.to_string()),
        }
    }
}

/// Cross-origin policy of the passthrough endpoint.
///
/// Built once from configuration and handed to the app as data, so the
/// handler consults the same value the middleware was built from.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    pub allowed_origin: AllowedOrigin,
    pub allowed_methods: Vec<Method>,
    pub max_age: usize,
}

impl CorsPolicy {
    /// `GET` and `POST` from any origin.
    pub fn permissive() -> Self {
        Self::new(AllowedOrigin::Any)
    }

    pub fn new(allowed_origin: AllowedOrigin) -> Self {
        Self {
            allowed_origin,
            allowed_methods: vec![Method::GET, Method::POST],
            max_age: 3600,
        }
    }

    pub fn allows(&self, method: &Method) -> bool {
        self.allowed_methods.contains(method)
    }

    pub fn middleware(&self) -> Cors {
        let cors = Cors::default()
            .allowed_methods(self.allowed_methods.iter().map(Method::as_str))
            .allow_any_header()
            .max_age(self.max_age);

        match &self.allowed_origin {
            AllowedOrigin::Any => cors.allow_any_origin().send_wildcard(),
            AllowedOrigin::Exact(origin) => cors.allowed_origin(origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_policy_allows_get_and_post_only() {
        let policy = CorsPolicy::permissive();

        assert!(policy.allows(&Method::GET));
        assert!(policy.allows(&Method::POST));
        assert!(!policy.allows(&Method::DELETE));
        assert_eq!(policy.allowed_origin, AllowedOrigin::Any);
    }

    #[test]
    fn origin_parsing() {
        assert_eq!(AllowedOrigin::parse("*"), AllowedOrigin::Any);
        assert_eq!(AllowedOrigin::parse(""), AllowedOrigin::Any);
        assert_eq!(
            AllowedOrigin::parse("https://gotham.example"),
            AllowedOrigin::Exact("https://gotham.example".to_string())
        );
    }
}
