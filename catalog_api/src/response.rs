use actix_web::{HttpResponse, Responder, body::BoxBody, http::StatusCode};
use serde::Serialize;
use serde_json::json;

pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    data: ApiData<T>,
}

pub enum ApiData<T: Serialize> {
    /// Wrapped as `{"status": .., "data": ..}`.
    Wrapped(T),
    /// Sent as-is.
    Verbatim(T),
    Error(ErrorBody),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: ApiData<T>) -> Self {
        Self { status, data }
    }
    pub fn new_success(data: T) -> Self {
        Self::new(StatusCode::OK, ApiData::Wrapped(data))
    }
    pub fn new_verbatim(data: T) -> Self {
        Self::new(StatusCode::OK, ApiData::Verbatim(data))
    }
    fn new_error(status: StatusCode, error: &str, details: Option<String>) -> Self {
        Self::new(
            status,
            ApiData::Error(ErrorBody {
                error: error.to_string(),
                details,
            }),
        )
    }
    pub fn new_bad_request(error: &str) -> Self {
        Self::new_error(StatusCode::BAD_REQUEST, error, None)
    }
    pub fn new_method_not_allowed() -> Self {
        Self::new_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
    }
    pub fn new_internal_server_error(details: String) -> Self {
        Self::new_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            Some(details),
        )
    }
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let body = match &self.data {
            ApiData::Wrapped(data) => serde_json::to_string(&json!({
                "status": self.status.as_u16(),
                "data": data,
            })),
            ApiData::Verbatim(data) => serde_json::to_string(data),
            ApiData::Error(error) => serde_json::to_string(error),
        };

        match body {
            Ok(body) => HttpResponse::build(self.status)
                .content_type("application/json")
                .body(body),
            Err(e) => {
                log::error!("Unable to serialize response: {:?}", e);
                HttpResponse::InternalServerError()
                    .content_type("application/json")
                    .body(r#"{"error":"Internal Server Error"}"#)
            }
        }
    }
}
