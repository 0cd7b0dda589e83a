use actix_web::{HttpRequest, HttpResponse, error::InternalError, get, web};
use log::{error, info};
use serde_json::Value;

use crate::{
    cors::CorsPolicy,
    requests::PassthroughQuery,
    response::{ApiResponse, ErrorBody},
    source::CatalogSource,
};

pub const PASSTHROUGH_PATH: &str = "/api/catalog";

#[get("/")]
async fn root() -> ApiResponse<&'static str> {
    ApiResponse::new_success("Site up and working")
}

/// Forwards `type`/`page` to the catalog source and returns its envelope
/// untouched.
pub async fn passthrough<S: CatalogSource + 'static>(
    request: HttpRequest,
    source: web::Data<S>,
    policy: web::Data<CorsPolicy>,
    query: web::Query<PassthroughQuery>,
) -> ApiResponse<Value> {
    if !policy.allows(request.method()) {
        return ApiResponse::new_method_not_allowed();
    }

    let Some(kind) = query.kind() else {
        return ApiResponse::new_bad_request("Invalid type parameter");
    };
    let Some(page) = query.page() else {
        return ApiResponse::new_bad_request("Invalid page parameter");
    };

    info!("Passthrough request for {} page {}", kind, page);
    match source.envelope(kind, page).await {
        Ok(envelope) => ApiResponse::new_verbatim(envelope),
        Err(e) => {
            error!("Passthrough for {} page {} failed: {:?}", kind, page, e);
            ApiResponse::new_internal_server_error(e.to_string())
        }
    }
}

/// Answers queries the extractor cannot parse with the same JSON error body
/// as the handler's own 400s.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _| {
        let response = HttpResponse::BadRequest().json(ErrorBody {
            error: "Invalid query parameters".to_string(),
            details: Some(err.to_string()),
        });
        InternalError::from_response(err, response).into()
    })
}

pub fn configure<S: CatalogSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(
        web::resource(PASSTHROUGH_PATH)
            .app_data(query_config())
            .route(web::route().to(passthrough::<S>)),
    );
}
