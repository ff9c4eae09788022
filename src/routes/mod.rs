use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod contact;

/// Maps a classified service error onto its wire representation. The
/// message is forwarded as the description; raw storage errors never get
/// this far.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    let body = json!({ "message": err.to_string() });

    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::Conflict(_) => HttpResponse::Conflict().json(body),
        ServiceError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}
