use crate::utils::error::CustomError;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result, dev::ServiceResponse};
use serde_json::json;

/// Default handler for error statuses: wraps responses from framework-level
/// errors (bad JSON payloads, path type mismatches, ...) in the JSON
/// envelope. Responses from `CustomError` are already enveloped and pass
/// through untouched.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let error_message = match res.response().error() {
        Some(err) if err.as_error::<CustomError>().is_none() => err.to_string(),
        _ => return Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    };

    let status_code = res.response().status();
    let new_response = HttpResponse::build(status_code).json(json!({
        "success": false,
        "message": error_message,
        "httpStatusCode": status_code.as_u16(),
        "error": status_code
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_uppercase()
            .replace(' ', "_"),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }));

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}
