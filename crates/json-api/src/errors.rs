//! Structured JSON errors.
//!
//! Every failure leaving the server, whether raised by a handler or by salvo
//! itself, is rendered as `{"success": false, "code": ..., "errorMessage": ...}`.

use salvo::{
    http::ResBody,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum ErrorCode {
    MissingProductName,
    MissingUserName,
    MissingContent,
    MissingPassword,
    MissingStatus,
    InvalidStatus,
    ProductAlreadyExists,
    ProductNotFound,
    NoProducts,
    PasswordMismatch,
    InvalidRequest,
    RouteNotFound,
    InternalError,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Stable error code
    pub code: ErrorCode,

    /// Human-readable description
    pub error_message: String,
}

/// An error rendered as an [`ErrorResponse`] with its HTTP status.
#[derive(Debug, Error)]
#[error("{status} {code:?}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    pub(crate) fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            "an unexpected error occurred",
        )
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse {
            success: false,
            code: self.code,
            error_message: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Invalid or incomplete request"),
            (StatusCode::FORBIDDEN, "Password does not match"),
            (StatusCode::NOT_FOUND, "Not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}

/// Rewrites framework-generated errors (bad JSON, unmatched routes, caught
/// panics) into an [`ErrorResponse`].
#[handler]
pub(crate) async fn structured_errors(res: &mut Response, ctrl: &mut FlowCtrl) {
    // Bodies already written by handlers, including `ApiError`, are final.
    if !(res.body.is_none() || res.body.is_error()) {
        ctrl.skip_rest();
        return;
    }

    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let brief = match res.replace_body(ResBody::None) {
        ResBody::Error(error) => Some(error.brief),
        _ => None,
    };

    let error = if status == StatusCode::NOT_FOUND {
        ApiError::not_found(ErrorCode::RouteNotFound, "no route matches this request")
    } else if status.is_server_error() {
        ApiError::internal()
    } else {
        let message = brief
            .filter(|brief| !brief.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("bad request").to_string());

        ApiError::new(status, ErrorCode::InvalidRequest, message)
    };

    res.render(error);
    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::{
        catcher::Catcher,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn fails_with_api_error() -> Result<&'static str, ApiError> {
        Err(ApiError::bad_request(
            ErrorCode::MissingContent,
            "content is required",
        ))
    }

    #[handler]
    async fn fails_with_status_error(res: &mut Response) {
        res.render(StatusError::method_not_allowed().brief("wrong verb"));
    }

    #[handler]
    async fn panics() {
        #[expect(clippy::panic, reason = "exercises the panic catcher")]
        {
            panic!("boom");
        }
    }

    fn make_service() -> Service {
        let router = Router::new()
            .hoop(CatchPanic::new())
            .push(Router::with_path("api-error").get(fails_with_api_error))
            .push(Router::with_path("status-error").get(fails_with_status_error))
            .push(Router::with_path("panic").get(panics));

        Service::new(router).catcher(Catcher::default().hoop(structured_errors))
    }

    #[tokio::test]
    async fn api_error_renders_structured_body() -> TestResult {
        let mut res = TestClient::get("http://example.com/api-error")
            .send(&make_service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.success, "error bodies must report success=false");
        assert_eq!(body.code, ErrorCode::MissingContent);
        assert_eq!(body.error_message, "content is required");

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_route_renders_route_not_found() -> TestResult {
        let mut res = TestClient::get("http://example.com/nowhere")
            .send(&make_service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.code, ErrorCode::RouteNotFound);

        Ok(())
    }

    #[tokio::test]
    async fn status_error_keeps_status_and_brief() -> TestResult {
        let mut res = TestClient::get("http://example.com/status-error")
            .send(&make_service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
        assert_eq!(body.code, ErrorCode::InvalidRequest);
        assert_eq!(body.error_message, "wrong verb");

        Ok(())
    }

    #[tokio::test]
    async fn panic_renders_internal_error() -> TestResult {
        let mut res = TestClient::get("http://example.com/panic")
            .send(&make_service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.code, ErrorCode::InternalError);
        assert_eq!(body.error_message, "an unexpected error occurred");

        Ok(())
    }
}
